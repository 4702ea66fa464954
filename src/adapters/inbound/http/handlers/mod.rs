pub mod event_handlers;

pub use event_handlers::*;

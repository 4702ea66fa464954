mod common;

use common::{BUCKET, RecordingBlobStore, location};
use data_ingestion::{
    IngestionConfig, IngestionOutcome, IngestionService, IngestionServiceImpl, MoveError,
    Notification, SkipReason, StorageError,
};
use std::sync::Arc;

fn service(store: &Arc<RecordingBlobStore>) -> IngestionServiceImpl {
    IngestionServiceImpl::new(store.clone(), IngestionConfig::default())
}

#[tokio::test]
async fn wrong_bucket_makes_no_storage_calls() {
    let store = Arc::new(RecordingBlobStore::new().with_object(
        "other-bucket",
        "raw_data/replies.txt",
        "hello",
    ));

    for bucket in ["other-bucket", "", "Supply-Chain-Compensation-Analysis-With-NLP"] {
        let outcome = service(&store)
            .process(&Notification::new(bucket, "raw_data/replies.txt"))
            .await;

        assert!(outcome.is_skipped());
        assert!(matches!(
            outcome,
            IngestionOutcome::Skipped(SkipReason::BucketMismatch { .. })
        ));
    }

    assert_eq!(store.total_calls(), 0);
    assert!(store.contains("other-bucket", "raw_data/replies.txt"));
}

#[tokio::test]
async fn wrong_folder_makes_no_storage_calls() {
    let store = Arc::new(RecordingBlobStore::new());

    let cases = [
        ("replies.txt", ""),
        ("processed_data/replies.txt", "processed_data"),
        ("raw_data/2024/replies.txt", "raw_data/2024"),
        ("archive/raw_data/replies.txt", "archive/raw_data"),
        ("raw_data_old/replies.txt", "raw_data_old"),
    ];

    for (name, expected_folder) in cases {
        let outcome = service(&store)
            .process(&Notification::new(BUCKET, name))
            .await;

        match outcome {
            IngestionOutcome::Skipped(SkipReason::FolderMismatch { actual }) => {
                assert_eq!(actual, expected_folder)
            }
            other => panic!("unexpected outcome for {}: {:?}", name, other),
        }
    }

    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn qualifying_object_is_moved_to_target_folder() {
    let store = Arc::new(RecordingBlobStore::new().with_object(
        BUCKET,
        "raw_data/replies.txt",
        "first\n\nsecond\n  \nthird\n",
    ));

    let outcome = service(&store)
        .process(&Notification::new(BUCKET, "raw_data/replies.txt"))
        .await;

    match outcome {
        IngestionOutcome::Relocated { target, line_count } => {
            assert_eq!(target, location(BUCKET, "processed_data/replies.txt"));
            assert_eq!(line_count, 3);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(
        store.fetch_calls(),
        vec![location(BUCKET, "raw_data/replies.txt")]
    );

    let moves = store.move_calls();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].source, location(BUCKET, "raw_data/replies.txt"));
    assert_eq!(moves[0].target, location(BUCKET, "processed_data/replies.txt"));

    assert!(!store.contains(BUCKET, "raw_data/replies.txt"));
    assert!(store.contains(BUCKET, "processed_data/replies.txt"));
}

#[tokio::test]
async fn nested_source_keeps_only_file_name() {
    let config = IngestionConfig {
        source_folder: "raw_data/2024".to_string(),
        ..Default::default()
    };
    let store = Arc::new(RecordingBlobStore::new().with_object(
        BUCKET,
        "raw_data/2024/replies.txt",
        "x",
    ));

    let outcome = IngestionServiceImpl::new(store.clone(), config)
        .process(&Notification::new(BUCKET, "raw_data/2024/replies.txt"))
        .await;

    assert!(outcome.is_relocated());
    assert!(store.contains(BUCKET, "processed_data/replies.txt"));
}

#[tokio::test]
async fn empty_source_folder_accepts_root_objects() {
    let config = IngestionConfig {
        source_folder: String::new(),
        ..Default::default()
    };
    let store = Arc::new(RecordingBlobStore::new().with_object(BUCKET, "replies.txt", "x"));

    let outcome = IngestionServiceImpl::new(store.clone(), config)
        .process(&Notification::new(BUCKET, "replies.txt"))
        .await;

    assert!(outcome.is_relocated());
    assert!(store.contains(BUCKET, "processed_data/replies.txt"));
}

#[tokio::test]
async fn fetch_failure_prevents_relocation() {
    let store = Arc::new(RecordingBlobStore::new());

    let outcome = service(&store)
        .process(&Notification::new(BUCKET, "raw_data/missing.txt"))
        .await;

    assert!(matches!(
        outcome,
        IngestionOutcome::FetchFailed {
            error: StorageError::ObjectNotFound { .. },
            ..
        }
    ));
    assert_eq!(store.fetch_calls().len(), 1);
    assert!(store.move_calls().is_empty());
}

#[tokio::test]
async fn delete_failure_is_reported_as_partial_move() {
    let store = Arc::new(
        RecordingBlobStore::new()
            .with_object(BUCKET, "raw_data/replies.txt", "hello")
            .failing_delete(),
    );

    let outcome = service(&store)
        .process(&Notification::new(BUCKET, "raw_data/replies.txt"))
        .await;

    match outcome {
        IngestionOutcome::RelocationFailed {
            target: Some(target),
            error,
        } => {
            assert_eq!(target, location(BUCKET, "processed_data/replies.txt"));
            assert!(error.is_partial());
            assert!(matches!(error, MoveError::DeleteFailed { .. }));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    // Object now exists at both locations
    assert!(store.contains(BUCKET, "raw_data/replies.txt"));
    assert!(store.contains(BUCKET, "processed_data/replies.txt"));
}

#[tokio::test]
async fn redelivery_after_move_is_a_no_op() {
    let store = Arc::new(RecordingBlobStore::new().with_object(
        BUCKET,
        "raw_data/replies.txt",
        "hello",
    ));
    let service = service(&store);

    let first = service
        .process(&Notification::new(BUCKET, "raw_data/replies.txt"))
        .await;
    assert!(first.is_relocated());

    // The creation of the moved object triggers its own notification
    let follow_up = service
        .process(&Notification::new(BUCKET, "processed_data/replies.txt"))
        .await;
    assert!(matches!(
        follow_up,
        IngestionOutcome::Skipped(SkipReason::FolderMismatch { .. })
    ));

    // A re-delivered original notification finds nothing to read
    let redelivered = service
        .process(&Notification::new(BUCKET, "raw_data/replies.txt"))
        .await;
    assert!(matches!(redelivered, IngestionOutcome::FetchFailed { .. }));

    assert_eq!(store.move_calls().len(), 1);
    assert!(store.contains(BUCKET, "processed_data/replies.txt"));
}

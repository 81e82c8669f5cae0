use super::*;

/// Tests confirming and then cancelling an entry.
///
/// Expected: Ok both times
#[tokio::test]
async fn confirms_then_cancels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let entry = factory::create_queue_entry(db, room_type.id).await?;
    let service = QueueService::new(db);

    let confirmed = service.update_status(entry.id, QueueStatus::Confirmed).await?;
    assert_eq!(confirmed.status, QueueStatus::Confirmed);

    let cancelled = service.update_status(entry.id, QueueStatus::Cancelled).await?;
    assert_eq!(cancelled.status, QueueStatus::Cancelled);

    Ok(())
}

/// Tests changing an entry that is already cancelled or assigned.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_inactive_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let service = QueueService::new(db);

    for status in ["cancelled", "assigned"] {
        let entry = factory::queue::QueueFactory::new(db, room_type.id)
            .status(status)
            .build()
            .await?;

        let result = service.update_status(entry.id, QueueStatus::Confirmed).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    Ok(())
}

/// Tests setting `assigned` or `pending` directly.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_other_target_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let entry = factory::create_queue_entry(db, room_type.id).await?;
    let service = QueueService::new(db);

    for status in [QueueStatus::Assigned, QueueStatus::Pending] {
        let result = service.update_status(entry.id, status).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

use super::*;

/// Tests moving a task to in progress and completing it with a price.
///
/// Expected: completed with price and completed_at set
#[tokio::test]
async fn progresses_and_completes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::create_task(db, room.id).await?;
    let service = TaskService::new(db);

    let started = service.update_status(task.id, TaskStatus::InProgress).await?;
    assert_eq!(started.status, TaskStatus::InProgress);

    let done = service.complete(task.id, 350).await?;
    assert_eq!(done.status, TaskStatus::Completed);
    assert_eq!(done.price, Some(350));
    assert!(done.completed_at.is_some());

    Ok(())
}

/// Tests that completion requires the dedicated operation and is final.
///
/// Expected: Err(AppError::BadRequest), then Err(AppError::Conflict) once completed
#[tokio::test]
async fn guards_completion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::create_task(db, room.id).await?;
    let completed = factory::task::TaskFactory::new(db, room.id)
        .status("completed")
        .price(Some(200))
        .build()
        .await?;
    let service = TaskService::new(db);

    assert!(matches!(
        service.update_status(task.id, TaskStatus::Completed).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.update_status(completed.id, TaskStatus::Pending).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests completing a task that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn complete_missing_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TaskService::new(db).complete(999, 100).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

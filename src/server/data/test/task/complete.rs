use super::*;

/// Tests completing a task in a single update.
///
/// Expected: Ok(1) with status Completed, price and completion time set
#[tokio::test]
async fn completes_with_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::create_task(db, room.id).await?;

    let repo = TaskRepository::new(db);
    assert_eq!(repo.complete(task.id, 350).await?, 1);

    let found = repo.find_by_id(task.id).await?.expect("task should exist");
    assert_eq!(found.status, TaskStatus::Completed);
    assert_eq!(found.price, Some(350));
    assert!(found.completed_at.is_some());

    Ok(())
}

/// Tests completing a task that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    assert_eq!(repo.complete(404, 100).await?, 0);

    Ok(())
}

use super::*;

/// Tests filing a task for a room.
///
/// Expected: Ok with status Pending, no price and the room number attached
#[tokio::test]
async fn creates_pending_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(room.id, TaskKind::Housekeeping, "Weekly cleaning".to_string())
        .await?;

    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.kind, TaskKind::Housekeeping);
    assert_eq!(task.price, None);
    assert_eq!(task.room_number, room.room_number);
    assert!(task.completed_at.is_none());

    Ok(())
}

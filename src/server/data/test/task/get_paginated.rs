use super::*;

/// Tests filtering tasks by room and status.
///
/// Expected: Ok with only the matching room's in-progress task
#[tokio::test]
async fn filters_by_room_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, other_room, _) = factory::helpers::create_room_with_tenant(db).await?;
    factory::create_task(db, room.id).await?;
    let in_progress = factory::task::TaskFactory::new(db, room.id)
        .status("in_progress")
        .build()
        .await?;
    factory::task::TaskFactory::new(db, other_room.id)
        .status("in_progress")
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let (tasks, total) = repo
        .get_paginated(
            TaskFilter {
                status: Some(TaskStatus::InProgress),
                room_id: Some(room.id),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(tasks[0].id, in_progress.id);

    let (_, room_total) = repo
        .get_paginated(
            TaskFilter {
                status: None,
                room_id: Some(room.id),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(room_total, 2);

    Ok(())
}

use super::*;

/// Tests that a room account files for its own room whatever `room_id` says.
///
/// Expected: task on the account's room
#[tokio::test]
async fn tenant_files_for_own_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, other_room, _) = factory::helpers::create_room_with_account(db).await?;
    let tenant = User::from_entity(account);

    let task = TaskService::new(db)
        .create(&tenant, leak_report(Some(other_room.id)))
        .await?;

    assert_eq!(task.room_id, room.id);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.price, None);

    Ok(())
}

/// Tests that an admin must name the room.
///
/// Expected: Err(AppError::BadRequest) without, Ok with
#[tokio::test]
async fn admin_needs_room_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let (_, room, _) = factory::helpers::create_room_with_account(db).await?;
    let service = TaskService::new(db);

    let result = service.create(&admin, leak_report(None)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let task = service.create(&admin, leak_report(Some(room.id))).await?;
    assert_eq!(task.room_id, room.id);

    Ok(())
}

/// Tests that tenants only list their own room's tasks.
///
/// Expected: one task for the tenant, two for the admin
#[tokio::test]
async fn tenant_lists_only_own_tasks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, other_room, _) = factory::helpers::create_room_with_tenant(db).await?;
    factory::create_task(db, room.id).await?;
    factory::create_task(db, other_room.id).await?;
    let tenant = User::from_entity(account);
    let service = TaskService::new(db);

    let mine = service
        .get_paginated(&tenant, TaskFilter::default(), 0, 20)
        .await?;
    assert_eq!(mine.total, 1);
    assert_eq!(mine.items[0].room_id, room.id);

    let all = service
        .get_paginated(&admin, TaskFilter::default(), 0, 20)
        .await?;
    assert_eq!(all.total, 2);

    Ok(())
}

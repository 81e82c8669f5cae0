use super::*;

/// Tests a tenant cancelling their own pending task.
///
/// Expected: Ok, task gone
#[tokio::test]
async fn tenant_cancels_pending_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::create_task(db, room.id).await?;
    let tenant = User::from_entity(account);
    let service = TaskService::new(db);

    service.delete(&tenant, task.id).await?;

    let remaining = service
        .get_paginated(&tenant, TaskFilter::default(), 0, 20)
        .await?;
    assert_eq!(remaining.total, 0);

    Ok(())
}

/// Tests a tenant deleting a task that has started.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn tenant_cannot_cancel_started_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::task::TaskFactory::new(db, room.id)
        .status("in_progress")
        .build()
        .await?;
    let tenant = User::from_entity(account);

    let result = TaskService::new(db).delete(&tenant, task.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a tenant deleting another room's task.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn tenant_cannot_delete_other_rooms_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, account) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, other_room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::create_task(db, other_room.id).await?;
    let tenant = User::from_entity(account);

    let result = TaskService::new(db).delete(&tenant, task.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin deleting a completed task.
///
/// Expected: Ok
#[tokio::test]
async fn admin_deletes_any_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let task = factory::task::TaskFactory::new(db, room.id)
        .status("completed")
        .build()
        .await?;

    TaskService::new(db).delete(&admin, task.id).await?;

    Ok(())
}

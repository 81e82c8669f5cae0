use super::*;

/// Tests that an admin cannot delete their own account.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_to_delete_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let result = UserService::new(db).delete(admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a room account cannot be deleted directly.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn refuses_to_delete_room_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (_, _, account) = factory::helpers::create_room_with_account(db).await?;

    let result = UserService::new(db).delete(admin.id, account.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a registered user and then a missing one.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_registered_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    service.delete(admin.id, user.id).await?;

    assert!(matches!(
        service.delete(admin.id, user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

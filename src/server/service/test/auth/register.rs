use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with a non-admin user without room
#[tokio::test]
async fn registers_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let user = AuthService::new(db, &auth)
        .register(register_params("somchai", "secret123"))
        .await?;

    assert_eq!(user.username, "somchai");
    assert!(!user.admin);
    assert_eq!(user.room_id, None);

    Ok(())
}

/// Tests registering a username that is taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let service = AuthService::new(db, &auth);
    service
        .register(register_params("somchai", "secret123"))
        .await?;
    let result = service
        .register(register_params("somchai", "another1"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests seeding the first admin and skipping once one exists.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn seeds_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let service = AuthService::new(db, &auth);

    assert!(service.seed_admin("admin", "adminpass".to_string()).await?);
    assert!(!service.seed_admin("admin2", "adminpass".to_string()).await?);

    let (admin, _) = service.login("admin", "adminpass".to_string()).await?;
    assert!(admin.admin);

    Ok(())
}

use super::*;

/// Tests logging in with correct credentials.
///
/// Expected: Ok with a token whose subject is the user id
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let service = AuthService::new(db, &auth);
    let registered = service
        .register(register_params("malee", "secret123"))
        .await?;

    let (user, token) = service.login("malee", "secret123".to_string()).await?;

    assert_eq!(user.id, registered.id);
    assert_eq!(decode_token(&auth, &token)?, registered.id);

    Ok(())
}

/// Tests that wrong passwords and unknown users fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let service = AuthService::new(db, &auth);
    service
        .register(register_params("malee", "secret123"))
        .await?;

    let wrong_password = service.login("malee", "nope".to_string()).await;
    let unknown_user = service.login("ghost", "secret123".to_string()).await;

    for result in [wrong_password, unknown_user] {
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests changing a password.
///
/// Expected: wrong current password rejected; afterwards only the new password works
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let service = AuthService::new(db, &auth);
    let user = service
        .register(register_params("malee", "secret123"))
        .await?;

    let wrong = service
        .change_password(user.id, "bad".to_string(), "newpass1".to_string())
        .await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    service
        .change_password(user.id, "secret123".to_string(), "newpass1".to_string())
        .await?;

    assert!(service.login("malee", "secret123".to_string()).await.is_err());
    assert!(service.login("malee", "newpass1".to_string()).await.is_ok());

    Ok(())
}

use super::*;

/// Tests a request with no token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that the cookie token authenticates an existing user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_cookie_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = cookie_headers(&issue_token(&auth, &user)?);

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests that a bearer header works when there is no cookie.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_bearer_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer_headers(&issue_token(&auth, &user)?);

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await?;

    assert_eq!(result.username, user.username);

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = cookie_headers(&issue_token(&auth, &user)?);
    crate::server::data::user::UserRepository::new(db)
        .delete(user.id)
        .await?;

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests that a regular user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = cookie_headers(&issue_token(&auth, &user)?);

    let result = AuthGuard::new(db, &auth, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests room permission: the room's account and admins pass, others are denied.
///
/// Expected: Ok for account and admin, Err(AccessDenied) for another user
#[tokio::test]
async fn room_permission_allows_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let stranger = User::from_entity(factory::create_user(db).await?);
    let account = User::from_entity(account);

    for allowed in [&account, &admin] {
        let headers = cookie_headers(&issue_token(&auth, allowed)?);
        let result = AuthGuard::new(db, &auth, &headers)
            .require(&[Permission::Room(room.id)])
            .await;
        assert!(result.is_ok());
    }

    let headers = cookie_headers(&issue_token(&auth, &stranger)?);
    let result = AuthGuard::new(db, &auth, &headers)
        .require(&[Permission::Room(room.id)])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests thread permission for the thread owner and another user.
///
/// Expected: Ok for owner, Err(AccessDenied) for another user
#[tokio::test]
async fn thread_permission_allows_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let auth = auth_config();

    let owner = User::from_entity(factory::create_user(db).await?);
    let other = User::from_entity(factory::create_user(db).await?);

    let headers = cookie_headers(&issue_token(&auth, &owner)?);
    assert!(AuthGuard::new(db, &auth, &headers)
        .require(&[Permission::Thread(owner.id)])
        .await
        .is_ok());

    let headers = cookie_headers(&issue_token(&auth, &other)?);
    assert!(AuthGuard::new(db, &auth, &headers)
        .require(&[Permission::Thread(owner.id)])
        .await
        .is_err());

    Ok(())
}

use super::*;

/// Tests overwriting a user's profile.
///
/// Expected: Ok(Some) with new names and contact details
#[tokio::test]
async fn overwrites_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            ProfileParams {
                first_name: "Malee".to_string(),
                last_name: "Suksai".to_string(),
                email: None,
                phone: Some("0899999999".to_string()),
            },
        )
        .await?
        .expect("user should exist");

    assert_eq!(updated.first_name, "Malee");
    assert_eq!(updated.last_name, "Suksai");
    assert_eq!(updated.email, None);
    assert_eq!(updated.phone.as_deref(), Some("0899999999"));
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update_profile(999, ProfileParams::vacant("101")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: Ok(1), the new hash is stored and `token_version` goes up by one
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let rows = repo
        .update_password_hash(user.id, "new-hash".to_string())
        .await?;

    assert_eq!(rows, 1);
    assert_eq!(
        repo.find_hash_by_id(user.id).await?.as_deref(),
        Some("new-hash")
    );
    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.token_version, user.token_version + 1);

    Ok(())
}

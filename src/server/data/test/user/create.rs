use super::*;

fn params(username: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Somchai".to_string(),
        last_name: "Jaidee".to_string(),
        email: Some("somchai@example.com".to_string()),
        phone: None,
        admin: false,
        room_id: None,
    }
}

/// Tests creating a user account.
///
/// Verifies that the created user is returned with its fields and that the password hash
/// can be read back by username.
///
/// Expected: Ok with user and stored hash
#[tokio::test]
async fn creates_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("somchai")).await?;

    assert_eq!(user.username, "somchai");
    assert!(!user.admin);
    assert_eq!(user.room_id, None);

    let (found, hash) = repo
        .find_with_hash_by_username("somchai")
        .await?
        .expect("user should exist");
    assert_eq!(found.id, user.id);
    assert_eq!(hash, "hash");

    Ok(())
}

/// Tests that usernames are unique at the database level.
///
/// Expected: Err on the second insert, username_exists reports true
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup")).await?;

    assert!(repo.create(params("dup")).await.is_err());
    assert!(repo.username_exists("dup").await?);
    assert!(!repo.username_exists("other").await?);

    Ok(())
}

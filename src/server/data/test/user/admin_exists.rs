use super::*;

/// Tests detecting when admin users exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests detecting when no admin users exist (first start).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

use super::*;

/// Tests paginating users ordered by username.
///
/// Verifies that pages are cut from the username ordering and that the total counts
/// every user.
///
/// Expected: Ok with 2 users on page 0, 1 on page 1, total 3
#[tokio::test]
async fn paginates_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["charlie", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["alice", "bob"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].username, "charlie");

    Ok(())
}

/// Tests counting self-registered users.
///
/// Admins and room accounts are excluded.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_only_registered_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;
    factory::user::create_user(db).await?;
    factory::helpers::create_room_with_account(db).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.count_registered().await?, 1);

    Ok(())
}

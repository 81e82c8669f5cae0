use super::*;

/// Tests reading a thread in sending order.
///
/// Expected: Ok with both messages of the thread, oldest first
#[tokio::test]
async fn returns_thread_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = ChatRepository::new(db);
    let first = repo
        .create(user.id, user.id, false, "Hello".to_string())
        .await?;
    let second = repo
        .create(user.id, admin.id, true, "Hi, how can we help?".to_string())
        .await?;
    factory::create_chat_message(db, other.id, &other, "Unrelated").await?;

    let thread = repo.get_thread(user.id, None).await?;

    assert_eq!(
        thread.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert!(thread[1].sender_admin);

    Ok(())
}

/// Tests polling a thread for messages after a known id.
///
/// Expected: Ok with only the newer message
#[tokio::test]
async fn returns_messages_after_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_chat_message(db, user.id, &user, "One").await?;
    let second = factory::create_chat_message(db, user.id, &user, "Two").await?;

    let repo = ChatRepository::new(db);
    let newer = repo.get_thread(user.id, Some(first.id)).await?;

    assert_eq!(newer.len(), 1);
    assert_eq!(newer[0].id, second.id);

    Ok(())
}

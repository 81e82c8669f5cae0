use super::*;

/// Tests summarizing threads by their latest message.
///
/// Expected: one message per thread owner, newest thread first
#[tokio::test]
async fn returns_latest_message_per_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    factory::create_chat_message(db, alice.id, &alice, "First").await?;
    factory::create_chat_message(db, bob.id, &bob, "Bob here").await?;
    let alice_latest = factory::create_chat_message(db, alice.id, &admin, "Reply").await?;

    let repo = ChatRepository::new(db);
    let latest = repo.latest_per_user().await?;

    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].id, alice_latest.id);
    assert_eq!(latest[0].user_id, alice.id);
    assert_eq!(latest[1].user_id, bob.id);

    Ok(())
}

/// Tests summarizing when nobody has chatted yet.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChatRepository::new(db);
    assert!(repo.latest_per_user().await?.is_empty());

    Ok(())
}

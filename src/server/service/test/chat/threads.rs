use super::*;

/// Tests the admin inbox listing.
///
/// Expected: one thread per user, most recently active first, carrying the owner's name
#[tokio::test]
async fn lists_latest_thread_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_chat_message(db, first.id, &first, "Hello").await?;
    factory::create_chat_message(db, second.id, &second, "Hi").await?;
    factory::create_chat_message(db, first.id, &first, "Anyone there?").await?;

    let threads = ChatService::new(db).threads().await?;

    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].user_id, first.id);
    assert_eq!(threads[0].last_message.body, "Anyone there?");
    assert_eq!(
        threads[0].display_name,
        format!("{} {}", first.first_name, first.last_name)
    );
    assert_eq!(threads[1].user_id, second.id);

    Ok(())
}

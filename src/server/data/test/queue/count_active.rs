use super::*;

/// Tests that only pending and confirmed entries hold a slot.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_pending_and_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let other_type = factory::create_room_type(db).await?;
    for status in ["pending", "confirmed", "cancelled", "assigned"] {
        factory::queue::QueueFactory::new(db, room_type.id)
            .status(status)
            .build()
            .await?;
    }
    factory::create_queue_entry(db, other_type.id).await?;

    let repo = QueueRepository::new(db);

    assert_eq!(repo.count_active(room_type.id).await?, 2);

    Ok(())
}

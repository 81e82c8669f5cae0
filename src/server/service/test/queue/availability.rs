use super::*;

/// Tests slot counting across vacant, unavailable and queued rooms.
///
/// Two vacant rooms, one of them out of service, one occupied room and one pending
/// booking leave no free slot.
///
/// Expected: vacant 2, unavailable 1, queued 1, remaining 0
#[tokio::test]
async fn counts_slots_per_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, _, _) = factory::helpers::create_room_with_tenant(db).await?;
    factory::create_room(db, room_type.id).await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .available(false)
        .build()
        .await?;
    factory::create_queue_entry(db, room_type.id).await?;
    factory::queue::QueueFactory::new(db, room_type.id)
        .status("cancelled")
        .build()
        .await?;

    let availability = QueueService::new(db).availability().await?;

    assert_eq!(availability.len(), 1);
    let slots = &availability[0];
    assert_eq!(slots.room_type_id, room_type.id);
    assert_eq!(slots.vacant, 2);
    assert_eq!(slots.unavailable, 1);
    assert_eq!(slots.queued, 1);
    assert_eq!(slots.remaining(), 0);

    Ok(())
}

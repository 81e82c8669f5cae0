use super::*;

/// Tests counting rooms and queue entries that reference a room type.
///
/// Expected: Ok(2) for the referenced type, Ok(0) for an unused one
#[tokio::test]
async fn counts_rooms_and_queue_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let used = factory::create_room_type(db).await?;
    let unused = factory::create_room_type(db).await?;
    factory::create_room(db, used.id).await?;
    factory::create_queue_entry(db, used.id).await?;

    let repo = RoomTypeRepository::new(db);

    assert_eq!(repo.count_references(used.id).await?, 2);
    assert_eq!(repo.count_references(unused.id).await?, 0);

    Ok(())
}

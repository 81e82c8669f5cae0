use super::*;

/// Tests the vacant and unavailable counts used for queue availability.
///
/// Occupied rooms count as neither; an unavailable vacant room counts as both.
///
/// Expected: vacant 2, unavailable 1
#[tokio::test]
async fn counts_vacant_and_unavailable_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let tenant = factory::create_user(db).await?;
    factory::room::RoomFactory::new(db, room_type.id).build().await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .available(false)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .renter_id(Some(tenant.id))
        .available(false)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert_eq!(repo.count_vacant(room_type.id).await?, 2);
    assert_eq!(repo.count_unavailable(room_type.id).await?, 1);
    assert!(!repo.room_number_exists("nope").await?);

    Ok(())
}

use super::*;

/// Tests listing rooms ordered by room number with renters attached.
///
/// Expected: Ok with rooms sorted, only the occupied one carrying a renter
#[tokio::test]
async fn lists_rooms_in_room_number_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let tenant = factory::create_user(db).await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .room_number("B201")
        .floor(2)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .room_number("A101")
        .renter_id(Some(tenant.id))
        .available(false)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_filtered(RoomFilter::default()).await?;

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room_number, "A101");
    assert_eq!(
        rooms[0].renter.as_ref().map(|r| r.user_id),
        Some(tenant.id)
    );
    assert_eq!(rooms[1].room_number, "B201");
    assert!(rooms[1].renter.is_none());

    Ok(())
}

/// Tests filtering rooms by floor, room type and availability.
///
/// Expected: Ok with only matching rooms
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let standard = factory::create_room_type(db).await?;
    let deluxe = factory::create_room_type(db).await?;
    factory::room::RoomFactory::new(db, standard.id)
        .floor(1)
        .build()
        .await?;
    let target = factory::room::RoomFactory::new(db, deluxe.id)
        .floor(2)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, deluxe.id)
        .floor(2)
        .available(false)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .get_filtered(RoomFilter {
            floor: Some(2),
            room_type_id: Some(deluxe.id),
            available: Some(true),
        })
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, target.id);

    Ok(())
}

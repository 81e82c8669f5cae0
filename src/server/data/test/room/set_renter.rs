use super::*;

/// Tests setting and clearing a room's renter.
///
/// Expected: renter and availability change together
#[tokio::test]
async fn sets_and_clears_renter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, account) = factory::helpers::create_room_with_account(db).await?;

    let repo = RoomRepository::new(db);
    assert_eq!(repo.set_renter(room.id, Some(account.id), false).await?, 1);

    let occupied = repo.find_by_id(room.id).await?.expect("room should exist");
    assert!(occupied.is_occupied());
    assert!(!occupied.available);

    repo.set_renter(room.id, None, true).await?;

    let vacant = repo.find_by_id(room.id).await?.expect("room should exist");
    assert!(!vacant.is_occupied());
    assert!(vacant.available);

    Ok(())
}

/// Tests updating a room's type, floor and availability.
///
/// Expected: Ok(true) for an existing room, Ok(false) otherwise
#[tokio::test]
async fn updates_room_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_account(db).await?;
    let other_type = factory::create_room_type(db).await?;

    let repo = RoomRepository::new(db);
    let params = UpdateRoomParams {
        room_type_id: other_type.id,
        floor: 5,
        available: false,
    };
    assert!(repo.update(room.id, params.clone()).await?);
    assert!(!repo.update(9999, params).await?);

    let updated = repo.find_by_id(room.id).await?.expect("room should exist");
    assert_eq!(updated.room_type_id, other_type.id);
    assert_eq!(updated.floor, 5);
    assert!(!updated.available);

    Ok(())
}

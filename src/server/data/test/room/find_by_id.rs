use super::*;

/// Tests loading a room joined with its type and renter.
///
/// Expected: Ok(Some) with the type name, price and renter summary
#[tokio::test]
async fn loads_room_with_type_and_renter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, room, tenant) = factory::helpers::create_room_with_tenant(db).await?;

    let repo = RoomRepository::new(db);
    let found = repo.find_by_id(room.id).await?.expect("room should exist");

    assert_eq!(found.room_number, room.room_number);
    assert_eq!(found.room_type_name, room_type.name);
    assert_eq!(found.price, room_type.price);
    assert!(!found.available);
    let renter = found.renter.expect("room should have a renter");
    assert_eq!(renter.user_id, tenant.id);
    assert_eq!(renter.first_name, tenant.first_name);

    Ok(())
}

/// Tests loading a vacant room.
///
/// Expected: Ok(Some) with no renter
#[tokio::test]
async fn vacant_room_has_no_renter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_account(db).await?;

    let repo = RoomRepository::new(db);
    let found = repo.find_by_id(room.id).await?.expect("room should exist");

    assert!(!found.is_occupied());
    assert!(found.available);

    Ok(())
}

/// Tests loading a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}

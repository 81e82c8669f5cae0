use super::*;

/// Tests recording a received parcel.
///
/// Expected: Ok with picked_up false and the room number attached
#[tokio::test]
async fn records_waiting_parcel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;

    let repo = ParcelRepository::new(db);
    let parcel = repo
        .create(CreateParcelParams {
            room_id: room.id,
            recipient_name: "Nok".to_string(),
            carrier: Some("Flash".to_string()),
            tracking_number: Some("TH123".to_string()),
        })
        .await?;

    assert!(!parcel.picked_up);
    assert!(parcel.picked_up_at.is_none());
    assert_eq!(parcel.room_number, room.room_number);

    let (waiting, total) = repo
        .get_paginated(
            ParcelFilter {
                picked_up: Some(false),
                room_id: Some(room.id),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(waiting[0].id, parcel.id);

    Ok(())
}

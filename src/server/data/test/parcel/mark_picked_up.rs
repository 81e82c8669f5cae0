use super::*;

/// Tests marking a parcel as picked up.
///
/// Expected: Ok(1) the first time, Ok(0) once already picked up
#[tokio::test]
async fn marks_picked_up_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let parcel = factory::create_parcel(db, room.id).await?;

    let repo = ParcelRepository::new(db);
    assert_eq!(repo.mark_picked_up(parcel.id).await?, 1);
    assert_eq!(repo.mark_picked_up(parcel.id).await?, 0);

    let found = repo.find_by_id(parcel.id).await?.expect("parcel should exist");
    assert!(found.picked_up);
    assert!(found.picked_up_at.is_some());

    Ok(())
}

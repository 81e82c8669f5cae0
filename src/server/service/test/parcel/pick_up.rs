use super::*;

/// Tests picking up a waiting parcel twice.
///
/// Expected: first Ok with picked_up_at, second Err(AppError::Conflict)
#[tokio::test]
async fn picks_up_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let parcel = factory::create_parcel(db, room.id).await?;
    let service = ParcelService::new(db, &mailer);

    let picked = service.pick_up(parcel.id).await?;
    assert!(picked.picked_up);
    assert!(picked.picked_up_at.is_some());

    assert!(matches!(
        service.pick_up(parcel.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests picking up a parcel that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_parcel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let result = ParcelService::new(db, &mailer).pick_up(1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

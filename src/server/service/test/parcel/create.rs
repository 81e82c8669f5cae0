use super::*;

/// Tests logging a parcel for an occupied room.
///
/// Expected: waiting parcel, renter emailed
#[tokio::test]
async fn logs_parcel_and_emails_renter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;

    let parcel = ParcelService::new(db, &mailer)
        .create(delivery(room.id))
        .await?;

    assert!(!parcel.picked_up);
    assert_eq!(parcel.room_number, room.room_number);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(Some(sent[0].to.clone()), account.email);

    Ok(())
}

/// Tests logging a parcel for a missing room.
///
/// Expected: Err(AppError::NotFound), no email
#[tokio::test]
async fn rejects_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let result = ParcelService::new(db, &mailer).create(delivery(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests that tenants only list their own room's parcels.
///
/// Expected: one parcel for the tenant
#[tokio::test]
async fn tenant_lists_only_own_parcels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, other_room, _) = factory::helpers::create_room_with_tenant(db).await?;
    factory::create_parcel(db, room.id).await?;
    factory::create_parcel(db, other_room.id).await?;
    let tenant = User::from_entity(account);

    let page = ParcelService::new(db, &mailer)
        .get_paginated(&tenant, ParcelFilter::default(), 0, 20)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].room_id, room.id);

    Ok(())
}

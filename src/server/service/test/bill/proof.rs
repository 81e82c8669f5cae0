use super::*;

/// Tests a tenant uploading payment proof for their bill.
///
/// Expected: proof stored, bill pending review
#[tokio::test]
async fn tenant_submits_proof() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let bill = factory::create_bill(db, room.id).await?;
    let tenant = User::from_entity(account);

    let updated = BillService::new(db, &storage, &mailer, APP_URL)
        .submit_proof(&tenant, bill.id, PNG_DATA_URL)
        .await?;

    assert_eq!(updated.status, BillStatus::PendingReview);
    let keys = storage.keys();
    assert_eq!(keys.len(), 1);
    assert_eq!(
        updated.proof_image_url,
        Some(format!("https://storage.test/{}", keys[0]))
    );

    Ok(())
}

/// Tests another room's account reading or paying a bill.
///
/// Expected: Err(AuthError::AccessDenied) and nothing uploaded
#[tokio::test]
async fn other_room_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, _, other_account) = factory::helpers::create_room_with_tenant(db).await?;
    let bill = factory::create_bill(db, room.id).await?;
    let outsider = User::from_entity(other_account);
    let service = BillService::new(db, &storage, &mailer, APP_URL);

    assert!(matches!(
        service.get_for(&outsider, bill.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.submit_proof(&outsider, bill.id, PNG_DATA_URL).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(storage.keys().is_empty());

    Ok(())
}

/// Tests submitting proof for a bill already paid.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_paid_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    let bill = factory::bill::BillFactory::new(db, room.id)
        .status("paid")
        .build()
        .await?;
    let tenant = User::from_entity(account);

    let result = BillService::new(db, &storage, &mailer, APP_URL)
        .submit_proof(&tenant, bill.id, PNG_DATA_URL)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

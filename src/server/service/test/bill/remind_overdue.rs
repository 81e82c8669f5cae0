use super::*;

/// Tests reminders for overdue unpaid bills.
///
/// One overdue bill on an occupied room, one overdue on a vacant room, one paid and one not
/// yet due. Only the first reaches a mailbox.
///
/// Expected: Ok(1), one email
#[tokio::test]
async fn reminds_renters_of_overdue_bills() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();

    let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
    let overdue = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();

    let (_, occupied, account) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, vacant, _) = factory::helpers::create_room_with_account(db).await?;

    factory::bill::BillFactory::new(db, occupied.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .due_date(overdue)
        .build()
        .await?;
    factory::bill::BillFactory::new(db, occupied.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap())
        .status("paid")
        .build()
        .await?;
    factory::bill::BillFactory::new(db, occupied.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2025, 8, 5).unwrap())
        .build()
        .await?;
    factory::bill::BillFactory::new(db, vacant.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .due_date(overdue)
        .build()
        .await?;

    let sent = BillService::new(db, &storage, &mailer, APP_URL)
        .remind_overdue(today)
        .await?;

    assert_eq!(sent, 1);
    let messages = mailer.sent();
    assert_eq!(messages.len(), 1);
    assert_eq!(Some(messages[0].to.clone()), account.email);
    assert!(messages[0].body.contains(APP_URL));

    Ok(())
}

/// Tests that one unreadable renter does not abort the reminder run.
///
/// Two occupied rooms with overdue bills. The first renter's row is corrupted so loading it
/// fails; the second renter is still reminded.
///
/// Expected: Ok(1), one email to the second renter
#[tokio::test]
async fn skips_bill_when_renter_lookup_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let mailer = RecordingMailer::new();

    let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();

    let (_, broken, broken_account) = factory::helpers::create_room_with_tenant(db).await?;
    let (_, healthy, healthy_account) = factory::helpers::create_room_with_tenant(db).await?;

    factory::bill::BillFactory::new(db, broken.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        .build()
        .await?;
    factory::bill::BillFactory::new(db, healthy.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap())
        .build()
        .await?;

    db.execute_unprepared(&format!(
        "UPDATE \"user\" SET created_at = 'not a timestamp' WHERE id = {}",
        broken_account.id
    ))
    .await?;

    let sent = BillService::new(db, &storage, &mailer, APP_URL)
        .remind_overdue(today)
        .await?;

    assert_eq!(sent, 1);
    let messages = mailer.sent();
    assert_eq!(messages.len(), 1);
    assert_eq!(Some(messages[0].to.clone()), healthy_account.email);

    Ok(())
}

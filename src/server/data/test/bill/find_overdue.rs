use super::*;

/// Tests finding unpaid bills past their due date.
///
/// Bills due today, paid bills and bills under review are not overdue.
///
/// Expected: Ok with only the unpaid bill due yesterday
#[tokio::test]
async fn finds_only_unpaid_past_due() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let today = Utc::now().date_naive();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    let overdue = factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .due_date(yesterday)
        .build()
        .await?;
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
        .due_date(today)
        .build()
        .await?;
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .due_date(yesterday)
        .status("paid")
        .build()
        .await?;
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
        .due_date(yesterday)
        .status("pending_review")
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let bills = repo.find_overdue(today).await?;

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].id, overdue.id);
    assert_eq!(bills[0].room_number, room.room_number);

    Ok(())
}

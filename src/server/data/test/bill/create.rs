use super::*;

fn params(room_id: i32, month: NaiveDate) -> CreateBillParams {
    CreateBillParams {
        room_id,
        billing_month: month,
        rent: 3500,
        water: 120,
        electricity: 560,
        other: 0,
        due_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    }
}

/// Tests creating a bill.
///
/// Expected: Ok with status Unpaid and total equal to the sum of the amounts
#[tokio::test]
async fn creates_unpaid_bill_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let month = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

    let repo = BillRepository::new(db);
    let bill = repo.create(params(room.id, month)).await?;

    assert_eq!(bill.status, BillStatus::Unpaid);
    assert_eq!(bill.total, 3500 + 120 + 560);
    assert_eq!(bill.room_number, room.room_number);
    assert!(repo.exists_for_month(room.id, month).await?);
    assert!(
        !repo
            .exists_for_month(room.id, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .await?
    );

    Ok(())
}

/// Tests the unique (room, month) index.
///
/// Expected: Err on the second bill for the same month
#[tokio::test]
async fn rejects_second_bill_for_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let month = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

    let repo = BillRepository::new(db);
    repo.create(params(room.id, month)).await?;

    assert!(repo.create(params(room.id, month)).await.is_err());

    Ok(())
}

/// Tests filtering bills by month.
///
/// Expected: Ok with only the February bill
#[tokio::test]
async fn filters_by_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let february = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let march = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(february)
        .build()
        .await?;
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(march)
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let (bills, total) = repo
        .get_paginated(
            BillFilter {
                month: Some(february),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(bills[0].billing_month, february);

    Ok(())
}

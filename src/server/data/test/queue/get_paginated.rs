use super::*;

/// Tests listing queue entries filtered by status, earliest appointment first.
///
/// Expected: Ok with the two pending entries in date order
#[tokio::test]
async fn filters_by_status_in_date_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let today = Utc::now().date_naive();
    let later = factory::queue::QueueFactory::new(db, room_type.id)
        .appointment_date(today.checked_add_days(Days::new(10)).unwrap())
        .build()
        .await?;
    let sooner = factory::queue::QueueFactory::new(db, room_type.id)
        .appointment_date(today.checked_add_days(Days::new(2)).unwrap())
        .build()
        .await?;
    factory::queue::QueueFactory::new(db, room_type.id)
        .status("cancelled")
        .build()
        .await?;

    let repo = QueueRepository::new(db);
    let (entries, total) = repo
        .get_paginated(Some(QueueStatus::Pending), 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        entries.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![sooner.id, later.id]
    );

    let (all, all_total) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all_total, 3);

    Ok(())
}

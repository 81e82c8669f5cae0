use super::*;
use chrono::NaiveDate;

/// Tests dashboard figures on an empty database.
///
/// Expected: every count zero
#[tokio::test]
async fn empty_database_has_zero_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DashboardRepository::new(db);
    let stats = repo.stats().await?;

    assert_eq!(stats, Default::default());

    Ok(())
}

/// Tests dashboard figures across rooms, queue, bills, tasks and parcels.
///
/// Expected: each figure counts only its matching rows
#[tokio::test]
async fn counts_each_figure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    factory::helpers::create_room_with_account(db).await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .available(false)
        .build()
        .await?;
    factory::create_user(db).await?;
    factory::user::create_admin(db).await?;

    factory::create_queue_entry(db, room_type.id).await?;
    factory::queue::QueueFactory::new(db, room_type.id)
        .status("confirmed")
        .build()
        .await?;

    factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .build()
        .await?;
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
        .status("pending_review")
        .build()
        .await?;
    factory::bill::BillFactory::new(db, room.id)
        .billing_month(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .status("paid")
        .build()
        .await?;

    factory::create_task(db, room.id).await?;
    factory::task::TaskFactory::new(db, room.id)
        .status("completed")
        .price(Some(200))
        .build()
        .await?;

    factory::create_parcel(db, room.id).await?;
    factory::parcel::ParcelFactory::new(db, room.id)
        .picked_up(true)
        .build()
        .await?;

    let repo = DashboardRepository::new(db);
    let stats = repo.stats().await?;

    assert_eq!(stats.total_rooms, 3);
    assert_eq!(stats.occupied_rooms, 1);
    assert_eq!(stats.vacant_rooms(), 2);
    assert_eq!(stats.unavailable_rooms, 1);
    assert_eq!(stats.registered_users, 1);
    assert_eq!(stats.pending_queue, 1);
    assert_eq!(stats.unpaid_bills, 1);
    assert_eq!(stats.pending_review_bills, 1);
    assert_eq!(stats.outstanding_amount, 2 * 4000);
    assert_eq!(stats.open_tasks, 1);
    assert_eq!(stats.waiting_parcels, 1);

    Ok(())
}

use super::*;

/// Tests booking a queue entry.
///
/// Verifies the entry starts pending and carries the room type name.
///
/// Expected: Ok with status Pending
#[tokio::test]
async fn creates_pending_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let date = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .unwrap();

    let repo = QueueRepository::new(db);
    let entry = repo
        .create(BookQueueParams {
            first_name: "Anan".to_string(),
            last_name: "Srisuk".to_string(),
            email: "anan@example.com".to_string(),
            phone: "0812345678".to_string(),
            room_type_id: room_type.id,
            appointment_date: date,
            note: Some("Afternoon please".to_string()),
        })
        .await?;

    assert_eq!(entry.status, QueueStatus::Pending);
    assert_eq!(entry.room_type_name, room_type.name);
    assert_eq!(entry.appointment_date, date);

    let found = repo.find_by_id(entry.id).await?.expect("entry should exist");
    assert_eq!(found, entry);

    Ok(())
}

/// Tests changing an entry's status.
///
/// Expected: Ok(1) and the new status is read back
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let entry = factory::create_queue_entry(db, room_type.id).await?;

    let repo = QueueRepository::new(db);
    assert_eq!(repo.update_status(entry.id, QueueStatus::Confirmed).await?, 1);

    let found = repo.find_by_id(entry.id).await?.expect("entry should exist");
    assert_eq!(found.status, QueueStatus::Confirmed);

    Ok(())
}

/// Tests that an unknown status string in the database surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let entry = factory::queue::QueueFactory::new(db, room_type.id)
        .status("waiting")
        .build()
        .await?;

    let repo = QueueRepository::new(db);
    let result = repo.find_by_id(entry.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

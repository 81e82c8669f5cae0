use super::*;

/// Tests booking a type with a free room.
///
/// Expected: Ok with a pending entry
#[tokio::test]
async fn books_pending_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    factory::create_room(db, room_type.id).await?;
    let today = local_today();

    let entry = QueueService::new(db)
        .book(booking(room_type.id, today), today)
        .await?;

    assert_eq!(entry.status, QueueStatus::Pending);
    assert_eq!(entry.room_type_name, room_type.name);
    assert_eq!(entry.appointment_date, today);

    Ok(())
}

/// Tests booking once every vacant room is spoken for.
///
/// Expected: second booking Err(AppError::Conflict)
#[tokio::test]
async fn rejects_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    factory::create_room(db, room_type.id).await?;
    let today = local_today();
    let service = QueueService::new(db);

    service.book(booking(room_type.id, today), today).await?;
    let result = service.book(booking(room_type.id, today), today).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests booking a type with no rooms at all.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_type_without_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let today = local_today();

    let result = QueueService::new(db)
        .book(booking(room_type.id, today), today)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests booking an appointment before today.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_past_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    factory::create_room(db, room_type.id).await?;
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    let result = QueueService::new(db)
        .book(booking(room_type.id, yesterday), today)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking an unknown room type.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = local_today();

    let result = QueueService::new(db).book(booking(42, today), today).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

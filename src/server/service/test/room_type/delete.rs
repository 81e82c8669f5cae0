use super::*;

/// Tests deleting a room type that rooms still use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn refuses_referenced_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let room_type = factory::create_room_type(db).await?;
    factory::create_room(db, room_type.id).await?;

    let result = RoomTypeService::new(db, &storage).delete(room_type.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting an unused room type, then deleting it again.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_unused_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let room_type = factory::create_room_type(db).await?;

    let service = RoomTypeService::new(db, &storage);
    service.delete(room_type.id).await?;

    assert!(matches!(
        service.delete(room_type.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

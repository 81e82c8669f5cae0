use super::*;

/// Tests deleting a vacant room removes its account too.
///
/// Expected: Ok, account gone
#[tokio::test]
async fn deletes_room_and_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (_, room, account) = factory::helpers::create_room_with_account(db).await?;

    let service = RoomService::new(db, &storage, &auth);
    service.delete(room.id).await?;

    assert!(matches!(
        service.get(room.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(UserRepository::new(db)
        .find_by_id(account.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting an occupied room.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn refuses_occupied_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;

    let result = RoomService::new(db, &storage, &auth).delete(room.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

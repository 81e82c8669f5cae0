use super::*;

/// Tests creating a room with its companion account.
///
/// Verifies the account uses the room number as username, is linked to the room, and
/// accepts the returned password.
///
/// Expected: Ok with 10-character credentials that log in
#[tokio::test]
async fn creates_room_and_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let room_type = factory::create_room_type(db).await?;

    let created = RoomService::new(db, &storage, &auth)
        .create(CreateRoomParams {
            room_number: "A101".to_string(),
            room_type_id: room_type.id,
            floor: 1,
            image: None,
        })
        .await?;

    assert_eq!(created.room.room_number, "A101");
    assert!(created.room.available);
    assert!(!created.room.is_occupied());
    assert_eq!(created.username, "A101");
    assert_eq!(created.password.len(), 10);

    let account = UserRepository::new(db)
        .find_by_room_id(created.room.id)
        .await?
        .expect("room account should exist");
    assert_eq!(account.username, "A101");
    assert!(!account.admin);

    let (logged_in, _) = AuthService::new(db, &auth)
        .login("A101", created.password)
        .await?;
    assert_eq!(logged_in.id, account.id);

    Ok(())
}

/// Tests creating a room whose number already exists.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let room_type = factory::create_room_type(db).await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .room_number("A101")
        .build()
        .await?;

    let result = RoomService::new(db, &storage, &auth)
        .create(CreateRoomParams {
            room_number: "A101".to_string(),
            room_type_id: room_type.id,
            floor: 1,
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a room whose number is already someone's username.
///
/// Expected: Err(AppError::Conflict) and no room inserted
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let room_type = factory::create_room_type(db).await?;
    factory::user::UserFactory::new(db)
        .username("B202")
        .build()
        .await?;

    let service = RoomService::new(db, &storage, &auth);
    let result = service
        .create(CreateRoomParams {
            room_number: "B202".to_string(),
            room_type_id: room_type.id,
            floor: 2,
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_all(Default::default()).await?.is_empty());

    Ok(())
}

/// Tests creating a room for a missing room type.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_room_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let result = RoomService::new(db, &storage, &auth)
        .create(CreateRoomParams {
            room_number: "C301".to_string(),
            room_type_id: 77,
            floor: 3,
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;
use crate::server::data::chat::ChatRepository;

/// Tests vacating an occupied room.
///
/// Verifies the renter is cleared, the profile reset, the old password replaced, earlier
/// tokens revoked and the chat thread emptied.
///
/// Expected: Ok with new credentials that log in
#[tokio::test]
async fn vacates_and_rotates_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (_, room, account) = factory::helpers::create_room_with_tenant(db).await?;
    factory::create_chat_message(db, account.id, &account, "แอร์เสียครับ").await?;

    let result = RoomService::new(db, &storage, &auth)
        .vacate(room.id)
        .await?;

    assert!(!result.room.is_occupied());
    assert!(result.room.available);
    assert_eq!(result.username, account.username);

    let reset = UserRepository::new(db)
        .find_by_id(account.id)
        .await?
        .expect("account should exist");
    assert_eq!(reset.first_name, "ห้อง");
    assert_eq!(reset.last_name, room.room_number);
    assert_eq!(reset.email, None);
    assert_eq!(reset.token_version, account.token_version + 1);
    assert!(ChatRepository::new(db)
        .get_thread(account.id, None)
        .await?
        .is_empty());

    AuthService::new(db, &auth)
        .login(&account.username, result.password)
        .await?;

    Ok(())
}

/// Tests vacating a room that is already vacant.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_vacant_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (_, room, _) = factory::helpers::create_room_with_account(db).await?;

    let result = RoomService::new(db, &storage, &auth).vacate(room.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

use super::*;

/// Tests assigning a tenant from a queue entry.
///
/// Verifies the account profile takes the tenant's name and the queue's contact details,
/// the room becomes occupied and unavailable, and the entry becomes assigned.
///
/// Expected: Ok with renter set
#[tokio::test]
async fn assigns_tenant_from_queue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (room_type, room, account) = factory::helpers::create_room_with_account(db).await?;
    let entry = factory::create_queue_entry(db, room_type.id).await?;

    let assigned = RoomService::new(db, &storage, &auth)
        .assign_tenant(room.id, tenant(Some(entry.id)))
        .await?;

    assert!(!assigned.available);
    let renter = assigned.renter.expect("room should have a renter");
    assert_eq!(renter.user_id, account.id);
    assert_eq!(renter.first_name, "Anan");
    assert_eq!(renter.email.as_deref(), Some(entry.email.as_str()));
    assert_eq!(renter.phone.as_deref(), Some(entry.phone.as_str()));

    let entry = QueueRepository::new(db)
        .find_by_id(entry.id)
        .await?
        .expect("entry should exist");
    assert_eq!(entry.status, QueueStatus::Assigned);

    Ok(())
}

/// Tests assigning into an occupied room.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_occupied_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;

    let result = RoomService::new(db, &storage, &auth)
        .assign_tenant(room.id, tenant(None))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests assigning with a queue entry that is cancelled or for another room type.
///
/// Expected: Err(AppError::Conflict) for both, room stays vacant
#[tokio::test]
async fn rejects_unusable_queue_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let auth = auth_config();

    let (room_type, room, _) = factory::helpers::create_room_with_account(db).await?;
    let other_type = factory::create_room_type(db).await?;
    let cancelled = factory::queue::QueueFactory::new(db, room_type.id)
        .status("cancelled")
        .build()
        .await?;
    let other = factory::create_queue_entry(db, other_type.id).await?;

    let service = RoomService::new(db, &storage, &auth);
    for queue_id in [cancelled.id, other.id] {
        let result = service.assign_tenant(room.id, tenant(Some(queue_id))).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    assert!(!service.get(room.id).await?.is_occupied());

    Ok(())
}

use super::*;

/// Tests creating a room type with a data URL image.
///
/// Expected: image uploaded under `uploads/` and its URL stored
#[tokio::test]
async fn uploads_data_url_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let room_type = RoomTypeService::new(db, &storage)
        .create(RoomTypeParams {
            name: "Standard".to_string(),
            price: 3500,
            description: "Fan room".to_string(),
            image: Some(PNG_DATA_URL.to_string()),
        })
        .await?;

    let keys = storage.keys();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].starts_with("uploads/") && keys[0].ends_with(".png"));
    assert_eq!(
        room_type.image_url,
        Some(format!("https://storage.test/{}", keys[0]))
    );

    Ok(())
}

/// Tests that updating without an image keeps the current one.
///
/// Expected: image_url unchanged, other fields updated
#[tokio::test]
async fn update_keeps_image_when_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let existing = factory::room_type::RoomTypeFactory::new(db)
        .image_url(Some("https://cdn.test/old.png".to_string()))
        .build()
        .await?;

    let updated = RoomTypeService::new(db, &storage)
        .update(
            existing.id,
            RoomTypeParams {
                name: "Renamed".to_string(),
                price: 3900,
                description: "Now with fridge".to_string(),
                image: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.image_url.as_deref(), Some("https://cdn.test/old.png"));
    assert!(storage.keys().is_empty());

    Ok(())
}

/// Tests that an invalid image rejects the request before anything is stored.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_image_data_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let result = RoomTypeService::new(db, &storage)
        .create(RoomTypeParams {
            name: "Standard".to_string(),
            price: 3500,
            description: String::new(),
            image: Some("data:text/plain;base64,aGVsbG8=".to_string()),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

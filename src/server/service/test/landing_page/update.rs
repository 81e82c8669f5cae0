use super::*;

/// Tests reading the landing page before anything is saved.
///
/// Expected: the default content
#[tokio::test]
async fn falls_back_to_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let page = LandingPageService::new(db, &storage).get().await?;

    assert_eq!(page, LandingPage::default());

    Ok(())
}

/// Tests saving twice, the second time without a hero image.
///
/// Expected: the uploaded hero image survives the second save
#[tokio::test]
async fn keeps_hero_image_between_saves() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let service = LandingPageService::new(db, &storage);

    let first = service.update(content(Some(PNG_DATA_URL))).await?;
    let hero = first.hero_image_url.clone();
    assert!(hero.is_some());

    let mut params = content(None);
    params.title = "Baan Suan Residence".to_string();
    let second = service.update(params).await?;

    assert_eq!(second.title, "Baan Suan Residence");
    assert_eq!(second.hero_image_url, hero);
    assert_eq!(service.get().await?.title, "Baan Suan Residence");
    assert_eq!(storage.keys().len(), 1);

    Ok(())
}

use super::*;

/// Tests a tenant and an admin writing in the tenant's thread.
///
/// Expected: both messages in order, sender_admin set on the reply, body trimmed
#[tokio::test]
async fn tenant_and_admin_exchange_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let (_, _, account) = factory::helpers::create_room_with_tenant(db).await?;
    let tenant = User::from_entity(account);
    let service = ChatService::new(db);

    let question = service
        .send(&tenant, tenant.id, "  Is the water off today?  ")
        .await?;
    let reply = service.send(&admin, tenant.id, "Until 3pm").await?;

    assert_eq!(question.body, "Is the water off today?");
    assert!(!question.sender_admin);
    assert!(reply.sender_admin);

    let thread = service.messages(tenant.id, None).await?;
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].id, question.id);

    let newer = service.messages(tenant.id, Some(question.id)).await?;
    assert_eq!(newer.len(), 1);
    assert_eq!(newer[0].id, reply.id);

    Ok(())
}

/// Tests sending a blank message.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_body() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let result = ChatService::new(db).send(&user, user.id, "   ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests opening a thread for an admin or a missing user.
///
/// Expected: Err(AppError::BadRequest) and Err(AppError::NotFound)
#[tokio::test]
async fn rejects_invalid_thread_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let service = ChatService::new(db);

    assert!(matches!(
        service.messages(admin.id, None).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.messages(9999, None).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

use super::*;

/// Tests attaching a payment proof.
///
/// Expected: proof stored and status PendingReview
#[tokio::test]
async fn proof_moves_bill_to_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let bill = factory::create_bill(db, room.id).await?;

    let repo = BillRepository::new(db);
    repo.set_proof(bill.id, "https://storage.test/slip.png".to_string())
        .await?;

    let found = repo.find_by_id(bill.id).await?.expect("bill should exist");
    assert_eq!(found.status, BillStatus::PendingReview);
    assert_eq!(
        found.proof_image_url.as_deref(),
        Some("https://storage.test/slip.png")
    );

    Ok(())
}

/// Tests marking a bill paid and back to unpaid.
///
/// Expected: paid_at stamped on Paid and cleared on Unpaid
#[tokio::test]
async fn paid_status_stamps_paid_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dormitory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, _) = factory::helpers::create_room_with_tenant(db).await?;
    let bill = factory::create_bill(db, room.id).await?;

    let repo = BillRepository::new(db);
    repo.set_status(bill.id, BillStatus::Paid, Some(Utc::now()))
        .await?;
    let paid = repo.find_by_id(bill.id).await?.expect("bill should exist");
    assert_eq!(paid.status, BillStatus::Paid);
    assert!(paid.paid_at.is_some());

    repo.set_status(bill.id, BillStatus::Unpaid, None).await?;
    let unpaid = repo.find_by_id(bill.id).await?.expect("bill should exist");
    assert_eq!(unpaid.status, BillStatus::Unpaid);
    assert!(unpaid.paid_at.is_none());

    Ok(())
}

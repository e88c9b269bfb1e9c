use super::*;

/// Tests resolving review IDs keeps the order of the given IDs.
///
/// Expected: Ok with reviews in the requested order
#[tokio::test]
async fn returns_reviews_in_requested_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_review(db).await?;
    let second = factory::create_review(db).await?;
    let third = factory::create_review(db).await?;

    let reviews = ReviewRepository::new(db)
        .find_by_ids(&[third.id, first.id, second.id])
        .await?;

    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![third.id, first.id, second.id]);

    Ok(())
}

/// Tests that IDs without a stored review are skipped.
///
/// Expected: Ok with only the existing review
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = factory::create_review(db).await?;

    let reviews = ReviewRepository::new(db)
        .find_by_ids(&[review.id + 50, review.id])
        .await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review.id);

    Ok(())
}

/// Tests resolving an empty ID list.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviews = ReviewRepository::new(db).find_by_ids(&[]).await?;

    assert!(reviews.is_empty());

    Ok(())
}

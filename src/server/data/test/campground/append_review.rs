use super::*;

/// Tests appending reviews to a campground.
///
/// Verifies that each appended reference lands after the existing ones.
///
/// Expected: Ok with references in append order
#[tokio::test]
async fn appends_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campground, existing) = factory::helpers::create_campground_with_reviews(db, 1).await?;
    let second = factory::create_review(db).await?;
    let third = factory::create_review(db).await?;

    let repo = CampgroundRepository::new(db);
    repo.append_review(campground.id, second.id).await?;
    repo.append_review(campground.id, third.id).await?;

    let ids = repo.review_ids(campground.id).await?;
    assert_eq!(ids, vec![existing[0].id, second.id, third.id]);

    Ok(())
}

/// Tests appending a review to a campground that does not exist.
///
/// Expected: Err from the foreign key constraint, nothing linked
#[tokio::test]
async fn fails_for_absent_campground() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = factory::create_review(db).await?;

    let result = CampgroundRepository::new(db)
        .append_review(999, review.id)
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::CampgroundReview::find().count(db).await?, 0);

    Ok(())
}

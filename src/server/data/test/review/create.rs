use super::*;

/// Tests creating a review.
///
/// Expected: Ok with review stored and unlinked from any campground
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = ReviewRepository::new(db)
        .create(CreateReviewParams {
            rating: 5,
            body: "Best sunrise in the state".to_string(),
        })
        .await?;

    assert_eq!(review.rating, 5);
    assert_eq!(review.body, "Best sunrise in the state");

    let stored = entity::prelude::Review::find_by_id(review.id).one(db).await?;
    assert!(stored.is_some());
    assert!(entity::prelude::CampgroundReview::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

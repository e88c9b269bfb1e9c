use super::*;

/// Tests deleting a campground with reviews.
///
/// Verifies that the campground and its references are removed while the review records
/// themselves remain in the store.
///
/// Expected: Ok(true), reviews preserved
#[tokio::test]
async fn deletes_campground_and_keeps_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campground, reviews) = factory::helpers::create_campground_with_reviews(db, 2).await?;

    let deleted = CampgroundRepository::new(db).delete(campground.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Campground::find_by_id(campground.id)
        .one(db)
        .await?
        .is_none());

    let links = entity::prelude::CampgroundReview::find()
        .filter(entity::campground_review::Column::CampgroundId.eq(campground.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    assert_eq!(
        ReviewRepository::new(db).count().await?,
        reviews.len() as u64
    );

    Ok(())
}

/// Tests deleting a campground that does not exist.
///
/// Expected: Ok(false) and other campgrounds untouched
#[tokio::test]
async fn returns_false_for_absent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campground = factory::create_campground(db).await?;

    let deleted = CampgroundRepository::new(db).delete(campground.id + 100).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Campground::find().count(db).await?, 1);

    Ok(())
}

use super::*;

/// Tests finding an existing campground.
///
/// Expected: Ok(Some) with the stored fields and ordered review references
#[tokio::test]
async fn finds_existing_campground() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campground, reviews) = factory::helpers::create_campground_with_reviews(db, 3).await?;

    let found = CampgroundRepository::new(db)
        .find_by_id(campground.id)
        .await?
        .unwrap();

    assert_eq!(found.title, campground.title);
    assert_eq!(found.price, campground.price);
    assert_eq!(
        found.reviews,
        reviews.iter().map(|r| r.id).collect::<Vec<_>>()
    );

    Ok(())
}

/// Tests finding a campground that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_absent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = CampgroundRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests listing campgrounds on an empty store.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_campgrounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campgrounds = CampgroundRepository::new(db).get_all().await?;

    assert!(campgrounds.is_empty());

    Ok(())
}

/// Tests that campgrounds are listed in insertion order with their own review references.
///
/// Expected: Ok with each campground holding only the reviews linked to it
#[tokio::test]
async fn lists_campgrounds_with_their_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, reviews) = factory::helpers::create_campground_with_reviews(db, 2).await?;
    let second = factory::create_campground(db).await?;

    let campgrounds = CampgroundRepository::new(db).get_all().await?;

    assert_eq!(campgrounds.len(), 2);
    assert_eq!(campgrounds[0].id, first.id);
    assert_eq!(
        campgrounds[0].reviews,
        reviews.iter().map(|r| r.id).collect::<Vec<_>>()
    );
    assert_eq!(campgrounds[1].id, second.id);
    assert!(campgrounds[1].reviews.is_empty());

    Ok(())
}

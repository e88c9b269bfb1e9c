use super::*;

/// Tests creating a campground.
///
/// Verifies that the repository stores every scalar field, assigns an ID, and starts
/// the campground with no review references.
///
/// Expected: Ok with campground created
#[tokio::test]
async fn creates_campground_with_empty_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampgroundRepository::new(db);
    let campground = repo
        .create(CreateCampgroundParams {
            title: "Lakeside".to_string(),
            price: 12.5,
            description: "Right on the water".to_string(),
            location: "Tahoe".to_string(),
        })
        .await?;

    assert_eq!(campground.title, "Lakeside");
    assert_eq!(campground.price, 12.5);
    assert_eq!(campground.location, "Tahoe");
    assert!(campground.reviews.is_empty());

    let stored = entity::prelude::Campground::find_by_id(campground.id)
        .one(db)
        .await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().description, "Right on the water");

    Ok(())
}

/// Tests that each created campground gets a distinct ID.
///
/// Expected: Ok with two different IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampgroundRepository::new(db);
    let params = CreateCampgroundParams {
        title: "Twin Pines".to_string(),
        price: 0.0,
        description: "Free sites".to_string(),
        location: "Nowhere".to_string(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Campground::find().count(db).await?, 2);

    Ok(())
}

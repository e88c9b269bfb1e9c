use super::*;

fn params(title: &str) -> UpdateCampgroundParams {
    UpdateCampgroundParams {
        title: title.to_string(),
        price: 30.0,
        description: "Renovated bathhouse".to_string(),
        location: "Moab".to_string(),
    }
}

/// Tests that updating replaces scalar fields and keeps review references.
///
/// Expected: Ok(Some) with new fields and the original reviews
#[tokio::test]
async fn replaces_fields_and_keeps_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campground, reviews) = factory::helpers::create_campground_with_reviews(db, 2).await?;

    let updated = CampgroundRepository::new(db)
        .update(campground.id, params("Desert View"))
        .await?
        .unwrap();

    assert_eq!(updated.id, campground.id);
    assert_eq!(updated.title, "Desert View");
    assert_eq!(updated.price, 30.0);
    assert_eq!(updated.location, "Moab");
    assert_eq!(
        updated.reviews,
        reviews.iter().map(|r| r.id).collect::<Vec<_>>()
    );

    let stored = entity::prelude::Campground::find_by_id(campground.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Desert View");

    Ok(())
}

/// Tests updating a campground that does not exist.
///
/// Expected: Ok(None) and nothing created
#[tokio::test]
async fn returns_none_for_absent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CampgroundRepository::new(db)
        .update(42, params("Ghost Camp"))
        .await?;

    assert!(updated.is_none());
    assert_eq!(entity::prelude::Campground::find().count(db).await?, 0);

    Ok(())
}

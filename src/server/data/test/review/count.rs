use super::*;

/// Tests counting reviews, linked and unlinked alike.
///
/// Expected: Ok(0) on an empty store, then every inserted review counted
#[tokio::test]
async fn counts_linked_and_unlinked_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::helpers::create_campground_with_reviews(db, 2).await?;
    factory::create_review(db).await?;

    assert_eq!(repo.count().await?, 3);

    Ok(())
}

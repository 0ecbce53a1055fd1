use super::*;

/// Tests creating a country.
///
/// Expected: Ok with the stored name and a fresh id
#[tokio::test]
async fn creates_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    let country = repo
        .create(CreateCountryParams {
            name: "Ukraine".to_string(),
        })
        .await?;

    assert_eq!(country.name, "Ukraine");
    assert!(repo.get_by_id(country.id).await?.is_some());

    Ok(())
}

/// Tests that the name column is unique.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::country::CountryFactory::new(db)
        .name("Poland")
        .build()
        .await?;

    let result = CountryRepository::new(db)
        .create(CreateCountryParams {
            name: "Poland".to_string(),
        })
        .await;

    assert!(result.as_ref().is_err_and(is_unique_violation));

    Ok(())
}

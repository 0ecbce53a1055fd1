use super::*;

/// Tests renaming a country.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn renames_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;

    let updated = CountryRepository::new(db)
        .update(
            country.id,
            UpdateCountryParams {
                name: Some("Moldova".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.map(|c| c.name), Some("Moldova".to_string()));

    Ok(())
}

/// Tests updating a missing country.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CountryRepository::new(db)
        .update(999, UpdateCountryParams::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}

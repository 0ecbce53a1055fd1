use super::*;

/// Tests deleting a country cascades to its cities.
///
/// Expected: Ok(true), and the city is gone
#[tokio::test]
async fn deletes_country_and_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let deleted = CountryRepository::new(db).delete(city.country_id).await?;

    assert!(deleted);
    let check = entity::prelude::City::find_by_id(city.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a missing country.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CountryRepository::new(db).delete(42).await?);

    Ok(())
}

use super::*;

/// Tests substring search on the name.
///
/// Expected: only countries whose name contains the term, case-insensitively
#[tokio::test]
async fn filters_by_search_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Germany", "Georgia", "France"] {
        factory::country::CountryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let countries = CountryRepository::new(db)
        .get_all(
            &CountryFilter {
                search: Some("geo".to_string()),
            },
            &[],
        )
        .await?;

    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Georgia"]);

    Ok(())
}

/// Tests descending ordering by name.
///
/// Expected: countries sorted Z to A
#[tokio::test]
async fn orders_by_name_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_geography_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Austria", "Chile", "Brazil"] {
        factory::country::CountryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let ordering = vec![OrderingField {
        field: "name".to_string(),
        descending: true,
    }];
    let countries = CountryRepository::new(db)
        .get_all(&CountryFilter::default(), &ordering)
        .await?;

    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Chile", "Brazil", "Austria"]);

    Ok(())
}

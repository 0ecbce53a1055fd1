use super::*;

fn ordering(field: &str, descending: bool) -> Vec<OrderingField> {
    vec![OrderingField {
        field: field.to_string(),
        descending,
    }]
}

/// Tests ordering by the computed capacity.
///
/// Capacity is rows times seats per row; ties fall back to id.
///
/// Expected: airplanes sorted by capacity descending, ties by ascending id
#[tokio::test]
async fn orders_by_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let small = factory::airplane::AirplaneFactory::new(db)
        .rows(5)
        .seats_in_row(4)
        .build()
        .await?;
    let large = factory::airplane::AirplaneFactory::new(db)
        .rows(30)
        .seats_in_row(6)
        .build()
        .await?;
    let also_small = factory::airplane::AirplaneFactory::new(db)
        .rows(4)
        .seats_in_row(5)
        .build()
        .await?;

    let airplanes = AirplaneRepository::new(db)
        .get_all(&AirplaneFilter::default(), &ordering("capacity", true))
        .await?;

    let ids: Vec<i32> = airplanes.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![large.id, small.id, also_small.id]);

    Ok(())
}

/// Tests search matching the airplane type name.
///
/// Expected: airplanes of the matching type, regardless of their own name
#[tokio::test]
async fn searches_by_type_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boeing = factory::airplane_type::AirplaneTypeFactory::new(db)
        .name("Boeing 737")
        .build()
        .await?;
    let matching = factory::airplane::AirplaneFactory::new(db)
        .name("Dnipro")
        .airplane_type_id(boeing.id)
        .build()
        .await?;
    factory::airplane::AirplaneFactory::new(db)
        .name("Lviv")
        .build()
        .await?;

    let airplanes = AirplaneRepository::new(db)
        .get_all(
            &AirplaneFilter {
                search: Some("boeing".to_string()),
                airplane_type_id: None,
            },
            &[],
        )
        .await?;

    assert_eq!(airplanes.len(), 1);
    assert_eq!(airplanes[0].id, matching.id);

    Ok(())
}

use super::*;

/// Tests filtering by departure day.
///
/// The day covers `[00:00, 24:00)` UTC, so a flight leaving at midnight of the next
/// day is excluded.
///
/// Expected: only the flight departing on the requested day
#[tokio::test]
async fn filters_by_departure_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = Utc.with_ymd_and_hms(2030, 5, 1, 23, 59, 0).unwrap();
    let midnight = Utc.with_ymd_and_hms(2030, 5, 2, 0, 0, 0).unwrap();
    let on_day = factory::flight::FlightFactory::new(db)
        .departure_time(late)
        .arrival_time(late + Duration::hours(3))
        .build()
        .await?;
    factory::flight::FlightFactory::new(db)
        .departure_time(midnight)
        .arrival_time(midnight + Duration::hours(3))
        .build()
        .await?;

    let filter = FlightFilter {
        departure_date: NaiveDate::from_ymd_opt(2030, 5, 1),
        ..Default::default()
    };
    let flights = FlightRepository::new(db).get_all(&filter, &[]).await?;

    let ids: Vec<i32> = flights.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![on_day.id]);

    Ok(())
}

/// Tests filtering by the destination city of the route.
///
/// Expected: only flights whose route ends at an airport of that city
#[tokio::test]
async fn filters_by_destination_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let airport = factory::airport::AirportFactory::new(db)
        .city_id(city.id)
        .build()
        .await?;
    let route = factory::route::RouteFactory::new(db)
        .destination_id(airport.id)
        .build()
        .await?;
    let matching = factory::flight::FlightFactory::new(db)
        .route_id(route.id)
        .build()
        .await?;
    factory::create_flight(db).await?;

    let filter = FlightFilter {
        endpoints: EndpointFilter {
            destination_city: Some(city.id),
            ..Default::default()
        },
        ..Default::default()
    };
    let flights = FlightRepository::new(db).get_all(&filter, &[]).await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, matching.id);

    Ok(())
}

/// Tests ordering by departure time descending with the roster attached.
///
/// Expected: later flight first, crew loaded for each flight
#[tokio::test]
async fn orders_by_departure_and_loads_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2030, 1, 10, 8, 0, 0).unwrap();
    let early = factory::flight::FlightFactory::new(db)
        .departure_time(base)
        .arrival_time(base + Duration::hours(1))
        .build()
        .await?;
    let late = factory::flight::FlightFactory::new(db)
        .departure_time(base + Duration::days(1))
        .arrival_time(base + Duration::days(1) + Duration::hours(1))
        .build()
        .await?;
    let captain = factory::create_crew_member(db).await?;
    factory::flight::assign_crew(db, early.id, captain.id, "CAPTAIN").await?;

    let ordering = vec![OrderingField {
        field: "departure_time".to_string(),
        descending: true,
    }];
    let flights = FlightRepository::new(db)
        .get_all(&FlightFilter::default(), &ordering)
        .await?;

    assert_eq!(flights[0].id, late.id);
    assert_eq!(flights[1].id, early.id);
    assert!(flights[0].crew.is_empty());
    assert_eq!(
        flights[1].crew,
        vec![CrewAssignment {
            crew_member_id: captain.id,
            role: CrewRole::Captain,
        }]
    );

    Ok(())
}

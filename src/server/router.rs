use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        airplane, airplane_type, airport, city, country, crew_member, flight, order, route, user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Airport API", description = "Flight catalog and ticket booking"),
    tags(
        (name = "country", description = "Countries"),
        (name = "city", description = "Cities and their time zones"),
        (name = "airport", description = "Airports"),
        (name = "airplane_type", description = "Airplane types"),
        (name = "airplane", description = "Airplanes and seat layout"),
        (name = "crew_member", description = "Crew members"),
        (name = "route", description = "Routes between airports"),
        (name = "flight", description = "Scheduled flights and crew roster"),
        (name = "order", description = "Ticket orders"),
        (name = "user", description = "Registration, profile and tokens"),
    )
)]
struct ApiDoc;

/// Builds the API router with every endpoint and the Swagger UI mounted.
///
/// The OpenAPI document is served at `/api/openapi.json` and browsable at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .with_state(state)
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(country::list_countries, country::create_country))
        .routes(routes!(
            country::get_country,
            country::update_country,
            country::patch_country,
            country::delete_country
        ))
        .routes(routes!(city::list_cities, city::create_city))
        .routes(routes!(
            city::get_city,
            city::update_city,
            city::patch_city,
            city::delete_city
        ))
        .routes(routes!(airport::list_airports, airport::create_airport))
        .routes(routes!(
            airport::get_airport,
            airport::update_airport,
            airport::patch_airport,
            airport::delete_airport
        ))
        .routes(routes!(
            airplane_type::list_airplane_types,
            airplane_type::create_airplane_type
        ))
        .routes(routes!(
            airplane_type::get_airplane_type,
            airplane_type::update_airplane_type,
            airplane_type::patch_airplane_type,
            airplane_type::delete_airplane_type
        ))
        .routes(routes!(airplane::list_airplanes, airplane::create_airplane))
        .routes(routes!(
            airplane::get_airplane,
            airplane::update_airplane,
            airplane::patch_airplane,
            airplane::delete_airplane
        ))
        .routes(routes!(
            crew_member::list_crew_members,
            crew_member::create_crew_member
        ))
        .routes(routes!(
            crew_member::get_crew_member,
            crew_member::update_crew_member,
            crew_member::patch_crew_member,
            crew_member::delete_crew_member
        ))
        .routes(routes!(route::list_routes, route::create_route))
        .routes(routes!(
            route::get_route,
            route::update_route,
            route::patch_route,
            route::delete_route
        ))
        .routes(routes!(flight::list_flights, flight::create_flight))
        .routes(routes!(
            flight::get_flight,
            flight::update_flight,
            flight::patch_flight,
            flight::delete_flight
        ))
        .routes(routes!(order::list_orders, order::create_order))
        .routes(routes!(order::get_order, order::delete_order))
        .routes(routes!(user::register))
        .routes(routes!(
            user::get_me,
            user::update_me,
            user::patch_me,
            user::delete_me
        ))
        .routes(routes!(user::obtain_token))
        .routes(routes!(user::refresh_token))
        .routes(routes!(user::revoke_token))
}

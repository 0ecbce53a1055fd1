//! Booking endpoints.
//!
//! Orders are always scoped to the requesting user, staff included: listing shows only
//! the caller's orders and another user's order is reported as not found.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDetailDto, OrderDto, OrderListDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{self, AuthGuard, Principal},
            extract::Payload,
            policy::{Action, OrderAccess},
        },
        model::order::CreateOrderParams,
        service::order::OrderService,
        state::AppState,
        util::query::parse_ordering,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

const ORDERING_FIELDS: &[&str] = &["created_at", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderQuery {
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// Id of the authenticated user the policy allowed, or 401 for anonymous requests.
fn caller_id(principal: &Principal) -> Result<i32, AuthError> {
    principal
        .user()
        .map(|user| user.id)
        .ok_or(AuthError::CredentialsMissing)
}

/// List the caller's orders.
///
/// # Access Control
/// - Any authenticated user; only their own orders are returned
///
/// # Returns
/// - `200 OK` - The caller's orders with a flight summary on every ticket
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/airport/orders",
    tag = ORDER_TAG,
    params(OrderQuery),
    responses(
        (status = 200, description = "The caller's orders", body = Vec<OrderListDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<OrderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&OrderAccess, Action::Read, None)
        .await?;
    let user_id = caller_id(&principal)?;

    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);
    let orders = OrderService::new(&state.db)
        .get_all(user_id, ordering)
        .await?;

    let dtos: Vec<OrderListDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Book an order of tickets for the caller.
///
/// The whole batch is validated before anything is written, and every ticket error is
/// reported in one response under `tickets[i].row`, `tickets[i].seat` or
/// `tickets[i].non_field_errors`. The order and its tickets are created atomically.
///
/// # Access Control
/// - Any authenticated user; the order is owned by the caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Ticket specs of `row`, `seat` and `flight`
///
/// # Returns
/// - `201 Created` - The order with its tickets
/// - `400 Bad Request` - Empty batch, seat outside the airplane layout, seat already
///   booked, or a seat requested twice
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - A ticket references an unknown flight
#[utoipa::path(
    post,
    path = "/api/airport/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order booked", body = OrderDto),
        (status = 400, description = "Ticket validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&OrderAccess, Action::Create, None)
        .await?;
    let user_id = caller_id(&principal)?;

    let params = CreateOrderParams::from_dto(user_id, payload);
    let order = OrderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get one of the caller's orders.
///
/// # Returns
/// - `200 OK` - The order with full flight details on every ticket
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No such order, or it belongs to someone else
#[utoipa::path(
    get,
    path = "/api/airport/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = OrderDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&OrderAccess, Action::Read, None)
        .await?;
    let user_id = caller_id(&principal)?;

    let order = OrderService::new(&state.db).get_owned(user_id, id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete one of the caller's orders and its tickets.
///
/// # Access Control
/// - The owner may delete the order
/// - Staff pass the policy but still only see their own orders, so another user's
///   order is not found
/// - Other authenticated users are forbidden
///
/// # Returns
/// - `204 No Content` - Order deleted
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - Caller neither owns the order nor is staff
/// - `404 Not Found` - No such order, or staff caller does not own it
#[utoipa::path(
    delete,
    path = "/api/airport/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Caller may not delete this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &state.jwt, &headers)
        .principal()
        .await?;
    let user_id = caller_id(&principal)?;

    let service = OrderService::new(&state.db);
    let order = service.find(id).await?;
    auth::check(&principal, &OrderAccess, Action::Delete, Some(order.user_id))?;

    service.delete_owned(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

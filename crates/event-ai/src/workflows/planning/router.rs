use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::VendorRepository;
use super::domain::{EventRequirements, PlanId};
use super::service::{EventPlanningService, PlanningServiceError};
use super::store::{BookingNotifier, PlanStore, StoreError};

/// Router builder exposing HTTP endpoints for planning, status, approval,
/// and vendor search.
pub fn planning_router<R, P, N>(service: Arc<EventPlanningService<R, P, N>>) -> Router
where
    R: VendorRepository + 'static,
    P: PlanStore + 'static,
    N: BookingNotifier + 'static,
{
    Router::new()
        .route("/api/v1/events/plans", post(plan_handler::<R, P, N>))
        .route(
            "/api/v1/events/plans/:plan_id",
            get(plan_status_handler::<R, P, N>),
        )
        .route(
            "/api/v1/events/plans/:plan_id/approval",
            post(approval_handler::<R, P, N>),
        )
        .route(
            "/api/v1/vendors/search",
            post(vendor_search_handler::<R, P, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub approve: bool,
}

pub(crate) async fn plan_handler<R, P, N>(
    State(service): State<Arc<EventPlanningService<R, P, N>>>,
    axum::Json(requirements): axum::Json<EventRequirements>,
) -> Response
where
    R: VendorRepository + 'static,
    P: PlanStore + 'static,
    N: BookingNotifier + 'static,
{
    match service.plan(requirements) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn plan_status_handler<R, P, N>(
    State(service): State<Arc<EventPlanningService<R, P, N>>>,
    Path(plan_id): Path<String>,
) -> Response
where
    R: VendorRepository + 'static,
    P: PlanStore + 'static,
    N: BookingNotifier + 'static,
{
    let id = PlanId(plan_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn approval_handler<R, P, N>(
    State(service): State<Arc<EventPlanningService<R, P, N>>>,
    Path(plan_id): Path<String>,
    axum::Json(request): axum::Json<ApprovalRequest>,
) -> Response
where
    R: VendorRepository + 'static,
    P: PlanStore + 'static,
    N: BookingNotifier + 'static,
{
    let id = PlanId(plan_id);
    match service.decide(&id, request.approve) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn vendor_search_handler<R, P, N>(
    State(service): State<Arc<EventPlanningService<R, P, N>>>,
    axum::Json(requirements): axum::Json<EventRequirements>,
) -> Response
where
    R: VendorRepository + 'static,
    P: PlanStore + 'static,
    N: BookingNotifier + 'static,
{
    match service.search_vendors(requirements) {
        Ok(matches) => (StatusCode::OK, axum::Json(matches)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PlanningServiceError) -> Response {
    let status = match &error {
        PlanningServiceError::Requirements(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PlanningServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        PlanningServiceError::Store(StoreError::Conflict)
        | PlanningServiceError::AlreadyDecided(_) => StatusCode::CONFLICT,
        PlanningServiceError::Store(StoreError::Unavailable(_))
        | PlanningServiceError::Booking(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

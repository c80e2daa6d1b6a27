use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::planning::router::{approval_handler, plan_handler, ApprovalRequest};

#[tokio::test]
async fn plan_handler_accepts_valid_requirements() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = plan_handler::<MemoryVendorRepository, MemoryPlanStore, MemoryBookings>(
        State(service),
        axum::Json(requirements()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload.get("plan_id").is_some());
    assert_eq!(payload.get("status"), Some(&Value::from("pending_approval")));
}

#[tokio::test]
async fn plan_handler_rejects_invalid_requirements() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    let mut reqs = requirements();
    reqs.attendees = 0;

    let response = plan_handler::<MemoryVendorRepository, MemoryPlanStore, MemoryBookings>(
        State(service),
        axum::Json(reqs),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("attendees"));
}

#[tokio::test]
async fn approval_handler_returns_not_found_for_unknown_plan() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = approval_handler::<MemoryVendorRepository, MemoryPlanStore, MemoryBookings>(
        State(service),
        Path("plan-does-not-exist".to_string()),
        axum::Json(ApprovalRequest { approve: true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn approval_handler_conflicts_on_second_decision() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    let record = service.plan(requirements()).expect("plan drafts");

    let first = approval_handler::<MemoryVendorRepository, MemoryPlanStore, MemoryBookings>(
        State(service.clone()),
        Path(record.plan_id.0.clone()),
        axum::Json(ApprovalRequest { approve: true }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = approval_handler::<MemoryVendorRepository, MemoryPlanStore, MemoryBookings>(
        State(service),
        Path(record.plan_id.0.clone()),
        axum::Json(ApprovalRequest { approve: false }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn plan_route_accepts_payloads() {
    let (service, _, _) = build_service();
    let router = planning_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/events/plans")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&requirements()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("plan")
        .and_then(|plan| plan.get("selected_vendors"))
        .and_then(Value::as_array)
        .is_some());
}

#[tokio::test]
async fn status_route_round_trips_created_plans() {
    let (service, _, _) = build_service();
    let record = service.plan(requirements()).expect("plan drafts");
    let router = planning_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get(format!("/api/v1/events/plans/{}", record.plan_id.0))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("plan_id").and_then(Value::as_str),
        Some(record.plan_id.0.as_str())
    );
}

#[tokio::test]
async fn vendor_search_route_returns_ranked_matches() {
    let (service, _, _) = build_service();
    let router = planning_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/vendors/search")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&requirements()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let matches = payload.as_array().expect("array payload");
    assert!(!matches.is_empty());
    assert!(matches[0].get("score").is_some());
}

//! Integration specifications for the event planning and approval workflow.
//!
//! Scenarios run end-to-end through the public service facade and HTTP router
//! so discovery, allocation, scheduling, and the approval gate are validated
//! without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use event_ai::workflows::planning::{
        sample_vendors, BookingNotifier, BookingRequest, CatalogError, CategoryPolicy,
        DiscoveryConfig, EventPlanningService, EventRequirements, NotifyError, PlanId, PlanRecord,
        PlanStore, StoreError, VendorProfile, VendorRepository,
    };

    pub(super) fn requirements() -> EventRequirements {
        EventRequirements {
            event_type: "wedding".to_string(),
            attendees: 200,
            date: NaiveDate::from_ymd_opt(2027, 3, 15).expect("valid date"),
            budget: 500_000.0,
            location: Some("Lahore".to_string()),
            preferences: vec!["traditional".to_string(), "mehndi".to_string()],
        }
    }

    pub(super) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date")
    }

    #[derive(Clone)]
    pub(super) struct StaticVendors {
        vendors: Vec<VendorProfile>,
    }

    impl StaticVendors {
        pub(super) fn samples() -> Self {
            Self {
                vendors: sample_vendors(),
            }
        }
    }

    impl VendorRepository for StaticVendors {
        fn search(
            &self,
            _requirements: &EventRequirements,
            limit: usize,
        ) -> Result<Vec<VendorProfile>, CatalogError> {
            Ok(self.vendors.iter().take(limit).cloned().collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryPlans {
        records: Arc<Mutex<HashMap<PlanId, PlanRecord>>>,
    }

    impl PlanStore for MemoryPlans {
        fn insert(&self, record: PlanRecord) -> Result<PlanRecord, StoreError> {
            let mut guard = self.records.lock().expect("plan mutex poisoned");
            if guard.contains_key(&record.plan_id) {
                return Err(StoreError::Conflict);
            }
            guard.insert(record.plan_id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: PlanRecord) -> Result<(), StoreError> {
            let mut guard = self.records.lock().expect("plan mutex poisoned");
            guard.insert(record.plan_id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, StoreError> {
            let guard = self.records.lock().expect("plan mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        fn pending(&self, _limit: usize) -> Result<Vec<PlanRecord>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryBookings {
        events: Arc<Mutex<Vec<BookingRequest>>>,
    }

    impl MemoryBookings {
        pub(super) fn events(&self) -> Vec<BookingRequest> {
            self.events.lock().expect("booking mutex poisoned").clone()
        }
    }

    impl BookingNotifier for MemoryBookings {
        fn publish(&self, booking: BookingRequest) -> Result<(), NotifyError> {
            self.events
                .lock()
                .expect("booking mutex poisoned")
                .push(booking);
            Ok(())
        }
    }

    pub(super) fn build_service() -> (
        EventPlanningService<StaticVendors, MemoryPlans, MemoryBookings>,
        Arc<MemoryBookings>,
    ) {
        let bookings = Arc::new(MemoryBookings::default());
        let service = EventPlanningService::new(
            Arc::new(StaticVendors::samples()),
            Arc::new(MemoryPlans::default()),
            bookings.clone(),
            DiscoveryConfig::default(),
            CategoryPolicy::standard(),
        );
        (service, bookings)
    }
}

use common::*;
use event_ai::workflows::planning::{planning_router, PlanStatus};
use std::sync::Arc;
use tower::ServiceExt;

#[test]
fn wedding_plan_books_core_categories_within_budget() {
    let (service, bookings) = build_service();

    let record = service
        .plan_as_of(requirements(), today())
        .expect("plan drafts");

    assert!(record.plan.total_cost <= 500_000.0);
    assert!(record.plan.selected_vendors.len() >= 2);
    assert!(record.constraints.valid);
    assert_eq!(record.status, PlanStatus::PendingApproval);

    let approved = service
        .decide(&record.plan_id, true)
        .expect("approval succeeds");

    assert_eq!(approved.status, PlanStatus::Approved);
    assert_eq!(
        bookings.events().len(),
        record.plan.selected_vendors.len(),
        "one booking request per selection"
    );
}

#[test]
fn tiny_budget_produces_an_empty_but_valid_plan() {
    let (service, bookings) = build_service();
    let mut reqs = requirements();
    reqs.budget = 10_000.0;

    let record = service.plan_as_of(reqs, today()).expect("plan drafts");

    assert!(record.plan.selected_vendors.is_empty());
    assert_eq!(record.plan.total_cost, 0.0);

    let approved = service
        .decide(&record.plan_id, true)
        .expect("empty plans can still be approved");
    assert_eq!(approved.status, PlanStatus::Approved);
    assert!(bookings.events().is_empty());
}

#[tokio::test]
async fn plan_and_approve_over_http() {
    let (service, bookings) = build_service();
    let service = Arc::new(service);
    let router = planning_router(service.clone());

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/events/plans")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&requirements()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("plan route executes");
    assert_eq!(response.status(), axum::http::StatusCode::ACCEPTED);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let plan_id = payload
        .get("plan_id")
        .and_then(serde_json::Value::as_str)
        .expect("plan id present")
        .to_string();

    let approval = router
        .oneshot(
            axum::http::Request::post(format!("/api/v1/events/plans/{plan_id}/approval"))
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"approve":true}"#))
                .unwrap(),
        )
        .await
        .expect("approval route executes");

    assert_eq!(approval.status(), axum::http::StatusCode::OK);
    assert!(!bookings.events().is_empty());
}

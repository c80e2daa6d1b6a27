use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::planning::allocation::CategoryPolicy;
use crate::workflows::planning::catalog::{sample_vendors, CatalogError, VendorRepository};
use crate::workflows::planning::discovery::DiscoveryConfig;
use crate::workflows::planning::domain::{
    EventRequirements, PlanId, ServiceId, ServiceOffering, VendorId, VendorProfile,
};
use crate::workflows::planning::router::planning_router;
use crate::workflows::planning::service::EventPlanningService;
use crate::workflows::planning::store::{
    BookingNotifier, BookingRequest, NotifyError, PlanRecord, PlanStore, StoreError,
};

pub(super) fn requirements() -> EventRequirements {
    EventRequirements {
        event_type: "wedding".to_string(),
        attendees: 200,
        date: date(2027, 3, 15),
        budget: 500_000.0,
        location: Some("Lahore".to_string()),
        preferences: vec!["traditional".to_string(), "mehndi".to_string()],
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2026, 8, 1)
}

pub(super) fn vendor(
    id: &str,
    category: &str,
    rating: f64,
    price_min: f64,
    price_max: f64,
    services: Vec<(&str, f64)>,
) -> VendorProfile {
    VendorProfile {
        vendor_id: VendorId(id.to_string()),
        business_name: format!("{id} business"),
        category: category.to_string(),
        description: format!("{category} services"),
        service_areas: vec!["Lahore".to_string()],
        price_min,
        price_max,
        rating,
        total_reviews: 10,
        available: true,
        keywords: vec![category.to_string()],
        services: services
            .into_iter()
            .map(|(service_id, price)| ServiceOffering {
                service_id: ServiceId(service_id.to_string()),
                name: service_id.to_string(),
                price,
            })
            .collect(),
    }
}

pub(super) type TestService =
    EventPlanningService<MemoryVendorRepository, MemoryPlanStore, MemoryBookings>;

pub(super) fn build_service() -> (TestService, Arc<MemoryPlanStore>, Arc<MemoryBookings>) {
    build_service_with_vendors(sample_vendors())
}

pub(super) fn build_service_with_vendors(
    vendors: Vec<VendorProfile>,
) -> (TestService, Arc<MemoryPlanStore>, Arc<MemoryBookings>) {
    let store = Arc::new(MemoryPlanStore::default());
    let bookings = Arc::new(MemoryBookings::default());
    let service = EventPlanningService::new(
        Arc::new(MemoryVendorRepository::new(vendors)),
        store.clone(),
        bookings.clone(),
        DiscoveryConfig::default(),
        CategoryPolicy::standard(),
    );
    (service, store, bookings)
}

#[derive(Default, Clone)]
pub(super) struct MemoryVendorRepository {
    vendors: Vec<VendorProfile>,
}

impl MemoryVendorRepository {
    pub(super) fn new(vendors: Vec<VendorProfile>) -> Self {
        Self { vendors }
    }
}

impl VendorRepository for MemoryVendorRepository {
    fn search(
        &self,
        _requirements: &EventRequirements,
        limit: usize,
    ) -> Result<Vec<VendorProfile>, CatalogError> {
        Ok(self.vendors.iter().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableVendorRepository;

impl VendorRepository for UnavailableVendorRepository {
    fn search(
        &self,
        _requirements: &EventRequirements,
        _limit: usize,
    ) -> Result<Vec<VendorProfile>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryPlanStore {
    pub(super) records: Arc<Mutex<HashMap<PlanId, PlanRecord>>>,
}

impl PlanStore for MemoryPlanStore {
    fn insert(&self, record: PlanRecord) -> Result<PlanRecord, StoreError> {
        let mut guard = self.records.lock().expect("plan store mutex poisoned");
        if guard.contains_key(&record.plan_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.plan_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: PlanRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("plan store mutex poisoned");
        guard.insert(record.plan_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, StoreError> {
        let guard = self.records.lock().expect("plan store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<PlanRecord>, StoreError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailablePlanStore;

impl PlanStore for UnavailablePlanStore {
    fn insert(&self, _record: PlanRecord) -> Result<PlanRecord, StoreError> {
        Err(StoreError::Unavailable("plan store offline".to_string()))
    }

    fn update(&self, _record: PlanRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("plan store offline".to_string()))
    }

    fn fetch(&self, _id: &PlanId) -> Result<Option<PlanRecord>, StoreError> {
        Err(StoreError::Unavailable("plan store offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<PlanRecord>, StoreError> {
        Err(StoreError::Unavailable("plan store offline".to_string()))
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

pub(super) fn planning_router_with_service(service: TestService) -> axum::Router {
    planning_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

use event_ai::config::PlannerConfig;
use event_ai::error::AppError;
use event_ai::workflows::planning::catalog::csv::import_vendors;
use event_ai::workflows::planning::{
    is_eligible, sample_vendors, BookingNotifier, BookingRequest, CatalogError, DiscoveryConfig,
    EventRequirements, NotifyError, PlanId, PlanRecord, PlanStatus, PlanStore, StoreError,
    VendorProfile, VendorRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog adapter over an in-memory vendor list, hydrated from the sample
/// set or a CSV export.
#[derive(Clone)]
pub(crate) struct InMemoryVendorRepository {
    vendors: Vec<VendorProfile>,
}

impl InMemoryVendorRepository {
    pub(crate) fn new(vendors: Vec<VendorProfile>) -> Self {
        Self { vendors }
    }

    pub(crate) fn from_samples() -> Self {
        Self::new(sample_vendors())
    }

    pub(crate) fn from_csv_path(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)?;
        let vendors = import_vendors(file)?;
        info!(count = vendors.len(), path = %path.display(), "vendor catalog imported");
        Ok(Self::new(vendors))
    }

    pub(crate) fn len(&self) -> usize {
        self.vendors.len()
    }
}

impl VendorRepository for InMemoryVendorRepository {
    fn search(
        &self,
        requirements: &EventRequirements,
        limit: usize,
    ) -> Result<Vec<VendorProfile>, CatalogError> {
        // Cheap store-side pre-filter, the way a backing database narrows by
        // location and budget before scoring happens downstream.
        Ok(self
            .vendors
            .iter()
            .filter(|vendor| is_eligible(vendor, requirements))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPlanStore {
    records: Arc<Mutex<HashMap<PlanId, PlanRecord>>>,
}

impl PlanStore for InMemoryPlanStore {
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
        if guard.contains_key(&record.plan_id) {
            guard.insert(record.plan_id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, StoreError> {
        let guard = self.records.lock().expect("plan store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<PlanRecord>, StoreError> {
        let guard = self.records.lock().expect("plan store mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == PlanStatus::PendingApproval)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryBookingNotifier {
    events: Arc<Mutex<Vec<BookingRequest>>>,
}

impl BookingNotifier for InMemoryBookingNotifier {
    fn publish(&self, booking: BookingRequest) -> Result<(), NotifyError> {
        info!(
            plan_id = %booking.plan_id.0,
            vendor_id = %booking.vendor_id.0,
            cost = booking.cost,
            "booking request queued"
        );
        let mut guard = self.events.lock().expect("booking mutex poisoned");
        guard.push(booking);
        Ok(())
    }
}

impl InMemoryBookingNotifier {
    pub(crate) fn events(&self) -> Vec<BookingRequest> {
        self.events.lock().expect("booking mutex poisoned").clone()
    }
}

pub(crate) fn discovery_config(planner: &PlannerConfig) -> DiscoveryConfig {
    DiscoveryConfig {
        search_limit: planner.search_limit,
        ..DiscoveryConfig::default()
    }
}

pub(crate) fn vendor_repository(planner: &PlannerConfig) -> Result<InMemoryVendorRepository, AppError> {
    match planner.catalog_csv.as_deref() {
        Some(path) => InMemoryVendorRepository::from_csv_path(path),
        None => Ok(InMemoryVendorRepository::from_samples()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

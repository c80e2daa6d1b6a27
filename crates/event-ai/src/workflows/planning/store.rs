use serde::{Deserialize, Serialize};

use super::constraints::ConstraintReport;
use super::domain::{EventPlan, PlanId, PlanStatus, ServiceId, VendorId};

/// Stored record containing the plan, its approval status, and the
/// constraint report produced at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub plan_id: PlanId,
    pub plan: EventPlan,
    pub status: PlanStatus,
    pub constraints: ConstraintReport,
}

impl PlanRecord {
    pub fn summary(&self) -> String {
        format!(
            "{} vendor(s) selected, PKR {:.0} total",
            self.plan.selected_vendors.len(),
            self.plan.total_cost
        )
    }

    pub fn status_view(&self) -> PlanStatusView {
        PlanStatusView {
            plan_id: self.plan_id.clone(),
            status: self.status.label(),
            total_cost: self.plan.total_cost,
            vendors_selected: self.plan.selected_vendors.len(),
            within_constraints: self.constraints.valid,
            summary: self.summary(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait PlanStore: Send + Sync {
    fn insert(&self, record: PlanRecord) -> Result<PlanRecord, StoreError>;
    fn update(&self, record: PlanRecord) -> Result<(), StoreError>;
    fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, StoreError>;
    fn pending(&self, limit: usize) -> Result<Vec<PlanRecord>, StoreError>;
}

/// Error enumeration for plan store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("plan already exists")]
    Conflict,
    #[error("plan not found")]
    NotFound,
    #[error("plan store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound port carrying booking requests to vendor channels once a plan
/// is approved.
pub trait BookingNotifier: Send + Sync {
    fn publish(&self, booking: BookingRequest) -> Result<(), NotifyError>;
}

/// Booking payload for one selected vendor service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub plan_id: PlanId,
    pub vendor_id: VendorId,
    pub service_id: ServiceId,
    pub cost: f64,
}

/// Booking dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("booking transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a plan's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct PlanStatusView {
    pub plan_id: PlanId,
    pub status: &'static str,
    pub total_cost: f64,
    pub vendors_selected: usize,
    pub within_constraints: bool,
    pub summary: String,
}

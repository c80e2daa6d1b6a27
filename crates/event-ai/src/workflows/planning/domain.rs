use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for created event plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub String);

/// Identifier wrapper for vendors in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(pub String);

/// Identifier wrapper for a vendor's priced service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

/// Structured event requirements produced by the upstream intake step.
///
/// Immutable for the duration of a planning run; the plan keeps its own
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequirements {
    pub event_type: String,
    pub attendees: u32,
    pub date: NaiveDate,
    pub budget: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl EventRequirements {
    /// A zero budget means the caller did not state one; scoring and
    /// filtering give budget checks half credit / a pass in that case.
    pub fn has_budget(&self) -> bool {
        self.budget > 0.0
    }
}

/// A single priced service offered by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub service_id: ServiceId,
    pub name: String,
    pub price: f64,
}

/// Catalog snapshot of a vendor, unified from whatever the backing store
/// returns before any filtering or scoring happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub vendor_id: VendorId,
    pub business_name: String,
    pub category: String,
    pub description: String,
    pub service_areas: Vec<String>,
    pub price_min: f64,
    pub price_max: f64,
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    pub available: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
}

impl VendorProfile {
    pub fn average_price(&self) -> f64 {
        (self.price_min + self.price_max) / 2.0
    }

    /// Case-insensitive service-area check; "all" is a wildcard area.
    pub fn serves_location(&self, location: &str) -> bool {
        self.service_areas.iter().any(|area| {
            area.eq_ignore_ascii_case(location) || area.eq_ignore_ascii_case("all")
        })
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// Output record for one selected (vendor, service) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSelection {
    pub vendor_id: VendorId,
    pub service_id: ServiceId,
    pub cost: f64,
    pub reason: String,
}

/// Aggregate plan handed to approval and booking steps.
///
/// Owns its requirements snapshot and selections; `total_cost` is fixed at
/// creation and must track any later selection edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPlan {
    pub requirements: EventRequirements,
    pub selected_vendors: Vec<VendorSelection>,
    pub total_cost: f64,
    pub schedule: Vec<String>,
}

impl EventPlan {
    pub fn new(
        requirements: EventRequirements,
        selected_vendors: Vec<VendorSelection>,
        schedule: Vec<String>,
    ) -> Self {
        let total_cost = selected_vendors.iter().map(|selection| selection.cost).sum();
        Self {
            requirements,
            selected_vendors,
            total_cost,
            schedule,
        }
    }
}

/// Lifecycle of a plan between creation and booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    PendingApproval,
    Approved,
    Rejected,
}

impl PlanStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PlanStatus::PendingApproval => "pending_approval",
            PlanStatus::Approved => "approved",
            PlanStatus::Rejected => "rejected",
        }
    }
}

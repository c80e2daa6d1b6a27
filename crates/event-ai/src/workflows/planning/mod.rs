//! Event planning workflow: vendor discovery, budget-constrained allocation,
//! schedule assembly, and the human approval gate in front of booking.

pub mod allocation;
pub mod catalog;
pub mod constraints;
pub mod discovery;
pub mod domain;
pub mod intake;
pub mod router;
pub mod schedule;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use allocation::{BudgetAllocator, CategoryPolicy, CategoryRule};
pub use catalog::{sample_vendors, CatalogError, VendorRepository};
pub use constraints::{check_constraints, BudgetBreakdown, ConstraintReport};
pub use discovery::{
    derive_keywords, is_eligible, DiscoveryConfig, DiscoveryEngine, MatchFactor, ScoreComponent,
    ScoreWeights, VendorMatch,
};
pub use domain::{
    EventPlan, EventRequirements, PlanId, PlanStatus, ServiceId, ServiceOffering, VendorId,
    VendorProfile, VendorSelection,
};
pub use intake::RequirementsViolation;
pub use router::planning_router;
pub use schedule::{timing_advice, ScheduleBlueprint, ScheduleItem, TimingAdvice};
pub use service::{EventPlanningService, PlanningServiceError};
pub use store::{
    BookingNotifier, BookingRequest, NotifyError, PlanRecord, PlanStatusView, PlanStore,
    StoreError,
};

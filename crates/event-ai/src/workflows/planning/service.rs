use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::allocation::{BudgetAllocator, CategoryPolicy};
use super::catalog::{sample_vendors, VendorRepository};
use super::constraints::check_constraints;
use super::discovery::{DiscoveryConfig, DiscoveryEngine, VendorMatch};
use super::domain::{EventPlan, EventRequirements, PlanId, PlanStatus, VendorProfile};
use super::intake::{sanitize_requirements, RequirementsViolation};
use super::schedule::{ScheduleBlueprint, ScheduleItem};
use super::store::{BookingNotifier, BookingRequest, NotifyError, PlanRecord, PlanStore, StoreError};

/// Service composing the vendor catalog, discovery engine, allocator, and
/// schedule blueprint behind one planning facade.
pub struct EventPlanningService<R, P, N> {
    vendors: Arc<R>,
    plans: Arc<P>,
    bookings: Arc<N>,
    discovery: DiscoveryEngine,
    allocator: BudgetAllocator,
}

static PLAN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_plan_id() -> PlanId {
    let id = PLAN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PlanId(format!("plan-{id:06}"))
}

impl<R, P, N> EventPlanningService<R, P, N>
where
    R: VendorRepository + 'static,
    P: PlanStore + 'static,
    N: BookingNotifier + 'static,
{
    pub fn new(
        vendors: Arc<R>,
        plans: Arc<P>,
        bookings: Arc<N>,
        discovery_config: DiscoveryConfig,
        category_policy: CategoryPolicy,
    ) -> Self {
        Self {
            vendors,
            plans,
            bookings,
            discovery: DiscoveryEngine::new(discovery_config),
            allocator: BudgetAllocator::new(category_policy),
        }
    }

    /// Draft a plan for the given requirements and persist it pending
    /// approval.
    pub fn plan(
        &self,
        requirements: EventRequirements,
    ) -> Result<PlanRecord, PlanningServiceError> {
        self.plan_as_of(requirements, Local::now().date_naive())
    }

    /// Same as [`plan`](Self::plan) with an explicit reporting date, so
    /// constraint checks stay reproducible.
    pub fn plan_as_of(
        &self,
        requirements: EventRequirements,
        today: NaiveDate,
    ) -> Result<PlanRecord, PlanningServiceError> {
        let requirements = sanitize_requirements(requirements)?;
        info!(
            event_type = %requirements.event_type,
            attendees = requirements.attendees,
            budget = requirements.budget,
            "planning event"
        );

        let pool = self.vendor_pool(&requirements);
        let matches = self.discovery.search(&requirements, &pool);

        // Allocation iterates the ranked pool so tie-breaks follow match
        // order, not raw catalog order.
        let ranked: Vec<VendorProfile> = matches
            .iter()
            .filter_map(|vendor_match| {
                pool.iter()
                    .find(|vendor| vendor.vendor_id == vendor_match.vendor_id)
                    .cloned()
            })
            .collect();

        let selections = self.allocator.allocate(&requirements, &ranked);

        let blueprint =
            ScheduleBlueprint::for_event(&requirements.event_type, requirements.attendees);
        let items = blueprint.instantiate(blueprint.default_start(), &selections, &ranked);
        let schedule: Vec<String> = items.iter().map(ScheduleItem::display_line).collect();

        let costs: Vec<f64> = selections.iter().map(|selection| selection.cost).collect();
        let constraints =
            check_constraints(&requirements, blueprint.duration_hours(), &costs, today);

        let plan = EventPlan::new(requirements, selections, schedule);
        let record = PlanRecord {
            plan_id: next_plan_id(),
            plan,
            status: PlanStatus::PendingApproval,
            constraints,
        };

        let stored = self.plans.insert(record)?;
        info!(plan_id = %stored.plan_id.0, summary = %stored.summary(), "plan drafted");
        Ok(stored)
    }

    /// Run discovery only, returning the ranked matches for the caller.
    pub fn search_vendors(
        &self,
        requirements: EventRequirements,
    ) -> Result<Vec<VendorMatch>, PlanningServiceError> {
        let requirements = sanitize_requirements(requirements)?;
        let pool = self.vendor_pool(&requirements);
        Ok(self.discovery.search(&requirements, &pool))
    }

    /// Fetch a plan record for API responses.
    pub fn get(&self, plan_id: &PlanId) -> Result<PlanRecord, PlanningServiceError> {
        let record = self.plans.fetch(plan_id)?.ok_or(StoreError::NotFound)?;
        Ok(record)
    }

    /// Apply the human approval decision; approving publishes a booking
    /// request per selected vendor.
    pub fn decide(
        &self,
        plan_id: &PlanId,
        approve: bool,
    ) -> Result<PlanRecord, PlanningServiceError> {
        let mut record = self.plans.fetch(plan_id)?.ok_or(StoreError::NotFound)?;

        if record.status != PlanStatus::PendingApproval {
            return Err(PlanningServiceError::AlreadyDecided(record.status));
        }

        record.status = if approve {
            PlanStatus::Approved
        } else {
            PlanStatus::Rejected
        };
        self.plans.update(record.clone())?;

        if approve {
            for selection in &record.plan.selected_vendors {
                self.bookings.publish(BookingRequest {
                    plan_id: record.plan_id.clone(),
                    vendor_id: selection.vendor_id.clone(),
                    service_id: selection.service_id.clone(),
                    cost: selection.cost,
                })?;
            }
            info!(plan_id = %record.plan_id.0, "plan approved, bookings dispatched");
        } else {
            info!(plan_id = %record.plan_id.0, "plan rejected");
        }

        Ok(record)
    }

    /// Catalog retrieval failures and empty results both fall back to the
    /// built-in sample set; planning itself never sees a catalog error.
    fn vendor_pool(&self, requirements: &EventRequirements) -> Vec<VendorProfile> {
        let limit = self.discovery.search_limit() * 2;
        match self.vendors.search(requirements, limit) {
            Ok(vendors) if !vendors.is_empty() => vendors,
            Ok(_) => {
                debug!("vendor catalog returned no candidates, using sample set");
                sample_vendors()
            }
            Err(error) => {
                warn!(%error, "vendor catalog unavailable, using sample set");
                sample_vendors()
            }
        }
    }
}

/// Error raised by the planning service.
#[derive(Debug, thiserror::Error)]
pub enum PlanningServiceError {
    #[error(transparent)]
    Requirements(#[from] RequirementsViolation),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Booking(#[from] NotifyError),
    #[error("plan is already {}", .0.label())]
    AlreadyDecided(PlanStatus),
}

use crate::infra::{InMemoryBookingNotifier, InMemoryPlanStore, InMemoryVendorRepository};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use event_ai::error::AppError;
use event_ai::workflows::planning::{
    timing_advice, BudgetBreakdown, CategoryPolicy, DiscoveryConfig, EventPlanningService,
    EventRequirements, PlanRecord, VendorMatch,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Event type (wedding, birthday, corporate, mehndi, ...)
    #[arg(long, default_value = "wedding")]
    pub(crate) event_type: String,
    /// Expected number of attendees
    #[arg(long, default_value_t = 200)]
    pub(crate) attendees: u32,
    /// Event date (YYYY-MM-DD). Defaults to 90 days from today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Total budget in PKR
    #[arg(long, default_value_t = 500_000.0)]
    pub(crate) budget: f64,
    /// City where the event will be held
    #[arg(long, default_value = "Lahore")]
    pub(crate) location: String,
    /// Comma-separated preference list
    #[arg(long, default_value = "traditional,mehndi")]
    pub(crate) preferences: String,
    /// Optional vendor catalog CSV export; defaults to the sample set.
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Approve the drafted plan and show the resulting booking requests.
    #[arg(long)]
    pub(crate) approve: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VendorSearchArgs {
    /// Event type to match against
    #[arg(long)]
    pub(crate) event_type: String,
    /// Expected number of attendees
    #[arg(long, default_value_t = 100)]
    pub(crate) attendees: u32,
    /// Event date (YYYY-MM-DD). Defaults to 30 days from today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Budget in PKR; zero means no stated budget
    #[arg(long, default_value_t = 0.0)]
    pub(crate) budget: f64,
    /// City filter
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Comma-separated preference list
    #[arg(long)]
    pub(crate) preferences: Option<String>,
    /// Optional vendor catalog CSV export; defaults to the sample set.
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

type DemoService =
    EventPlanningService<InMemoryVendorRepository, InMemoryPlanStore, InMemoryBookingNotifier>;

fn build_service(
    catalog_csv: Option<&PathBuf>,
) -> Result<(DemoService, Arc<InMemoryBookingNotifier>), AppError> {
    let vendors = match catalog_csv {
        Some(path) => InMemoryVendorRepository::from_csv_path(path)?,
        None => InMemoryVendorRepository::from_samples(),
    };
    println!("Vendor catalog loaded with {} vendor(s)", vendors.len());

    let bookings = Arc::new(InMemoryBookingNotifier::default());
    let service = EventPlanningService::new(
        Arc::new(vendors),
        Arc::new(InMemoryPlanStore::default()),
        bookings.clone(),
        DiscoveryConfig::default(),
        CategoryPolicy::standard(),
    );
    Ok((service, bookings))
}

fn split_preferences(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|preference| !preference.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        event_type,
        attendees,
        date,
        budget,
        location,
        preferences,
        catalog_csv,
        approve,
    } = args;

    let today = Local::now().date_naive();
    let requirements = EventRequirements {
        event_type,
        attendees,
        date: date.unwrap_or(today + Duration::days(90)),
        budget,
        location: Some(location),
        preferences: split_preferences(&preferences),
    };

    let (service, bookings) = build_service(catalog_csv.as_ref())?;

    render_requirements(&requirements);

    let matches = service.search_vendors(requirements.clone())?;
    render_matches(&matches);

    let record = service.plan_as_of(requirements, today)?;
    render_plan(&record);

    if approve {
        let decided = service.decide(&record.plan_id, true)?;
        println!("\n=== Approval ===");
        println!("Plan {} is now {}", decided.plan_id.0, decided.status.label());
        println!("Booking requests dispatched:");
        for booking in bookings.events() {
            println!(
                "- {} / {}: PKR {:.0}",
                booking.vendor_id.0, booking.service_id.0, booking.cost
            );
        }
    } else {
        println!("\nPlan {} awaits approval (re-run with --approve)", record.plan_id.0);
    }

    Ok(())
}

pub(crate) fn run_vendor_search(args: VendorSearchArgs) -> Result<(), AppError> {
    let VendorSearchArgs {
        event_type,
        attendees,
        date,
        budget,
        location,
        preferences,
        catalog_csv,
    } = args;

    let requirements = EventRequirements {
        event_type,
        attendees,
        date: date.unwrap_or_else(|| Local::now().date_naive() + Duration::days(30)),
        budget,
        location,
        preferences: preferences
            .as_deref()
            .map(split_preferences)
            .unwrap_or_default(),
    };

    let (service, _) = build_service(catalog_csv.as_ref())?;
    let matches = service.search_vendors(requirements)?;
    render_matches(&matches);

    Ok(())
}

fn render_requirements(requirements: &EventRequirements) {
    println!("\n=== Event Requirements ===");
    println!(
        "{} for {} attendee(s) on {}",
        requirements.event_type, requirements.attendees, requirements.date
    );
    println!(
        "Budget: PKR {:.0} | Location: {}",
        requirements.budget,
        requirements.location.as_deref().unwrap_or("anywhere")
    );
    if !requirements.preferences.is_empty() {
        println!("Preferences: {}", requirements.preferences.join(", "));
    }

    let advice = timing_advice(&requirements.event_type);
    println!(
        "Suggested timing: {} ({})",
        advice.best_times.join(" or "),
        advice.notes
    );
}

fn render_matches(matches: &[VendorMatch]) {
    println!("\n=== Vendor Matches ===");
    if matches.is_empty() {
        println!("No vendors matched the requirements.");
        return;
    }
    for vendor_match in matches {
        println!(
            "- {}: PKR {:.0} estimated - {}",
            vendor_match.vendor_id.0, vendor_match.estimated_cost, vendor_match.reason
        );
    }
}

fn render_plan(record: &PlanRecord) {
    println!("\n=== Selected Vendors ===");
    if record.plan.selected_vendors.is_empty() {
        println!("No vendors could be booked within budget.");
    }
    for selection in &record.plan.selected_vendors {
        println!(
            "- {} ({}): PKR {:.0} - {}",
            selection.vendor_id.0, selection.service_id.0, selection.cost, selection.reason
        );
    }

    println!("\n=== Schedule ===");
    for line in &record.plan.schedule {
        println!("  {line}");
    }

    let costs: Vec<f64> = record
        .plan
        .selected_vendors
        .iter()
        .map(|selection| selection.cost)
        .collect();
    let breakdown = BudgetBreakdown::from_costs(&costs, true);
    println!("\n=== Budget ===");
    println!(
        "Subtotal PKR {:.0} + contingency PKR {:.0} = PKR {:.0}",
        breakdown.subtotal, breakdown.contingency, breakdown.total
    );

    println!("\n=== Constraints ===");
    if record.constraints.valid {
        println!("No violations.");
    }
    for violation in &record.constraints.violations {
        println!("! {violation}");
    }
    for suggestion in &record.constraints.suggestions {
        println!("* {suggestion}");
    }
}

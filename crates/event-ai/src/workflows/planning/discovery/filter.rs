use super::super::domain::{EventRequirements, VendorProfile};

/// Hard eligibility check applied before any scoring.
///
/// Pure predicate: unavailable vendors, vendors whose floor price exceeds a
/// stated budget, and vendors outside the requested location are excluded.
pub fn is_eligible(vendor: &VendorProfile, requirements: &EventRequirements) -> bool {
    if !vendor.available {
        return false;
    }

    if requirements.has_budget() && vendor.price_min > requirements.budget {
        return false;
    }

    if let Some(location) = requirements.location.as_deref() {
        if !location.is_empty() && !vendor.serves_location(location) {
            return false;
        }
    }

    true
}

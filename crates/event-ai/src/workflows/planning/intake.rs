use super::domain::EventRequirements;

/// Validation errors raised before a planning run starts.
///
/// The upstream extraction step is expected to reject these already; the
/// guard keeps malformed requirements out of the allocator regardless.
#[derive(Debug, thiserror::Error)]
pub enum RequirementsViolation {
    #[error("event type must not be empty")]
    EmptyEventType,
    #[error("attendees must be positive, got {0}")]
    NonPositiveAttendees(u32),
    #[error("budget must be non-negative, got {0}")]
    NegativeBudget(f64),
}

/// Check an inbound requirements payload and normalize its free-text fields.
pub fn sanitize_requirements(
    mut requirements: EventRequirements,
) -> Result<EventRequirements, RequirementsViolation> {
    requirements.event_type = requirements.event_type.trim().to_string();
    if requirements.event_type.is_empty() {
        return Err(RequirementsViolation::EmptyEventType);
    }

    if requirements.attendees == 0 {
        return Err(RequirementsViolation::NonPositiveAttendees(
            requirements.attendees,
        ));
    }

    if requirements.budget < 0.0 || !requirements.budget.is_finite() {
        return Err(RequirementsViolation::NegativeBudget(requirements.budget));
    }

    requirements.location = requirements
        .location
        .map(|location| location.trim().to_string())
        .filter(|location| !location.is_empty());

    requirements.preferences = requirements
        .preferences
        .into_iter()
        .map(|preference| preference.trim().to_string())
        .filter(|preference| !preference.is_empty())
        .collect();

    Ok(requirements)
}

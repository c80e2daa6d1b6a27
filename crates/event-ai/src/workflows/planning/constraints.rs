use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::EventRequirements;

const BUDGET_BUFFER_RATIO: f64 = 0.8;
const CONTINGENCY_RATE: f64 = 0.15;

/// Advisory validation of a drafted plan against its requirements.
///
/// Violations block approval in the UI; suggestions are informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintReport {
    pub valid: bool,
    pub violations: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn check_constraints(
    requirements: &EventRequirements,
    duration_hours: f64,
    vendor_costs: &[f64],
    today: NaiveDate,
) -> ConstraintReport {
    let mut violations = Vec::new();
    let mut suggestions = Vec::new();

    if requirements.date < today {
        violations.push("Event date is in the past".to_string());
        suggestions.push("Select a future date for the event".to_string());
    }

    let total_vendor_cost: f64 = vendor_costs.iter().sum();
    if requirements.has_budget() {
        if total_vendor_cost > requirements.budget {
            violations.push(format!(
                "Vendor costs (PKR {total_vendor_cost:.0}) exceed budget (PKR {:.0})",
                requirements.budget
            ));
            suggestions.push("Reduce number of vendors or negotiate lower prices".to_string());
            suggestions.push("Consider increasing the budget".to_string());
        } else if total_vendor_cost > requirements.budget * BUDGET_BUFFER_RATIO {
            suggestions
                .push("Consider keeping 20% buffer for unexpected expenses".to_string());
        }
    }

    if requirements.attendees > 500 && duration_hours > 8.0 {
        suggestions.push("Large events may require additional staff and security".to_string());
    }

    if duration_hours < 2.0 {
        suggestions.push("Events shorter than 2 hours may feel rushed".to_string());
    }
    if duration_hours > 8.0 {
        suggestions.push("Events longer than 8 hours may require meal breaks".to_string());
    }

    ConstraintReport {
        valid: violations.is_empty(),
        violations,
        suggestions,
    }
}

/// Cost rollup with an optional 15% contingency reserve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub subtotal: f64,
    pub contingency: f64,
    pub contingency_rate: f64,
    pub total: f64,
    pub vendor_count: usize,
    pub average_cost: f64,
}

impl BudgetBreakdown {
    pub fn from_costs(vendor_costs: &[f64], include_contingency: bool) -> Self {
        let subtotal: f64 = vendor_costs.iter().sum();
        let contingency = if include_contingency {
            subtotal * CONTINGENCY_RATE
        } else {
            0.0
        };

        Self {
            subtotal,
            contingency,
            contingency_rate: if include_contingency {
                CONTINGENCY_RATE
            } else {
                0.0
            },
            total: subtotal + contingency,
            vendor_count: vendor_costs.len(),
            average_cost: if vendor_costs.is_empty() {
                0.0
            } else {
                subtotal / vendor_costs.len() as f64
            },
        }
    }
}

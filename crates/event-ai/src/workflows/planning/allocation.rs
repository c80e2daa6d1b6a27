use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{EventRequirements, VendorProfile, VendorSelection};

/// Mapping from event types to the ordered categories a plan must fill.
///
/// Category order is significant: earlier categories spend the budget first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    /// Matched against the lower-cased event type by substring, first hit
    /// wins.
    rules: Vec<CategoryRule>,
    /// Used when no rule matches.
    fallback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub event_type_contains: String,
    pub categories: Vec<String>,
}

impl CategoryPolicy {
    pub fn new(rules: Vec<CategoryRule>, fallback: Vec<String>) -> Self {
        Self { rules, fallback }
    }

    /// Fixed category list for every event type.
    pub fn fixed(categories: Vec<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: categories,
        }
    }

    /// Standard policy for the Pakistani events market.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                CategoryRule {
                    event_type_contains: "wedding".to_string(),
                    categories: owned(&["venue", "catering", "photography", "decoration"]),
                },
                CategoryRule {
                    event_type_contains: "birthday".to_string(),
                    categories: owned(&["venue", "catering", "decoration"]),
                },
                CategoryRule {
                    event_type_contains: "corporate".to_string(),
                    categories: owned(&["venue", "catering"]),
                },
            ],
            fallback: owned(&["venue", "catering"]),
        }
    }

    pub fn required_categories(&self, event_type: &str) -> &[String] {
        let event_type = event_type.to_lowercase();
        self.rules
            .iter()
            .find(|rule| event_type.contains(&rule.event_type_contains))
            .map(|rule| rule.categories.as_slice())
            .unwrap_or(&self.fallback)
    }
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn owned(categories: &[&str]) -> Vec<String> {
    categories.iter().map(|category| category.to_string()).collect()
}

/// Greedy, non-backtracking selection of at most one priced service per
/// required category under a shared depleting budget.
///
/// Never raises: categories without a feasible candidate are skipped, and an
/// empty result means no vendor could be booked within budget.
pub struct BudgetAllocator {
    policy: CategoryPolicy,
}

impl BudgetAllocator {
    pub fn new(policy: CategoryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CategoryPolicy {
        &self.policy
    }

    pub fn allocate(
        &self,
        requirements: &EventRequirements,
        vendors: &[VendorProfile],
    ) -> Vec<VendorSelection> {
        let mut selected = Vec::new();
        let mut remaining_budget = requirements.budget;

        let mut by_category: HashMap<String, Vec<&VendorProfile>> = HashMap::new();
        for vendor in vendors {
            by_category
                .entry(vendor.category.to_lowercase())
                .or_default()
                .push(vendor);
        }

        for category in self.policy.required_categories(&requirements.event_type) {
            let Some(candidates) = by_category.get(category.as_str()) else {
                continue;
            };

            let mut best: Option<VendorSelection> = None;
            let mut best_score = -1.0;

            for vendor in candidates {
                for service in &vendor.services {
                    if service.price > remaining_budget {
                        continue;
                    }

                    // A free service must not win on a divide-by-zero.
                    let score = if service.price > 0.0 {
                        vendor.rating / service.price
                    } else {
                        0.0
                    };

                    if score > best_score {
                        best_score = score;
                        best = Some(VendorSelection {
                            vendor_id: vendor.vendor_id.clone(),
                            service_id: service.service_id.clone(),
                            cost: service.price,
                            reason: format!("Best value for {category}"),
                        });
                    }
                }
            }

            if let Some(selection) = best {
                debug!(
                    category = %category,
                    vendor = %selection.vendor_id.0,
                    cost = selection.cost,
                    "category filled"
                );
                remaining_budget -= selection.cost;
                selected.push(selection);
            }
        }

        selected
    }
}

mod config;
mod filter;
mod keywords;
mod scoring;

pub use config::{DiscoveryConfig, ScoreWeights};
pub use filter::is_eligible;
pub use keywords::derive_keywords;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::{EventRequirements, VendorId, VendorProfile};

/// Stateless search engine ranking catalog vendors against requirements.
pub struct DiscoveryEngine {
    config: DiscoveryConfig,
}

impl DiscoveryEngine {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn search_limit(&self) -> usize {
        self.config.search_limit
    }

    /// Filter, score, and rank the vendor pool, keeping the configured
    /// number of best matches. Ties keep the pool's original order.
    pub fn search(
        &self,
        requirements: &EventRequirements,
        vendors: &[VendorProfile],
    ) -> Vec<VendorMatch> {
        let search_keywords = derive_keywords(requirements);

        let mut matches: Vec<VendorMatch> = vendors
            .iter()
            .filter(|vendor| is_eligible(vendor, requirements))
            .map(|vendor| {
                let (components, score) = scoring::score_vendor(
                    vendor,
                    requirements,
                    &search_keywords,
                    &self.config.weights,
                );
                VendorMatch {
                    vendor_id: vendor.vendor_id.clone(),
                    business_name: vendor.business_name.clone(),
                    category: vendor.category.clone(),
                    score,
                    components,
                    estimated_cost: vendor.average_price(),
                    reason: format!(
                        "{:.0}% match - {}",
                        score * 100.0,
                        vendor.business_name
                    ),
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(self.config.search_limit);
        matches
    }
}

/// Ranked discovery result with its score breakdown for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorMatch {
    pub vendor_id: VendorId,
    pub business_name: String,
    pub category: String,
    pub score: f64,
    pub components: Vec<ScoreComponent>,
    pub estimated_cost: f64,
    pub reason: String,
}

/// Discrete contribution to a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub score: f64,
    pub notes: String,
}

/// Factors contributing to the weighted match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    KeywordOverlap,
    Rating,
    PriceFit,
    Availability,
}

use serde::{Deserialize, Serialize};

/// Weights for the additive match score; a perfect vendor sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword_overlap: f64,
    pub rating: f64,
    pub price_fit: f64,
    pub availability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword_overlap: 0.4,
            rating: 0.3,
            price_fit: 0.2,
            availability: 0.1,
        }
    }
}

/// Tunables for a discovery search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub weights: ScoreWeights,
    /// Number of ranked matches returned per search.
    pub search_limit: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            search_limit: 5,
        }
    }
}

use std::collections::BTreeSet;

use super::super::domain::EventRequirements;

/// Derive the search keyword set from the event type and stated preferences.
///
/// The returned list is lower-cased, deduplicated, and sorted so repeated
/// runs see the same ordering.
pub fn derive_keywords(requirements: &EventRequirements) -> Vec<String> {
    let mut keywords = BTreeSet::new();

    let event_type = requirements.event_type.to_lowercase();
    keywords.insert(event_type.clone());

    for preference in &requirements.preferences {
        keywords.insert(preference.to_lowercase());
    }

    if event_type.contains("wedding") {
        for term in ["mehndi", "baraat", "walima", "venue", "catering", "photography"] {
            keywords.insert(term.to_string());
        }
    } else if event_type.contains("birthday") {
        for term in ["party", "cake", "decoration", "entertainment"] {
            keywords.insert(term.to_string());
        }
    } else if event_type.contains("corporate") {
        for term in ["conference", "meeting", "venue", "catering"] {
            keywords.insert(term.to_string());
        }
    }

    keywords.into_iter().collect()
}

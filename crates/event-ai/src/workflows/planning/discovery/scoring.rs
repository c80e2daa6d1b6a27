use super::super::domain::{EventRequirements, VendorProfile};
use super::config::ScoreWeights;
use super::{MatchFactor, ScoreComponent};

pub(crate) fn score_vendor(
    vendor: &VendorProfile,
    requirements: &EventRequirements,
    search_keywords: &[String],
    weights: &ScoreWeights,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();

    let vendor_keywords: Vec<String> = vendor
        .keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .collect();
    let vendor_text = format!(
        "{} {} {}",
        vendor.description, vendor.category, vendor.business_name
    )
    .to_lowercase();

    let matches = search_keywords
        .iter()
        .filter(|keyword| {
            vendor_keywords.iter().any(|vk| vk == *keyword) || vendor_text.contains(keyword.as_str())
        })
        .count();

    let keyword_score = weights.keyword_overlap
        * (matches as f64 / search_keywords.len().max(1) as f64).min(1.0);
    components.push(ScoreComponent {
        factor: MatchFactor::KeywordOverlap,
        score: keyword_score,
        notes: format!("{matches} of {} keywords matched", search_keywords.len()),
    });

    let rating_score = weights.rating * (vendor.rating / 5.0);
    components.push(ScoreComponent {
        factor: MatchFactor::Rating,
        score: rating_score,
        notes: format!("rated {:.1} of 5.0", vendor.rating),
    });

    let avg_price = vendor.average_price();
    let (price_score, price_notes) = if !requirements.has_budget() {
        // Unknown fit without a stated budget.
        (
            weights.price_fit * 0.5,
            "no budget stated, half credit".to_string(),
        )
    } else if avg_price <= requirements.budget {
        (
            weights.price_fit,
            format!(
                "average price PKR {avg_price:.0} within budget PKR {:.0}",
                requirements.budget
            ),
        )
    } else {
        // Linear overage penalty; zero once the overage equals the budget.
        let overage = (avg_price - requirements.budget) / requirements.budget;
        (
            (weights.price_fit * (1.0 - overage)).max(0.0),
            format!(
                "average price PKR {avg_price:.0} exceeds budget PKR {:.0}",
                requirements.budget
            ),
        )
    };
    components.push(ScoreComponent {
        factor: MatchFactor::PriceFit,
        score: price_score,
        notes: price_notes,
    });

    let availability_score = if vendor.available {
        weights.availability
    } else {
        0.0
    };
    components.push(ScoreComponent {
        factor: MatchFactor::Availability,
        score: availability_score,
        notes: if vendor.available {
            "currently taking bookings".to_string()
        } else {
            "not taking bookings".to_string()
        },
    });

    let total = components.iter().map(|component| component.score).sum();
    (components, total)
}

pub mod csv;

use super::domain::{EventRequirements, ServiceId, ServiceOffering, VendorId, VendorProfile};

/// Vendor source abstraction so planning can be exercised without a backend.
///
/// Implementations must return vendors in a stable order; allocation
/// tie-breaks depend on it.
pub trait VendorRepository: Send + Sync {
    fn search(
        &self,
        requirements: &EventRequirements,
        limit: usize,
    ) -> Result<Vec<VendorProfile>, CatalogError>;
}

/// Error enumeration for vendor retrieval failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("vendor catalog unavailable: {0}")]
    Unavailable(String),
}

fn offering(id: &str, name: &str, price: f64) -> ServiceOffering {
    ServiceOffering {
        service_id: ServiceId(id.to_string()),
        name: name.to_string(),
        price,
    }
}

/// Built-in Pakistani vendor sample set, used whenever the configured
/// catalog is empty or unreachable.
pub fn sample_vendors() -> Vec<VendorProfile> {
    vec![
        VendorProfile {
            vendor_id: VendorId("catering_001".to_string()),
            business_name: "Lahore Catering Excellence".to_string(),
            category: "catering".to_string(),
            description: "Premium Pakistani cuisine for weddings and events".to_string(),
            service_areas: vec!["Lahore".to_string(), "Islamabad".to_string()],
            price_min: 50_000.0,
            price_max: 500_000.0,
            rating: 4.5,
            total_reviews: 120,
            available: true,
            keywords: vec![
                "wedding".to_string(),
                "mehndi".to_string(),
                "walima".to_string(),
                "catering".to_string(),
                "food".to_string(),
                "traditional".to_string(),
            ],
            services: vec![
                offering("catering_001_standard", "Standard Wedding Menu", 120_000.0),
                offering("catering_001_premium", "Premium Wedding Banquet", 350_000.0),
            ],
        },
        VendorProfile {
            vendor_id: VendorId("venue_001".to_string()),
            business_name: "Royal Marquee Lahore".to_string(),
            category: "venue".to_string(),
            description: "Luxury wedding venue with lawns and marquees".to_string(),
            service_areas: vec!["Lahore".to_string()],
            price_min: 200_000.0,
            price_max: 800_000.0,
            rating: 4.8,
            total_reviews: 85,
            available: true,
            keywords: vec![
                "wedding".to_string(),
                "venue".to_string(),
                "marquee".to_string(),
                "hall".to_string(),
                "lawn".to_string(),
                "mehndi".to_string(),
                "baraat".to_string(),
            ],
            services: vec![
                offering("venue_001_hall", "Banquet Hall Evening", 200_000.0),
                offering("venue_001_marquee", "Marquee & Lawn", 450_000.0),
            ],
        },
        VendorProfile {
            vendor_id: VendorId("photo_001".to_string()),
            business_name: "Moments Photography".to_string(),
            category: "photography".to_string(),
            description: "Wedding photography and videography".to_string(),
            service_areas: vec![
                "Lahore".to_string(),
                "Islamabad".to_string(),
                "Karachi".to_string(),
            ],
            price_min: 100_000.0,
            price_max: 400_000.0,
            rating: 4.7,
            total_reviews: 200,
            available: true,
            keywords: vec![
                "photography".to_string(),
                "video".to_string(),
                "drone".to_string(),
                "wedding".to_string(),
                "photo".to_string(),
                "album".to_string(),
            ],
            services: vec![
                offering("photo_001_day", "Full-Day Coverage", 150_000.0),
                offering("photo_001_film", "Cinematic Film Package", 300_000.0),
            ],
        },
        VendorProfile {
            vendor_id: VendorId("decor_001".to_string()),
            business_name: "Floral Dreams Decoration".to_string(),
            category: "decoration".to_string(),
            description: "Event decoration and floral arrangements".to_string(),
            service_areas: vec!["Lahore".to_string(), "Islamabad".to_string()],
            price_min: 80_000.0,
            price_max: 350_000.0,
            rating: 4.6,
            total_reviews: 95,
            available: true,
            keywords: vec![
                "decoration".to_string(),
                "flowers".to_string(),
                "decor".to_string(),
                "wedding".to_string(),
                "theme".to_string(),
                "stage".to_string(),
            ],
            services: vec![
                offering("decor_001_stage", "Stage & Floral Decor", 120_000.0),
                offering("decor_001_full", "Full Venue Theming", 250_000.0),
            ],
        },
        VendorProfile {
            vendor_id: VendorId("music_001".to_string()),
            business_name: "Beat Masters DJ".to_string(),
            category: "music".to_string(),
            description: "DJ services and live band entertainment".to_string(),
            service_areas: vec![
                "Lahore".to_string(),
                "Karachi".to_string(),
                "Islamabad".to_string(),
            ],
            price_min: 40_000.0,
            price_max: 150_000.0,
            rating: 4.4,
            total_reviews: 150,
            available: true,
            keywords: vec![
                "dj".to_string(),
                "music".to_string(),
                "band".to_string(),
                "entertainment".to_string(),
                "sound".to_string(),
                "party".to_string(),
            ],
            services: vec![
                offering("music_001_dj", "DJ Night", 60_000.0),
                offering("music_001_band", "Live Band", 120_000.0),
            ],
        },
        VendorProfile {
            vendor_id: VendorId("catering_002".to_string()),
            business_name: "Karachi BBQ House".to_string(),
            category: "catering".to_string(),
            description: "BBQ and street food catering for casual events".to_string(),
            service_areas: vec!["Karachi".to_string()],
            price_min: 25_000.0,
            price_max: 200_000.0,
            rating: 4.3,
            total_reviews: 75,
            available: true,
            keywords: vec![
                "bbq".to_string(),
                "catering".to_string(),
                "party".to_string(),
                "birthday".to_string(),
                "casual".to_string(),
                "outdoor".to_string(),
            ],
            services: vec![
                offering("catering_002_bbq", "BBQ Buffet", 45_000.0),
                offering("catering_002_street", "Street Food Stalls", 90_000.0),
            ],
        },
    ]
}

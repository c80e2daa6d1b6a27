use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::super::domain::{ServiceId, ServiceOffering, VendorId, VendorProfile};

/// Error raised while importing a vendor catalog CSV export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("invalid vendor row '{vendor_id}': {message}")]
    InvalidRow { vendor_id: String, message: String },
}

/// Read vendor profiles from a CSV export.
///
/// Rows carry a price range rather than itemized services; the importer
/// derives a standard offering at `price_min` and, when the range is not
/// degenerate, a premium offering at `price_max`.
pub fn import_vendors<R: Read>(reader: R) -> Result<Vec<VendorProfile>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut vendors = Vec::new();

    for record in csv_reader.deserialize::<VendorRow>() {
        let row = record?;
        vendors.push(row.into_profile()?);
    }

    Ok(vendors)
}

#[derive(Debug, Deserialize)]
struct VendorRow {
    #[serde(rename = "Vendor ID")]
    vendor_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Service Areas", default)]
    service_areas: String,
    #[serde(rename = "Price Min")]
    price_min: f64,
    #[serde(rename = "Price Max")]
    price_max: f64,
    #[serde(rename = "Rating", default)]
    rating: f64,
    #[serde(rename = "Total Reviews", default)]
    total_reviews: u32,
    #[serde(rename = "Available", default, deserialize_with = "empty_string_as_none")]
    available: Option<String>,
    #[serde(rename = "Keywords", default)]
    keywords: String,
}

impl VendorRow {
    fn into_profile(self) -> Result<VendorProfile, CatalogImportError> {
        if self.vendor_id.is_empty() {
            return Err(CatalogImportError::InvalidRow {
                vendor_id: "<blank>".to_string(),
                message: "missing vendor id".to_string(),
            });
        }

        if self.price_min < 0.0 || self.price_max < self.price_min {
            return Err(CatalogImportError::InvalidRow {
                vendor_id: self.vendor_id,
                message: format!(
                    "price range {}..{} is not a valid non-negative range",
                    self.price_min, self.price_max
                ),
            });
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogImportError::InvalidRow {
                vendor_id: self.vendor_id,
                message: format!("rating {} outside 0.0..=5.0", self.rating),
            });
        }

        let available = match self.available.as_deref() {
            None => true,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                other => {
                    return Err(CatalogImportError::InvalidRow {
                        vendor_id: self.vendor_id,
                        message: format!("unrecognized availability flag '{other}'"),
                    })
                }
            },
        };

        let mut services = vec![ServiceOffering {
            service_id: ServiceId(format!("{}_standard", self.vendor_id)),
            name: format!("{} Standard", self.name),
            price: self.price_min,
        }];
        if self.price_max > self.price_min {
            services.push(ServiceOffering {
                service_id: ServiceId(format!("{}_premium", self.vendor_id)),
                name: format!("{} Premium", self.name),
                price: self.price_max,
            });
        }

        Ok(VendorProfile {
            vendor_id: VendorId(self.vendor_id),
            business_name: self.name,
            category: self.category.to_lowercase(),
            description: self.description,
            service_areas: split_list(&self.service_areas),
            price_min: self.price_min,
            price_max: self.price_max,
            rating: self.rating,
            total_reviews: self.total_reviews,
            available,
            keywords: split_list(&self.keywords),
            services,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

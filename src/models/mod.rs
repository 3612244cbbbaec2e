//! Data models for listing payloads
//!
//! These mirror the JSON the collaborator endpoints return. Fields the
//! server computes (like `display_price`) are optional with a local
//! fallback, and Odoo-style `false`-for-missing strings are normalized
//! to `None` on deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Transaction type of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Rent,
    Lease,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Sale => write!(f, "sale"),
            TransactionType::Rent => write!(f, "rent"),
            TransactionType::Lease => write!(f, "lease"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sale" => Ok(TransactionType::Sale),
            "rent" => Ok(TransactionType::Rent),
            "lease" => Ok(TransactionType::Lease),
            _ => Err(format!("Invalid transaction type: {}. Use: sale, rent, lease", s)),
        }
    }
}

/// Listing lifecycle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingState {
    Draft,
    Available,
    Pending,
    Sold,
    Rented,
    OffPlan,
}

/// Compact listing shape returned by search and featured endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default, deserialize_with = "falsy_string")]
    pub display_price: Option<String>,
    #[serde(default, deserialize_with = "falsy_string")]
    pub city: Option<String>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "falsy_string")]
    pub image_url: Option<String>,
    pub url: String,
}

impl PropertySummary {
    /// Server-computed price label, or the local cedi formatting.
    pub fn price_label(&self) -> String {
        self.display_price
            .clone()
            .unwrap_or_else(|| format_cedi(self.price))
    }
}

/// Full listing shape returned by the property detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDetail {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "falsy_string")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, deserialize_with = "falsy_string")]
    pub display_price: Option<String>,
    #[serde(default, deserialize_with = "falsy_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "falsy_string")]
    pub address: Option<String>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub land_size: f64,
    #[serde(default)]
    pub building_size: f64,
    #[serde(default, deserialize_with = "falsy_string")]
    pub property_type: Option<String>,
    pub state: ListingState,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    pub agent: Option<AgentContact>,
    #[serde(default)]
    pub availability_date: Option<NaiveDate>,
}

impl PropertyDetail {
    pub fn price_label(&self) -> String {
        self.display_price
            .clone()
            .unwrap_or_else(|| format_cedi(self.price))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: i64,
    #[serde(default, deserialize_with = "falsy_string")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: String,
    #[serde(default, deserialize_with = "falsy_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "falsy_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "falsy_string")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default, deserialize_with = "falsy_string")]
    pub icon: Option<String>,
}

/// Filters accepted by the search endpoint. Unset fields are omitted
/// from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Format a price the way the site renders it: cedi sign, thousands
/// separators, no decimals.
pub fn format_cedi(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if whole < 0 { "-" } else { "" };
    format!("₵{}{}", sign, grouped)
}

/// Odoo renders missing char fields as JSON `false`; fold that (and
/// null) into `None`.
fn falsy_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Flag(bool),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) if !s.is_empty() => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cedi_formatting_groups_thousands() {
        assert_eq!(format_cedi(1_250_000.0), "₵1,250,000");
        assert_eq!(format_cedi(950.0), "₵950");
        assert_eq!(format_cedi(0.0), "₵0");
    }

    #[test]
    fn summary_tolerates_odoo_false_fields() {
        let raw = r#"{
            "id": 12,
            "name": "East Legon Villa",
            "price": 850000.0,
            "display_price": "₵850,000",
            "city": "Accra",
            "bedrooms": 4,
            "bathrooms": 3,
            "image_url": false,
            "url": "/property/12"
        }"#;
        let summary: PropertySummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.image_url, None);
        assert_eq!(summary.price_label(), "₵850,000");
    }

    #[test]
    fn price_label_falls_back_to_local_formatting() {
        let raw = r#"{"id": 3, "name": "Plot", "price": 42000.0, "url": "/property/3"}"#;
        let summary: PropertySummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.price_label(), "₵42,000");
    }
}

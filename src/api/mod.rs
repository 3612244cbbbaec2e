//! Client for the listings site's JSON endpoints
//!
//! Thin consumer of the site's public API. This layer has no bearing on
//! the engagement core; shortlists never leave the local store.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{Location, PropertyDetail, PropertySummary, PropertyType, SearchFilters};

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[allow(dead_code)]
    count: usize,
    properties: Vec<PropertySummary>,
}

#[derive(Debug, Deserialize)]
struct FeaturedResponse {
    properties: Vec<PropertySummary>,
}

#[derive(Debug, Deserialize)]
struct LocationsResponse {
    locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
struct TypesResponse {
    types: Vec<PropertyType>,
}

// The detail endpoint answers 200 with an error object for unknown ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailResponse {
    Found(Box<PropertyDetail>),
    Error { error: String },
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// POST /api/properties/search
    pub async fn search_properties(&self, filters: &SearchFilters) -> Result<Vec<PropertySummary>> {
        let url = format!("{}/api/properties/search", self.base_url);
        let response: SearchResponse = self
            .client
            .post(&url)
            .json(filters)
            .send()
            .await
            .context("Property search request failed")?
            .error_for_status()
            .context("Property search returned an error status")?
            .json()
            .await
            .context("Failed to parse property search response")?;
        Ok(response.properties)
    }

    /// GET /api/property/{id}
    pub async fn property(&self, id: i64) -> Result<PropertyDetail> {
        let url = format!("{}/api/property/{}", self.base_url, id);
        let response: DetailResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Property detail request failed")?
            .error_for_status()
            .context("Property detail returned an error status")?
            .json()
            .await
            .context("Failed to parse property detail response")?;

        match response {
            DetailResponse::Found(detail) => Ok(*detail),
            DetailResponse::Error { error } => bail!("{}", error),
        }
    }

    /// GET /api/locations
    pub async fn locations(&self) -> Result<Vec<Location>> {
        let url = format!("{}/api/locations", self.base_url);
        let response: LocationsResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Locations request failed")?
            .error_for_status()
            .context("Locations returned an error status")?
            .json()
            .await
            .context("Failed to parse locations response")?;
        Ok(response.locations)
    }

    /// GET /api/property-types
    pub async fn property_types(&self) -> Result<Vec<PropertyType>> {
        let url = format!("{}/api/property-types", self.base_url);
        let response: TypesResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Property types request failed")?
            .error_for_status()
            .context("Property types returned an error status")?
            .json()
            .await
            .context("Failed to parse property types response")?;
        Ok(response.types)
    }

    /// GET /api/featured-properties?limit=N
    pub async fn featured_properties(&self, limit: u32) -> Result<Vec<PropertySummary>> {
        let url = format!("{}/api/featured-properties", self.base_url);
        let response: FeaturedResponse = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .context("Featured properties request failed")?
            .error_for_status()
            .context("Featured properties returned an error status")?
            .json()
            .await
            .context("Failed to parse featured properties response")?;
        Ok(response.properties)
    }
}

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::StoreError;
use crate::models::{
    ImageUpload, NewInquiry, NewProperty, NewViewing, Property, PropertyImage, PropertyInquiry,
    PropertyUpdate, PropertyViewing, RealEstateProfessional, VerificationStatus, ViewingStatus,
};
use crate::query::{SearchQuery, SearchResult};

use super::PropertyStore;

/// Thin client for the marketplace backend's real-estate API.
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(config: &ServiceConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Liveness probe. Any transport error or non-2xx counts as down.
    pub async fn health(&self) -> bool {
        match self.client.get(self.url("/api/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                warn!("health probe failed: {err}");
                false
            }
        }
    }

    async fn expect_success(endpoint: &str, response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Status {
                status,
                endpoint: endpoint.to_string(),
            })
        }
    }
}

/// Flatten a search query into wire parameters. Repeated `amenities` keys
/// carry the amenity list.
fn query_pairs(query: &SearchQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    let filters = &query.filters;
    if let Some(t) = filters.property_type {
        pairs.push(("property_type", t.as_str().to_string()));
    }
    if let Some(t) = filters.listing_type {
        pairs.push(("listing_type", t.as_str().to_string()));
    }
    if let Some(min) = filters.price_min {
        pairs.push(("price_min", min.to_string()));
    }
    if let Some(max) = filters.price_max {
        pairs.push(("price_max", max.to_string()));
    }
    if let Some(min) = filters.bedrooms {
        pairs.push(("bedrooms", min.to_string()));
    }
    if let Some(min) = filters.bathrooms {
        pairs.push(("bathrooms", min.to_string()));
    }
    if let Some(ref location) = filters.location {
        pairs.push(("location", location.clone()));
    }
    if let Some(ref amenities) = filters.amenities {
        for amenity in amenities {
            pairs.push(("amenities", amenity.clone()));
        }
    }
    pairs.push(("sort_by", query.sort_by.as_str().to_string()));
    pairs.push(("sort_order", query.sort_order.as_str().to_string()));
    pairs.push(("page", query.page.page.to_string()));
    pairs.push(("limit", query.page.limit.to_string()));
    pairs
}

#[async_trait]
impl PropertyStore for RestStore {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, StoreError> {
        let endpoint = "/real-estate/properties";
        debug!("GET {endpoint}");
        let response = self
            .client
            .get(self.url(endpoint))
            .query(&query_pairs(query))
            .send()
            .await?;
        let response = Self::expect_success(endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Property, StoreError> {
        let endpoint = format!("/real-estate/properties/{id}");
        let response = self.client.get(self.url(&endpoint)).send().await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, input: NewProperty) -> Result<Property, StoreError> {
        let endpoint = "/real-estate/properties";
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&input)
            .send()
            .await?;
        let response = Self::expect_success(endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, update: PropertyUpdate) -> Result<Property, StoreError> {
        let endpoint = format!("/real-estate/properties/{id}");
        let response = self
            .client
            .put(self.url(&endpoint))
            .json(&update)
            .send()
            .await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let endpoint = format!("/real-estate/properties/{id}");
        let response = self.client.delete(self.url(&endpoint)).send().await?;
        Self::expect_success(&endpoint, response).await?;
        Ok(())
    }

    async fn upload_images(
        &self,
        property_id: &str,
        images: Vec<ImageUpload>,
    ) -> Result<Vec<PropertyImage>, StoreError> {
        let endpoint = format!("/real-estate/properties/{property_id}/images");
        let mut form = Form::new();
        for (i, upload) in images.into_iter().enumerate() {
            let part = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)?;
            form = form.part("images", part);
            if let Some(caption) = upload.caption {
                form = form.text(format!("captions[{i}]"), caption);
            }
        }
        let response = self
            .client
            .post(self.url(&endpoint))
            .multipart(form)
            .send()
            .await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn schedule_viewing(&self, input: NewViewing) -> Result<PropertyViewing, StoreError> {
        let endpoint = "/real-estate/viewings";
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&input)
            .send()
            .await?;
        let response = Self::expect_success(endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn update_viewing(
        &self,
        id: &str,
        status: ViewingStatus,
    ) -> Result<PropertyViewing, StoreError> {
        let endpoint = format!("/real-estate/viewings/{id}");
        let response = self
            .client
            .put(self.url(&endpoint))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn create_inquiry(&self, input: NewInquiry) -> Result<PropertyInquiry, StoreError> {
        let endpoint = "/real-estate/inquiries";
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&input)
            .send()
            .await?;
        let response = Self::expect_success(endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn respond_to_inquiry(
        &self,
        id: &str,
        message: String,
    ) -> Result<PropertyInquiry, StoreError> {
        let endpoint = format!("/real-estate/inquiries/{id}/respond");
        let response = self
            .client
            .put(self.url(&endpoint))
            .json(&json!({ "response": message }))
            .send()
            .await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn register_professional(
        &self,
        professional: RealEstateProfessional,
    ) -> Result<RealEstateProfessional, StoreError> {
        let endpoint = "/real-estate/professionals";
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&professional)
            .send()
            .await?;
        let response = Self::expect_success(endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn get_professional(&self, id: &str) -> Result<RealEstateProfessional, StoreError> {
        let endpoint = format!("/real-estate/professionals/{id}");
        let response = self.client.get(self.url(&endpoint)).send().await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }

    async fn set_verification(
        &self,
        id: &str,
        status: VerificationStatus,
    ) -> Result<RealEstateProfessional, StoreError> {
        let endpoint = format!("/real-estate/professionals/{id}/verification");
        let response = self
            .client
            .put(self.url(&endpoint))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        let response = Self::expect_success(&endpoint, response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingType, PropertyType};
    use crate::query::{PageRequest, PropertyFilters, SortBy, SortOrder};

    #[test]
    fn query_pairs_skip_absent_filters() {
        let query = SearchQuery::default();
        let pairs = query_pairs(&query);
        assert_eq!(
            pairs,
            vec![
                ("sort_by", "date".to_string()),
                ("sort_order", "desc".to_string()),
                ("page", "1".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_repeat_amenities() {
        let query = SearchQuery {
            filters: PropertyFilters {
                property_type: Some(PropertyType::Condo),
                listing_type: Some(ListingType::Rent),
                price_min: Some(1000),
                price_max: Some(3000),
                amenities: Some(vec!["gym".to_string(), "pool".to_string()]),
                ..Default::default()
            },
            sort_by: SortBy::Price,
            sort_order: SortOrder::Asc,
            page: PageRequest { page: 2, limit: 10 },
        };
        let pairs = query_pairs(&query);
        let amenities: Vec<_> = pairs.iter().filter(|(k, _)| *k == "amenities").collect();
        assert_eq!(amenities.len(), 2);
        assert!(pairs.contains(&("property_type", "condo".to_string())));
        assert!(pairs.contains(&("page", "2".to_string())));
    }
}

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    Address, Currency, ImageUpload, InquiryStatus, ListingType, NewInquiry, NewProperty,
    NewViewing, Price, ProfessionalType, Property, PropertyImage, PropertyInquiry, PropertyStatus,
    PropertyType, PropertyUpdate, PropertyViewing, RealEstateProfessional, VerificationStatus,
    ViewingStatus,
};
use crate::query::{run_search, SearchQuery, SearchResult};

use super::PropertyStore;

#[derive(Default)]
struct Tables {
    properties: Vec<Property>,
    viewings: Vec<PropertyViewing>,
    inquiries: Vec<PropertyInquiry>,
    professionals: Vec<RealEstateProfessional>,
}

/// In-memory property store.
///
/// An explicit repository object rather than module-level state: construct
/// one per service, drop it when done. The mutex makes it safe to share
/// across tasks; individual operations are atomic, nothing spans two calls.
pub struct MockStore {
    inner: Mutex<Tables>,
}

impl MockStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Tables::default()),
        }
    }

    /// A store seeded with a handful of plausible listings, for demos and
    /// for serving searches while the backend is unavailable.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables();
            tables.professionals = sample_professionals();
            tables.properties = sample_properties();
        }
        store
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().expect("mock store mutex poisoned")
    }

    /// Bump the view counter for a listing. Views are recorded explicitly
    /// by the caller; reads never mutate.
    pub fn record_view(&self, property_id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables();
        let property = find_property(&mut tables, property_id)?;
        property.counters.views += 1;
        Ok(())
    }

    /// Number of listings currently held, mostly useful in tests.
    pub fn property_count(&self) -> usize {
        self.tables().properties.len()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

fn find_property<'a>(
    tables: &'a mut Tables,
    id: &str,
) -> Result<&'a mut Property, StoreError> {
    tables
        .properties
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| StoreError::not_found("property", id))
}

#[async_trait]
impl PropertyStore for MockStore {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, StoreError> {
        let tables = self.tables();
        let result = run_search(&tables.properties, query);
        debug!(
            total = result.total,
            returned = result.properties.len(),
            "mock search"
        );
        Ok(result)
    }

    async fn get(&self, id: &str) -> Result<Property, StoreError> {
        let tables = self.tables();
        tables
            .properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("property", id))
    }

    async fn create(&self, input: NewProperty) -> Result<Property, StoreError> {
        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4().to_string(),
            professional_id: input.professional_id,
            title: input.title,
            description: input.description,
            property_type: input.property_type,
            listing_type: input.listing_type,
            price: input.price,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            square_feet: input.square_feet,
            year_built: input.year_built,
            status: PropertyStatus::Active,
            counters: Default::default(),
            amenities: input.amenities,
            images: vec![],
            address: input.address,
            created_at: now,
            published_at: Some(now),
            updated_at: now,
        };
        self.tables().properties.push(property.clone());
        Ok(property)
    }

    async fn update(&self, id: &str, update: PropertyUpdate) -> Result<Property, StoreError> {
        let mut tables = self.tables();
        let property = find_property(&mut tables, id)?;
        if let Some(title) = update.title {
            property.title = title;
        }
        if let Some(description) = update.description {
            property.description = description;
        }
        if let Some(price) = update.price {
            property.price = price;
        }
        if let Some(status) = update.status {
            property.status = status;
        }
        if let Some(amenities) = update.amenities {
            property.amenities = amenities;
        }
        property.updated_at = Utc::now();
        Ok(property.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables();
        let before = tables.properties.len();
        tables.properties.retain(|p| p.id != id);
        if tables.properties.len() == before {
            return Err(StoreError::not_found("property", id));
        }
        Ok(())
    }

    async fn upload_images(
        &self,
        property_id: &str,
        images: Vec<ImageUpload>,
    ) -> Result<Vec<PropertyImage>, StoreError> {
        let mut tables = self.tables();
        let property = find_property(&mut tables, property_id)?;
        let now = Utc::now();
        let created: Vec<PropertyImage> = images
            .into_iter()
            .map(|upload| {
                let image_id = Uuid::new_v4().to_string();
                PropertyImage {
                    url: format!("mock://properties/{property_id}/images/{image_id}"),
                    id: image_id,
                    caption: upload.caption,
                    uploaded_at: now,
                }
            })
            .collect();
        property.images.extend(created.clone());
        Ok(created)
    }

    async fn schedule_viewing(&self, input: NewViewing) -> Result<PropertyViewing, StoreError> {
        let mut tables = self.tables();
        let property = find_property(&mut tables, &input.property_id)?;
        property.counters.viewings += 1;
        let now = Utc::now();
        let viewing = PropertyViewing {
            id: Uuid::new_v4().to_string(),
            property_id: input.property_id,
            requester_id: input.requester_id,
            professional_id: input.professional_id,
            scheduled_for: input.scheduled_for,
            status: ViewingStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };
        tables.viewings.push(viewing.clone());
        Ok(viewing)
    }

    async fn update_viewing(
        &self,
        id: &str,
        status: ViewingStatus,
    ) -> Result<PropertyViewing, StoreError> {
        let mut tables = self.tables();
        let viewing = tables
            .viewings
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| StoreError::not_found("viewing", id))?;
        if !viewing.status.can_transition(status) {
            return Err(StoreError::InvalidTransition {
                entity: "viewing",
                from: viewing.status.as_str().to_string(),
                to: status.as_str().to_string(),
            });
        }
        viewing.status = status;
        viewing.updated_at = Utc::now();
        Ok(viewing.clone())
    }

    async fn create_inquiry(&self, input: NewInquiry) -> Result<PropertyInquiry, StoreError> {
        let mut tables = self.tables();
        let property = find_property(&mut tables, &input.property_id)?;
        property.counters.inquiries += 1;
        let now = Utc::now();
        let inquiry = PropertyInquiry {
            id: Uuid::new_v4().to_string(),
            property_id: input.property_id,
            requester_id: input.requester_id,
            professional_id: input.professional_id,
            message: input.message,
            response: None,
            status: InquiryStatus::New,
            created_at: now,
            updated_at: now,
        };
        tables.inquiries.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn respond_to_inquiry(
        &self,
        id: &str,
        response: String,
    ) -> Result<PropertyInquiry, StoreError> {
        let mut tables = self.tables();
        let inquiry = tables
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("inquiry", id))?;
        if !inquiry.status.can_transition(InquiryStatus::Responded) {
            return Err(StoreError::InvalidTransition {
                entity: "inquiry",
                from: inquiry.status.as_str().to_string(),
                to: InquiryStatus::Responded.as_str().to_string(),
            });
        }
        inquiry.response = Some(response);
        inquiry.status = InquiryStatus::Responded;
        inquiry.updated_at = Utc::now();
        Ok(inquiry.clone())
    }

    async fn register_professional(
        &self,
        professional: RealEstateProfessional,
    ) -> Result<RealEstateProfessional, StoreError> {
        self.tables().professionals.push(professional.clone());
        Ok(professional)
    }

    async fn get_professional(&self, id: &str) -> Result<RealEstateProfessional, StoreError> {
        self.tables()
            .professionals
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("professional", id))
    }

    async fn set_verification(
        &self,
        id: &str,
        status: VerificationStatus,
    ) -> Result<RealEstateProfessional, StoreError> {
        let mut tables = self.tables();
        let professional = tables
            .professionals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("professional", id))?;
        professional.verification = status;
        Ok(professional.clone())
    }
}

fn sample_professionals() -> Vec<RealEstateProfessional> {
    let mut jane = RealEstateProfessional::new("pro-jane", ProfessionalType::Realtor);
    jane.verification = VerificationStatus::Verified;
    jane.display_name = Some("Jane Hubbard".to_string());
    jane.agency = Some("Hubbard & Co".to_string());
    jane.license_number = Some("IL-4471".to_string());
    jane.phone = Some("+1 217 555 0100".to_string());
    jane.rating = 4.7;
    jane.review_count = 58;
    jane.total_listings = 12;
    jane.total_sales = 31;

    let mut omar = RealEstateProfessional::new("pro-omar", ProfessionalType::HouseOwner);
    omar.display_name = Some("Omar Reyes".to_string());
    omar.phone = Some("+1 512 555 0188".to_string());

    vec![jane, omar]
}

fn sample_properties() -> Vec<Property> {
    let now = Utc::now();
    let listing = |id: &str,
                   professional_id: &str,
                   title: &str,
                   property_type: PropertyType,
                   listing_type: ListingType,
                   amount: i64,
                   bedrooms: u32,
                   bathrooms: u32,
                   square_feet: u32,
                   street: &str,
                   city: &str,
                   state: &str,
                   amenities: &[&str],
                   days_listed: i64,
                   views: u64| Property {
        id: id.to_string(),
        professional_id: professional_id.to_string(),
        title: title.to_string(),
        description: format!("{title}. Contact the listing agent for a showing."),
        property_type,
        listing_type,
        price: Price {
            amount,
            currency: Currency::Usd,
            negotiable: false,
        },
        bedrooms,
        bathrooms,
        square_feet,
        year_built: None,
        status: PropertyStatus::Active,
        counters: crate::models::EngagementCounters {
            views,
            ..Default::default()
        },
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        images: vec![],
        address: Address {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            postal_code: "00000".to_string(),
            country: "US".to_string(),
        },
        created_at: now - Duration::days(days_listed),
        published_at: Some(now - Duration::days(days_listed)),
        updated_at: now,
    };

    vec![
        listing(
            "prop-1", "pro-jane", "Sunny two-bed near the river",
            PropertyType::Apartment, ListingType::Sale,
            315_000, 2, 1, 840,
            "18 Riverside Dr", "Springfield", "IL",
            &["parking", "balcony"], 21, 340,
        ),
        listing(
            "prop-2", "pro-jane", "Renovated craftsman with garden",
            PropertyType::House, ListingType::Sale,
            540_000, 4, 2, 2100,
            "77 Maple Ave", "Naperville", "IL",
            &["garden", "garage", "fireplace"], 45, 512,
        ),
        listing(
            "prop-3", "pro-omar", "Downtown studio, all bills included",
            PropertyType::Apartment, ListingType::Rent,
            1_450, 1, 1, 410,
            "902 Congress Ave", "Austin", "TX",
            &["gym", "pool", "parking"], 7, 188,
        ),
        listing(
            "prop-4", "pro-jane", "Corner condo with skyline views",
            PropertyType::Condo, ListingType::Sale,
            689_000, 3, 2, 1350,
            "450 Lakeshore Blvd", "Chicago", "IL",
            &["doorman", "gym", "balcony"], 60, 902,
        ),
        listing(
            "prop-5", "pro-omar", "Quiet townhouse by the park",
            PropertyType::Townhouse, ListingType::Rent,
            2_800, 3, 2, 1600,
            "5 Parkside Ln", "Austin", "TX",
            &["garage", "garden"], 14, 75,
        ),
        listing(
            "prop-6", "pro-jane", "Half-acre buildable lot",
            PropertyType::Land, ListingType::Sale,
            120_000, 0, 0, 21_780,
            "Route 9 Parcel 12", "Peoria", "IL",
            &[], 120, 42,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn record_view_bumps_the_counter() {
        let store = MockStore::with_sample_data();
        store.record_view("prop-1").unwrap();
        store.record_view("prop-1").unwrap();
        let property = store.get("prop-1").await.unwrap();
        // seeded at 340
        assert_eq!(property.counters.views, 342);
    }

    #[tokio::test]
    async fn record_view_rejects_unknown_listing() {
        let store = MockStore::new();
        assert!(matches!(
            store.record_view("nope"),
            Err(StoreError::NotFound { .. })
        ));
    }
}

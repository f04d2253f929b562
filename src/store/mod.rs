pub mod mock;
pub mod rest;

pub use mock::MockStore;
pub use rest::RestStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{
    ImageUpload, NewInquiry, NewProperty, NewViewing, Property, PropertyImage, PropertyInquiry,
    PropertyUpdate, PropertyViewing, RealEstateProfessional, VerificationStatus, ViewingStatus,
};
use crate::query::{SearchQuery, SearchResult};

/// Data-access seam for the real-estate vertical.
///
/// Implemented by the REST client against the live backend and by the
/// in-memory mock store; the service layer dispatches between the two.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, StoreError>;

    async fn get(&self, id: &str) -> Result<Property, StoreError>;

    async fn create(&self, input: NewProperty) -> Result<Property, StoreError>;

    async fn update(&self, id: &str, update: PropertyUpdate) -> Result<Property, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    async fn upload_images(
        &self,
        property_id: &str,
        images: Vec<ImageUpload>,
    ) -> Result<Vec<PropertyImage>, StoreError>;

    async fn schedule_viewing(&self, input: NewViewing) -> Result<PropertyViewing, StoreError>;

    async fn update_viewing(
        &self,
        id: &str,
        status: ViewingStatus,
    ) -> Result<PropertyViewing, StoreError>;

    async fn create_inquiry(&self, input: NewInquiry) -> Result<PropertyInquiry, StoreError>;

    async fn respond_to_inquiry(
        &self,
        id: &str,
        response: String,
    ) -> Result<PropertyInquiry, StoreError>;

    async fn register_professional(
        &self,
        professional: RealEstateProfessional,
    ) -> Result<RealEstateProfessional, StoreError>;

    async fn get_professional(&self, id: &str) -> Result<RealEstateProfessional, StoreError>;

    async fn set_verification(
        &self,
        id: &str,
        status: VerificationStatus,
    ) -> Result<RealEstateProfessional, StoreError>;
}

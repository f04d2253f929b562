pub mod interaction;
pub mod professional;
pub mod role;

pub use interaction::{
    InquiryStatus, NewInquiry, NewViewing, PropertyInquiry, PropertyViewing, ViewingStatus,
};
pub use professional::{ProfessionalType, RealEstateProfessional, VerificationStatus};
pub use role::{DashboardKind, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad category of a listed property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
    Commercial,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }
}

/// Whether the listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

/// Lifecycle state of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Active,
    Pending,
    Sold,
    Rented,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

/// Asking price of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: i64,
    pub currency: Currency,
    pub negotiable: bool,
}

/// Street address of a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Engagement counters maintained by the store
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngagementCounters {
    pub views: u64,
    pub inquiries: u64,
    pub viewings: u64,
    pub favorites: u64,
}

/// An uploaded listing image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: String,
    pub url: String,
    pub caption: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub professional_id: String,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub year_built: Option<i32>,
    pub status: PropertyStatus,
    #[serde(default)]
    pub counters: EngagementCounters,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Days the listing has been on the market, derived on read.
    /// Counts from `published_at` when set, otherwise `created_at`.
    pub fn days_on_market(&self, now: DateTime<Utc>) -> i64 {
        let since = self.published_at.unwrap_or(self.created_at);
        (now - since).num_days().max(0)
    }
}

/// Fields a professional submits when creating a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub professional_id: String,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub year_built: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub address: Address,
}

/// Partial update to an existing listing; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub status: Option<PropertyStatus>,
    pub amenities: Option<Vec<String>>,
}

/// Raw image payload for a multipart upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
}

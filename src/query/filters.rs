use serde::{Deserialize, Serialize};

use crate::models::{ListingType, Property, PropertyType};

/// Search filters for property queries.
///
/// Every field is optional; an absent field imposes no constraint. Present
/// fields combine as a conjunction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilters {
    /// Property category to match exactly
    pub property_type: Option<PropertyType>,
    /// Sale or rent
    pub listing_type: Option<ListingType>,
    /// Minimum price, inclusive
    pub price_min: Option<i64>,
    /// Maximum price, inclusive
    pub price_max: Option<i64>,
    /// Minimum number of bedrooms
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub bathrooms: Option<u32>,
    /// Case-insensitive substring matched against city, state or street
    pub location: Option<String>,
    /// Amenities that must all be present on the listing
    pub amenities: Option<Vec<String>>,
}

impl PropertyFilters {
    /// Whether a listing satisfies every present filter.
    ///
    /// A contradictory range (`price_min > price_max`) is not an error; it
    /// simply matches nothing.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(t) = self.property_type {
            if property.property_type != t {
                return false;
            }
        }
        if let Some(t) = self.listing_type {
            if property.listing_type != t {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if property.price.amount < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if property.price.amount > max {
                return false;
            }
        }
        if let Some(min) = self.bedrooms {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = self.bathrooms {
            if property.bathrooms < min {
                return false;
            }
        }
        if let Some(ref needle) = self.location {
            let needle = needle.to_lowercase();
            let address = &property.address;
            let hit = address.city.to_lowercase().contains(&needle)
                || address.state.to_lowercase().contains(&needle)
                || address.street.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(ref wanted) = self.amenities {
            let has = |a: &String| {
                property
                    .amenities
                    .iter()
                    .any(|own| own.eq_ignore_ascii_case(a))
            };
            if !wanted.iter().all(has) {
                return false;
            }
        }
        true
    }
}

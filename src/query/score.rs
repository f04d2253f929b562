use serde::{Deserialize, Serialize};

use crate::models::{ListingType, Property, PropertyType};

/// A client's stated preferences, as captured by an agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientPreferences {
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub location: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

// Weights sum to 100 so the score reads as a percentage.
const WEIGHT_BUDGET: u32 = 30;
const WEIGHT_TYPE: u32 = 20;
const WEIGHT_BEDROOMS: u32 = 15;
const WEIGHT_LOCATION: u32 = 15;
const WEIGHT_BATHROOMS: u32 = 10;
const WEIGHT_AMENITIES: u32 = 10;

/// Score how well a listing fits a client's preferences, 0-100.
///
/// Weighted attribute overlap: each stated preference contributes its full
/// weight when satisfied, zero otherwise, except amenities which contribute
/// proportionally to how many requested amenities the listing has. An
/// unstated preference constrains nothing and awards its full weight.
pub fn match_score(property: &Property, prefs: &ClientPreferences) -> u8 {
    let mut score = 0u32;

    let in_budget = prefs.budget_min.map_or(true, |min| property.price.amount >= min)
        && prefs.budget_max.map_or(true, |max| property.price.amount <= max);
    if in_budget {
        score += WEIGHT_BUDGET;
    }

    let type_ok = prefs.property_type.map_or(true, |t| property.property_type == t)
        && prefs.listing_type.map_or(true, |t| property.listing_type == t);
    if type_ok {
        score += WEIGHT_TYPE;
    }

    if prefs.min_bedrooms.map_or(true, |min| property.bedrooms >= min) {
        score += WEIGHT_BEDROOMS;
    }
    if prefs.min_bathrooms.map_or(true, |min| property.bathrooms >= min) {
        score += WEIGHT_BATHROOMS;
    }

    let location_ok = prefs.location.as_ref().map_or(true, |needle| {
        let needle = needle.to_lowercase();
        property.address.city.to_lowercase().contains(&needle)
            || property.address.state.to_lowercase().contains(&needle)
            || property.address.street.to_lowercase().contains(&needle)
    });
    if location_ok {
        score += WEIGHT_LOCATION;
    }

    if prefs.amenities.is_empty() {
        score += WEIGHT_AMENITIES;
    } else {
        let present = prefs
            .amenities
            .iter()
            .filter(|a| {
                property
                    .amenities
                    .iter()
                    .any(|own| own.eq_ignore_ascii_case(a))
            })
            .count() as u32;
        score += WEIGHT_AMENITIES * present / prefs.amenities.len() as u32;
    }

    score.min(100) as u8
}

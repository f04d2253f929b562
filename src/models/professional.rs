use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of real-estate actor behind a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalType {
    Realtor,
    HouseAgent,
    HouseOwner,
}

/// Outcome of the admin verification workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
    Expired,
}

/// A registered real-estate professional.
///
/// Profile completeness is derived from the six optional profile fields
/// below rather than stored, so it cannot drift from the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealEstateProfessional {
    pub id: String,
    pub professional_type: ProfessionalType,
    pub verification: VerificationStatus,
    pub rating: f32,
    pub review_count: u32,
    pub total_listings: u32,
    pub total_sales: u32,
    pub display_name: Option<String>,
    pub agency: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl RealEstateProfessional {
    pub fn new(id: impl Into<String>, professional_type: ProfessionalType) -> Self {
        Self {
            id: id.into(),
            professional_type,
            verification: VerificationStatus::Pending,
            rating: 0.0,
            review_count: 0,
            total_listings: 0,
            total_sales: 0,
            display_name: None,
            agency: None,
            license_number: None,
            phone: None,
            bio: None,
            photo_url: None,
            registered_at: Utc::now(),
        }
    }

    /// Percentage of the six profile fields that are filled in, 0-100.
    pub fn profile_completeness(&self) -> u8 {
        let fields = [
            &self.display_name,
            &self.agency,
            &self.license_number,
            &self.phone,
            &self.bio,
            &self.photo_url,
        ];
        let present = fields.iter().filter(|f| f.is_some()).count();
        (present * 100 / fields.len()) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_counts_present_fields() {
        let mut pro = RealEstateProfessional::new("pro1", ProfessionalType::Realtor);
        assert_eq!(pro.profile_completeness(), 0);

        pro.display_name = Some("Jane Realtor".to_string());
        pro.phone = Some("+1 555 0100".to_string());
        pro.bio = Some("Ten years in residential sales".to_string());
        assert_eq!(pro.profile_completeness(), 50);

        pro.agency = Some("Hubbard & Co".to_string());
        pro.license_number = Some("IL-4471".to_string());
        pro.photo_url = Some("https://cdn.example/pro1.jpg".to_string());
        assert_eq!(pro.profile_completeness(), 100);
    }

    #[test]
    fn new_professional_starts_pending() {
        let pro = RealEstateProfessional::new("pro2", ProfessionalType::HouseOwner);
        assert_eq!(pro.verification, VerificationStatus::Pending);
        assert_eq!(pro.review_count, 0);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a scheduled property viewing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewingStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl ViewingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewingStatus::Scheduled => "scheduled",
            ViewingStatus::Confirmed => "confirmed",
            ViewingStatus::Completed => "completed",
            ViewingStatus::Cancelled => "cancelled",
        }
    }

    /// Legal transitions: scheduled -> confirmed -> completed, with
    /// cancellation allowed until the viewing has taken place.
    pub fn can_transition(self, next: ViewingStatus) -> bool {
        use ViewingStatus::*;
        matches!(
            (self, next),
            (Scheduled, Confirmed) | (Confirmed, Completed) | (Scheduled, Cancelled) | (Confirmed, Cancelled)
        )
    }
}

/// A requested viewing appointment between a client and a professional
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyViewing {
    pub id: String,
    pub property_id: String,
    pub requester_id: String,
    pub professional_id: String,
    pub scheduled_for: DateTime<Utc>,
    pub status: ViewingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for scheduling a viewing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewViewing {
    pub property_id: String,
    pub requester_id: String,
    pub professional_id: String,
    pub scheduled_for: DateTime<Utc>,
}

/// Status of a buyer/renter inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Read,
    Responded,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Read => "read",
            InquiryStatus::Responded => "responded",
            InquiryStatus::Closed => "closed",
        }
    }

    /// Legal transitions: new -> read -> responded -> closed. Responding
    /// straight from new implies the message was read; closing is allowed
    /// from any non-closed state.
    pub fn can_transition(self, next: InquiryStatus) -> bool {
        use InquiryStatus::*;
        match (self, next) {
            (Closed, _) => false,
            (_, Closed) => true,
            (New, Read) | (New, Responded) | (Read, Responded) => true,
            _ => false,
        }
    }
}

/// A message from a prospective buyer or renter about a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInquiry {
    pub id: String,
    pub property_id: String,
    pub requester_id: String,
    pub professional_id: String,
    pub message: String,
    pub response: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for opening an inquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInquiry {
    pub property_id: String,
    pub requester_id: String,
    pub professional_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewing_follows_schedule_confirm_complete() {
        use ViewingStatus::*;
        assert!(Scheduled.can_transition(Confirmed));
        assert!(Confirmed.can_transition(Completed));
        assert!(!Scheduled.can_transition(Completed));
        assert!(!Completed.can_transition(Cancelled));
        assert!(!Cancelled.can_transition(Scheduled));
    }

    #[test]
    fn inquiry_closes_from_any_open_state() {
        use InquiryStatus::*;
        assert!(New.can_transition(Closed));
        assert!(Read.can_transition(Closed));
        assert!(Responded.can_transition(Closed));
        assert!(!Closed.can_transition(Read));
    }

    #[test]
    fn inquiry_responding_skips_read() {
        use InquiryStatus::*;
        assert!(New.can_transition(Responded));
        assert!(!Responded.can_transition(Read));
    }
}

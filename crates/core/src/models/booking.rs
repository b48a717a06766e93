use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::court::{Court, CourtId, Partner};
use super::time_slot::TimeSlot;
use crate::errors::{BookingError, BookingResult};

/// Default booking length in minutes.
pub const DEFAULT_DURATION: u32 = 60;

/// The in-progress, not yet submitted reservation.
///
/// Fields are independent of each other. Keeping `available_time_slots`
/// consistent with `all_time_slots`, or `selected_time` within the available
/// slots, is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    /// Minutes
    pub duration: u32,
    pub field_id: Option<CourtId>,
    pub selected_court: Option<Court>,
    pub selected_partner: Option<Partner>,
    /// Selection order, not time order
    pub selected_time_slot_ids: Vec<String>,
    pub all_time_slots: Vec<TimeSlot>,
    pub available_time_slots: Vec<TimeSlot>,
    pub note: String,
    pub price: f64,
    pub drink_option: Option<String>,
    pub customer_name: String,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    pub has_clicked_date: bool,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            selected_date: None,
            selected_time: None,
            duration: DEFAULT_DURATION,
            field_id: None,
            selected_court: None,
            selected_partner: None,
            selected_time_slot_ids: Vec::new(),
            all_time_slots: Vec::new(),
            available_time_slots: Vec::new(),
            note: String::new(),
            price: 0.0,
            drink_option: None,
            customer_name: String::new(),
            user_id: None,
            has_clicked_date: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub court_id: CourtId,
    pub date: NaiveDate,
    pub time_slot_ids: Vec<String>,
    pub duration: u32,
    pub price: f64,
    pub status: BookingStatus,
    pub note: Option<String>,
    pub drink_option: Option<String>,
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub court_id: CourtId,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub time_slot_ids: Vec<String>,
    pub duration: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CreateBookingRequest {
    /// Builds the submission body from a draft.
    ///
    /// The court comes from `field_id`, falling back to the selected court.
    /// A date, a court and at least one slot are required; empty free-text
    /// fields are omitted.
    pub fn from_draft(draft: &BookingDraft) -> BookingResult<Self> {
        let date = draft
            .selected_date
            .ok_or_else(|| BookingError::Validation("Please choose a date".to_string()))?;

        let court_id = draft
            .field_id
            .or_else(|| draft.selected_court.as_ref().map(|court| court.id))
            .ok_or_else(|| BookingError::Validation("Please choose a court".to_string()))?;

        if draft.selected_time_slot_ids.is_empty() {
            return Err(BookingError::Validation(
                "Please choose at least one time slot".to_string(),
            ));
        }

        Ok(Self {
            court_id,
            date,
            start_time: draft.selected_time.clone(),
            time_slot_ids: draft.selected_time_slot_ids.clone(),
            duration: draft.duration,
            price: draft.price,
            note: non_empty(&draft.note),
            drink_option: draft.drink_option.clone(),
            customer_name: non_empty(&draft.customer_name),
            user_id: draft.user_id.clone(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::court::CourtId;

/// A bookable interval on one court, as returned by the slots endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub court_id: CourtId,
    pub date: NaiveDate,
    /// Display label such as "18:00"
    pub start_time: String,
    pub end_time: String,
    pub available: bool,
    #[serde(default)]
    pub price: Option<f64>,
}

impl TimeSlot {
    /// Label shown in the slot picker, e.g. "18:00 - 19:00".
    pub fn label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotQuery {
    pub court_id: CourtId,
    pub date: NaiveDate,
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use courtbook_core::errors::BookingResult;
use courtbook_core::models::booking::{Booking, BookingDraft, CreateBookingRequest};
use courtbook_core::models::court::{CourtId, PricingPlan};
use courtbook_core::models::time_slot::TimeSlot;
use serde::Serialize;
use tracing::info;

use crate::http::HttpClient;
use crate::slots::SlotSource;

#[derive(Serialize)]
struct DateQuery {
    date: NaiveDate,
}

pub struct BookingService {
    http: Arc<HttpClient>,
}

impl BookingService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn time_slots(
        &self,
        court_id: CourtId,
        date: NaiveDate,
    ) -> BookingResult<Vec<TimeSlot>> {
        let path = format!("/courts/{court_id}/time-slots");
        self.http.get_with_query(&path, &DateQuery { date }).await
    }

    /// Rows of the public pricing table.
    pub async fn pricing(&self) -> BookingResult<Vec<PricingPlan>> {
        self.http.get("/pricing").await
    }

    /// Submits a draft. Incomplete drafts fail validation before any request
    /// is sent.
    pub async fn create_booking(&self, draft: &BookingDraft) -> BookingResult<Booking> {
        let request = CreateBookingRequest::from_draft(draft)?;
        let booking: Booking = self.http.post("/bookings", &request).await?;
        info!(booking_id = %booking.id, court_id = booking.court_id, "booking created");
        Ok(booking)
    }

    pub async fn my_bookings(&self) -> BookingResult<Vec<Booking>> {
        self.http.get("/bookings/me").await
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> BookingResult<()> {
        self.http
            .post_action(&format!("/bookings/{booking_id}/cancel"))
            .await
    }
}

#[async_trait]
impl SlotSource for BookingService {
    async fn fetch_time_slots(
        &self,
        court_id: CourtId,
        date: NaiveDate,
    ) -> BookingResult<Vec<TimeSlot>> {
        self.time_slots(court_id, date).await
    }
}

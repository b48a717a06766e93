use std::sync::Arc;

use courtbook_core::errors::BookingResult;
use courtbook_core::models::booking::Booking;
use courtbook_core::models::court::{
    Court, CourtId, CreateCourtRequest, Partner, PartnerId, UpdateCourtRequest,
};

use crate::http::HttpClient;

/// Partner catalog and the partner's own court management screens.
pub struct PartnerService {
    http: Arc<HttpClient>,
}

impl PartnerService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list_partners(&self) -> BookingResult<Vec<Partner>> {
        self.http.get("/partners").await
    }

    pub async fn get_partner(&self, partner_id: PartnerId) -> BookingResult<Partner> {
        self.http.get(&format!("/partners/{partner_id}")).await
    }

    pub async fn partner_courts(&self, partner_id: PartnerId) -> BookingResult<Vec<Court>> {
        self.http.get(&format!("/partners/{partner_id}/courts")).await
    }

    pub async fn create_court(
        &self,
        partner_id: PartnerId,
        request: &CreateCourtRequest,
    ) -> BookingResult<Court> {
        self.http
            .post(&format!("/partners/{partner_id}/courts"), request)
            .await
    }

    pub async fn update_court(
        &self,
        court_id: CourtId,
        request: &UpdateCourtRequest,
    ) -> BookingResult<Court> {
        self.http.patch(&format!("/courts/{court_id}"), request).await
    }

    pub async fn delete_court(&self, court_id: CourtId) -> BookingResult<()> {
        self.http.delete(&format!("/courts/{court_id}")).await
    }

    pub async fn partner_bookings(&self, partner_id: PartnerId) -> BookingResult<Vec<Booking>> {
        self.http
            .get(&format!("/partners/{partner_id}/bookings"))
            .await
    }
}

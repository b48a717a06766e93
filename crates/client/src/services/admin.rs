use std::sync::Arc;

use courtbook_core::errors::BookingResult;
use courtbook_core::models::admin::{UpdateUserRoleRequest, User};
use courtbook_core::models::booking::Booking;
use courtbook_core::models::court::{Partner, PartnerId};
use courtbook_core::session::Role;

use crate::http::HttpClient;

/// Endpoints behind the admin screens. The server enforces the role; the
/// client only gates navigation with a route guard.
pub struct AdminService {
    http: Arc<HttpClient>,
}

impl AdminService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list_users(&self) -> BookingResult<Vec<User>> {
        self.http.get("/admin/users").await
    }

    pub async fn update_user_role(&self, user_id: &str, role: Role) -> BookingResult<User> {
        self.http
            .patch(
                &format!("/admin/users/{user_id}/role"),
                &UpdateUserRoleRequest { role },
            )
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> BookingResult<()> {
        self.http.delete(&format!("/admin/users/{user_id}")).await
    }

    pub async fn pending_partners(&self) -> BookingResult<Vec<Partner>> {
        self.http.get("/admin/partners/pending").await
    }

    pub async fn approve_partner(&self, partner_id: PartnerId) -> BookingResult<Partner> {
        self.http
            .post_without_body(&format!("/admin/partners/{partner_id}/approve"))
            .await
    }

    pub async fn all_bookings(&self) -> BookingResult<Vec<Booking>> {
        self.http.get("/admin/bookings").await
    }
}

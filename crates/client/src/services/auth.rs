use std::sync::Arc;

use courtbook_core::errors::BookingResult;
use courtbook_core::models::admin::{LoginRequest, LoginResponse, RegisterRequest};
use courtbook_core::session::Role;
use tracing::{info, warn};

use crate::http::HttpClient;

pub struct AuthService {
    http: Arc<HttpClient>,
}

impl AuthService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Signs in and stores the returned token and role in the session.
    pub async fn login(&self, email: &str, password: &str) -> BookingResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.http.post("/auth/login", &request).await?;
        self.http
            .session()
            .login(response.token.clone(), response.role)?;
        Ok(response)
    }

    /// Creates a customer account. The caller still has to log in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> BookingResult<()> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post_empty("/auth/register", &request).await?;
        info!(role = %Role::Customer, "account registered");
        Ok(())
    }

    /// Clears the local session even if the server call fails.
    pub async fn logout(&self) -> BookingResult<()> {
        if let Err(e) = self.http.post_action("/auth/logout").await {
            warn!("server logout failed: {}", e);
        }
        self.http.session().logout()
    }
}

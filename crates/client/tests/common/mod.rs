#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use courtbook_client::config::ClientConfig;
use courtbook_client::http::HttpClient;
use courtbook_core::session::{MemoryStorage, Role, SessionStore};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_api(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock API server failed");
    });

    format!("http://{addr}")
}

pub fn signed_out() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())))
}

pub fn signed_in(token: &str, role: Role) -> Arc<SessionStore> {
    let session = signed_out();
    session
        .login(token, role)
        .expect("Failed to store test session");
    session
}

pub fn client(base_url: &str, session: Arc<SessionStore>) -> Arc<HttpClient> {
    let config = ClientConfig::new(base_url);
    Arc::new(HttpClient::new(config, session).expect("Failed to build client"))
}

pub fn client_with_timeout(base_url: &str, seconds: u64) -> Arc<HttpClient> {
    let config = ClientConfig {
        request_timeout: seconds,
        ..ClientConfig::new(base_url)
    };
    Arc::new(HttpClient::new(config, signed_out()).expect("Failed to build client"))
}

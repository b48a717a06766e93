//! # Courtbook Client
//!
//! REST access for the Courtbook site. A single [`http::HttpClient`] carries
//! the base URL, timeout, cookie jar and session token; the service modules
//! are thin typed wrappers over it.
//!
//! ## Layout
//!
//! - **Config**: environment driven client settings
//! - **Http**: request dispatch, auth header, status-to-error mapping
//! - **Services**: one module per API area (admin, auth, blog, booking, partner)
//! - **Slots**: time slot loading that ignores superseded responses

/// Configuration module for client settings
pub mod config;
/// Preconfigured HTTP dispatcher
pub mod http;
/// Typed wrappers for each API area
pub mod services;
/// Generation-guarded time slot loading
pub mod slots;

//! # Courtbook Core
//!
//! Client-side domain for the Courtbook court reservation site: catalog and
//! booking models, the booking selection store, the calendar click adapter,
//! session handling, route guards and the notification façade.
//!
//! Nothing in this crate performs I/O beyond the session storage backends;
//! HTTP lives in `courtbook-client`.

/// Calendar day-click adapter
pub mod calendar;
/// Error types shared by every Courtbook crate
pub mod errors;
/// Request generation counters for discarding superseded responses
pub mod generation;
/// Role-gated route decisions
pub mod guard;
/// Serializable catalog and booking models
pub mod models;
/// User-facing notification dispatch
pub mod notify;
/// Session token, role and persistence
pub mod session;
/// Booking selection store
pub mod store;

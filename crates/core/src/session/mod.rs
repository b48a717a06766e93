//! # Session
//!
//! The signed-in user's token and role, persisted under a single storage key
//! and read back when the application starts.

mod storage;
pub mod token;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::errors::{BookingError, BookingResult};

/// Storage key the session is persisted under.
pub const SESSION_STORAGE_KEY: &str = "courtbook.session";

/// Account role. The API is not consistent about casing, so every role string
/// is parsed through this type and compared as an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Partner,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Partner => "partner",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "partner" => Ok(Role::Partner),
            "customer" | "user" => Ok(Role::Customer),
            other => Err(BookingError::Validation(format!("unknown role: {other}"))),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        token::is_token_valid_at(&self.token, now)
    }
}

/// Current session plus the storage it is mirrored to.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Starts signed out without reading storage.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    /// Loads a previously persisted session.
    ///
    /// Unreadable or malformed data is logged and treated as signed out.
    pub fn rehydrate(storage: Arc<dyn SessionStorage>) -> Self {
        let session = match storage.load(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    info!(role = %session.role, "session restored");
                    Some(session)
                }
                Err(e) => {
                    warn!("discarding malformed stored session: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("failed to read stored session: {}", e);
                None
            }
        };

        Self {
            storage,
            current: RwLock::new(session),
        }
    }

    /// Stores and persists a new session.
    pub fn login(&self, token: impl Into<String>, role: Role) -> BookingResult<()> {
        let session = Session {
            token: token.into(),
            role,
        };
        let raw = serde_json::to_string(&session)
            .map_err(|e| BookingError::Storage(format!("cannot encode session: {e}")))?;
        self.storage.save(SESSION_STORAGE_KEY, &raw)?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        info!(%role, "signed in");
        Ok(())
    }

    /// Forgets the session in memory and in storage.
    pub fn logout(&self) -> BookingResult<()> {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.storage.remove(SESSION_STORAGE_KEY)?;
        info!("signed out");
        Ok(())
    }

    pub fn session(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|session| session.token)
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(|session| session.role)
    }

    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        self.session().is_some_and(|session| session.is_valid_at(now))
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }
}

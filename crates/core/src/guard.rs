use chrono::{DateTime, Utc};
use tracing::debug;

use crate::session::{Role, SessionStore};

/// Path anonymous or expired users are sent to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// No usable session
    RedirectToLogin,
    /// Signed in, but the role is not admitted
    Forbidden,
}

/// Decides whether the current session may open a screen.
///
/// Roles are matched exactly; an admin is only admitted where `Role::Admin`
/// is listed.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    allowed: Vec<Role>,
}

impl RouteGuard {
    /// An empty role list admits any signed-in user.
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn admin() -> Self {
        Self::new([Role::Admin])
    }

    pub fn partner() -> Self {
        Self::new([Role::Partner])
    }

    pub fn authenticated() -> Self {
        Self::new([])
    }

    pub fn admits(&self, role: Role) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&role)
    }

    pub fn check_at(&self, session: &SessionStore, now: DateTime<Utc>) -> GuardOutcome {
        let Some(current) = session.session() else {
            return GuardOutcome::RedirectToLogin;
        };

        if !current.is_valid_at(now) {
            debug!("stored token expired or unreadable");
            return GuardOutcome::RedirectToLogin;
        }

        if self.admits(current.role) {
            GuardOutcome::Allow
        } else {
            debug!(role = %current.role, allowed = ?self.allowed, "role not admitted");
            GuardOutcome::Forbidden
        }
    }

    pub fn check(&self, session: &SessionStore) -> GuardOutcome {
        self.check_at(session, Utc::now())
    }
}

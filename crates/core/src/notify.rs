//! # Notifications
//!
//! Single entry point for user-facing success/error/warning/info messages.
//! A renderer (toast area, status bar) is mounted while the UI is up; when
//! none is mounted the message goes to a blocking alert instead.

use std::io::{self, Write};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
            NotificationKind::Warning => "WARNING",
            NotificationKind::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

pub trait NotificationRenderer: Send + Sync {
    fn render(&self, notification: &Notification);
}

/// Blocking fallback used while no renderer is mounted.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr and flushes before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAlert;

impl AlertSink for StderrAlert {
    fn alert(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{message}");
        let _ = stderr.flush();
    }
}

pub struct Notifier {
    renderer: RwLock<Option<Arc<dyn NotificationRenderer>>>,
    fallback: Arc<dyn AlertSink>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Arc::new(StderrAlert))
    }
}

impl Notifier {
    pub fn new(fallback: Arc<dyn AlertSink>) -> Self {
        Self {
            renderer: RwLock::new(None),
            fallback,
        }
    }

    pub fn mount(&self, renderer: Arc<dyn NotificationRenderer>) {
        *self.renderer.write().unwrap_or_else(PoisonError::into_inner) = Some(renderer);
    }

    pub fn unmount(&self) {
        *self.renderer.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.renderer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.notify(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.notify(NotificationKind::Error, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Notification {
        self.notify(NotificationKind::Warning, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Notification {
        self.notify(NotificationKind::Info, message)
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };

        match kind {
            NotificationKind::Error => error!(id = %notification.id, "{}", notification.message),
            NotificationKind::Warning => warn!(id = %notification.id, "{}", notification.message),
            NotificationKind::Success | NotificationKind::Info => {
                info!(id = %notification.id, "{}", notification.message)
            }
        }

        let renderer = self
            .renderer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match renderer {
            Some(renderer) => renderer.render(&notification),
            None => self
                .fallback
                .alert(&format!("[{}] {}", kind.label(), notification.message)),
        }

        notification
    }
}

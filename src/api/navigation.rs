//! Navigation hook used for forced redirects. The gateway does not know how the
//! host application routes; it only asks the navigator to go somewhere.

use std::sync::{Mutex, PoisonError};

/// Login entry point used after the backend rejects the session.
pub const LOGIN_PATH: &str = "/login";
/// Where role guards send users who are logged in with the wrong role.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Keeps every requested path in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

use crate::api::{Navigator, LOGIN_PATH, UNAUTHORIZED_PATH};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Turns navigation requests into terminal hints. A CLI has no pages, so the
/// redirect is reported and remembered for the exit message.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    redirected_to: Mutex<Option<String>>,
}

impl TerminalNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn redirected_to(&self) -> Option<String> {
        self.redirected_to
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        warn!(path, "navigation requested");
        match path {
            LOGIN_PATH => eprintln!("Not logged in or session expired. Run `atlas login` first."),
            UNAUTHORIZED_PATH => eprintln!("You are not allowed to do that with this account."),
            other => eprintln!("-> {other}"),
        }
        *self
            .redirected_to
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(path.to_string());
    }
}

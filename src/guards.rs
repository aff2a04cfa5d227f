//! Route guards. They decide whether a view may be shown and redirect when it
//! may not. The backend still enforces access on every request.

use crate::{
    api::{Navigator, LOGIN_PATH, UNAUTHORIZED_PATH},
    session::{Profile, Role, SessionContext},
};
use thiserror::Error;

pub const ADMIN_HOME: &str = "/admin/dashboard";
pub const STUDENT_HOME: &str = "/student/dashboard";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("Not logged in")]
    NotAuthenticated,
    #[error("This action requires the {required} role, current role is {actual}")]
    WrongRole { required: Role, actual: Role },
}

/// Returns the current profile, or navigates to the login page.
///
/// # Errors
/// Returns `GuardError::NotAuthenticated` when no session is active.
pub fn require_authenticated(
    context: &SessionContext,
    navigator: &dyn Navigator,
) -> Result<Profile, GuardError> {
    context.profile().ok_or_else(|| {
        navigator.navigate(LOGIN_PATH);
        GuardError::NotAuthenticated
    })
}

/// # Errors
/// Returns `GuardError::NotAuthenticated` when logged out, or
/// `GuardError::WrongRole` after navigating to the unauthorized page.
pub fn require_role(
    context: &SessionContext,
    navigator: &dyn Navigator,
    role: Role,
) -> Result<Profile, GuardError> {
    let profile = require_authenticated(context, navigator)?;
    if profile.role == role {
        Ok(profile)
    } else {
        navigator.navigate(UNAUTHORIZED_PATH);
        Err(GuardError::WrongRole {
            required: role,
            actual: profile.role,
        })
    }
}

#[must_use]
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME,
        Role::Student => STUDENT_HOME,
    }
}

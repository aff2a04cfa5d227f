//! Session state for the logged-in user. [`SessionContext`] holds the state
//! shared with the gateway; [`SessionStore`] performs login, logout and the
//! one-time rehydration from durable storage. Tokens must never be logged.

mod context;
mod store;
mod types;

pub use context::{SessionContext, SESSION_KEYS, STUDENT_NUMBER_KEY, TOKEN_KEY, USER_KEY};
pub use store::{LoginError, SessionStore};
pub use types::{Identity, Profile, Role};

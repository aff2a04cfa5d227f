//! Outbound HTTP for the backend API. Feature clients go through [`Gateway`]
//! so base address handling, bearer tokens and the `401` teardown live in one
//! place.

mod errors;
mod gateway;
pub mod navigation;

pub use errors::ApiError;
pub use gateway::Gateway;
pub use navigation::{Navigator, RecordingNavigator, LOGIN_PATH, UNAUTHORIZED_PATH};

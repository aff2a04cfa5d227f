use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    /// The backend rejected the session token; the session has already been
    /// torn down when this is returned.
    #[error("Session expired. Please log in again.")]
    Unauthorized,
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_user_facing_wording() {
        let err = ApiError::Http {
            status: 404,
            message: "Course not found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): Course not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Network("down".into()).status(), None);
    }
}

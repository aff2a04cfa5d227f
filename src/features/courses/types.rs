use crate::{api::ApiError, features::require_fields};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub instructor: String,
}

/// Body for creating or updating a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseInput {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub instructor: String,
}

impl CourseInput {
    /// # Errors
    /// Returns `ApiError::Validation` when a text field is blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_fields(
            &[
                self.code.as_str(),
                self.title.as_str(),
                self.instructor.as_str(),
            ],
            "Please fill in all course fields.",
        )
    }

    #[must_use]
    pub(crate) fn trimmed(&self) -> Self {
        Self {
            code: self.code.trim().to_string(),
            title: self.title.trim().to_string(),
            credits: self.credits,
            instructor: self.instructor.trim().to_string(),
        }
    }
}

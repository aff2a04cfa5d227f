use crate::{api::ApiError, features::require_fields};
use serde::{Deserialize, Serialize};

/// A recorded grade. Named `ResultRecord` to keep clear of `std::result::Result`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: i64,
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub grade: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInput {
    pub student_number: String,
    pub course_code: String,
    pub grade: String,
}

impl ResultInput {
    /// # Errors
    /// Returns `ApiError::Validation` when a field is blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_fields(
            &[
                self.student_number.as_str(),
                self.course_code.as_str(),
                self.grade.as_str(),
            ],
            "Please fill in student number, course code, and grade.",
        )
    }

    #[must_use]
    pub(crate) fn trimmed(&self) -> Self {
        Self {
            student_number: self.student_number.trim().to_string(),
            course_code: self.course_code.trim().to_string(),
            grade: self.grade.trim().to_string(),
        }
    }
}

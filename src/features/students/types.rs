use crate::{
    api::ApiError,
    features::{require_email, require_fields},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub student_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub student_number: String,
}

impl StudentInput {
    /// # Errors
    /// Returns `ApiError::Validation` when a field is blank or the email is malformed.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_fields(
            &[
                self.name.as_str(),
                self.email.as_str(),
                self.student_number.as_str(),
            ],
            "Please fill in all student fields.",
        )?;
        require_email(&self.email)
    }

    #[must_use]
    pub(crate) fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            student_number: self.student_number.trim().to_string(),
        }
    }
}

//! Request and response types for auth calls. These carry passwords and
//! tokens, so none of them derive `Debug`.

use crate::session::Role;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Everything is optional so a partial answer is reported as malformed
/// instead of as a decode error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub name: Option<String>,
    pub student_number: Option<String>,
}

pub struct RegisterStudentRequest {
    pub name: String,
    pub email: String,
    pub student_number: String,
    pub password: SecretString,
}

impl fmt::Debug for RegisterStudentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterStudentRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("student_number", &self.student_number)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterStudentPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub student_number: &'a str,
    pub password: &'a str,
}

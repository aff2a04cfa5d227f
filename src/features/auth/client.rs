use crate::{
    api::{ApiError, Gateway},
    features::{
        auth::types::{RegisterStudentPayload, RegisterStudentRequest},
        require_email, require_fields,
    },
};
use secrecy::ExposeSecret;
use serde_json::Value;

/// Creates a student account with login credentials. Sent with the admin's
/// token; the backend decides whether the caller may do this.
///
/// # Errors
/// Returns `ApiError::Validation` for incomplete input, otherwise the gateway error.
pub async fn register_student(
    gateway: &Gateway,
    request: &RegisterStudentRequest,
) -> Result<(), ApiError> {
    require_fields(
        &[
            request.name.as_str(),
            request.email.as_str(),
            request.student_number.as_str(),
            request.password.expose_secret(),
        ],
        "Please fill in all fields.",
    )?;
    require_email(&request.email)?;

    let payload = RegisterStudentPayload {
        name: request.name.trim(),
        email: request.email.trim(),
        student_number: request.student_number.trim(),
        password: request.password.expose_secret(),
    };

    // The response body (if any) is not used.
    let _: Value = gateway
        .post("/api/auth/register-student", &payload)
        .await?;
    Ok(())
}

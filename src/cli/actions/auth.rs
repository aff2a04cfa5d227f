use crate::{
    features::auth::{register_student as register, RegisterStudentRequest},
    guards::home_path,
    portal::Portal,
    session::Role,
};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Login {
    pub email: String,
    pub password: SecretString,
}

/// # Errors
/// Returns the login failure; any previous session is kept.
pub async fn login(portal: &Portal, login: Login) -> Result<()> {
    let profile = portal.session().login(&login.email, &login.password).await?;

    println!("Logged in as {} <{}> ({})", profile.name, profile.email, profile.role);
    if let Some(number) = &profile.student_number {
        println!("Student number: {number}");
    }
    println!("Home: {}", home_path(profile.role));
    Ok(())
}

pub fn logout(portal: &Portal) {
    portal.session().logout();
    println!("Logged out.");
}

/// # Errors
/// Returns an error when no session is active.
pub fn whoami(portal: &Portal) -> Result<()> {
    let profile = portal.require_authenticated()?;

    println!("{} <{}>", profile.name, profile.email);
    println!("Role: {}", profile.role);
    if let Some(number) = &profile.student_number {
        println!("Student number: {number}");
    }
    Ok(())
}

/// # Errors
/// Returns an error for non-admins, invalid input or a rejected request.
pub async fn register_student(portal: &Portal, request: &RegisterStudentRequest) -> Result<()> {
    portal.require_role(Role::Admin)?;
    register(portal.gateway(), request).await?;

    println!(
        "Student account created for {} ({}).",
        request.name.trim(),
        request.student_number.trim()
    );
    Ok(())
}

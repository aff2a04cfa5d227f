//! Identity types for the authenticated user. The token is wrapped in a
//! `SecretString`, so `Debug` output never contains it.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[serde(alias = "admin")]
    Admin,
    #[serde(alias = "student")]
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(formatter, "ADMIN"),
            Role::Student => write!(formatter, "STUDENT"),
        }
    }
}

/// Descriptive attributes of the logged-in user. `student_number` is only ever
/// set for [`Role::Student`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        student_number: Option<String>,
    ) -> Self {
        let student_number = match role {
            Role::Student => student_number
                .map(|number| number.trim().to_string())
                .filter(|number| !number.is_empty()),
            Role::Admin => None,
        };

        Self {
            name: name.into(),
            email: email.into(),
            role,
            student_number,
        }
    }

    /// Re-applies the constructor rules to a profile read back from storage.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        Self::new(self.name, self.email, self.role, self.student_number)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A profile together with its bearer token. Holding both in one value keeps
/// the session from ever carrying one without the other.
#[derive(Clone, Debug)]
pub struct Identity {
    pub profile: Profile,
    pub token: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn admin_profile_drops_student_number() {
        let profile = Profile::new("Admin A", "a@u.edu", Role::Admin, Some("STU001".into()));
        assert_eq!(profile.student_number, None);
        assert!(profile.is_admin());
    }

    #[test]
    fn student_profile_keeps_trimmed_number() {
        let profile = Profile::new("S", "s@u.edu", Role::Student, Some(" STU001 ".into()));
        assert_eq!(profile.student_number.as_deref(), Some("STU001"));

        let blank = Profile::new("S", "s@u.edu", Role::Student, Some("   ".into()));
        assert_eq!(blank.student_number, None);
    }

    #[test]
    fn profile_uses_camel_case_layout() -> Result<()> {
        let profile = Profile::new("S", "s@u.edu", Role::Student, Some("STU001".into()));
        let value = serde_json::to_value(&profile)?;
        assert_eq!(
            value,
            json!({
                "name": "S",
                "email": "s@u.edu",
                "role": "STUDENT",
                "studentNumber": "STU001"
            })
        );

        let admin = Profile::new("A", "a@u.edu", Role::Admin, None);
        let value = serde_json::to_value(&admin)?;
        assert!(value.get("studentNumber").is_none());
        Ok(())
    }

    #[test]
    fn role_accepts_lowercase() -> Result<()> {
        let role: Role = serde_json::from_str("\"student\"")?;
        assert_eq!(role, Role::Student);
        assert!(serde_json::from_str::<Role>("\"GUEST\"").is_err());
        Ok(())
    }
}

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static STUDENT_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}-\d{5}$").expect("student number pattern should compile")
});

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoginError {
    #[error("Please enter a valid student number (e.g., 22-XXXXX).")]
    InvalidStudentNumber,
    #[error("Please enter both ID and password.")]
    MissingFields,
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

//
// ─── ROLE ──────────────────────────────────────────────────────────────────────
//

/// Who is signing in. Only students have a validated ID format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Professor,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
        }
    }

    /// Route slug, e.g. `/login/student`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Role {
    type Err = LoginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "professor" => Ok(Role::Professor),
            other => Err(LoginError::UnknownRole(other.to_string())),
        }
    }
}

//
// ─── STUDENT NUMBER ────────────────────────────────────────────────────────────
//

/// Student number in the `NN-NNNNN` form, e.g. `22-00451`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentNumber(String);

impl StudentNumber {
    /// Validate a raw student number. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::InvalidStudentNumber` unless the trimmed input is
    /// exactly two digits, a dash, and five digits.
    pub fn parse(raw: &str) -> Result<Self, LoginError> {
        let trimmed = raw.trim();
        if STUDENT_NUMBER_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(LoginError::InvalidStudentNumber)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── LOGIN ─────────────────────────────────────────────────────────────────────
//

/// Raw form input from a login screen.
#[derive(Clone, Debug)]
pub struct LoginDraft {
    pub role: Role,
    pub id: String,
    pub password: String,
}

/// Accepted login. There is no account backend, so this only carries identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    role: Role,
    id: String,
}

impl LoginDraft {
    #[must_use]
    pub fn new(role: Role, id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            role,
            id: id.into(),
            password: password.into(),
        }
    }

    /// Validate the draft.
    ///
    /// The student-number format is checked before the empty-field check, so a
    /// blank student ID reports `InvalidStudentNumber`.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::InvalidStudentNumber` for a malformed student ID and
    /// `LoginError::MissingFields` when the ID or password is blank.
    pub fn validate(&self) -> Result<Credentials, LoginError> {
        let id = self.id.trim();

        if self.role == Role::Student {
            StudentNumber::parse(id)?;
        }

        if id.is_empty() || self.password.trim().is_empty() {
            return Err(LoginError::MissingFields);
        }

        Ok(Credentials {
            role: self.role,
            id: id.to_string(),
        })
    }
}

impl Credentials {
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_number_accepts_exact_pattern() {
        let number = StudentNumber::parse(" 22-00451 ").unwrap();
        assert_eq!(number.as_str(), "22-00451");
    }

    #[test]
    fn student_number_rejects_near_misses() {
        for raw in ["2-00451", "22-0045", "22-004510", "22_00451", "ab-cdefg", "22-00451x", ""] {
            assert_eq!(
                StudentNumber::parse(raw),
                Err(LoginError::InvalidStudentNumber),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn student_login_requires_valid_number() {
        let draft = LoginDraft::new(Role::Student, "12345", "secret");
        assert_eq!(draft.validate(), Err(LoginError::InvalidStudentNumber));
    }

    #[test]
    fn student_login_requires_password() {
        let draft = LoginDraft::new(Role::Student, "22-12345", "   ");
        assert_eq!(draft.validate(), Err(LoginError::MissingFields));
    }

    #[test]
    fn professor_login_skips_number_format() {
        let draft = LoginDraft::new(Role::Professor, " prof-ada ", "pw");
        let creds = draft.validate().unwrap();
        assert_eq!(creds.role(), Role::Professor);
        assert_eq!(creds.id(), "prof-ada");
    }

    #[test]
    fn professor_login_requires_id() {
        let draft = LoginDraft::new(Role::Professor, "", "pw");
        assert_eq!(draft.validate(), Err(LoginError::MissingFields));
    }

    #[test]
    fn role_round_trips_through_slug() {
        for role in [Role::Student, Role::Professor] {
            assert_eq!(role.slug().parse::<Role>().unwrap(), role);
        }
        assert!("janitor".parse::<Role>().is_err());
    }
}

//! Intake checks for new accounts.
//!
//! [`validate_registration`] covers every rule that can be decided from the
//! request alone. Username and email uniqueness need the store and are checked
//! by the auth service afterwards.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::auth::{MAX_PASSWORD_BYTES, MIN_PASSWORD_LENGTH, PHONE_DIGITS};
use crate::models::Department;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern defined in code")
    })
}

/// Raw registration body. Every field is optional on the wire so that an
/// omission is reported as a validation failure rather than a parse error.
#[derive(Default, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub username: Option<String>,
    /// Accepts a JSON number as well as a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

/// A registration that passed every request-local check.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub username: String,
    pub phone: String,
    pub department: Department,
    /// Trimmed and lowercased
    pub email: Option<String>,
    pub password: String,
}

impl std::fmt::Debug for ValidatedRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedRegistration")
            .field("username", &self.username)
            .field("phone", &self.phone)
            .field("department", &self.department)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please fill in all required fields: {}.", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Phone number must be exactly 10 digits.")]
    InvalidPhone,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Password must be at most 72 bytes long.")]
    PasswordTooLong,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid department selection.")]
    InvalidDepartment,

    #[error("Username already exists. Please choose another.")]
    DuplicateUsername,

    #[error("Email already registered.")]
    DuplicateEmail,
}

/// Run the request-local checks in order, stopping at the first failure.
pub fn validate_registration(
    request: RegistrationRequest,
) -> Result<ValidatedRegistration, RegistrationError> {
    let username = trimmed(request.username);
    let phone = trimmed(request.phone);
    let department = trimmed(request.department);
    let password = request.password.filter(|p| !p.is_empty());
    let confirm_password = request.confirm_password.filter(|p| !p.is_empty());

    let missing: Vec<&'static str> = [
        ("username", username.is_none()),
        ("phone", phone.is_none()),
        ("department", department.is_none()),
        ("password", password.is_none()),
        ("confirm_password", confirm_password.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    let (Some(username), Some(phone), Some(department), Some(password), Some(confirm_password)) =
        (username, phone, department, password, confirm_password)
    else {
        return Err(RegistrationError::MissingFields(missing));
    };

    if !is_valid_phone(&phone) {
        return Err(RegistrationError::InvalidPhone);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(RegistrationError::PasswordTooShort);
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(RegistrationError::PasswordTooLong);
    }

    if password != confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }

    let email = trimmed(request.email);
    if let Some(email) = &email
        && !is_valid_email(email)
    {
        return Err(RegistrationError::InvalidEmail);
    }

    let department: Department = department
        .parse()
        .map_err(|_| RegistrationError::InvalidDepartment)?;

    Ok(ValidatedRegistration {
        username,
        phone,
        department,
        email: email.map(|e| normalize_email(&e)),
        password,
    })
}

/// Exactly ten ASCII digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain.tld`, no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

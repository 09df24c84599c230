use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

use super::dto::{LoginRequest, RegisterRequest};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex =
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Checks a registration form field by field: everything required, email
/// well-formed, age a whole number between 13 and 120. Returns the parsed
/// age; all offending fields are reported at once, before any storage
/// call.
pub fn validate_registration(payload: &RegisterRequest) -> Result<i32, ApiError> {
    let mut bad_fields = Vec::new();

    if payload.username.trim().is_empty() {
        bad_fields.push("username");
    }
    if payload.email.trim().is_empty() || !is_valid_email(payload.email.trim()) {
        bad_fields.push("email");
    }
    if payload.password.trim().is_empty() {
        bad_fields.push("password");
    }
    if payload.full_name.trim().is_empty() {
        bad_fields.push("full_name");
    }

    let age = match payload.age.trim().parse::<i32>() {
        Ok(v) if (13..=120).contains(&v) => Some(v),
        _ => None,
    };
    if age.is_none() {
        bad_fields.push("age");
    }

    match age {
        Some(age) if bad_fields.is_empty() => Ok(age),
        _ => Err(ApiError::Validation(bad_fields)),
    }
}

/// Login only requires both fields to be present; the credential check
/// itself happens against the stored hash.
pub fn validate_login(payload: &LoginRequest) -> Result<(), ApiError> {
    let mut bad_fields = Vec::new();

    if payload.username.trim().is_empty() {
        bad_fields.push("username");
    }
    if payload.password.trim().is_empty() {
        bad_fields.push("password");
    }

    if bad_fields.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(bad_fields))
    }
}

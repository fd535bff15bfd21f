//! Input validation for registration and profile updates.

use error_types::{Result, ServiceError};
use once_cell::sync::Lazy;
use regex::Regex;

const LOGIN_MIN_LEN: usize = 3;
const LOGIN_MAX_LEN: usize = 80;
const PASSWORD_MIN_LEN: usize = 6;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Hardcoded pattern, a compile-time constant in practice.
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid - fix source code")
});

pub fn validate_login(login: &str) -> Result<()> {
    let len = login.chars().count();
    if len < LOGIN_MIN_LEN || len > LOGIN_MAX_LEN {
        return Err(ServiceError::invalid_argument(format!(
            "login must be between {} and {} characters",
            LOGIN_MIN_LEN, LOGIN_MAX_LEN
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() || email.len() > 254 || !EMAIL_REGEX.is_match(email) {
        return Err(ServiceError::invalid_argument("invalid email address"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ServiceError::invalid_argument(format!(
            "password must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }
    Ok(())
}

//! Validation rules applied when opening accounts and moving money.
use std::sync::OnceLock;

use regex::Regex;

use crate::bank::types::Money;

/// Pattern an email address must match. Addresses are lowercased before
/// they reach this check, so uppercase letters are rejected here.
const EMAIL_PATTERN: &str = "^[a-z0-9+_.-]+@[a-z0-9.-]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Checks an email address against the accepted pattern.
pub fn valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Checks an initial balance, which may be zero but never negative.
pub fn is_non_negative(amount: Money) -> bool {
    amount >= 0
}

/// Checks a deposit or withdrawal amount, which must be strictly positive.
pub fn is_positive(amount: Money) -> bool {
    amount > 0
}

//! Registration password rules, checked before any request is made.

use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 8;

/// A single password requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    Uppercase,
    Lowercase,
    Digit,
    MinLength,
}

impl PasswordRule {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Uppercase => "Password must contain at least one uppercase letter",
            Self::Lowercase => "Password must contain at least one lowercase letter",
            Self::Digit => "Password must contain at least one number",
            Self::MinLength => "Password must be at least 8 characters long",
        }
    }

    fn is_met_by(&self, password: &str) -> bool {
        match self {
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LEN,
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

const RULES: [PasswordRule; 4] = [
    PasswordRule::Uppercase,
    PasswordRule::Lowercase,
    PasswordRule::Digit,
    PasswordRule::MinLength,
];

/// Every rule `password` violates, in display order.
pub fn validate_password(password: &str) -> Result<(), Vec<PasswordRule>> {
    let violations: Vec<PasswordRule> = RULES
        .into_iter()
        .filter(|rule| !rule.is_met_by(password))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

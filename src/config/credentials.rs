//! Bearer token resolution.
//!
//! The token is read from the environment once at startup. A missing token
//! is not fatal: requests go out with an empty bearer and the API answers
//! with a 401 that the UI surfaces like any other fetch error.

use std::fmt;

/// A token that prints as bullets. Only [`SecureString::expose`] yields the
/// real value, and the client calls it once per request.
#[derive(Clone, Default)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First and last six characters, for logs. Short values are fully masked.
    pub fn preview(&self) -> String {
        if self.0.is_empty() {
            return "undefined".to_string();
        }
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 12 {
            return "•".repeat(chars.len());
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 6..].iter().collect();
        format!("{head}...{tail}")
    }
}

const MASK: &str = "••••••••";

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecureString").field(&format_args!("{MASK}")).finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

/// Read the bearer token from `env_var`, trimmed.
///
/// Absent or blank values log a warning and resolve to an empty token.
pub fn resolve_token(env_var: &str) -> SecureString {
    let value = std::env::var(env_var).unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::warn!(env_var = %env_var, "API token is missing, sending empty bearer token");
        return SecureString::default();
    }
    SecureString::new(trimmed.to_string())
}

//! DTOs for the alias creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Characters allowed in a caller-chosen alias. Empty means "generate one".
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Aliases that would shadow fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Request to store a destination URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The destination URL (must be an absolute URL).
    #[validate(url(message = "field url is not a valid URL"))]
    pub url: String,

    /// Optional alias; omitted or empty lets the service generate one.
    #[validate(length(max = 64, message = "field alias must be at most 64 characters"))]
    #[validate(regex(
        path = "*ALIAS_REGEX",
        message = "field alias may only contain letters, digits, '-' and '_'"
    ))]
    #[validate(custom(function = "not_reserved"))]
    pub alias: Option<String>,
}

impl SaveRequest {
    pub fn new(url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            url: url.into(),
            alias,
        }
    }
}

fn not_reserved(alias: &str) -> Result<(), ValidationError> {
    if RESERVED_ALIASES.contains(&alias) {
        return Err(ValidationError::new("reserved")
            .with_message(Cow::Borrowed("field alias is reserved")));
    }
    Ok(())
}

/// Response for a stored alias.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
    pub url: String,
}

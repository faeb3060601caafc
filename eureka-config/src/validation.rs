// Configuration validation

use crate::{ConfigError, Result};
use std::fmt::Display;

/// Implemented by settings that can check themselves after loading.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Field-level checks. Each takes the dotted field path used in the error.
pub struct ConfigValidator;

fn ensure(ok: bool, message: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(message()))
    }
}

impl ConfigValidator {
    /// Rejects empty and whitespace-only values.
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        ensure(!value.trim().is_empty(), || format!("{} cannot be empty", field))
    }

    /// Inclusive range check.
    pub fn in_range<T: PartialOrd + Display>(value: T, min: T, max: T, field: &str) -> Result<()> {
        ensure(value >= min && value <= max, || {
            format!("{} must be between {} and {}, got {}", field, min, max, value)
        })
    }

    /// Absolute `http` or `https` URL with a host.
    pub fn is_url(value: &str, field: &str) -> Result<()> {
        let usable = url::Url::parse(value)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
            .unwrap_or(false);
        ensure(usable, || {
            format!("{} must be an http(s) URL, got {:?}", field, value)
        })
    }

    pub fn is_port(value: u16, field: &str) -> Result<()> {
        ensure(value != 0, || format!("{} must be a non-zero port", field))
    }
}

//! This module defines logic to serialize/deserialize supply network in pragmatic json format
//! and write routing results.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod network;
pub mod results;

/// Represents a geocoordinate with latitude and longitude.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Location {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Location {
    /// Creates a new `[Location]`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: &str, cause: String, action: &str) -> Self {
        Self { code: code.to_string(), cause, action: action.to_string(), details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: &str, cause: String, action: &str, details: String) -> Self {
        Self { details: Some(details), ..Self::new(code, cause, action) }
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)?;

        if let Some(details) = &self.details {
            write!(f, " details: '{details}'")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormatError {}

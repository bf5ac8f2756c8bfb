//! Shared utilities for MCP operations
//!
//! Common error mapping, validation and formatting used across tool
//! handlers so every operation behaves the same way at the boundary.

use rmcp::Error as McpError;

use crate::error::{Result, TrackbridgeError};

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a TrackbridgeError to the appropriate MCP error.
    ///
    /// User-addressable failures (unknown ids, bad configuration) map to
    /// invalid_params; transport and serialization failures map to
    /// internal_error.
    pub fn handle_error(error: TrackbridgeError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match error {
            TrackbridgeError::NotFound { entity, id } => {
                McpError::invalid_params(format!("{entity} not found: {id}"), None)
            }
            TrackbridgeError::Config(msg) => {
                McpError::invalid_params(format!("Configuration error: {msg}"), None)
            }
            TrackbridgeError::Api(msg) => {
                McpError::internal_error(format!("Tracker API error: {msg}"), None)
            }
            TrackbridgeError::Http(err) => {
                McpError::internal_error(format!("HTTP error: {err}"), None)
            }
            TrackbridgeError::Json(err) => {
                McpError::internal_error(format!("JSON error: {err}"), None)
            }
            TrackbridgeError::Io(err) => McpError::internal_error(format!("IO error: {err}"), None),
            TrackbridgeError::Other(msg) => McpError::internal_error(msg, None),
        }
    }

    /// Handle results with consistent error mapping
    pub fn handle_result<T>(
        result: Result<T>,
        operation: &str,
    ) -> std::result::Result<T, McpError> {
        result.map_err(|e| Self::handle_error(e, operation))
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Validate string is not empty or whitespace
    pub fn validate_not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(TrackbridgeError::Other(format!(
                "{} cannot be empty",
                capitalize_first_letter(field)
            )));
        }
        Ok(())
    }

    /// Validate string length
    pub fn validate_string_length(value: &str, field: &str, max_length: usize) -> Result<()> {
        if value.len() > max_length {
            return Err(TrackbridgeError::Other(format!(
                "{} too long: {} characters (max: {})",
                capitalize_first_letter(field),
                value.len(),
                max_length
            )));
        }
        Ok(())
    }

    /// Validate a priority value is within the tracker's 0..=4 range
    pub fn validate_priority(priority: u8) -> Result<()> {
        if priority > 4 {
            return Err(TrackbridgeError::Other(format!(
                "Priority must be between 0 (none) and 4 (low), got {priority}"
            )));
        }
        Ok(())
    }

    /// Validate a display color of the form `#rrggbb`
    pub fn validate_color(color: &str) -> Result<()> {
        let valid = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(TrackbridgeError::Other(format!(
                "Color must be of the form #rrggbb, got {color}"
            )));
        }
        Ok(())
    }
}

fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Formatting utilities for consistent MCP responses
pub struct McpFormatter;

impl McpFormatter {
    /// Format a timestamp in a consistent way
    pub fn format_timestamp(timestamp: chrono::DateTime<chrono::Utc>) -> String {
        timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    /// Create a standardized summary for list operations
    pub fn format_list_summary(item_name: &str, count: usize, has_more: bool) -> String {
        let plural_name = if count == 1 {
            item_name.to_string()
        } else {
            format!("{item_name}s")
        };
        if has_more {
            format!("Showing first {count} {plural_name}")
        } else {
            format!("Found {count} {plural_name}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validation_not_empty() {
        assert!(McpValidation::validate_not_empty("content", "field").is_ok());
        assert!(McpValidation::validate_not_empty("", "field").is_err());
        assert!(McpValidation::validate_not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_validation_string_length() {
        assert!(McpValidation::validate_string_length("short", "field", 10).is_ok());
        assert!(McpValidation::validate_string_length("this is too long", "field", 10).is_err());
    }

    #[test]
    fn test_validation_priority() {
        for p in 0..=4 {
            assert!(McpValidation::validate_priority(p).is_ok());
        }
        assert!(McpValidation::validate_priority(5).is_err());
    }

    #[test]
    fn test_validation_color() {
        assert!(McpValidation::validate_color("#eb5757").is_ok());
        assert!(McpValidation::validate_color("eb5757").is_err());
        assert!(McpValidation::validate_color("#eb57").is_err());
        assert!(McpValidation::validate_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_not_found_maps_to_invalid_params() {
        let err = McpErrorHandler::handle_error(
            TrackbridgeError::not_found("issue", "iss_9"),
            "get issue",
        );
        assert!(err.message.contains("issue not found: iss_9"));
    }

    #[test]
    fn test_formatter_timestamp() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(McpFormatter::format_timestamp(ts), "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_formatter_list_summary() {
        assert_eq!(
            McpFormatter::format_list_summary("issue", 1, false),
            "Found 1 issue"
        );
        assert_eq!(
            McpFormatter::format_list_summary("issue", 5, true),
            "Showing first 5 issues"
        );
    }
}

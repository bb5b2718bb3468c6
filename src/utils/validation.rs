use crate::utils::error::{ContentError, Result};
use chrono::{DateTime, Utc};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ContentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ContentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Repository paths are absolute and slash separated.
pub fn validate_content_path(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if !path.starts_with('/') {
        return Err(ContentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Content paths must be absolute (start with '/')".to_string(),
        });
    }

    if path.split('/').any(|segment| segment == "..") {
        return Err(ContentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Content paths cannot contain '..' segments".to_string(),
        });
    }

    Ok(())
}

pub fn validate_timestamp(field_name: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ContentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected an RFC 3339 timestamp: {}", e),
        })
}

pub fn validate_log_level(field_name: &str, value: &str) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&value) {
        return Err(ContentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid levels: {}", LEVELS.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ContentError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_path() {
        assert!(validate_content_path("render.components", "/content/site/home").is_ok());
        assert!(validate_content_path("render.components", "").is_err());
        assert!(validate_content_path("render.components", "content/site").is_err());
        assert!(validate_content_path("render.components", "/content/../etc").is_err());
    }

    #[test]
    fn test_validate_timestamp() {
        let parsed = validate_timestamp("render.evaluation_time", "2024-05-01T12:00:00+02:00")
            .unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T10:00:00+00:00");
        assert!(validate_timestamp("render.evaluation_time", "yesterday").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("monitoring.log_level", "debug").is_ok());
        assert!(validate_log_level("monitoring.log_level", "loud").is_err());
    }
}

use crate::utils::error::{PredictionsError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(PredictionsError::validation(
            field_name,
            url_str,
            "URL cannot be empty",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(PredictionsError::validation(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(PredictionsError::validation(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PredictionsError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Non-empty and shaped like a UUID (any case).
pub fn validate_uuid(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if !UUID_PATTERN.is_match(value) {
        return Err(PredictionsError::validation(
            field_name,
            value,
            "Value must be a UUID",
        ));
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(PredictionsError::validation(
            field_name,
            value,
            format!("Value must be at most {} characters", max),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PredictionsError::validation(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PredictionsError::MissingField {
        field: field_name.to_string(),
    })
}

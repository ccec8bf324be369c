use crate::domain::model::FieldError;
use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,63}$",
        )
        .expect("email pattern is a valid regex")
    })
}

fn body_loc(field: &str) -> [&str; 2] {
    ["body", field]
}

/// Returns the value when it is a JSON string; `missing` or `string_type` otherwise.
pub fn check_required<'a>(
    field: &str,
    value: &'a Option<serde_json::Value>,
) -> std::result::Result<&'a str, FieldError> {
    match value {
        None => Err(FieldError::new(&body_loc(field), "Field required", "missing")),
        Some(v) => v.as_str().ok_or_else(|| {
            FieldError::new(
                &body_loc(field),
                "Input should be a valid string",
                "string_type",
            )
        }),
    }
}

/// Length bounds are inclusive and counted in characters, not bytes.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Option<FieldError> {
    let len = value.chars().count();
    if len < min {
        let unit = if min == 1 { "character" } else { "characters" };
        return Some(FieldError::new(
            &body_loc(field),
            format!("String should have at least {} {}", min, unit),
            "string_too_short",
        ));
    }
    if len > max {
        let unit = if max == 1 { "character" } else { "characters" };
        return Some(FieldError::new(
            &body_loc(field),
            format!("String should have at most {} {}", max, unit),
            "string_too_long",
        ));
    }
    None
}

pub fn check_email(field: &str, value: &str) -> Option<FieldError> {
    let reason = if value.matches('@').count() != 1 {
        Some("The email address is not valid. It must have exactly one @-sign.")
    } else if value.len() > MAX_EMAIL_LEN {
        Some("The email address is too long.")
    } else {
        let local = value.split('@').next().unwrap_or_default();
        if local.is_empty() {
            Some("There must be something before the @-sign.")
        } else if local.len() > MAX_LOCAL_PART_LEN {
            Some("The email address is too long before the @-sign.")
        } else if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            Some("The email address contains a misplaced period.")
        } else if !email_pattern().is_match(value) {
            Some("The email address is not valid.")
        } else {
            None
        }
    };

    reason.map(|r| {
        FieldError::new(
            &body_loc(field),
            format!("value is not a valid email address: {}", r),
            "value_error",
        )
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(PortfolioError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

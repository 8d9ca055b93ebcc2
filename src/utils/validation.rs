use crate::utils::error::{Result, SmokeError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SmokeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 端點必須是以 `/` 開頭的相對路徑
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    if !endpoint.starts_with('/') {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: endpoint.to_string(),
            reason: "Endpoint must start with '/'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("checks.endpoint", "/api/health").is_ok());
        assert!(validate_endpoint("checks.endpoint", "api/health").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("threshold", 80.0, 0.0, 100.0).is_ok());
        assert!(validate_range("threshold", 120.0, 0.0, 100.0).is_err());
        assert!(validate_range("timeout", 0_u64, 1, 600).is_err());
        assert!(validate_range("threshold", 100.0, 0.0, 100.0).is_ok());
    }

    #[test]
    fn test_validate_range_rejects_nan() {
        let err = validate_range("threshold", f64::NAN, 0.0, 100.0).unwrap_err();
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("token", "demo-token").is_ok());
        assert!(validate_non_empty_string("token", "   ").is_err());
    }
}

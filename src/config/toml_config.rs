use crate::domain::model::{HttpMethod, TestCase};
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{validate_endpoint, validate_non_empty_string, validate_range};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: Option<ServiceConfig>,
    pub run: Option<RunConfig>,
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub preview_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub threshold: Option<f64>,
    pub suites: Option<Vec<String>>,
    pub report_path: Option<String>,
    pub monitor: Option<bool>,
}

/// 自訂檢查，對應 `[[checks]]` 區塊
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub name: String,
    #[serde(default = "default_method")]
    pub method: HttpMethod,
    pub endpoint: String,
    #[serde(default = "default_status")]
    pub expected_status: u16,
    pub body: Option<serde_json::Value>,
    pub query: Option<serde_json::Value>,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub expect_fields: Vec<String>,
}

fn default_method() -> HttpMethod {
    HttpMethod::Get
}

fn default_status() -> u16 {
    200
}

impl CheckConfig {
    pub fn to_test_case(&self) -> TestCase {
        TestCase {
            name: self.name.clone(),
            method: self.method,
            endpoint: self.endpoint.clone(),
            expected_status: self.expected_status,
            data: if self.method.sends_body() {
                self.body.clone()
            } else {
                self.query.clone()
            },
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }

    pub fn validate(&self, index: usize) -> Result<()> {
        validate_non_empty_string(&format!("checks[{}].name", index), &self.name)?;
        validate_endpoint(&format!("checks[{}].endpoint", index), &self.endpoint)?;
        validate_range(
            &format!("checks[{}].expected_status", index),
            self.expected_status,
            100,
            599,
        )?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range(&format!("checks[{}].timeout_seconds", index), timeout, 1, 600)?;
        }

        // GET/DELETE 只送 query，POST/PUT 只送 body
        let misplaced = if self.method.sends_body() {
            self.query.as_ref().map(|_| "query")
        } else {
            self.body.as_ref().map(|_| "body")
        };
        if let Some(field) = misplaced {
            return Err(SmokeError::InvalidConfigValueError {
                field: format!("checks[{}].{}", index, field),
                value: self.method.to_string(),
                reason: format!("'{}' is not sent with {} requests", field, self.method),
            });
        }
        Ok(())
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SmokeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REGENMED_TOKEN})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SmokeError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

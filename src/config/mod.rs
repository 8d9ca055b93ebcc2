#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::summary::DEFAULT_THRESHOLD;
use crate::core::RunnerSettings;
use crate::scenarios::SUITE_NAMES;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use std::path::PathBuf;
use toml_config::{CheckConfig, TomlConfig};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN: &str = "demo-token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// 合併預設值、TOML 檔案與命令列後的最終設定
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub base_url: String,
    pub token: String,
    /// `None` keeps each suite's built-in timeouts
    pub timeout_secs: Option<u64>,
    pub preview_chars: usize,
    pub threshold: f64,
    pub suites: Vec<String>,
    pub checks: Vec<CheckConfig>,
    pub report_path: Option<PathBuf>,
    pub monitor: bool,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            timeout_secs: None,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            threshold: DEFAULT_THRESHOLD,
            suites: Vec::new(),
            checks: Vec::new(),
            report_path: None,
            monitor: false,
        }
    }
}

impl SmokeConfig {
    pub fn apply_file(mut self, file: TomlConfig) -> Self {
        if let Some(service) = file.service {
            if let Some(base_url) = service.base_url {
                self.base_url = base_url;
            }
            if let Some(token) = service.token {
                self.token = token;
            }
            if let Some(timeout) = service.timeout_seconds {
                self.timeout_secs = Some(timeout);
            }
            if let Some(preview) = service.preview_chars {
                self.preview_chars = preview;
            }
        }
        if let Some(run) = file.run {
            if let Some(threshold) = run.threshold {
                self.threshold = threshold;
            }
            if let Some(suites) = run.suites {
                self.suites = suites;
            }
            if let Some(path) = run.report_path {
                self.report_path = Some(PathBuf::from(path));
            }
            if let Some(monitor) = run.monitor {
                self.monitor = monitor;
            }
        }
        self.checks = file.checks;
        self
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(token) = &cli.token {
            self.token = token.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = Some(timeout);
        }
        if let Some(preview) = cli.preview_chars {
            self.preview_chars = preview;
        }
        if let Some(threshold) = cli.threshold {
            self.threshold = threshold;
        }
        if !cli.suites.is_empty() {
            self.suites = cli.suites.clone();
        }
        if let Some(report) = &cli.report {
            self.report_path = Some(report.clone());
        }
        self.monitor = self.monitor || cli.monitor;
        self
    }

    /// 載入 `--config` 指定的檔案（若有）並套用命令列覆蓋
    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = &cli.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            config = config.apply_file(TomlConfig::from_file(path)?);
        }
        Ok(config.apply_cli(cli))
    }

    /// Suites in execution order; an empty selection means every suite.
    pub fn selected_suites(&self) -> Vec<String> {
        if self.suites.is_empty() {
            SUITE_NAMES.iter().map(|s| s.to_string()).collect()
        } else {
            self.suites.clone()
        }
    }
}

impl RunnerSettings for SmokeConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn default_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn timeout_override_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    fn preview_chars(&self) -> usize {
        self.preview_chars
    }
}

impl Validate for SmokeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("token", &self.token)?;
        if let Some(timeout) = self.timeout_secs {
            validate_range("timeout", timeout, 1, 600)?;
        }
        validate_range("preview_chars", self.preview_chars, 1, 100_000)?;
        validate_range("threshold", self.threshold, 0.0, 100.0)?;

        for suite in &self.suites {
            if !SUITE_NAMES.contains(&suite.as_str()) {
                return Err(SmokeError::InvalidConfigValueError {
                    field: "suites".to_string(),
                    value: suite.clone(),
                    reason: format!("Unknown suite. Valid suites: {}", SUITE_NAMES.join(", ")),
                });
            }
        }

        for (index, check) in self.checks.iter().enumerate() {
            check.validate(index)?;
        }

        if let Some(path) = &self.report_path {
            validate_path("report", &path.to_string_lossy())?;
        }

        Ok(())
    }
}

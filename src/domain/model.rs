use crate::utils::error::ErrorCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// GET/DELETE 的資料放在查詢字串，其餘放在 JSON body
    pub fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A single request the runner should issue.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub expected_status: u16,
    pub data: Option<Value>,
    pub timeout: Option<Duration>,
}

impl TestCase {
    pub fn get(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            expected_status: 200,
            data: None,
            timeout: None,
        }
    }

    pub fn post(name: impl Into<String>, endpoint: impl Into<String>, body: Value) -> Self {
        Self {
            name: name.into(),
            method: HttpMethod::Post,
            endpoint: endpoint.into(),
            expected_status: 200,
            data: Some(body),
            timeout: None,
        }
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.data = Some(query);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureInfo {
    pub category: ErrorCategory,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestOutcome {
    pub name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub passed: bool,
    pub expected_status: u16,
    pub status: Option<u16>,
    pub elapsed_ms: u64,
    pub failure: Option<FailureInfo>,
}

/// 整體執行結果
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tests_run: usize,
    pub tests_passed: usize,
    pub tests_skipped: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<TestOutcome>,
}

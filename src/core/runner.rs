use crate::core::RunnerSettings;
use crate::domain::model::{FailureInfo, HttpMethod, RunSummary, TestCase, TestOutcome};
use crate::utils::error::{Result, SmokeError};
use crate::utils::preview::{json_preview, truncate};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::{Duration, Instant};

/// 對遠端服務逐一發送請求並統計通過數
pub struct TestRunner {
    client: Client,
    base_url: String,
    default_timeout: Duration,
    timeout_override: Option<Duration>,
    preview_chars: usize,
    tests_run: usize,
    tests_passed: usize,
    tests_skipped: usize,
    outcomes: Vec<TestOutcome>,
    started_at: DateTime<Utc>,
}

impl TestRunner {
    pub fn new<C: RunnerSettings + ?Sized>(settings: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", settings.token());
        let auth_value =
            HeaderValue::from_str(&bearer).map_err(|e| SmokeError::InvalidConfigValueError {
                field: "token".to_string(),
                value: "<redacted>".to_string(),
                reason: format!("Token is not a valid header value: {}", e),
            })?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: settings.base_url().trim_end_matches('/').to_string(),
            default_timeout: Duration::from_secs(settings.default_timeout_secs()),
            timeout_override: settings.timeout_override_secs().map(Duration::from_secs),
            preview_chars: settings.preview_chars(),
            tests_run: 0,
            tests_passed: 0,
            tests_skipped: 0,
            outcomes: Vec::new(),
            started_at: Utc::now(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// 情境內建逾時；`--timeout` 或 `timeout_seconds` 設定時以設定值為準
    pub fn timeout_for(&self, builtin_secs: u64) -> Option<Duration> {
        Some(
            self.timeout_override
                .unwrap_or_else(|| Duration::from_secs(builtin_secs)),
        )
    }

    /// Sends one request and compares the status with `expected_status`.
    ///
    /// Every failure (transport error, timeout, status mismatch) is printed
    /// and flattened into `(false, {})`; only a matching status counts as a pass.
    pub async fn run_test(
        &mut self,
        name: &str,
        method: HttpMethod,
        endpoint: &str,
        expected_status: u16,
        data: Option<&Value>,
        timeout: Option<Duration>,
    ) -> (bool, Value) {
        self.tests_run += 1;
        println!("\n🧪 Testing: {}", name);
        println!("   {} {}", method, endpoint);

        let started = Instant::now();
        let result = self
            .execute(method, endpoint, expected_status, data, timeout)
            .await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let (passed, status, failure, body) = match result {
            Ok((status, body)) => {
                self.tests_passed += 1;
                println!("   ✅ PASSED - Status: {}", status);
                println!("   📄 Response: {}", json_preview(&body, self.preview_chars));
                tracing::debug!(test = name, status, elapsed_ms, "test passed");
                (true, Some(status), None, body)
            }
            Err(e) => {
                let status = match &e {
                    SmokeError::StatusMismatch {
                        expected,
                        actual,
                        body,
                        ..
                    } => {
                        println!("   ❌ FAILED - Expected {}, got {}", expected, actual);
                        println!("   📄 Error: {}", truncate(body, self.preview_chars));
                        Some(*actual)
                    }
                    other => {
                        println!("   ❌ FAILED - Error: {}", other.user_friendly_message());
                        None
                    }
                };
                tracing::warn!(
                    test = name,
                    category = ?e.category(),
                    elapsed_ms,
                    "test failed: {}",
                    e
                );
                let failure = FailureInfo {
                    category: e.category(),
                    message: e.to_string(),
                };
                (false, status, Some(failure), Value::Object(Map::new()))
            }
        };

        self.outcomes.push(TestOutcome {
            name: name.to_string(),
            method,
            endpoint: endpoint.to_string(),
            passed,
            expected_status,
            status,
            elapsed_ms,
            failure,
        });

        (passed, body)
    }

    pub async fn run_case(&mut self, case: &TestCase) -> (bool, Value) {
        self.run_test(
            &case.name,
            case.method,
            &case.endpoint,
            case.expected_status,
            case.data.as_ref(),
            case.timeout,
        )
        .await
    }

    /// 前置步驟失敗時略過的檢查，不計入統計
    pub fn record_skipped(&mut self, name: &str, reason: &str) {
        self.tests_skipped += 1;
        println!("\n⏭️  Skipping: {} ({})", name, reason);
        tracing::info!(test = name, reason, "test skipped");
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            tests_run: self.tests_run,
            tests_passed: self.tests_passed,
            tests_skipped: self.tests_skipped,
            started_at: self.started_at,
            finished_at: Utc::now(),
            outcomes: self.outcomes.clone(),
        }
    }

    async fn execute(
        &self,
        method: HttpMethod,
        endpoint: &str,
        expected_status: u16,
        data: Option<&Value>,
        timeout: Option<Duration>,
    ) -> Result<(u16, Value)> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self
            .client
            .request(method.as_reqwest(), &url)
            .timeout(timeout.unwrap_or(self.default_timeout));

        if let Some(data) = data {
            if method.sends_body() {
                request = request.json(data);
            } else {
                request = request.query(&query_pairs(data));
            }
        }

        tracing::debug!("Making {} request to: {}", method, url);
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status != expected_status {
            return Err(SmokeError::StatusMismatch {
                endpoint: endpoint.to_string(),
                expected: expected_status,
                actual: status,
                body: text,
            });
        }

        Ok((status, parse_body(&text)))
    }
}

/// 將 JSON 物件攤平成查詢參數；字串保留原值，其他型別轉成 JSON 文字
fn query_pairs(data: &Value) -> Vec<(String, String)> {
    match data {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| {
        let mut raw = Map::new();
        raw.insert("raw".to_string(), Value::String(text.to_string()));
        Value::Object(raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    struct MockSettings {
        base_url: String,
        token: String,
    }

    impl RunnerSettings for MockSettings {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn token(&self) -> &str {
            &self.token
        }

        fn default_timeout_secs(&self) -> u64 {
            5
        }

        fn preview_chars(&self) -> usize {
            200
        }
    }

    fn runner_for(server: &MockServer) -> TestRunner {
        let settings = MockSettings {
            base_url: server.base_url(),
            token: "demo-token".to_string(),
        };
        TestRunner::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn test_matching_status_counts_as_pass() {
        let server = MockServer::start();
        let health = server.mock(|when, then| {
            when.method(GET)
                .path("/api/health")
                .header("Authorization", "Bearer demo-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"status": "healthy"}));
        });

        let mut runner = runner_for(&server);
        let (passed, body) = runner
            .run_test("Health", HttpMethod::Get, "/api/health", 200, None, None)
            .await;

        health.assert();
        assert!(passed);
        assert_eq!(body["status"], "healthy");
        assert_eq!(runner.tests_run(), 1);
        assert_eq!(runner.tests_passed(), 1);
    }

    #[tokio::test]
    async fn test_status_mismatch_returns_empty_object() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/patients");
            then.status(422).body("{\"detail\": \"missing age\"}");
        });

        let mut runner = runner_for(&server);
        let (passed, body) = runner
            .run_test(
                "Create patient",
                HttpMethod::Post,
                "/api/patients",
                200,
                Some(&json!({"name": "x"})),
                None,
            )
            .await;

        assert!(!passed);
        assert_eq!(body, json!({}));
        assert_eq!(runner.tests_run(), 1);
        assert_eq!(runner.tests_passed(), 0);
        assert_eq!(runner.outcomes()[0].status, Some(422));
    }

    #[tokio::test]
    async fn test_get_data_becomes_query_string() {
        let server = MockServer::start();
        let search = server.mock(|when, then| {
            when.method(GET)
                .path("/api/literature/search")
                .query_param("query", "knee osteoarthritis PRP")
                .query_param("limit", "5");
            then.status(200).json_body(json!({"results": []}));
        });

        let mut runner = runner_for(&server);
        let query = json!({"query": "knee osteoarthritis PRP", "limit": 5});
        let (passed, _) = runner
            .run_test(
                "Literature",
                HttpMethod::Get,
                "/api/literature/search",
                200,
                Some(&query),
                None,
            )
            .await;

        search.assert();
        assert!(passed);
    }

    #[tokio::test]
    async fn test_post_data_becomes_json_body() {
        let server = MockServer::start();
        let generate = server.mock(|when, then| {
            when.method(POST)
                .path("/api/protocols/generate")
                .header("Content-Type", "application/json")
                .json_body(json!({"school_of_thought": "biologics"}));
            then.status(200).json_body(json!({"protocol_name": "Biologic Knee"}));
        });

        let mut runner = runner_for(&server);
        let (passed, body) = runner
            .run_test(
                "Generate",
                HttpMethod::Post,
                "/api/protocols/generate",
                200,
                Some(&json!({"school_of_thought": "biologics"})),
                None,
            )
            .await;

        generate.assert();
        assert!(passed);
        assert_eq!(body["protocol_name"], "Biologic Knee");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_wrapped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("RegenMed AI is running");
        });

        let mut runner = runner_for(&server);
        let (passed, body) = runner
            .run_test("Root", HttpMethod::Get, "/", 200, None, None)
            .await;

        assert!(passed);
        assert_eq!(body["raw"], "RegenMed AI is running");
    }

    #[tokio::test]
    async fn test_timeout_is_flattened_to_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_millis(500));
        });

        let mut runner = runner_for(&server);
        let (passed, body) = runner
            .run_test(
                "Slow",
                HttpMethod::Get,
                "/slow",
                200,
                None,
                Some(Duration::from_millis(50)),
            )
            .await;

        assert!(!passed);
        assert_eq!(body, json!({}));
        let failure = runner.outcomes()[0].failure.as_ref().unwrap();
        assert_eq!(failure.category, crate::utils::error::ErrorCategory::Timeout);
    }

    #[tokio::test]
    async fn test_connection_error_is_flattened_to_failure() {
        let settings = MockSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            token: "demo-token".to_string(),
        };
        let mut runner = TestRunner::new(&settings).unwrap();
        let (passed, body) = runner
            .run_test("Down", HttpMethod::Get, "/api/health", 200, None, None)
            .await;

        assert!(!passed);
        assert_eq!(body, json!({}));
        assert_eq!(runner.summary().tests_run, 1);
        assert_eq!(runner.summary().tests_passed, 0);
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let settings = MockSettings {
            base_url: "http://localhost:8000".to_string(),
            token: "bad\ntoken".to_string(),
        };
        assert!(TestRunner::new(&settings).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let settings = MockSettings {
            base_url: "http://localhost:8000/".to_string(),
            token: "demo-token".to_string(),
        };
        let runner = TestRunner::new(&settings).unwrap();
        assert_eq!(runner.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_timeout_for_prefers_configured_value() {
        let settings = MockSettings {
            base_url: "http://localhost:8000".to_string(),
            token: "demo-token".to_string(),
        };
        let runner = TestRunner::new(&settings).unwrap();
        assert_eq!(runner.timeout_for(120), Some(Duration::from_secs(120)));

        let config = crate::config::SmokeConfig {
            timeout_secs: Some(7),
            ..crate::config::SmokeConfig::default()
        };
        let runner = TestRunner::new(&config).unwrap();
        assert_eq!(runner.timeout_for(120), Some(Duration::from_secs(7)));
    }
}

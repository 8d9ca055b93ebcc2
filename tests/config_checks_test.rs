use anyhow::Result;
use httpmock::prelude::*;
use regenmed_smoke::config::toml_config::TomlConfig;
use regenmed_smoke::config::SmokeConfig;
use regenmed_smoke::scenarios::build_scenarios;
use regenmed_smoke::utils::validation::Validate;
use regenmed_smoke::{SmokeEngine, TestRunner};
use serde_json::json;
use tempfile::TempDir;

/// 由 TOML `[[checks]]` 驅動的自訂檢查
#[tokio::test]
async fn test_custom_checks_from_config_file() -> Result<()> {
    let server = MockServer::start();
    let generate = server.mock(|when, then| {
        when.method(POST)
            .path("/api/protocols/generate")
            .header("Authorization", "Bearer file-token")
            .json_body(json!({"condition": "rotator cuff tear", "school_of_thought": "hybrid"}));
        then.status(200).json_body(json!({"protocol_name": "Hybrid shoulder"}));
    });
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/api/literature/search")
            .query_param("query", "tendinopathy");
        then.status(200).json_body(json!({"results": []}));
    });
    let missing = server.mock(|when, then| {
        when.method(DELETE).path("/api/patients/unknown");
        then.status(404);
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("smoke.toml");
    let config_content = format!(
        r#"
[service]
base_url = "{}"
token = "file-token"
timeout_seconds = 5

[run]
suites = ["custom"]
threshold = 100.0

[[checks]]
name = "Hybrid shoulder protocol"
method = "POST"
endpoint = "/api/protocols/generate"
body = {{ condition = "rotator cuff tear", school_of_thought = "hybrid" }}
expect_fields = ["protocol_name", "steps"]

[[checks]]
name = "Tendinopathy search"
endpoint = "/api/literature/search"
query = {{ query = "tendinopathy" }}

[[checks]]
name = "Unknown patient is 404"
method = "DELETE"
endpoint = "/api/patients/unknown"
expected_status = 404
"#,
        server.base_url()
    );
    tokio::fs::write(&config_path, config_content).await?;

    let config = SmokeConfig::default().apply_file(TomlConfig::from_file(&config_path)?);
    config.validate()?;
    assert_eq!(config.checks.len(), 3);

    let runner = TestRunner::new(&config)?;
    let scenarios = build_scenarios(&config.selected_suites(), &config.checks);
    assert_eq!(scenarios.len(), 1);
    let summary = SmokeEngine::new(runner, scenarios).run().await;

    generate.assert();
    search.assert();
    missing.assert();
    assert_eq!(summary.tests_run, 3);
    assert_eq!(summary.tests_passed, 3);
    assert_eq!(summary.exit_code(config.threshold), 0);

    Ok(())
}

#[test]
fn test_invalid_check_fails_validation() -> Result<()> {
    let file = TomlConfig::from_toml_str(
        r#"
[[checks]]
name = "No leading slash"
endpoint = "api/health"
"#,
    )?;

    let config = SmokeConfig::default().apply_file(file);
    assert!(config.validate().is_err());
    Ok(())
}

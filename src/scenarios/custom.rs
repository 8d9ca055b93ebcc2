use crate::config::toml_config::CheckConfig;
use crate::core::runner::TestRunner;
use crate::core::Scenario;
use crate::utils::error::SmokeError;

/// 設定檔中 `[[checks]]` 定義的檢查
pub struct CustomChecksScenario {
    checks: Vec<CheckConfig>,
}

impl CustomChecksScenario {
    pub fn new(checks: Vec<CheckConfig>) -> Self {
        Self { checks }
    }
}

#[async_trait::async_trait]
impl Scenario for CustomChecksScenario {
    fn name(&self) -> &str {
        "custom"
    }

    fn description(&self) -> &str {
        "Checks declared in the config file"
    }

    async fn run(&self, runner: &mut TestRunner) {
        if self.checks.is_empty() {
            println!("   ℹ️ No [[checks]] defined in config");
            return;
        }

        for check in &self.checks {
            let (ok, body) = runner.run_case(&check.to_test_case()).await;
            if !ok {
                continue;
            }
            // 欄位缺漏只提示，不影響結果
            let missing: Vec<&str> = check
                .expect_fields
                .iter()
                .filter(|field| body.get(field.as_str()).is_none())
                .map(String::as_str)
                .collect();
            if missing.is_empty() && !check.expect_fields.is_empty() {
                println!("   ✅ All expected fields present");
            } else if !missing.is_empty() {
                println!("   ⚠️ Missing fields: {}", missing.join(", "));
                for field in &missing {
                    let err = SmokeError::MissingField {
                        endpoint: check.endpoint.clone(),
                        field: field.to_string(),
                    };
                    tracing::warn!(category = ?err.category(), "{}", err);
                }
            }
        }
    }
}

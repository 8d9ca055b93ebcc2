use crate::core::runner::TestRunner;
use crate::core::specificity::field_as_string;
use crate::core::{HttpMethod, Scenario};

pub struct HealthScenario;

#[async_trait::async_trait]
impl Scenario for HealthScenario {
    fn name(&self) -> &str {
        "health"
    }

    fn description(&self) -> &str {
        "Service liveness and root endpoint"
    }

    async fn run(&self, runner: &mut TestRunner) {
        let timeout = runner.timeout_for(10);

        let (ok, body) = runner
            .run_test("Health check", HttpMethod::Get, "/api/health", 200, None, timeout)
            .await;
        if ok {
            let status = field_as_string(&body, &["status", "health"])
                .unwrap_or_else(|| "unknown".to_string());
            println!("   💓 Reported status: {}", status);
            if let Some(version) = field_as_string(&body, &["version"]) {
                println!("   🏷️  Version: {}", version);
            }
        }

        runner
            .run_test("Root endpoint", HttpMethod::Get, "/", 200, None, timeout)
            .await;
    }
}

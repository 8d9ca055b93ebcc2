use crate::core::runner::TestRunner;
use crate::core::specificity::first_field;
use crate::core::{HttpMethod, Scenario};

pub struct DashboardScenario;

#[async_trait::async_trait]
impl Scenario for DashboardScenario {
    fn name(&self) -> &str {
        "dashboard"
    }

    fn description(&self) -> &str {
        "Dashboard statistics and patient listing"
    }

    async fn run(&self, runner: &mut TestRunner) {
        let timeout = runner.timeout_for(20);

        let (ok, body) = runner
            .run_test("Dashboard stats", HttpMethod::Get, "/api/dashboard/stats", 200, None, timeout)
            .await;
        if ok {
            if let Some(stats) = body.as_object() {
                let keys: Vec<&str> = stats.keys().map(String::as_str).take(8).collect();
                println!("   📊 Stat keys: {}", keys.join(", "));
            }
        }

        let (ok, body) = runner
            .run_test("List patients", HttpMethod::Get, "/api/patients", 200, None, timeout)
            .await;
        if ok {
            let count = body
                .as_array()
                .or_else(|| first_field(&body, &["patients", "items"]).and_then(|v| v.as_array()))
                .map(|a| a.len());
            match count {
                Some(n) => println!("   👥 Patients listed: {}", n),
                None => println!("   ⚠️ Patient list is not an array"),
            }
        }
    }
}

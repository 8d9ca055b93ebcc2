use crate::core::runner::TestRunner;
use crate::core::Scenario;
use crate::domain::model::RunSummary;
use crate::utils::monitor::SystemMonitor;

pub struct SmokeEngine {
    runner: TestRunner,
    scenarios: Vec<Box<dyn Scenario>>,
    monitor: SystemMonitor,
}

impl SmokeEngine {
    pub fn new(runner: TestRunner, scenarios: Vec<Box<dyn Scenario>>) -> Self {
        Self::new_with_monitoring(runner, scenarios, false)
    }

    pub fn new_with_monitoring(
        runner: TestRunner,
        scenarios: Vec<Box<dyn Scenario>>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            runner,
            scenarios,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依序執行每個情境；單一情境失敗不會中止整體流程
    pub async fn run(mut self) -> RunSummary {
        println!("🚀 RegenMed AI smoke tests");
        println!("🌐 Target: {}", self.runner.base_url());

        for scenario in &self.scenarios {
            println!("\n{}", "=".repeat(60));
            println!("📋 {} - {}", scenario.name(), scenario.description());
            println!("{}", "=".repeat(60));

            let before_run = self.runner.tests_run();
            let before_passed = self.runner.tests_passed();
            tracing::info!("▶️ Running suite: {}", scenario.name());

            scenario.run(&mut self.runner).await;

            tracing::info!(
                "⏹️ Suite {} finished: {}/{} passed",
                scenario.name(),
                self.runner.tests_passed() - before_passed,
                self.runner.tests_run() - before_run
            );
            if self.monitor.is_enabled() {
                self.monitor.log_stats(scenario.name());
            }
        }

        self.monitor.log_final_stats();
        self.runner.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RunnerSettings;
    use crate::domain::model::HttpMethod;
    use httpmock::prelude::*;

    struct Settings(String);

    impl RunnerSettings for Settings {
        fn base_url(&self) -> &str {
            &self.0
        }

        fn token(&self) -> &str {
            "demo-token"
        }

        fn default_timeout_secs(&self) -> u64 {
            5
        }

        fn preview_chars(&self) -> usize {
            100
        }
    }

    struct PingScenario {
        name: &'static str,
        endpoint: &'static str,
    }

    #[async_trait::async_trait]
    impl Scenario for PingScenario {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "ping"
        }

        async fn run(&self, runner: &mut TestRunner) {
            runner
                .run_test(self.name, HttpMethod::Get, self.endpoint, 200, None, None)
                .await;
        }
    }

    #[tokio::test]
    async fn test_failing_scenario_does_not_stop_later_ones() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(500);
        });
        let ok = server.mock(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("{}");
        });

        let runner = TestRunner::new(&Settings(server.base_url())).unwrap();
        let scenarios: Vec<Box<dyn Scenario>> = vec![
            Box::new(PingScenario {
                name: "first",
                endpoint: "/broken",
            }),
            Box::new(PingScenario {
                name: "second",
                endpoint: "/ok",
            }),
        ];

        let summary = SmokeEngine::new_with_monitoring(runner, scenarios, true)
            .run()
            .await;

        ok.assert();
        assert_eq!(summary.tests_run, 2);
        assert_eq!(summary.tests_passed, 1);
        assert_eq!(summary.outcomes[0].name, "first");
        assert!(!summary.outcomes[0].passed);
    }
}

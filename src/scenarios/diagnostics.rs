use crate::core::runner::TestRunner;
use crate::core::specificity::{analyze, field_as_string, first_field};
use crate::core::{HttpMethod, Scenario};
use crate::scenarios::fixtures;

pub struct DiagnosticsScenario;

#[async_trait::async_trait]
impl Scenario for DiagnosticsScenario {
    fn name(&self) -> &str {
        "diagnostics"
    }

    fn description(&self) -> &str {
        "Differential diagnosis from a symptom query"
    }

    async fn run(&self, runner: &mut TestRunner) {
        let (ok, body) = runner
            .run_test(
                "Differential diagnosis",
                HttpMethod::Post,
                "/api/diagnosis/differential",
                200,
                Some(&fixtures::diagnostic_query()),
                runner.timeout_for(90),
            )
            .await;
        if !ok {
            return;
        }

        match first_field(&body, &["diagnoses", "differential", "differential_diagnoses"])
            .and_then(|v| v.as_array())
        {
            Some(items) if !items.is_empty() => {
                println!("   🩺 {} candidate diagnoses", items.len());
                for item in items.iter().take(3) {
                    let name = field_as_string(item, &["diagnosis", "name", "condition"])
                        .unwrap_or_else(|| item.to_string());
                    let confidence = field_as_string(item, &["confidence", "probability"])
                        .unwrap_or_else(|| "?".to_string());
                    println!("      - {} (confidence: {})", name, confidence);
                }
            }
            _ => println!("   ⚠️ No differential diagnoses in response"),
        }

        analyze(&body).print("diagnosis");
    }
}

use crate::core::runner::TestRunner;
use crate::core::specificity::{analyze, field_as_string, first_field};
use crate::core::{HttpMethod, Scenario};
use crate::scenarios::fixtures::{self, SCHOOLS_OF_THOUGHT};
use std::collections::BTreeSet;

pub struct ProtocolScenario {
    pub schools: Vec<String>,
}

impl Default for ProtocolScenario {
    fn default() -> Self {
        Self {
            schools: SCHOOLS_OF_THOUGHT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait::async_trait]
impl Scenario for ProtocolScenario {
    fn name(&self) -> &str {
        "protocols"
    }

    fn description(&self) -> &str {
        "Protocol generation for each school of thought"
    }

    async fn run(&self, runner: &mut TestRunner) {
        let mut fingerprints = BTreeSet::new();
        let mut generated = 0;

        for school in &self.schools {
            let request = fixtures::protocol_request(school);
            let (ok, body) = runner
                .run_test(
                    &format!("Generate protocol ({})", school),
                    HttpMethod::Post,
                    "/api/protocols/generate",
                    200,
                    Some(&request),
                    runner.timeout_for(60),
                )
                .await;
            if !ok {
                continue;
            }
            generated += 1;

            let protocol = body.get("protocol").unwrap_or(&body);
            let name = field_as_string(protocol, &["name", "protocol_name", "title"])
                .unwrap_or_else(|| "<unnamed>".to_string());
            let steps = first_field(protocol, &["steps", "phases", "treatment_steps"])
                .and_then(|v| v.as_array())
                .map(|a| a.len())
                .unwrap_or(0);
            println!("   📋 Protocol: {}", name);
            println!("   🔢 Steps: {}", steps);
            if let Some(confidence) = field_as_string(&body, &["confidence", "confidence_score"]) {
                println!("   📈 Confidence: {}", confidence);
            }
            analyze(&body).print(school);

            fingerprints.insert(format!("{}|{}", name, steps));
        }

        // 不同學派應產生不同的方案
        if generated > 1 {
            if fingerprints.len() == generated {
                println!("\n   ✅ Each school of thought produced a distinct protocol");
            } else {
                println!(
                    "\n   ⚠️ Only {} distinct protocol(s) across {} schools of thought",
                    fingerprints.len(),
                    generated
                );
            }
        }
    }
}

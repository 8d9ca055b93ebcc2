pub mod custom;
pub mod dashboard;
pub mod diagnostics;
pub mod fixtures;
pub mod health;
pub mod literature;
pub mod patients;
pub mod protocols;

use crate::config::toml_config::CheckConfig;
use crate::core::Scenario;

/// Suite names in default execution order.
pub const SUITE_NAMES: &[&str] = &[
    "health",
    "patients",
    "protocols",
    "diagnostics",
    "literature",
    "dashboard",
    "custom",
];

pub fn describe(name: &str) -> Option<&'static str> {
    match name {
        "health" => Some("GET /api/health, GET /"),
        "patients" => Some("POST /api/patients, GET /api/patients/{id}, POST /api/patients/{id}/analyze"),
        "protocols" => Some("POST /api/protocols/generate per school of thought"),
        "diagnostics" => Some("POST /api/diagnosis/differential"),
        "literature" => Some("GET /api/literature/search"),
        "dashboard" => Some("GET /api/dashboard/stats, GET /api/patients"),
        "custom" => Some("[[checks]] from the TOML config"),
        _ => None,
    }
}

pub fn build_scenario(name: &str, checks: &[CheckConfig]) -> Option<Box<dyn Scenario>> {
    let scenario: Box<dyn Scenario> = match name {
        "health" => Box::new(health::HealthScenario),
        "patients" => Box::new(patients::PatientScenario::default()),
        "protocols" => Box::new(protocols::ProtocolScenario::default()),
        "diagnostics" => Box::new(diagnostics::DiagnosticsScenario),
        "literature" => Box::new(literature::LiteratureScenario),
        "dashboard" => Box::new(dashboard::DashboardScenario),
        "custom" => Box::new(custom::CustomChecksScenario::new(checks.to_vec())),
        _ => return None,
    };
    Some(scenario)
}

/// 只有選了 `custom` 時 `[[checks]]` 才會執行
pub fn planned_checks<'a>(names: &[String], checks: &'a [CheckConfig]) -> &'a [CheckConfig] {
    if names.iter().any(|name| name == "custom") {
        checks
    } else {
        &[]
    }
}

/// 依名稱建立情境；`custom` 在沒有自訂檢查時略過
pub fn build_scenarios(names: &[String], checks: &[CheckConfig]) -> Vec<Box<dyn Scenario>> {
    let checks = planned_checks(names, checks);
    names
        .iter()
        .filter(|name| name.as_str() != "custom" || !checks.is_empty())
        .filter_map(|name| {
            let scenario = build_scenario(name, checks);
            if scenario.is_none() {
                tracing::warn!("⚠️ Unknown suite '{}' ignored", name);
            }
            scenario
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_suite_is_buildable_and_described() {
        for name in SUITE_NAMES {
            let scenario = build_scenario(name, &[]).unwrap();
            assert_eq!(scenario.name(), *name);
            assert!(describe(name).is_some());
        }
        assert!(build_scenario("billing", &[]).is_none());
    }

    #[test]
    fn test_custom_is_dropped_without_checks() {
        let names: Vec<String> = SUITE_NAMES.iter().map(|s| s.to_string()).collect();
        let scenarios = build_scenarios(&names, &[]);
        assert_eq!(scenarios.len(), SUITE_NAMES.len() - 1);
        assert!(scenarios.iter().all(|s| s.name() != "custom"));
    }

    #[test]
    fn test_checks_only_planned_when_custom_selected() {
        let checks = vec![CheckConfig {
            name: "Version".to_string(),
            method: crate::core::HttpMethod::Get,
            endpoint: "/api/version".to_string(),
            expected_status: 200,
            body: None,
            query: None,
            timeout_seconds: None,
            expect_fields: Vec::new(),
        }];

        let health_only = vec!["health".to_string()];
        assert!(planned_checks(&health_only, &checks).is_empty());
        assert_eq!(build_scenarios(&health_only, &checks).len(), 1);

        let with_custom = vec!["health".to_string(), "custom".to_string()];
        assert_eq!(planned_checks(&with_custom, &checks).len(), 1);
        let scenarios = build_scenarios(&with_custom, &checks);
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[1].name(), "custom");
    }
}

use crate::core::runner::TestRunner;
use crate::core::specificity::{collect_text, find_pmids, first_field};
use crate::core::{HttpMethod, Scenario};
use crate::scenarios::fixtures;

pub struct LiteratureScenario;

#[async_trait::async_trait]
impl Scenario for LiteratureScenario {
    fn name(&self) -> &str {
        "literature"
    }

    fn description(&self) -> &str {
        "Literature search and evidence quality"
    }

    async fn run(&self, runner: &mut TestRunner) {
        let (ok, body) = runner
            .run_test(
                "Literature search",
                HttpMethod::Get,
                "/api/literature/search",
                200,
                Some(&fixtures::literature_query()),
                runner.timeout_for(45),
            )
            .await;
        if !ok {
            return;
        }

        let results = first_field(&body, &["results", "articles", "papers"])
            .and_then(|v| v.as_array())
            .map(|a| a.len())
            .unwrap_or(0);
        // 結果物件常以獨立欄位回傳 pmid，一併計入
        let mut pmids = find_pmids(&collect_text(&body));
        if let Some(items) = first_field(&body, &["results", "articles", "papers"])
            .and_then(|v| v.as_array())
        {
            for item in items {
                if let Some(pmid) = first_field(item, &["pmid", "PMID"]) {
                    let pmid = match pmid {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    pmids.insert(pmid);
                }
            }
        }

        println!("   📚 Results: {}", results);
        println!("   🔗 Distinct PMIDs: {}", pmids.len());
        if results == 0 {
            println!("   ❌ Evidence quality: no results");
        } else if pmids.len() * 2 >= results {
            println!("   ✅ Evidence quality: most results are PubMed-indexed");
        } else {
            println!("   ⚠️ Evidence quality: few PubMed identifiers");
        }
    }
}

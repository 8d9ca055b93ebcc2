use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::path::Path;

pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// 設定錯誤時的退出碼，與測試失敗區分
pub const CONFIG_ERROR_EXIT_CODE: i32 = 2;

impl RunSummary {
    pub fn tests_failed(&self) -> usize {
        self.tests_run - self.tests_passed
    }

    /// Percentage of tests that passed, `0.0` when nothing ran.
    pub fn success_rate(&self) -> f64 {
        if self.tests_run == 0 {
            return 0.0;
        }
        self.tests_passed as f64 / self.tests_run as f64 * 100.0
    }

    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.tests_run > 0 && self.success_rate() >= threshold
    }

    pub fn exit_code(&self, threshold: f64) -> i32 {
        if self.meets_threshold(threshold) {
            0
        } else {
            1
        }
    }

    pub fn print(&self, threshold: f64) {
        let rate = self.success_rate();
        println!("\n{}", "=".repeat(60));
        println!("📊 TEST SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Tests Run: {}", self.tests_run);
        println!("Tests Passed: {}", self.tests_passed);
        println!("Tests Failed: {}", self.tests_failed());
        if self.tests_skipped > 0 {
            println!("Tests Skipped: {}", self.tests_skipped);
        }
        println!("Success Rate: {:.1}%", rate);

        let failed: Vec<_> = self.outcomes.iter().filter(|o| !o.passed).collect();
        if !failed.is_empty() {
            println!("\n❌ Failed tests:");
            for outcome in failed {
                let status = outcome
                    .status
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "no response".to_string());
                println!(
                    "   - {} ({} {}) -> {}",
                    outcome.name, outcome.method, outcome.endpoint, status
                );
            }
        }

        println!();
        if self.meets_threshold(threshold) {
            println!("🎉 RegenMed AI backend looks healthy ({:.1}% >= {:.1}%)", rate, threshold);
        } else if rate >= 50.0 {
            println!("⚠️ RegenMed AI backend has issues ({:.1}% < {:.1}%)", rate, threshold);
        } else {
            println!("❌ RegenMed AI backend has major problems ({:.1}%)", rate);
        }
    }

    /// 將結果寫成 JSON 報告
    pub fn write_report(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!("📁 Report saved to: {}", path.display());
        Ok(())
    }
}

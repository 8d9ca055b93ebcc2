use crate::core::runner::TestRunner;
use async_trait::async_trait;

/// 一組依序執行的檢查，例如病患流程或文獻搜尋
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn run(&self, runner: &mut TestRunner);
}

pub trait RunnerSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> &str;
    fn default_timeout_secs(&self) -> u64;
    /// 明確設定的逾時，優先於情境內建的逾時
    fn timeout_override_secs(&self) -> Option<u64> {
        None
    }
    fn preview_chars(&self) -> usize;
}

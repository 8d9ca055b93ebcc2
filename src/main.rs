use anyhow::Context;
use clap::Parser;
use regenmed_smoke::config::{SmokeConfig, DEFAULT_TIMEOUT_SECS};
use regenmed_smoke::core::summary::CONFIG_ERROR_EXIT_CODE;
use regenmed_smoke::scenarios::{self, SUITE_NAMES};
use regenmed_smoke::utils::{logger, validation::Validate};
use regenmed_smoke::{CliConfig, SmokeEngine, SmokeError, TestRunner};

fn exit_with_config_error(e: &SmokeError) -> ! {
    tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(CONFIG_ERROR_EXIT_CODE);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.list {
        println!("📋 Available suites:");
        for name in SUITE_NAMES {
            println!("  - {:<12} {}", name, scenarios::describe(name).unwrap_or(""));
        }
        return Ok(());
    }

    let config = match SmokeConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => exit_with_config_error(&e),
    };
    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }
    tracing::debug!("Resolved config: {:?}", config.base_url);

    let suites = config.selected_suites();

    if cli.dry_run {
        println!("🔍 DRY RUN - no requests will be sent");
        println!("  Target: {}", config.base_url);
        println!("  Threshold: {:.1}%", config.threshold);
        match config.timeout_secs {
            Some(timeout) => println!("  Timeout: {}s (all requests)", timeout),
            None => println!("  Timeout: suite defaults ({}s for checks)", DEFAULT_TIMEOUT_SECS),
        }
        for name in &suites {
            println!("  - {}: {}", name, scenarios::describe(name).unwrap_or(""));
        }
        for check in scenarios::planned_checks(&suites, &config.checks) {
            println!("  - custom: {} {} ({})", check.method, check.endpoint, check.name);
        }
        if !config.checks.is_empty() && !suites.iter().any(|s| s == "custom") {
            println!(
                "  ⚠️ {} [[checks]] defined but 'custom' is not selected; they will not run",
                config.checks.len()
            );
        }
        return Ok(());
    }

    let runner = match TestRunner::new(&config) {
        Ok(runner) => runner,
        Err(e) => exit_with_config_error(&e),
    };
    let scenario_list = scenarios::build_scenarios(&suites, &config.checks);
    let engine = SmokeEngine::new_with_monitoring(runner, scenario_list, config.monitor);

    let summary = engine.run().await;
    summary.print(config.threshold);

    if let Some(path) = &config.report_path {
        summary
            .write_report(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("📁 Report saved to: {}", path.display());
    }

    let exit_code = summary.exit_code(config.threshold);
    tracing::info!(
        "Finished: {}/{} passed, exit code {}",
        summary.tests_passed,
        summary.tests_run,
        exit_code
    );
    std::process::exit(exit_code);
}

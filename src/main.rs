use anyhow::Context;
use clap::Parser;
use skyline::config::{cli::USAGE, load_toml};
use skyline::utils::error::ErrorSeverity;
use skyline::utils::{logger, validation::Validate};
use skyline::{run_job, CliConfig, RunConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 需要剛好一個輸入檔，否則只印出用法
    if cli.single_input().is_none() {
        println!("{}", USAGE);
        return Ok(());
    }

    let file_config = match &cli.config {
        Some(path) => Some(
            load_toml(path).with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    let verbose = cli.verbose
        || file_config
            .as_ref()
            .and_then(|c| c.log_level())
            .is_some_and(|level| level.eq_ignore_ascii_case("debug"));
    logger::init_logger(logger::LogFormat::from_json_flag(cli.json_logs), verbose)
        .context("Failed to initialise logging")?;

    let config = RunConfig::resolve(&cli, file_config.as_ref());
    tracing::debug!("Run config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run_job(&config) {
        Ok(report) => {
            tracing::info!(
                "✅ Skyline computed: {} of {} points in {}ms",
                report.skyline.len(),
                report.input_count,
                report.elapsed_ms
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Skyline run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸入錯誤（例如找不到檔案）往上傳遞，其餘依嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => {
                    return Err(anyhow::Error::new(e)).context("Failed to compute skyline");
                }
                ErrorSeverity::Critical => 3,
            };

            eprintln!("❌ {}", e.user_friendly_message());
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

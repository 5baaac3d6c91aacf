use clap::Parser;
use geodistance::utils::logger;
use geodistance::{run, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting geodistance");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = if let Some(path) = cli.config.clone() {
        tracing::info!("Loading configuration from: {}", path);
        match TomlConfig::from_file(&path) {
            Ok(config) => run(config).await,
            Err(e) => Err(e),
        }
    } else {
        run(cli).await
    };

    match outcome {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

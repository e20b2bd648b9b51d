use anyhow::Context;
use clap::Parser;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{serve, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(cli.verbose, config.logging.format);

    tracing::info!("Starting number-classifier");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    serve(&config)
        .await
        .with_context(|| format!("server on {} terminated", config.bind_address()))?;

    Ok(())
}

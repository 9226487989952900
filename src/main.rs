use clap::Parser;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{CliConfig, LocalStorage, SiteEngine, SitePipeline, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portfolio-site");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let check_only = config.check;
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SitePipeline::new(storage, config, SystemClock);
    let engine = SiteEngine::new(pipeline);

    let outcome = if check_only {
        engine.check().await.map(|warnings| {
            println!("🔍 Content check finished with {} warning(s)", warnings);
        })
    } else {
        engine.run().await.map(|output_path| {
            println!("✅ Site rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        })
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

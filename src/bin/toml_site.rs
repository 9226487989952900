use anyhow::Context;
use clap::Parser;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{LocalStorage, SiteEngine, SitePipeline, SystemClock, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-site")]
#[command(about = "Render the portfolio site from a TOML site configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output directory from config
    #[arg(long)]
    output_path: Option<String>,

    /// Load and lint the content, print the plan, write nothing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.verbose_logging();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(output_path) = &args.output_path {
        config.output.path = output_path.clone();
        tracing::info!("🔧 Output path overridden to: {}", output_path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config, &args);

    let dry_run = args.dry_run;
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SitePipeline::new(storage, config, SystemClock);
    let engine = SiteEngine::new(pipeline);

    let outcome = if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        engine.check().await.map(|warnings| {
            println!("✅ Dry run complete: {} content warning(s)", warnings);
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
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    match &config.site.version {
        Some(version) => println!("  Site: {} v{}", config.site.name, version),
        None => println!("  Site: {}", config.site.name),
    }
    println!("  Content: {}", config.content_path());
    println!("  Output: {}", config.output_path());

    let files: Vec<String> = config
        .output_formats()
        .iter()
        .map(|format| config.output_filename(*format))
        .collect();
    println!("  Files: {}", files.join(", "));
    println!("  Resume link: {}", config.resume_href());

    if let Some(year) = config.fixed_year() {
        println!("  Footer year: {} (fixed)", year);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

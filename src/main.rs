use clap::Parser;
use territory_helper::utils::{logger, validation::Validate};
use territory_helper::{CliConfig, LocalStorage, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting territory-helper CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let mut session = Session::new(storage, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())?;

    tracing::info!("✅ Session ended");
    Ok(())
}

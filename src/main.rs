use anyhow::Context;
use clap::Parser;
use nd_exposure::utils::{logger, validation::Validate};
use nd_exposure::{ChartEngine, ChartError, CliConfig, OutputTarget};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose).context("Failed to initialise logging")?;

    tracing::info!("Starting nd-exposure");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let engine = match ChartEngine::new(config.chart_options()) {
        Ok(engine) => engine,
        Err(e) => exit_with(e),
    };

    let tables = match engine.run() {
        Ok(tables) => tables,
        Err(e) => exit_with(e),
    };

    OutputTarget::new(config.output.clone())
        .write(&tables)
        .context("Failed to write the exposure tables")?;

    tracing::info!("✅ Exposure tables written");
    Ok(())
}

fn exit_with(e: ChartError) -> ! {
    if e.is_fatal() {
        tracing::error!("❌ Built-in filter or shutter table is malformed: {}", e);
    } else {
        tracing::error!("❌ Rendering failed: {}", e);
    }
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}

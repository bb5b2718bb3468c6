use anyhow::Context;
use cinema_models::core::{ConfigProvider, Storage};
use cinema_models::utils::{logger, validation::Validate};
use cinema_models::{CliConfig, LocalStorage, RenderConfig, RenderEngine, StdoutStorage};
use clap::Parser;

fn run<C: ConfigProvider, S: Storage>(storage: S, config: C) -> cinema_models::Result<Vec<String>> {
    RenderEngine::new(storage, config).run()
}

fn render_with<C: ConfigProvider>(config: C) -> cinema_models::Result<Vec<String>> {
    match config.output_path().map(str::to_string) {
        Some(output_path) => run(LocalStorage::new(output_path), config),
        None => run(StdoutStorage, config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml_config = match &cli.config {
        Some(path) => Some(
            RenderConfig::from_file(path)
                .with_context(|| format!("failed to load render config {}", path))?,
        ),
        None => None,
    };

    let level = toml_config.as_ref().and_then(|c| c.log_level());
    let json_logs = cli.json_logs || toml_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting cinema-models");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let validation = match &toml_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match toml_config {
        Some(config) => render_with(config),
        None => render_with(cli),
    };

    match result {
        Ok(outputs) => {
            tracing::info!("Rendered {} components", outputs.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(2);
        }
    }
}

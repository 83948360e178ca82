use pokedex_config::{GateConfig, LogFormatSetting};
use pokedex_gate::{GateServer, GateState};
use pokedex_telemetry::{LogFormat, LoggingConfig, Metrics};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Dependencies required to start the gate server.
pub(crate) struct BootstrapDependencies {
    config: GateConfig,
    metrics: Metrics,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the process environment.
    pub(crate) fn from_env() -> AppResult<Self> {
        let config =
            GateConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;
        let metrics =
            Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;
        Ok(Self { config, metrics })
    }
}

/// Entry point for the gate server boot sequence.
///
/// # Errors
///
/// Returns an error if configuration, telemetry, or the server fail.
pub async fn run_app() -> AppResult<()> {
    let dependencies = BootstrapDependencies::from_env()?;
    run_app_with(dependencies).await
}

pub(crate) async fn run_app_with(dependencies: BootstrapDependencies) -> AppResult<()> {
    let BootstrapDependencies { config, metrics } = dependencies;

    let build_sha = option_env!("POKEDEX_BUILD_SHA").unwrap_or("dev");
    let logging = LoggingConfig {
        level: &config.log_level,
        format: log_format(config.log_format),
        build_sha,
    };
    pokedex_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!(
        bind = %config.bind_addr,
        upstream = %config.api_base_url,
        environment = ?config.environment,
        assets = %config.assets_dir.display(),
        "Pokedex gate bootstrap starting"
    );

    let state = GateState::from_config(&config, metrics)
        .map_err(|err| AppError::gate("gate.state", err))?;
    GateServer::new(state)
        .serve(config.bind_addr)
        .await
        .map_err(|err| AppError::gate("gate.serve", err))?;

    info!("Pokedex gate stopped");
    Ok(())
}

const fn log_format(setting: LogFormatSetting) -> LogFormat {
    match setting {
        LogFormatSetting::Json => LogFormat::Json,
        LogFormatSetting::Pretty => LogFormat::Pretty,
        LogFormatSetting::Inferred => LogFormat::infer(),
    }
}

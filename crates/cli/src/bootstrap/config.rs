use doh_fanout_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    Ok(config)
}

/// Logged once the subscriber exists; loading happens before logging is set up.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        upstream = %config.upstream.url,
        timeout_ms = config.upstream.timeout_ms,
        workers = config.pool.default_workers,
        output = config.output.path.as_deref().unwrap_or("stdout"),
        "Configuration loaded"
    );
}

//! # doh-fanout
//!
//! Resolves every hostname in a file to its IPv4 and IPv6 addresses over
//! DNS-over-HTTPS, using a fixed pool of concurrent workers.

mod bootstrap;

use clap::Parser;
use doh_fanout_application::ports::{DohClient, ResultSink};
use doh_fanout_application::use_cases::{LoadHostnamesUseCase, ResolveHostnameUseCase};
use doh_fanout_domain::{CliOverrides, Config};
use doh_fanout_infrastructure::dns::JsonDohClient;
use doh_fanout_infrastructure::system::{HostnameFile, WriterSink};
use doh_fanout_jobs::JobDistributor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "doh-fanout")]
#[command(version)]
#[command(about = "Bulk A/AAAA resolution over DNS-over-HTTPS")]
struct Cli {
    /// File with one hostname per line
    hostlist: PathBuf,

    /// Worker pool size (default: 10, never more than the number of hostnames)
    #[arg(value_parser = parse_worker_count)]
    workers: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn parse_worker_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("number of workers must be a positive integer, got 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!(
            "number of workers must be a positive integer, got '{}'",
            value
        )),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            workers: cli.workers,
        },
    )?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    let source = Arc::new(HostnameFile::new(cli.hostlist.clone()));
    let hostnames = LoadHostnamesUseCase::new(source).execute().await?;

    let client = Arc::new(JsonDohClient::from_config(&config.upstream));
    info!(endpoint = client.endpoint(), "Upstream DoH endpoint");
    let resolver = Arc::new(ResolveHostnameUseCase::new(client));
    let sink = open_sink(&config).await?;

    let report = JobDistributor::new(resolver, config.pool.default_workers)
        .with_output_queue_capacity(config.pool.output_queue_capacity)
        .run(hostnames, sink)
        .await?;

    if let Some(e) = &report.sink_error {
        warn!(error = %e, "Output was cut short");
    }

    info!(
        resolved = report.completions.resolved,
        partial = report.completions.partial,
        failed = report.completions.failed,
        panicked = report.completions.panicked,
        "Done"
    );

    Ok(())
}

async fn open_sink(config: &Config) -> anyhow::Result<Box<dyn ResultSink>> {
    let sink: Box<dyn ResultSink> = match &config.output.path {
        Some(path) => Box::new(WriterSink::create(path).await?),
        None => Box::new(WriterSink::stdout()),
    };
    Ok(sink)
}

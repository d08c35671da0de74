//! jobq CLI - Command-line interface for the remote pipeline registry

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use jobq_core::domain::{CreateInfo, PipelineStat};
use jobq_core::{Jobs, Queue};
use jobq_rpc::config::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RPC_URL};
use jobq_rpc::GatewayConfig;
use std::time::Duration;
use tabled::{Table, Tabled};

#[derive(Parser)]
#[command(name = "jobq")]
#[command(about = "Manage pipelines on a remote jobs server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC endpoint URL
    #[arg(long, global = true, env = "JOBQ_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "JOBQ_RPC_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the jobs plugin is enabled
    Available,

    /// List registered pipelines
    List,

    /// Print the number of registered pipelines
    Count,

    /// Declare a new pipeline
    Create {
        /// Pipeline name
        name: String,

        /// Driver (memory, amqp, sqs, beanstalk, kafka, nats, boltdb, ...)
        #[arg(short, long)]
        driver: String,

        /// Priority (lower = consumed first)
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        priority: i64,

        /// Driver option as key=value (repeatable)
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, String)>,
    },

    /// Pause consumption on pipelines (in the given order)
    Pause {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Resume consumption on pipelines (in the given order)
    Resume {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Destroy pipelines
    Destroy {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show per-pipeline counters
    Stat,
}

#[derive(Tabled)]
struct PipelineRow {
    #[tabled(rename = "PIPELINE")]
    name: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "PIPELINE")]
    pipeline: String,
    #[tabled(rename = "DRIVER")]
    driver: String,
    #[tabled(rename = "QUEUE")]
    queue: String,
    #[tabled(rename = "PRIORITY")]
    priority: u64,
    #[tabled(rename = "ACTIVE")]
    active: i64,
    #[tabled(rename = "DELAYED")]
    delayed: i64,
    #[tabled(rename = "RESERVED")]
    reserved: i64,
    #[tabled(rename = "READY")]
    ready: bool,
}

impl From<PipelineStat> for StatRow {
    fn from(stat: PipelineStat) -> Self {
        Self {
            pipeline: stat.pipeline,
            driver: stat.driver,
            queue: stat.queue,
            priority: stat.priority,
            active: stat.active,
            delayed: stat.delayed,
            reserved: stat.reserved,
            ready: stat.ready,
        }
    }
}

fn parse_option(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn handles(jobs: &Jobs, names: Vec<String>) -> Vec<Queue> {
    names.into_iter().map(|name| jobs.connect(name)).collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    tracing::debug!(version = jobq_core::VERSION, rpc_url = %cli.rpc_url, "jobq starting");

    let config = GatewayConfig::new(cli.rpc_url.clone())
        .with_request_timeout(Duration::from_secs(cli.timeout_secs));
    let jobs = jobq_rpc::from_config(&config).context("Failed to set up RPC gateway")?;

    match cli.command {
        Commands::Available => {
            if jobs.is_available().await {
                println!("{}", "✓ jobs plugin available".green().bold());
            } else {
                println!("{}", "✗ jobs plugin not available".red().bold());
            }
        }

        Commands::List => {
            let rows: Vec<PipelineRow> = jobs
                .queues()
                .await
                .context("Failed to list pipelines")?
                .into_iter()
                .map(|queue| PipelineRow {
                    name: queue.name().to_string(),
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No pipelines registered".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Count => {
            let count = jobs.count().await.context("Failed to count pipelines")?;
            println!("{}", count);
        }

        Commands::Create {
            name,
            driver,
            priority,
            options,
        } => {
            let info = CreateInfo::builder(name, driver)
                .priority(priority)
                .options(options)
                .build()
                .context("Invalid pipeline configuration")?;

            let queue = jobs
                .create(&info)
                .await
                .with_context(|| format!("Failed to declare pipeline {}", info.name()))?;

            println!(
                "{}",
                format!("✓ Pipeline {} declared", queue.name()).green().bold()
            );
        }

        Commands::Pause { names } => {
            let queues = handles(&jobs, names);
            jobs.pause(&queues).await.context("Failed to pause pipelines")?;
            println!("{}", format!("✓ Paused {} pipeline(s)", queues.len()).green().bold());
        }

        Commands::Resume { names } => {
            let queues = handles(&jobs, names);
            jobs.resume(&queues).await.context("Failed to resume pipelines")?;
            println!("{}", format!("✓ Resumed {} pipeline(s)", queues.len()).green().bold());
        }

        Commands::Destroy { names } => {
            let queues = handles(&jobs, names);
            jobs.destroy(&queues)
                .await
                .context("Failed to destroy pipelines")?;
            println!("{}", format!("✓ Destroyed {} pipeline(s)", queues.len()).green().bold());
        }

        Commands::Stat => {
            let rows: Vec<StatRow> = jobs
                .stats()
                .await
                .context("Failed to fetch pipeline statistics")?
                .into_iter()
                .map(StatRow::from)
                .collect();

            if rows.is_empty() {
                println!("{}", "No pipelines registered".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }
    }

    Ok(())
}

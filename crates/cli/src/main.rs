use cfgattr_domain::CliOverrides;
use clap::{Parser, Subcommand};
use commands::apply::PayloadSource;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "cfgattr")]
#[command(version)]
#[command(about = "cfgattr - IKEv2 configuration attribute handling for VPN clients")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the CFG_REQUEST payload body this client sends, hex encoded
    Request {
        /// Virtual address already assigned to the session (repeatable)
        #[arg(long = "vip", value_name = "ADDR")]
        vips: Vec<IpAddr>,
    },

    /// Apply a CFG_REPLY or CFG_SET payload body and write resolv.conf
    Apply {
        /// Payload body as hex
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        input: Option<String>,

        /// File holding the raw payload body
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// resolv.conf path, overrides the configuration file
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<String>,

        /// Print the resulting resolv.conf instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let resolv_conf_path = match &cli.command {
        Command::Apply { output, .. } => output.clone(),
        Command::Request { .. } => None,
    };
    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        resolv_conf_path,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    debug!("Starting cfgattr v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new();

    match cli.command {
        Command::Request { vips } => commands::request::run(&services, &vips),
        Command::Apply {
            input, file, dry_run, ..
        } => {
            let source = match (input, file) {
                (Some(hex), _) => PayloadSource::Hex(hex),
                (None, Some(path)) => PayloadSource::File(path),
                (None, None) => anyhow::bail!("Either --input or --file is required"),
            };
            commands::apply::run(&services, &config, source, dry_run).await
        }
    }
}

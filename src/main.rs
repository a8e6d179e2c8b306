use anyhow::Context;
use clap::{Parser, Subcommand};
use hookline_core::sink::encode_line;
use hookline_core::{Config, Outcome, Pipeline, TokenAuthenticator};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

#[derive(Parser)]
#[command(name = "hookline", about = "Chat-ops webhook that logs structured events")]
struct Cli {
    /// TOML config file. Defaults to ./hookline.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override server.bind (e.g. 127.0.0.1:8080).
    #[arg(long)]
    bind: Option<String>,
    /// Override sink.path.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log pipeline internals at debug level (RUST_LOG still wins).
    #[arg(long, global = true)]
    debug: bool,
    /// Also append log output to this file (tail -f to inspect). Implies --debug.
    #[arg(long, global = true, value_name = "PATH")]
    debug_log: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a payload through the pipeline and print the resulting record.
    /// Nothing is written to the event log.
    Check {
        #[arg(long)]
        text: String,
    },
    /// Print the auth.token_sha256 value for a token.
    Digest { token: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug || cli.debug_log.is_some() { "debug" } else { "info" };
    let writer = match &cli.debug_log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open debug log {}", path.display()))?;
            BoxMakeWriter::new(std::io::stderr.and(std::sync::Mutex::new(file)))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(cli.debug_log.is_none())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
    if let Some(path) = &cli.debug_log {
        tracing::info!(path = %path.display(), "debug log started");
    }

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(path) = cli.log_file {
        config.sink.path = path;
    }

    match cli.command {
        None => hookline_server::serve(config).await,
        Some(Command::Check { text }) => {
            match Pipeline::new(config.labels).process(&text) {
                Outcome::Event(event) => print!("{}", encode_line(&event)?),
                Outcome::Rejected(rejection) => println!("ignored: {rejection}"),
            }
            Ok(())
        }
        Some(Command::Digest { token }) => {
            println!("{}", TokenAuthenticator::digest_hex(&token));
            Ok(())
        }
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rootrise::{
    commands::{contact::ContactCommand, page::page, serve::serve},
    environment::Provider,
};
use rootrise_utils::rootrise_version;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = match &cli.config {
        Some(paths) => rootrise_config::load(paths),
        None => rootrise_config::load_from_env(),
    }
    .context("Failed to load config")?;
    let provider = Provider::new(&config).context("Invalid config")?;

    match cli.command {
        Command::Serve => serve(&config, &provider).await?,
        Command::Page { path } => page(&provider, &path)?,
        Command::Contact(command) => command.invoke(&provider).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = rootrise_version())]
struct Cli {
    /// Config files to load instead of the default one, later files take
    /// precedence
    #[arg(short, long, global = true, num_args = 1..)]
    config: Option<Vec<PathBuf>>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server for the website and the contact endpoint
    #[command(aliases(["run", "start", "s"]))]
    Serve,
    /// Print the page a client path renders to
    #[command(aliases(["p"]))]
    Page {
        /// Client side path, e.g. /how-it-works
        path: String,
    },
    /// Send a message through the contact form of a running site
    #[command(aliases(["c"]))]
    Contact(ContactCommand),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(pretty_logs)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        )))
        .init();
}

/// Accepted contact submissions are logged at `info`, so that is the level
/// used when `RUST_LOG` is unset or empty.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

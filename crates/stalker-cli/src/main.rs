//! Stalker CLI - run the webhook service and manage its configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use stalker_core::{Config, GithubConfig};
use stalker_github::GithubClient;
use stalker_webhook::Dispatcher;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stalker")]
#[command(author, version, about = "GitHub lookup webhook for conversational agents", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server
    Serve {
        /// Address to listen on (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Configure the GitHub upstream
    Github {
        /// GitHub access token
        #[arg(long)]
        token: Option<String>,

        /// GitHub API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Outbound request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::Serve { bind }) => serve(load_config(&cli.config)?, bind).await?,
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Github {
                token,
                base_url,
                timeout_secs,
            } => {
                let mut config = load_config(&cli.config)?;
                let github = config.github.get_or_insert_with(GithubConfig::default);
                if let Some(token) = token {
                    github.token = Some(token);
                }
                if let Some(base_url) = base_url {
                    github.base_url = Some(base_url);
                }
                if let Some(timeout_secs) = timeout_secs {
                    github.timeout_secs = Some(timeout_secs);
                }
                save_config(&config, &cli.config)?;
                tracing::info!("GitHub configuration updated");
            }
            ConfigCommands::Show => {
                let config = load_config(&cli.config)?;
                show_config(&config);
            }
        },
        None => {
            println!("Stalker - GitHub lookup webhook for conversational agents");
            println!("Run with --help for usage information");
        }
    }

    Ok(())
}

/// Load config from the explicit path when given, otherwise the default
/// platform location.
fn load_config(path: &Option<PathBuf>) -> anyhow::Result<Config> {
    Ok(match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    })
}

fn save_config(config: &Config, path: &Option<PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    Ok(())
}

fn show_config(config: &Config) {
    match &config.github {
        Some(github) => {
            println!(
                "github.token = {}",
                github.token.as_deref().map(mask_token).unwrap_or_default()
            );
            if let Some(base_url) = &github.base_url {
                println!("github.base_url = {}", base_url);
            }
            if let Some(timeout_secs) = github.timeout_secs {
                println!("github.timeout_secs = {}", timeout_secs);
            }
        }
        None => println!("github: (not configured)"),
    }
    println!("server.bind = {}", config.bind_addr());
}

/// Keep a short prefix of the token so a user can tell which one is set.
fn mask_token(token: &str) -> String {
    if token.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &token[..4])
    }
}

async fn serve(config: Config, bind: Option<String>) -> anyhow::Result<()> {
    let mut github = config.github.clone().unwrap_or_default();

    // Environment wins over the config file for the credential.
    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        github.token = Some(token);
    }
    if github.token.is_none() {
        tracing::warn!("no GitHub token configured; requests will be unauthenticated");
    }

    let client = GithubClient::from_config(&github);
    let dispatcher = Dispatcher::new(Arc::new(client));

    let bind = bind.unwrap_or_else(|| config.bind_addr());
    tracing::info!(%bind, "starting webhook server");
    stalker_webhook::serve(&bind, dispatcher).await?;
    Ok(())
}

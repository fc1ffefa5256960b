use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use footy::api;
use footy::background::{self, RefreshRequest};
use footy::commands::{self, OutputFormat};
use footy::competition::Competition;
use footy::config::{self, Config};
use footy::credentials::CredentialStore;
use footy::state::{shared_handle, SharedData};
use footy::tui;

// Channel Constants
/// Buffer size for the refresh request channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "footy")]
#[command(about = "Football standings and live scores", long_about = "Football standings and live scores from football-data.org\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompetitionArg {
    /// Eredivisie
    #[value(name = "ded")]
    Eredivisie,
    /// Champions League
    #[value(name = "cl")]
    ChampionsLeague,
    /// Europa League
    #[value(name = "el")]
    EuropaLeague,
}

impl CompetitionArg {
    fn to_competition(self) -> Competition {
        match self {
            CompetitionArg::Eredivisie => Competition::Eredivisie,
            CompetitionArg::ChampionsLeague => Competition::ChampionsLeague,
            CompetitionArg::EuropaLeague => Competition::EuropaLeague,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain text table
    Text,
    /// HTML fragment for embedding
    Html,
}

impl FormatArg {
    fn to_output_format(self) -> OutputFormat {
        match self {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display the standings table for a competition
    Standings {
        /// Competition (defaults to the configured one)
        #[arg(short, long)]
        competition: Option<CompetitionArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: FormatArg,
    },
    /// Display recent and in-play matches for a competition
    Matches {
        /// Competition (defaults to the configured one)
        #[arg(short, long)]
        competition: Option<CompetitionArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: FormatArg,
    },
    /// Store the API token, or show whether one is configured
    Token {
        /// Token value; omit to show the current state
        value: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn create_client() -> api::Client {
    let credential = CredentialStore::from_xdg().and_then(|store| store.load());
    match api::Client::new(credential) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("time_format: {}", cfg.time_format);
    println!("default_competition: {}", cfg.default_competition.code());
    println!();
    println!("[theme]");
    println!("live_fg: {:?}", cfg.theme.live_fg);
    println!("halftime_fg: {:?}", cfg.theme.halftime_fg);
    println!("finished_fg: {:?}", cfg.theme.finished_fg);
    println!("scheduled_fg: {:?}", cfg.theme.scheduled_fg);
}

/// Handle the token command - store a new token or report the current state
fn handle_token_command(value: Option<String>) {
    let Some(store) = CredentialStore::from_xdg() else {
        eprintln!("Unable to determine config directory; token not available");
        std::process::exit(1);
    };

    match value {
        Some(token) => match store.save(&token) {
            Ok(_) => println!("API token saved to {}", store.path().display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            if store.load().is_some() {
                println!("An API token is configured ({})", store.path().display());
            } else {
                println!("No API token configured. Set one with: footy token <value>");
            }
        }
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with background data fetching
async fn run_tui_mode(config: Config) -> Result<(), std::io::Error> {
    let shared = shared_handle(SharedData::with_config(config));

    // Channel carrying refresh requests from the UI and the scheduler
    let (refresh_tx, refresh_rx) = tokio::sync::mpsc::channel::<RefreshRequest>(REFRESH_CHANNEL_BUFFER_SIZE);

    // Spawn background task to fetch data
    let bg_client = create_client();
    let shared_clone = shared.clone();
    tokio::spawn(async move {
        background::fetch_data_loop(bg_client, shared_clone, refresh_rx).await;
    });

    // The standings tab is active at startup; fill it right away
    let _ = refresh_tx.send(RefreshRequest::Standings).await;

    tui::run(shared, refresh_tx, CredentialStore::from_xdg()).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(client: &api::Client, command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Config | Commands::Token { .. } => {
            unreachable!("handled before execute_command")
        }
        Commands::Standings { competition, format } => {
            let competition = competition
                .map(CompetitionArg::to_competition)
                .unwrap_or(config.default_competition);
            commands::standings::run(client, competition, format.to_output_format()).await
        }
        Commands::Matches { competition, format } => {
            let competition = competition
                .map(CompetitionArg::to_competition)
                .unwrap_or(config.default_competition);
            commands::matches::run(client, competition, format.to_output_format()).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    if cli.command.is_none() {
        if let Err(e) = run_tui_mode(config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Config and Token need no API client; everything else does
    match cli.command.unwrap() {
        Commands::Config => handle_config_command(),
        Commands::Token { value } => handle_token_command(value),
        command => {
            let client = create_client();
            if let Err(e) = execute_command(&client, command, &config).await {
                eprintln!("Error: {:#}", e);
                tracing::error!("Command failed: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

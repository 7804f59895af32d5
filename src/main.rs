use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rangecal::auth::StaticIdentityProvider;
use rangecal::{commands, config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "rangecal")]
#[command(
    about = "Infinite-scroll calendar with date range selection",
    long_about = "Infinite-scroll calendar with date range selection\n\nIf no command is specified, the program starts in interactive mode."
)]
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

#[derive(Subcommand)]
enum Commands {
    /// Display the day window the calendar materializes around a date
    Window {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        today: Option<String>,

        /// Number of backward expansions to apply
        #[arg(short, long, default_value_t = 0)]
        backward: u32,

        /// Number of forward expansions to apply
        #[arg(short, long, default_value_t = 0)]
        forward: u32,
    },
    /// Replay day clicks through the range selection and print the result
    Select {
        /// Dates in YYYY-MM-DD format, in click order
        #[arg(short, long = "click", num_args = 1.., required = true)]
        clicks: Vec<String>,
    },
    /// Display current configuration
    Config,
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
    println!("date_format: {}", cfg.date_format);
    println!();
    println!("[calendar]");
    println!("edge_threshold: {} units", cfg.calendar.edge_threshold);
    println!("loading_delay_ms: {}", cfg.calendar.loading_delay_ms);
    println!("fade_out_ms: {}", cfg.calendar.fade_out_ms);
    println!();
    println!("[theme]");
    println!("today_fg: {:?}", cfg.theme.today_fg);
    println!("endpoint_fg: {:?}", cfg.theme.endpoint_fg);
    println!("endpoint_bg: {:?}", cfg.theme.endpoint_bg);
    println!("between_bg: {:?}", cfg.theme.between_bg);
    println!();
    println!("[auth]");
    println!(
        "accounts: {}{}",
        cfg.auth.accounts.len(),
        if cfg.auth.login_required() { "" } else { " (login screen disabled)" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
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

/// Run TUI mode with the config-backed identity provider
async fn run_tui_mode(config: config::Config) -> Result<(), std::io::Error> {
    let provider = Arc::new(StaticIdentityProvider::from_config(&config.auth));
    tui::run(config, provider).await
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(command: Commands, config: &config::Config) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Window { today, backward, forward } => {
            commands::window::run(today.as_deref(), backward, forward)
        }
        Commands::Select { clicks } => commands::select::run(&clicks, &config.date_format),
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
    let Some(command) = cli.command else {
        if let Err(e) = run_tui_mode(config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(command, &config) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config_log_settings() {
        let cli = Cli::parse_from(["rangecal", "--log-level", "debug", "--log-file", "/tmp/rc.log"]);
        let config = config::Config::default();
        assert_eq!(resolve_log_config(&cli, &config), ("debug", "/tmp/rc.log"));
    }

    #[test]
    fn test_config_log_settings_used_by_default() {
        let cli = Cli::parse_from(["rangecal"]);
        let config = config::Config {
            log_level: "warn".to_string(),
            log_file: "/tmp/config.log".to_string(),
            ..config::Config::default()
        };
        assert_eq!(resolve_log_config(&cli, &config), ("warn", "/tmp/config.log"));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["rangecal", "window", "--today", "2024-06-15", "-b", "2"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Window { today: Some(ref t), backward: 2, forward: 0 }) if t == "2024-06-15"
        ));

        let cli = Cli::parse_from(["rangecal", "select", "--click", "2024-06-10", "2024-06-03"]);
        match cli.command {
            Some(Commands::Select { clicks }) => assert_eq!(clicks, vec!["2024-06-10", "2024-06-03"]),
            _ => panic!("Expected select command"),
        }
    }
}

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rangepick::commands::{self, parse_date, parse_focus, parse_range, validate_range_keys};
use rangepick::config::{self, format_color};
use rangepick::formatting::format_range;
use rangepick::selection::SelectionOptions;
use rangepick::types::Range;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "rangepick")]
#[command(about = "Multi-range date picker", long_about = "Multi-range date picker\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Range to edit in interactive mode, as [KEY=]START..END (repeatable)
    #[arg(short, long = "range")]
    ranges: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay picks against a set of ranges and print the result
    Pick {
        /// Range as [KEY=]START..END; either side may be empty (repeatable)
        #[arg(short, long = "range")]
        ranges: Vec<String>,

        /// Initial focus as INDEX,start|end
        #[arg(short, long)]
        focus: Option<String>,

        /// Keep the range length when re-picking a start date
        #[arg(short, long)]
        move_range: bool,

        /// Latest end date a start pick may produce (YYYY-MM-DD)
        #[arg(long)]
        max_date: Option<String>,

        /// Dates to pick in order; @Label applies a shortcut, @label=N an input range
        steps: Vec<String>,
    },
    /// List the shortcut ranges
    Shortcuts {
        /// Mark the shortcuts matching this [KEY=]START..END range
        #[arg(short, long)]
        range: Option<String>,
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
    println!();
    println!("[picker]");
    println!("move_range_on_first_selection: {}", cfg.picker.move_range_on_first_selection);
    println!(
        "max_date: {}",
        cfg.picker.max_date.map(|date| date.to_string()).unwrap_or_else(|| "none".to_string())
    );
    let colors: Vec<String> = cfg.picker.range_colors.iter().copied().map(format_color).collect();
    println!("range_colors: [{}]", colors.join(", "));
    println!(
        "initial_focused_range: {}",
        cfg.picker
            .initial_focused_range
            .map(|focus| focus.to_string())
            .unwrap_or_else(|| "first incomplete range".to_string())
    );
    println!();
    println!("[theme]");
    println!("selection_fg: {}", format_color(cfg.theme.selection_fg));
    println!("unfocused_selection_fg: {}{}",
        format_color(cfg.theme.unfocused_selection_fg()),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
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

fn parse_ranges(values: &[String]) -> anyhow::Result<Vec<Range>> {
    let ranges = values
        .iter()
        .map(|value| parse_range(value))
        .collect::<Result<Vec<_>, _>>()?;
    validate_range_keys(&ranges)?;
    Ok(ranges)
}

/// Run the interactive picker, then print where the ranges ended up
fn run_tui_mode(config: config::Config, ranges: Vec<Range>) -> anyhow::Result<()> {
    let ranges = if ranges.is_empty() {
        vec![Range::empty()]
    } else {
        ranges
    };
    let ranges = rangepick::tui::run(config, ranges, commands::now())?;
    for (index, range) in ranges.iter().enumerate() {
        println!("{}", format_range(range, index));
    }
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Pick {
            ranges,
            focus,
            move_range,
            max_date,
            steps,
        } => {
            let mut options = SelectionOptions::from(&config.picker);
            if move_range {
                options.move_range_on_first_selection = true;
            }
            if let Some(max_date) = max_date {
                options.max_date = Some(parse_date(&max_date)?);
            }
            if let Some(focus) = focus {
                options.initial_focused_range = Some(parse_focus(&focus)?);
            }
            commands::pick::run(parse_ranges(&ranges)?, options, steps)
        }
        Commands::Shortcuts { range } => {
            let candidate = range.map(|range| parse_range(&range)).transpose()?;
            commands::shortcuts::run(candidate, commands::now())
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let Some(command) = cli.command else {
        let result = parse_ranges(&cli.ranges).and_then(|ranges| run_tui_mode(config, ranges));
        if let Err(e) = result {
            eprintln!("Error running picker: {:#}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(&config, command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

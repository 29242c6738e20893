use clap::{Parser, Subcommand};
use fitlog_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Fitness and nutrition tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive tracking session (default)
    Track {
        /// Import entries from a CSV file before the entry prompts (repeatable)
        #[arg(long = "import-csv", value_name = "FILE")]
        import_csv: Vec<PathBuf>,

        /// Override the chart bar width
        #[arg(long)]
        chart_width: Option<usize>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fitlog_core::logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Track {
            import_csv,
            chart_width,
        }) => cmd_track(cli.config, import_csv, chart_width),
        Some(Commands::InitConfig { force }) => cmd_init_config(cli.config, force),
        None => {
            // Default to "track" command
            cmd_track(cli.config, Vec::new(), None)
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
}

fn cmd_track(
    config_path: Option<PathBuf>,
    csv_imports: Vec<PathBuf>,
    chart_width: Option<usize>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(width) = chart_width {
        config.chart.width = width;
        config.validate()?;
    }

    tracing::debug!("Starting session with {} CSV import(s)", csv_imports.len());
    let console = TerminalConsole::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, config);
    session.run(&csv_imports)
}

fn cmd_init_config(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = config_path.unwrap_or_else(Config::default_config_path);

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("  Use --force to overwrite.");
        return Ok(());
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

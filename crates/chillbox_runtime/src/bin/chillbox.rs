//! Chillbox CLI entry point.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use chillbox_runtime::console::render_grid;
use chillbox_runtime::{ConsoleDisplay, ConsoleFeedback, Repl, Settings, logging, open_controller, run_batch};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config: Option<PathBuf>,
    database: Option<String>,
    batch: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-c" | "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                config.config = Some(PathBuf::from(value));
            }
            "-d" | "--database" => {
                let value = args.next().ok_or("--database requires a path")?;
                config.database = Some(value);
            }
            "-b" | "--batch" => {
                let value = args.next().ok_or("--batch requires a file")?;
                config.batch = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("chillbox {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        settings.database.path = database;
    }
    settings.validate()?;
    logging::init(&settings.logging.level)?;

    let threshold = settings.display.low_stock_threshold;
    let controller = open_controller(&settings)?.with_feedback(ConsoleFeedback);

    if let Some(path) = cli.batch {
        let mut controller = controller;
        let file = File::open(&path)
            .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
        let summary = run_batch(&mut controller, BufReader::new(file))?;
        print!("{}", render_grid(&controller.snapshot()?, threshold));
        println!(
            "{} applied, {} rejected",
            summary.applied, summary.rejected
        );
        return Ok(());
    }

    let controller = controller.with_display(ConsoleDisplay::new(threshold));
    Repl::new(controller)?
        .with_low_stock_threshold(threshold)
        .run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mChillbox\x1b[0m - Voice-driven freezer inventory

\x1b[1mUSAGE:\x1b[0m
    chillbox [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -c, --config PATH      Settings file (default: config/chillbox.toml)
    -d, --database PATH    SQLite database, or :memory:
    -b, --batch FILE       Process one transcript per line, then exit

\x1b[1mENVIRONMENT:\x1b[0m
    CHILLBOX_DATABASE__PATH                 Database path
    CHILLBOX_LOGGING__LEVEL                 trace, debug, info, warn, error
    CHILLBOX_DISPLAY__LOW_STOCK_THRESHOLD   Flag items at or below this count
    RUST_LOG                                Overrides the log filter

\x1b[1mEXAMPLES:\x1b[0m
    chillbox                          Start the console
    chillbox -d :memory:              Try it without touching the database
    chillbox -b restock.txt           Apply a list of transcripts

\x1b[1mCONSOLE:\x1b[0m
    add 2 of chicken breast    Say what changed
    undo                       Revert the last change
    :inventory  :history  :help  :quit"
    );
}

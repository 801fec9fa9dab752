use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use folio::{Format, Section};
use folioctl::{AppContext, CommandHandler};
use log::LevelFilter;

/// Inspect, export and validate portfolio page content.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Content file (.toml or .json); the built-in content is used if omitted.
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the content, or one section, as JSON.
    Show {
        /// Section to print (page1..page6).
        section: Option<Section>,
    },
    /// Serialize the content as TOML or JSON.
    Export {
        /// Output format (toml or json).
        #[arg(short, long)]
        format: Option<Format>,
        /// Output file; its extension picks the format.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Emit the JSON Schema of content files.
    Schema {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check content against the shape rules.
    Validate {
        /// File to check instead of the selected content.
        path: Option<PathBuf>,
    },
    /// Print a short overview of each section.
    Summary,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let ctx = AppContext::new(cli.content);
    let handler = CommandHandler::new(&ctx);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Show { section } => handler.show(section, &mut out)?,
        Command::Export { format, output } => {
            handler.export(format, output.as_deref(), &mut out)?
        }
        Command::Schema { output } => handler.schema(output.as_deref(), &mut out)?,
        Command::Validate { path } => {
            if !handler.validate(path, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Summary => handler.summary(&mut out)?,
    }

    Ok(ExitCode::SUCCESS)
}

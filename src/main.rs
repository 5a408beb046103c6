//! Gridcalc - evaluate a tab-separated spreadsheet from the command line

mod config;
mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use config::OutputFormat;
use gridcalc_core::Spreadsheet;
use gridcalc_core::storage::write_markdown_content;
use gridcalc_engine::builtins::BUILTINS;
use gridcalc_engine::engine::EvalOptions;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridcalc", version, about = "Evaluate a tab-separated spreadsheet with formulas")]
struct Cli {
    /// Spreadsheet file to read; reads stdin when omitted or "-"
    file: Option<PathBuf>,

    /// Print the value of a cell instead of the whole grid (can be repeated)
    #[arg(short = 'c', long = "cell", value_name = "CELL")]
    cells: Vec<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format for the whole grid
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum nesting of formula cells referencing formula cells
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Load settings from this TOML file
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore any config file
    #[arg(long)]
    no_config: bool,

    /// List the available functions and exit
    #[arg(long)]
    list_functions: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list_functions {
        for spec in BUILTINS {
            println!(
                "{:<10} {:<12} {}",
                spec.name,
                format!("({} args)", spec.arity),
                spec.description
            );
        }
        return Ok(());
    }

    let config = if cli.no_config {
        config::Config::default()
    } else {
        let (config, warnings) = config::load_config(cli.config.as_ref());
        for warning in warnings {
            log::warn!("{}", warning);
        }
        config
    };

    let max_depth = cli.max_depth.unwrap_or(config.engine.max_depth);
    if max_depth == 0 {
        bail!("--max-depth must be at least 1");
    }
    let options = EvalOptions { max_depth };

    let sheet = load_sheet(cli.file.as_deref(), options)?;

    let output = if cli.cells.is_empty() {
        match cli.format.unwrap_or(config.output.format) {
            OutputFormat::Tsv => sheet.render()?,
            OutputFormat::Markdown => write_markdown_content(&sheet)?,
        }
    } else {
        let mut values = Vec::with_capacity(cli.cells.len());
        for address in &cli.cells {
            let value = sheet
                .read_cell(address)
                .with_context(|| format!("cell {}", address))?;
            values.push(value);
        }
        values.join("\n")
    };

    match cli.output {
        Some(path) => {
            let mut content = output;
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            std::fs::write(&path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
    }
    Ok(())
}

fn load_sheet(file: Option<&Path>, options: EvalOptions) -> Result<Spreadsheet> {
    match file {
        Some(path) if path != Path::new("-") => Spreadsheet::load_with_options(path, options)
            .with_context(|| format!("failed to load {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(Spreadsheet::with_options(&text, options))
        }
    }
}

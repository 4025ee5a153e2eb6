use std::io::Write;

use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use colored::*;
use env_logger::Builder;
use log::info;

use vienna::input_parsers::read_inverse_record_input;
use vienna::{InverseOptions, inverse_fold};

#[derive(Debug, Parser)]
#[command(name = "vr-inverse")]
#[command(author, version, about)]
pub struct Cli {
    /// Input file with a target structure line and an optional constraint
    /// line, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Number of designs to request
    #[arg(short = 'R', long, default_value_t = 100)]
    pub repeats: usize,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (header, structure, constraint) = read_inverse_record_input(&cli.input)?;
    let options = InverseOptions { n_solutions: cli.repeats };
    let results = inverse_fold(&structure, constraint.as_deref().unwrap_or(""), &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if let Some(h) = header {
        println!("{}", h.yellow())
    }
    info!("target: {}", structure.magenta());

    for design in &results {
        println!("{} {}", design.sequence, format!("{:>5.1}", design.score).green());
    }
    if let Some(best) = results.best() {
        println!("best: {} {}", best.sequence.cyan(), format!("{:>5.1}", best.score).green());
    }

    Ok(())
}

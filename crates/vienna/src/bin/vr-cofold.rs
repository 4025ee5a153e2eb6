use std::io::Write;

use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use colored::*;
use env_logger::Builder;
use log::info;

use vienna::cofold;
use vienna::input_parsers::read_fold_record_input;
use vienna::input_parsers::ruler;

#[derive(Debug, Parser)]
#[command(name = "vr-cofold")]
#[command(author, version, about)]
pub struct Cli {
    /// Input file (FASTA-like) with a two-strand sequence `A&B`,
    /// or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Print the result as JSON
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

    let (header, sequence) = read_fold_record_input(&cli.input)?;
    let result = cofold(&sequence)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(h) = header {
        println!("{}", h.yellow())
    }

    info!("{}", ruler(result.sequence.len() - 1).magenta());
    println!(
        "{}\n{} {}",
        result.sequence,
        result.dot_bracket,
        format!("{:>6.2}", result.mfe).green()
    );
    info!("{}", ruler(result.sequence.len() - 1).magenta());

    Ok(())
}

use std::io::Write;

use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use colored::*;
use env_logger::Builder;
use log::info;

use vienna::input_parsers::read_fold_record_input;
use vienna::input_parsers::ruler;
use vienna::{FoldOptions, fold};

#[derive(Debug, Parser)]
#[command(name = "vr-fold")]
#[command(author, version, about)]
pub struct Cli {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Collect base pair probabilities from the dot plot
    #[arg(short = 'p', long)]
    pub probabilities: bool,

    /// Folding temperature in Celsius
    #[arg(short = 'T', long)]
    pub temperature: Option<f64>,

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
    let options = FoldOptions {
        bp_probs: cli.probabilities,
        temperature: cli.temperature,
    };
    let result = fold(&sequence, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(h) = header {
        println!("{}", h.yellow())
    }

    info!("{}", ruler(result.sequence.len() - 1).magenta());
    println!(
        "{}\n{} {} {}",
        result.sequence,
        result.dot_bracket,
        format!("{:>6.2}", result.mfe).green(),
        format!("d={:.2}", result.ens_defect).cyan()
    );
    info!("{}", ruler(result.sequence.len() - 1).magenta());

    for bp in &result.bp_probs {
        info!("{:>4} {:>4} {:>9.5}", bp.i, bp.j, bp.prob);
    }

    Ok(())
}

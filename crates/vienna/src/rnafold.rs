use std::fs;

use vr_structure::{DotBracketVec, Duplex, NucleotideVec};

use crate::ViennaError;
use crate::exec::run_tool;
use crate::output_parsers::{parse_dot_plot, parse_fold_output};
use crate::results::FoldResult;

// Fixed base flags matching the toolkit defaults this wrapper relies on:
// partition function on, no lonely pairs, no structure plot, dangle model 2.
const BASE_ARGS: [&str; 4] = ["-p", "--noLP", "--noPS", "-d2"];

/// Options for [`fold`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoldOptions {
    /// Collect base pair probabilities from the RNAfold dot plot.
    pub bp_probs: bool,
    /// Folding temperature in Celsius (tool default: 37).
    pub temperature: Option<f64>,
}

fn fold_args(options: &FoldOptions) -> Vec<String> {
    let mut args: Vec<String> = BASE_ARGS.iter().map(|s| s.to_string()).collect();
    if !options.bp_probs {
        // Suppress the dot plot when nobody is going to read it.
        args.push("--noDP".to_string());
    }
    if let Some(t) = options.temperature {
        args.push("-T".to_string());
        args.push(t.to_string());
    }
    args
}

/// Fold a sequence with RNAfold.
pub fn fold(seq: &str, options: &FoldOptions) -> Result<FoldResult, ViennaError> {
    let sequence = NucleotideVec::try_from(seq)?;

    let scratch = tempfile::tempdir()?;
    let stdout = run_tool(
        "RNAfold",
        &fold_args(options),
        &format!("{}\n", sequence),
        scratch.path(),
    )?;
    let (dot_bracket, mfe, ens_defect) = parse_fold_output("RNAfold", &stdout)?;

    if dot_bracket.len() != sequence.len() {
        return Err(ViennaError::UnexpectedOutput {
            program: "RNAfold".to_string(),
            detail: format!(
                "structure length {} does not match sequence length {}",
                dot_bracket.len(),
                sequence.len()
            ),
        });
    }

    let bp_probs = if options.bp_probs {
        let text = fs::read_to_string(scratch.path().join("dot.ps"))?;
        parse_dot_plot(&text)
    } else {
        Vec::new()
    };

    Ok(FoldResult {
        sequence: sequence.to_string(),
        dot_bracket,
        mfe,
        ens_defect,
        bp_probs,
    })
}

/// Fold two strands with RNAcofold. The input is `A&B` and the returned
/// dot-bracket keeps the '&' separator, so both have length
/// `len(A) + len(B) + 1`.
pub fn cofold(seq: &str) -> Result<FoldResult, ViennaError> {
    let duplex = Duplex::try_from(seq)?;

    let args: Vec<String> = BASE_ARGS.iter().map(|s| s.to_string()).collect();
    let scratch = tempfile::tempdir()?;
    let stdout = run_tool(
        "RNAcofold",
        &args,
        &format!("{}\n", duplex),
        scratch.path(),
    )?;
    let (dot_bracket, mfe, ens_defect) = parse_fold_output("RNAcofold", &stdout)?;

    if dot_bracket.len() != duplex.len() {
        return Err(ViennaError::UnexpectedOutput {
            program: "RNAcofold".to_string(),
            detail: format!(
                "structure length {} does not match duplex length {}",
                dot_bracket.len(),
                duplex.len()
            ),
        });
    }

    Ok(FoldResult {
        sequence: duplex.to_string(),
        dot_bracket,
        mfe,
        ens_defect,
        bp_probs: Vec::new(),
    })
}

/// Fold with default options and return only the dot-bracket string.
pub fn folded_structure(seq: &str) -> Result<String, ViennaError> {
    Ok(fold(seq, &FoldOptions::default())?.dot_bracket)
}

/// Check whether a sequence folds into the given structure.
///
/// The structure is validated before the tool runs, so a malformed target
/// is an error rather than a `false`.
pub fn does_sequence_fold_to(seq: &str, structure: &str) -> Result<bool, ViennaError> {
    let target = DotBracketVec::try_from(structure)?;
    let folded = folded_structure(seq)?;
    Ok(folded == target.to_string())
}

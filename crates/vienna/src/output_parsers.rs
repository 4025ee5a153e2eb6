//! Parsers for the fixed-format text output of the ViennaRNA tools.
//!
//! The formats are owned by the toolkit, not by this crate; any deviation
//! from what we expect becomes an [`UnexpectedOutput`](crate::ViennaError)
//! error naming the program.

use log::debug;

use crate::ViennaError;
use crate::results::{DesignResult, InverseResults, PairProb};

fn unexpected(program: &str, detail: impl Into<String>) -> ViennaError {
    ViennaError::UnexpectedOutput {
        program: program.to_string(),
        detail: detail.into(),
    }
}

/// Extract the MFE structure, its energy, and the trailing ensemble figure
/// from RNAfold or RNAcofold stdout.
///
/// The second line reads `STRUCTURE ( ENERGY)`; the structure is its first
/// whitespace token and the energy follows the last '('. The last non-empty
/// line ends with the ensemble value (diversity for RNAfold, delta G of
/// binding for RNAcofold).
pub fn parse_fold_output(
    program: &str,
    stdout: &str,
) -> Result<(String, f64, f64), ViennaError> {
    let lines: Vec<&str> = stdout.lines().collect();

    let mfe_line = lines
        .get(1)
        .ok_or_else(|| unexpected(program, "missing structure line"))?;

    let structure = mfe_line
        .split_whitespace()
        .next()
        .ok_or_else(|| unexpected(program, "empty structure line"))?;

    let (_, tail) = mfe_line
        .rsplit_once('(')
        .ok_or_else(|| unexpected(program, format!("no energy in {:?}", mfe_line)))?;
    let mfe: f64 = tail
        .trim()
        .trim_end_matches(')')
        .trim()
        .parse()
        .map_err(|_| unexpected(program, format!("unparseable energy in {:?}", mfe_line)))?;

    let ensemble_line = lines
        .iter()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| unexpected(program, "missing ensemble line"))?;
    let ens_defect: f64 = ensemble_line
        .split_whitespace()
        .last()
        .and_then(|tok| tok.parse().ok())
        .ok_or_else(|| {
            unexpected(program, format!("unparseable ensemble line {:?}", ensemble_line))
        })?;

    Ok((structure.to_string(), mfe, ens_defect))
}

/// Collect the "ubox" entries of an RNAfold dot plot (`dot.ps`).
///
/// Pair probability lines have exactly four fields: `i j p ubox`. All other
/// PostScript content is skipped.
pub fn parse_dot_plot(text: &str) -> Vec<PairProb> {
    text.lines()
        .filter_map(|line| {
            let spl: Vec<&str> = line.split_whitespace().collect();
            if spl.len() != 4 || spl[3] != "ubox" {
                return None;
            }
            let i = spl[0].parse().ok()?;
            let j = spl[1].parse().ok()?;
            let prob = spl[2].parse().ok()?;
            Some(PairProb { i, j, prob })
        })
        .collect()
}

/// Collect designs from RNAinverse stdout.
///
/// Each design is a `SEQUENCE SCORE` line; RNAinverse prints other
/// diagnostics, so lines that do not match are skipped.
pub fn parse_inverse_output(stdout: &str) -> InverseResults {
    let mut designs = Vec::new();
    for line in stdout.lines() {
        let spl: Vec<&str> = line.split_whitespace().collect();
        if spl.len() != 2 {
            continue;
        }
        let Ok(score) = spl[1].parse::<f64>() else {
            debug!("Skipping RNAinverse line {:?}", line);
            continue;
        };
        designs.push(DesignResult {
            sequence: spl[0].to_string(),
            score,
        });
    }
    InverseResults(designs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RNAFOLD_STDOUT: &str = "\
GGGGAAAACCCC
((((....)))) ( -5.40)
((((....)))) [ -5.71]
((((....)))) { -5.40 d=0.95}
 frequency of mfe structure in ensemble 0.602523; ensemble diversity 1.85
";

    const RNACOFOLD_STDOUT: &str = "\
GGGG&AAACCCC
((((&...)))) ( -4.60)
((((&...)))) [ -4.74]
 frequency of mfe structure in ensemble 0.793684 , delta G binding= -2.40
";

    #[test]
    fn test_parse_rnafold_output() {
        let (structure, mfe, ens_defect) =
            parse_fold_output("RNAfold", RNAFOLD_STDOUT).unwrap();
        assert_eq!(structure, "((((....))))");
        assert_eq!(mfe, -5.40);
        assert_eq!(ens_defect, 1.85);
    }

    #[test]
    fn test_parse_rnacofold_output() {
        let (structure, mfe, ens_defect) =
            parse_fold_output("RNAcofold", RNACOFOLD_STDOUT).unwrap();
        assert_eq!(structure, "((((&...))))");
        assert_eq!(mfe, -4.60);
        assert_eq!(ens_defect, -2.40);
    }

    #[test]
    fn test_parse_fold_output_positive_energy() {
        let stdout = "\
ACGU
.... (  1.20)
.... [  0.90]
 frequency of mfe structure in ensemble 0.9; ensemble diversity 0.10
";
        let (structure, mfe, _) = parse_fold_output("RNAfold", stdout).unwrap();
        assert_eq!(structure, "....");
        assert_eq!(mfe, 1.20);
    }

    #[test]
    fn test_parse_fold_output_truncated() {
        let err = parse_fold_output("RNAfold", "GGGG\n").unwrap_err();
        assert!(matches!(err, ViennaError::UnexpectedOutput { .. }));
    }

    #[test]
    fn test_parse_fold_output_garbage_energy() {
        let stdout = "GGGG\n.... ( abc)\n";
        let err = parse_fold_output("RNAfold", stdout).unwrap_err();
        assert!(
            matches!(err, ViennaError::UnexpectedOutput { ref detail, .. }
                if detail.contains("unparseable energy"))
        );
    }

    #[test]
    fn test_parse_dot_plot() {
        let text = "\
%!PS-Adobe-3.0 EPSF-3.0
/ubox {
   logscale {
      log dup add add
   } if
} bind def
1 12 0.9746993 ubox
2 11 0.9718912 ubox
3 10 0.9671409 ubox
1 12 0.95 lbox
showpage
";
        let probs = parse_dot_plot(text);
        assert_eq!(probs.len(), 3);
        assert_eq!(probs[0].i, 1);
        assert_eq!(probs[0].j, 12);
        assert_eq!(probs[0].prob, 0.9746993);
        assert_eq!(probs[2].j, 10);
    }

    #[test]
    fn test_parse_dot_plot_no_entries() {
        assert!(parse_dot_plot("%!PS-Adobe-3.0 EPSF-3.0\nshowpage\n").is_empty());
    }

    #[test]
    fn test_parse_inverse_output() {
        let stdout = "\
GGCGUUUUACAAUACGCC   4
GGGAGAUAAAAUAUCUCCC   0
CGGGCUAUUUAGCUGGAGAGC  d= 2
";
        let results = parse_inverse_output(stdout);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sequence, "GGCGUUUUACAAUACGCC");
        assert_eq!(results[0].score, 4.0);
        assert_eq!(results.best().unwrap().score, 0.0);
    }

    #[test]
    fn test_parse_inverse_output_empty() {
        assert!(parse_inverse_output("").is_empty());
    }
}

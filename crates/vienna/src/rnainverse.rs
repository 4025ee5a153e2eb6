use vr_structure::{PairTable, is_iupac};

use crate::ViennaError;
use crate::exec::run_tool;
use crate::output_parsers::parse_inverse_output;
use crate::results::InverseResults;

/// Options for [`inverse_fold`].
#[derive(Debug, Clone, PartialEq)]
pub struct InverseOptions {
    /// Number of designs to request (RNAinverse `-R`).
    pub n_solutions: usize,
}

impl Default for InverseOptions {
    fn default() -> Self {
        InverseOptions { n_solutions: 100 }
    }
}

/// Design sequences that fold into `target` with RNAinverse.
///
/// The constraint uses IUPAC letters, lowercase marking fixed positions
/// (e.g. target `(((.(((....))).)))`, constraint `NNNgNNNNNNNNNNaNNN`).
/// An empty constraint is treated as all-'N', i.e. unconstrained design.
pub fn inverse_fold(
    target: &str,
    constraint: &str,
    options: &InverseOptions,
) -> Result<InverseResults, ViennaError> {
    // Validates balance and the dot-bracket alphabet.
    let pairings = PairTable::try_from(target)?;

    let constraint = if constraint.is_empty() {
        "N".repeat(pairings.len())
    } else {
        constraint.to_string()
    };

    if constraint.chars().count() != pairings.len() {
        return Err(ViennaError::InvalidConstraint(format!(
            "constraint length {} does not match structure length {}",
            constraint.chars().count(),
            pairings.len()
        )));
    }
    if let Some(c) = constraint.chars().find(|c| !is_iupac(*c)) {
        return Err(ViennaError::InvalidConstraint(format!(
            "'{}' is not an IUPAC letter",
            c
        )));
    }

    let args: Vec<String> = vec![
        "-Fmp".to_string(),
        "-f".to_string(),
        "0.5".to_string(),
        "-d2".to_string(),
        format!("-R{}", options.n_solutions),
    ];

    let scratch = tempfile::tempdir()?;
    let input = format!("{}\n{}\n", target, constraint);
    let stdout = run_tool("RNAinverse", &args, &input, scratch.path())?;

    Ok(parse_inverse_output(&stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vr_structure::StructureError;

    #[test]
    fn test_inverse_fold_rejects_unbalanced_target() {
        let err = inverse_fold("(((....))", "", &InverseOptions::default()).unwrap_err();
        assert!(matches!(err, ViennaError::Structure(StructureError::UnmatchedOpen(0))));
    }

    #[test]
    fn test_inverse_fold_rejects_constraint_length_mismatch() {
        let err = inverse_fold("(((....)))", "NNNN", &InverseOptions::default()).unwrap_err();
        assert!(matches!(err, ViennaError::InvalidConstraint(_)));
    }

    #[test]
    fn test_inverse_fold_rejects_non_iupac_constraint() {
        let err = inverse_fold("(((....)))", "NNN....NNN", &InverseOptions::default()).unwrap_err();
        assert!(matches!(err, ViennaError::InvalidConstraint(ref d) if d.contains("'.'")));
    }

    #[test]
    fn test_default_solution_count() {
        assert_eq!(InverseOptions::default().n_solutions, 100);
    }
}

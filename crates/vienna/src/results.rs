use std::cmp::Ordering;
use std::ops::Deref;

use serde::Serialize;

use vr_structure::{PairTable, StructureError};

/// One entry of the RNAfold dot plot: the probability of pair (i, j).
/// Indices are 1-based, as printed by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairProb {
    pub i: usize,
    pub j: usize,
    pub prob: f64,
}

/// Results from one RNAfold or RNAcofold run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldResult {
    pub sequence: String,
    pub dot_bracket: String,
    pub mfe: f64,
    pub ens_defect: f64,
    pub bp_probs: Vec<PairProb>,
}

impl FoldResult {
    /// Pairing table of the MFE structure. Only defined for single-strand
    /// structures; a cofold structure still carries its '&' separator and
    /// errors here.
    pub fn pair_table(&self) -> Result<PairTable, StructureError> {
        PairTable::try_from(self.dot_bracket.as_str())
    }
}

/// One RNAinverse design. The score is the structure distance between the
/// design's MFE structure and the target; 0 means an exact match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignResult {
    pub sequence: String,
    pub score: f64,
}

/// All designs returned by one RNAinverse run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InverseResults(pub Vec<DesignResult>);

impl Deref for InverseResults {
    type Target = [DesignResult];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for InverseResults {
    type Item = DesignResult;
    type IntoIter = std::vec::IntoIter<DesignResult>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a InverseResults {
    type Item = &'a DesignResult;
    type IntoIter = std::slice::Iter<'a, DesignResult>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl InverseResults {
    /// The design with the lowest structure distance.
    pub fn best(&self) -> Option<&DesignResult> {
        self.0.iter().min_by(|a, b| {
            a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table_from_fold_result() {
        let result = FoldResult {
            sequence: "GGGGAAAACCCC".to_string(),
            dot_bracket: "((((....))))".to_string(),
            mfe: -5.4,
            ens_defect: 1.85,
            bp_probs: Vec::new(),
        };
        let pt = result.pair_table().unwrap();
        assert_eq!(pt[0], Some(11));
        assert_eq!(pt[4], None);
    }

    #[test]
    fn test_pair_table_rejects_cofold_structure() {
        let result = FoldResult {
            sequence: "GGGG&AAACCCC".to_string(),
            dot_bracket: "((((&...))))".to_string(),
            mfe: -4.6,
            ens_defect: 0.0,
            bp_probs: Vec::new(),
        };
        assert!(result.pair_table().is_err());
    }

    #[test]
    fn test_best_design() {
        let results = InverseResults(vec![
            DesignResult { sequence: "GGGAAACCC".to_string(), score: 2.0 },
            DesignResult { sequence: "GGCAAAGCC".to_string(), score: 0.0 },
            DesignResult { sequence: "GCGAAACGC".to_string(), score: 1.0 },
        ]);
        assert_eq!(results.best().unwrap().sequence, "GGCAAAGCC");
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_best_design_empty() {
        assert!(InverseResults::default().best().is_none());
    }
}

//! # vienna
//!
//! A typed wrapper around the ViennaRNA command line tools.
//!
//! Folding, cofolding and inverse folding are delegated to the `RNAfold`,
//! `RNAcofold` and `RNAinverse` executables, which must be on `PATH`. This
//! crate validates inputs, drives the subprocesses in private scratch
//! directories, and parses their text output into immutable result records.

pub mod error;
pub mod exec;
pub mod input_parsers;
pub mod output_parsers;
pub mod results;

mod rnafold;
mod rnainverse;

pub use error::ViennaError;
pub use results::{DesignResult, FoldResult, InverseResults, PairProb};
pub use rnafold::{FoldOptions, cofold, does_sequence_fold_to, fold, folded_structure};
pub use rnainverse::{InverseOptions, inverse_fold};

pub mod structure {
    pub use ::vr_structure::*;
}

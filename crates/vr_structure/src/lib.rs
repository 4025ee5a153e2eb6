mod error;
mod sequence;
mod dotbracket;
mod pair_table;

pub use error::*;
pub use sequence::*;
pub use dotbracket::*;
pub use pair_table::*;

use std::fmt;

#[derive(Debug)]
pub enum StructureError {
    UnmatchedOpen(usize),                // '(' at this position was never closed
    UnmatchedClose(usize),               // ')' at this position has no matching '('
    InvalidToken(String, String, usize), // token, source, position
    UnexpectedBreak(usize),              // strand break where a single strand is required
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::UnexpectedBreak(i) => {
                write!(f, "Unexpected strand break at position {}", i)
            }
        }
    }
}

impl std::error::Error for StructureError {}

#[derive(Debug)]
pub enum SequenceError {
    Empty,
    InvalidChar(char),
    Separator(char),
    NotADuplex(usize), // number of strands found
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Empty => {
                write!(f, "Empty sequence")
            }
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
            SequenceError::Separator(c) => {
                write!(f, "Unexpected strand separation character '{}'", c)
            }
            SequenceError::NotADuplex(n) => {
                write!(f, "Expected exactly two strands, found {}", n)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

use std::fmt;
use std::io;

use vr_structure::{SequenceError, StructureError};

#[derive(Debug)]
pub enum ViennaError {
    /// The requested executable was not found on PATH.
    MissingExecutable(String),
    /// The tool ran but exited with a non-zero status.
    ToolFailure {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
    /// The tool's output deviated from the expected text format.
    UnexpectedOutput { program: String, detail: String },
    /// An RNAinverse sequence constraint was rejected before invocation.
    InvalidConstraint(String),
    Sequence(SequenceError),
    Structure(StructureError),
    Io(io::Error),
}

impl fmt::Display for ViennaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViennaError::MissingExecutable(program) => {
                write!(f, "{} is not in the path", program)
            }
            ViennaError::ToolFailure { program, status, stderr } => {
                match status {
                    Some(code) => write!(f, "{} exited with status {}: {}", program, code, stderr),
                    None => write!(f, "{} was terminated by a signal: {}", program, stderr),
                }
            }
            ViennaError::UnexpectedOutput { program, detail } => {
                write!(f, "Unexpected {} output: {}", program, detail)
            }
            ViennaError::InvalidConstraint(detail) => {
                write!(f, "Invalid sequence constraint: {}", detail)
            }
            ViennaError::Sequence(e) => write!(f, "{}", e),
            ViennaError::Structure(e) => write!(f, "{}", e),
            ViennaError::Io(e) => {
                write!(f, "I/O error: {}", e)
            }
        }
    }
}

impl std::error::Error for ViennaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViennaError::Sequence(e) => Some(e),
            ViennaError::Structure(e) => Some(e),
            ViennaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SequenceError> for ViennaError {
    fn from(e: SequenceError) -> Self {
        ViennaError::Sequence(e)
    }
}

impl From<StructureError> for ViennaError {
    fn from(e: StructureError) -> Self {
        ViennaError::Structure(e)
    }
}

impl From<io::Error> for ViennaError {
    fn from(e: io::Error) -> Self {
        ViennaError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_display() {
        let err = ViennaError::MissingExecutable("RNAfold".to_string());
        assert_eq!(format!("{}", err), "RNAfold is not in the path");
    }

    #[test]
    fn test_tool_failure_display() {
        let err = ViennaError::ToolFailure {
            program: "RNAinverse".to_string(),
            status: Some(1),
            stderr: "bad input".to_string(),
        };
        assert_eq!(format!("{}", err), "RNAinverse exited with status 1: bad input");
    }

    #[test]
    fn test_sequence_error_conversion() {
        let err: ViennaError = SequenceError::InvalidChar('x').into();
        assert!(matches!(err, ViennaError::Sequence(SequenceError::InvalidChar('x'))));
    }
}

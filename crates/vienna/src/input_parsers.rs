//! FASTA-like input readers for the CLI binaries.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, stdin};
use std::path::Path;

use anyhow::{Result, anyhow};
use paste::paste;

/// Read a fold record: an optional `>` header followed by one sequence line.
/// The sequence may contain an '&' separator for RNAcofold input. Anything
/// after the first whitespace on the sequence line is ignored.
pub fn read_fold_record<R: BufRead>(reader: R) -> Result<(Option<String>, String)> {
    let mut header: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            header = Some(line.to_string());
        } else {
            let token = line
                .split_whitespace()
                .next()
                .ok_or_else(|| anyhow!("Empty sequence line"))?;
            return Ok((header, token.to_string()));
        }
    }
    Err(anyhow!("Missing sequence line"))
}

/// Read an inverse-fold record: an optional `>` header, a target structure
/// line, and an optional constraint line.
pub fn read_inverse_record<R: BufRead>(
    reader: R,
) -> Result<(Option<String>, String, Option<String>)> {
    let mut header: Option<String> = None;
    let mut structure: Option<String> = None;
    let mut constraint: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if structure.is_some() {
                break;
            } else {
                continue;
            }
        }

        if line.starts_with('>') {
            header = Some(line.to_string());
        } else if structure.is_none() {
            let token = line
                .split_whitespace()
                .next()
                .ok_or_else(|| anyhow!("Empty structure line"))?;
            structure = Some(token.to_string());
        } else {
            let token = line
                .split_whitespace()
                .next()
                .ok_or_else(|| anyhow!("Empty constraint line"))?;
            constraint = Some(token.to_string());
            break;
        }
    }

    let structure = structure.ok_or_else(|| anyhow!("Missing structure line"))?;
    Ok((header, structure, constraint))
}

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type FoldRecord = Result<(Option<String>, String)>;
type InverseRecord = Result<(Option<String>, String, Option<String>)>;

define_input_variants!(read_fold_record, FoldRecord);
define_input_variants!(read_inverse_record, InverseRecord);

/// A position ruler for log output under the sequence line.
pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut c = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = format!("{}", i / 10);
            c = t.len() - 1;
            s.push_str(&t);
            continue;
        } else if c > 0 {
            c -= 1;
            continue;
        }
        if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler() {
        assert_eq!(ruler(0), "0");
        assert_eq!(ruler(5), "0....,");
        assert_eq!(ruler(10), "0....,....1");
    }

    #[test]
    fn test_read_fold_record_basic() {
        let input = ">test\nGGGGAAAACCCC\n";
        let (hdr, seq) = read_fold_record_string(input).unwrap();
        assert_eq!(hdr, Some(">test".into()));
        assert_eq!(seq, "GGGGAAAACCCC");
    }

    #[test]
    fn test_read_fold_record_no_header() {
        let (hdr, seq) = read_fold_record_string("GGGG&AAACCCC\n").unwrap();
        assert_eq!(hdr, None);
        assert_eq!(seq, "GGGG&AAACCCC");
    }

    #[test]
    fn test_read_fold_record_missing_sequence() {
        assert!(read_fold_record_string(">only a header\n").is_err());
    }

    #[test]
    fn test_read_inverse_record_with_constraint() {
        let input = ">design\n(((.(((....))).)))\nNNNgNNNNNNNNNNaNNN\n";
        let (hdr, structure, constraint) = read_inverse_record_string(input).unwrap();
        assert_eq!(hdr, Some(">design".into()));
        assert_eq!(structure, "(((.(((....))).)))");
        assert_eq!(constraint.as_deref(), Some("NNNgNNNNNNNNNNaNNN"));
    }

    #[test]
    fn test_read_inverse_record_without_constraint() {
        let (_, structure, constraint) =
            read_inverse_record_string("(((....)))\n").unwrap();
        assert_eq!(structure, "(((....)))");
        assert_eq!(constraint, None);
    }

    #[test]
    fn test_read_inverse_record_missing_structure() {
        assert!(read_inverse_record_string("\n\n").is_err());
    }
}

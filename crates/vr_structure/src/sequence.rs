use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use log::warn;
use colored::*;

use crate::SequenceError;

#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U, N }

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            'N' => Ok(Base::N),
            '&' | '+' => Err(SequenceError::Separator(c)),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::N => 'N',
        };
        write!(f, "{}", c)
    }
}

/// A validated single-strand nucleotide sequence.
#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Base::try_from(c)?);
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl NucleotideVec {
    pub fn from_lossy(s: &str) -> Self {
        let vec = s.chars().map(|c| {
            Base::try_from(c).unwrap_or_else(|e| {
                warn!("{} {} -> converted to 'N'", "WARNING:".red(), e);
                Base::N
            })
        }).collect();
        NucleotideVec(vec)
    }
}

/// Two strands destined for RNAcofold, written `A&B`.
///
/// Accepts '&' or '+' as the separator on input; always renders with '&',
/// which is what RNAcofold expects on stdin.
#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct Duplex {
    pub first: NucleotideVec,
    pub second: NucleotideVec,
}

impl TryFrom<&str> for Duplex {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }
        let strands: Vec<&str> = s.split(['&', '+']).collect();
        if strands.len() != 2 {
            return Err(SequenceError::NotADuplex(strands.len()));
        }
        Ok(Duplex {
            first: NucleotideVec::try_from(strands[0])?,
            second: NucleotideVec::try_from(strands[1])?,
        })
    }
}

impl fmt::Display for Duplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}&{}", self.first, self.second)
    }
}

impl Duplex {
    /// Combined length including the separator, matching the length of the
    /// dot-bracket string RNAcofold reports.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false // both strands are non-empty by construction
    }
}

/// IUPAC letters accepted in an RNAinverse sequence constraint. Lowercase
/// marks a position as fixed, so case is preserved and both cases validate.
pub fn is_iupac(c: char) -> bool {
    matches!(c.to_ascii_uppercase(),
        'A' | 'C' | 'G' | 'U' | 'T' | 'N' |
        'R' | 'Y' | 'S' | 'W' | 'K' | 'M' |
        'B' | 'D' | 'H' | 'V')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a').unwrap(), Base::A);
        assert_eq!(Base::try_from('T').unwrap(), Base::U);
        assert!(matches!(Base::try_from('&'), Err(SequenceError::Separator('&'))));
        assert!(matches!(Base::try_from('x'), Err(SequenceError::InvalidChar('x'))));
    }

    #[test]
    fn test_nucleotide_vec_roundtrip() {
        let seq = NucleotideVec::try_from("GGGGAAAACCCC").unwrap();
        assert_eq!(seq.len(), 12);
        assert_eq!(seq.to_string(), "GGGGAAAACCCC");
    }

    #[test]
    fn test_nucleotide_vec_rejects_empty() {
        assert!(matches!(NucleotideVec::try_from(""), Err(SequenceError::Empty)));
    }

    #[test]
    fn test_nucleotide_vec_rejects_separator() {
        assert!(matches!(
            NucleotideVec::try_from("GGGG&CCCC"),
            Err(SequenceError::Separator('&'))
        ));
    }

    #[test]
    fn test_nucleotide_vec_lossy() {
        let seq = NucleotideVec::from_lossy("GGXGG");
        assert_eq!(seq.to_string(), "GGNGG");
    }

    #[test]
    fn test_duplex_parsing() {
        let duplex = Duplex::try_from("GGGG&AAACCCC").unwrap();
        assert_eq!(duplex.first.to_string(), "GGGG");
        assert_eq!(duplex.second.to_string(), "AAACCCC");
        assert_eq!(duplex.len(), 13);
        assert_eq!(duplex.to_string(), "GGGG&AAACCCC");
    }

    #[test]
    fn test_duplex_plus_separator() {
        let duplex = Duplex::try_from("GG+CC").unwrap();
        assert_eq!(duplex.to_string(), "GG&CC");
    }

    #[test]
    fn test_duplex_strand_count() {
        assert!(matches!(Duplex::try_from("GGGG"), Err(SequenceError::NotADuplex(1))));
        assert!(matches!(Duplex::try_from("G&G&G"), Err(SequenceError::NotADuplex(3))));
        assert!(matches!(Duplex::try_from("GGGG&"), Err(SequenceError::Empty)));
    }

    #[test]
    fn test_iupac_alphabet() {
        assert!(is_iupac('N'));
        assert!(is_iupac('g'));
        assert!(is_iupac('R'));
        assert!(!is_iupac('x'));
        assert!(!is_iupac('&'));
    }
}

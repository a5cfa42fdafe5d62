use crate::alphabets::protein;
use crate::error::{BioError, BioResult};
use std::fmt;
use std::str::FromStr;

/// Placeholder residue on the side of an indel that has none.
pub const GAP: u8 = b'-';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Substitution,
    Insertion,
    Deletion,
    Silent,
}

/// One called difference between the read and its reference.
///
/// Serialized as `<observed><position><reference>` for substitutions and
/// silent changes, `+1<residue><position>` for insertions and
/// `-1<residue><position>` for deletions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MutationRecord {
    pub kind: MutationKind,
    /// 1-based residue number in the reference gene.
    pub position: usize,
    pub reference: u8,
    pub observed: u8,
}

impl MutationRecord {
    pub fn substitution(position: usize, reference: u8, observed: u8) -> Self {
        Self {
            kind: MutationKind::Substitution,
            position,
            reference,
            observed,
        }
    }

    pub fn silent(position: usize, reference: u8, observed: u8) -> Self {
        Self {
            kind: MutationKind::Silent,
            position,
            reference,
            observed,
        }
    }

    pub fn insertion(position: usize, inserted: u8) -> Self {
        Self {
            kind: MutationKind::Insertion,
            position,
            reference: GAP,
            observed: inserted,
        }
    }

    pub fn deletion(position: usize, deleted: u8) -> Self {
        Self {
            kind: MutationKind::Deletion,
            position,
            reference: deleted,
            observed: GAP,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.kind == MutationKind::Silent
    }
}

impl fmt::Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MutationKind::Substitution | MutationKind::Silent => write!(
                f,
                "{}{}{}",
                self.observed as char, self.position, self.reference as char
            ),
            MutationKind::Insertion => write!(f, "+1{}{}", self.observed as char, self.position),
            MutationKind::Deletion => write!(f, "-1{}{}", self.reference as char, self.position),
        }
    }
}

impl FromStr for MutationRecord {
    type Err = BioError;

    fn from_str(s: &str) -> BioResult<Self> {
        let invalid = || BioError::InvalidMutation {
            text: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        let residues = protein::translated_alphabet();

        let parse_indel = |rest: &[u8]| -> BioResult<(u8, usize)> {
            let (&residue, digits) = rest.split_first().ok_or_else(invalid)?;
            if !residues.contains(residue) {
                return Err(invalid());
            }
            let position = parse_position(digits).ok_or_else(invalid)?;
            Ok((residue, position))
        };

        if let Some(rest) = bytes.strip_prefix(b"+1") {
            let (residue, position) = parse_indel(rest)?;
            return Ok(Self::insertion(position, residue));
        }
        if let Some(rest) = bytes.strip_prefix(b"-1") {
            let (residue, position) = parse_indel(rest)?;
            return Ok(Self::deletion(position, residue));
        }

        if bytes.len() < 3 {
            return Err(invalid());
        }
        let observed = bytes[0];
        let reference = bytes[bytes.len() - 1];
        if !residues.contains(observed) || !residues.contains(reference) {
            return Err(invalid());
        }
        let position = parse_position(&bytes[1..bytes.len() - 1]).ok_or_else(invalid)?;
        if observed == reference {
            Ok(Self::silent(position, reference, observed))
        } else {
            Ok(Self::substitution(position, reference, observed))
        }
    }
}

fn parse_position(digits: &[u8]) -> Option<usize> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_puts_observed_first() {
        let m = MutationRecord::substitution(12, b'K', b'R');
        assert_eq!(m.to_string(), "R12K");
    }

    #[test]
    fn indel_formats() {
        assert_eq!(MutationRecord::insertion(5, b'G').to_string(), "+1G5");
        assert_eq!(MutationRecord::deletion(40, b'W').to_string(), "-1W40");
    }

    #[test]
    fn silent_repeats_residue() {
        assert_eq!(MutationRecord::silent(2, b'K', b'K').to_string(), "K2K");
    }

    #[test]
    fn parse_serialized_forms() {
        assert_eq!(
            "R12K".parse::<MutationRecord>().unwrap(),
            MutationRecord::substitution(12, b'K', b'R')
        );
        assert_eq!(
            "+1G5".parse::<MutationRecord>().unwrap(),
            MutationRecord::insertion(5, b'G')
        );
        assert_eq!(
            "-1W40".parse::<MutationRecord>().unwrap(),
            MutationRecord::deletion(40, b'W')
        );
        assert!("K2K".parse::<MutationRecord>().unwrap().is_silent());
        assert_eq!(
            "*7Q".parse::<MutationRecord>().unwrap(),
            MutationRecord::substitution(7, b'Q', b'*')
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in ["", "K", "KK", "+1", "+1G", "-1Gx", "R1xK", "J12K", "R12"] {
            assert!(
                matches!(
                    text.parse::<MutationRecord>(),
                    Err(BioError::InvalidMutation { .. })
                ),
                "{text:?} should not parse"
            );
        }
    }
}

use crate::alphabets::dna;
use crate::error::{BioError, BioResult};

use memchr::memmem;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// An upper-case nucleotide sequence over {A, C, G, T}.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    /// Strips ASCII whitespace, upper-cases, then rejects anything that is not A, C, G or T.
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        let mut bytes = bytes;
        bytes.retain(|b| !b.is_ascii_whitespace());
        bytes.make_ascii_uppercase();
        if let Some((pos, ch)) = dna::alphabet().first_foreign(&bytes) {
            return Err(BioError::CorruptedSequence {
                ch: ch as char,
                pos,
            });
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.bytes.len());
        let start = range.start.min(end);
        Self {
            bytes: self.bytes[start..end].to_vec(),
        }
    }

    pub fn complement(&self) -> BioResult<Self> {
        Ok(Self {
            bytes: dna::complement_bytes(&self.bytes)?,
        })
    }

    pub fn reverse_complement(&self) -> BioResult<Self> {
        Ok(Self {
            bytes: dna::reverse_complement(&self.bytes)?,
        })
    }

    /// Index of `needle` when it occurs exactly once in this sequence.
    pub fn find_unique(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let mut hits = memmem::find_iter(&self.bytes, needle);
        let first = hits.next()?;
        match hits.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

impl FromStr for DnaSeq {
    type Err = BioError;

    fn from_str(s: &str) -> BioResult<Self> {
        DnaSeq::new(s.as_bytes().to_vec())
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated bytes are ASCII.
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

use crate::error::{BioError, BioResult};
use std::sync::LazyLock;

/// Translated residue for stop codons.
pub const STOP: u8 = b'*';

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'T' as usize] = 3;
    map
});

// Indexed by (b1 << 4) | (b2 << 2) | b3 with A=0, C=1, G=2, T=3.
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

#[inline]
fn base_index(b: u8, pos: usize) -> BioResult<usize> {
    match BASE_INDEX[b as usize] {
        255 => Err(BioError::CorruptedSequence { ch: b as char, pos }),
        i => Ok(i as usize),
    }
}

/// Translate one codon; `offset` is the codon's position in the enclosing sequence.
pub fn translate_codon(codon: &[u8], offset: usize) -> BioResult<u8> {
    debug_assert_eq!(codon.len(), 3);
    let i1 = base_index(codon[0], offset)?;
    let i2 = base_index(codon[1], offset + 1)?;
    let i3 = base_index(codon[2], offset + 2)?;
    Ok(CODON_TABLE[(i1 << 4) | (i2 << 2) | i3])
}

/// Translate complete codons from the start of `nucleotides`; a trailing partial codon is dropped.
pub fn translate(nucleotides: &[u8]) -> BioResult<Vec<u8>> {
    let mut out = Vec::with_capacity(nucleotides.len() / 3);
    for (k, codon) in nucleotides.chunks_exact(3).enumerate() {
        out.push(translate_codon(codon, k * 3)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_basic() {
        assert_eq!(translate(b"ATGGCC").unwrap(), b"MA");
        assert_eq!(translate(b"ATGAAATAA").unwrap(), b"MK*");
    }

    #[test]
    fn translate_empty() {
        assert!(translate(b"").unwrap().is_empty());
    }

    #[test]
    fn trailing_partial_codon_is_dropped() {
        assert_eq!(translate(b"ATGGCCA").unwrap(), b"MA");
        assert_eq!(translate(b"ATGGCCAT").unwrap(), b"MA");
        assert!(translate(b"AT").unwrap().is_empty());
    }

    #[test]
    fn synonymous_codons() {
        assert_eq!(translate(b"AAA").unwrap(), translate(b"AAG").unwrap());
        assert_eq!(translate(b"TAA").unwrap(), b"*");
        assert_eq!(translate(b"TGA").unwrap(), b"*");
        assert_eq!(translate(b"TGG").unwrap(), b"W");
    }

    #[test]
    fn every_codon_translates() {
        let bases = b"ACGT";
        for &a in bases {
            for &b in bases {
                for &c in bases {
                    let aa = translate_codon(&[a, b, c], 0).unwrap();
                    assert!(crate::alphabets::protein::translated_alphabet().contains(aa));
                }
            }
        }
    }

    #[test]
    fn corrupted_symbol_fails_with_position() {
        match translate(b"ATGAXA").unwrap_err() {
            BioError::CorruptedSequence { ch, pos } => {
                assert_eq!(ch, 'X');
                assert_eq!(pos, 4);
            }
            other => panic!("expected corrupted sequence, got {other:?}"),
        }
    }

    #[test]
    fn partial_codon_with_bad_symbol_is_ignored() {
        assert_eq!(translate(b"ATGN").unwrap(), b"M");
    }
}

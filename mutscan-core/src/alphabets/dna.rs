use crate::alphabets::Alphabet;
use crate::error::{BioError, BioResult};
use std::sync::LazyLock;

/// The four unambiguous nucleotides, upper case only.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

const UNMAPPED: u8 = 0;

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [UNMAPPED; 256];
    b"ACGT"
        .iter()
        .zip(b"TGCA".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
        });
    comp
});

#[inline]
pub fn complement(a: u8) -> Option<u8> {
    match COMPLEMENT[a as usize] {
        UNMAPPED => None,
        c => Some(c),
    }
}

/// Complement every base; any symbol outside {A,C,G,T} is a corrupted sequence.
pub fn complement_bytes(text: &[u8]) -> BioResult<Vec<u8>> {
    text.iter()
        .enumerate()
        .map(|(pos, &a)| {
            complement(a).ok_or(BioError::CorruptedSequence { ch: a as char, pos })
        })
        .collect()
}

pub fn reverse_complement(text: &[u8]) -> BioResult<Vec<u8>> {
    let mut out = complement_bytes(text)?;
    out.reverse();
    Ok(out)
}

use crate::alphabets::Alphabet;

/// Residues produced by codon translation, `*` marking a stop codon.
pub fn translated_alphabet() -> Alphabet {
    Alphabet::new(&b"ACDEFGHIKLMNPQRSTVWY*"[..])
}

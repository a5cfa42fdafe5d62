#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::extract_dna_bytes;
use mutscan_core::align::{self as core_align, EditOperation};

/// Unit-cost Levenshtein distance between two byte strings.
#[pyfunction]
fn edit_distance(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<u32> {
    let a = extract_dna_bytes(a)?;
    let b = extract_dna_bytes(b)?;
    Ok(core_align::compute(&a, &b).distance())
}

/// Edit operations turning `a` into `b`, as `(kind, position, from, to)` tuples.
///
/// `kind` is one of "sub", "ins", "del"; `from`/`to` are None on the side of an indel with no residue.
#[pyfunction]
fn edit_script(
    a: &Bound<'_, PyAny>,
    b: &Bound<'_, PyAny>,
) -> PyResult<Vec<(&'static str, usize, Option<char>, Option<char>)>> {
    let a = extract_dna_bytes(a)?;
    let b = extract_dna_bytes(b)?;
    let ops = core_align::edit_script(&a, &b);
    Ok(ops
        .into_iter()
        .map(|op| match op {
            EditOperation::Substitution { position, from, to } => {
                ("sub", position, Some(from as char), Some(to as char))
            }
            EditOperation::Insertion { position, inserted } => {
                ("ins", position, None, Some(inserted as char))
            }
            EditOperation::Deletion { position, deleted } => {
                ("del", position, Some(deleted as char), None)
            }
        })
        .collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(edit_distance, m)?)?;
    m.add_function(wrap_pyfunction!(edit_script, m)?)?;
    Ok(())
}

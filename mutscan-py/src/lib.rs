use pyo3::prelude::*;

mod align;
mod analysis;
mod dna;
mod gene;
mod report;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    dna::register(m)?;
    gene::register(m)?;
    report::register(m)?;
    analysis::register(m)?;
    align::register(m)?;
    Ok(())
}

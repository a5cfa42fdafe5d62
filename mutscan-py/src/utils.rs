use pyo3::exceptions::{PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use mutscan_core::error::BioError;
use mutscan_core::io::OnError;
use mutscan_core::seq::DnaSeq;

use crate::dna::DNA;

pub fn extract_dna_bytes<'py>(obj: &Bound<'py, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(dna) = obj.extract::<PyRef<'py, DNA>>() {
        return Ok(dna.as_bytes().to_vec());
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected DNA, str, or bytes-like object"))
}

pub fn extract_dna(obj: &Bound<'_, PyAny>) -> PyResult<DnaSeq> {
    if let Ok(dna) = obj.extract::<PyRef<'_, DNA>>() {
        return Ok(dna.inner.clone());
    }
    DnaSeq::new(extract_dna_bytes(obj)?).map_err(map_bio_err)
}

pub fn map_bio_err(err: BioError) -> PyErr {
    match err {
        BioError::GeneParse { ref source, .. } if source.is_io_error() => {
            PyIOError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

pub fn parse_on_error(value: &str) -> PyResult<OnError> {
    match value.to_ascii_lowercase().as_str() {
        "raise" => Ok(OnError::Raise),
        "skip" => Ok(OnError::Skip),
        _ => Err(PyTypeError::new_err("on_error must be 'raise' or 'skip'")),
    }
}

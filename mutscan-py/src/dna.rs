#![allow(clippy::useless_conversion)]

use pyo3::basic::CompareOp;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule};

use crate::utils::{self, map_bio_err};
use mutscan_core::seq::{translate, DnaSeq};

#[allow(clippy::upper_case_acronyms)]
#[pyclass(frozen)]
pub struct DNA {
    pub(crate) inner: DnaSeq,
}

#[pymethods]
impl DNA {
    #[new]
    fn new(seq: &Bound<'_, PyAny>) -> PyResult<Self> {
        let bytes = utils::extract_dna_bytes(seq)?;
        let inner = DnaSeq::new(bytes).map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    fn reverse_complement(&self) -> PyResult<Self> {
        let inner = self.inner.reverse_complement().map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    fn complement(&self) -> PyResult<Self> {
        let inner = self.inner.complement().map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    /// Amino-acid string; a trailing partial codon is dropped.
    fn translate(&self) -> PyResult<String> {
        let residues = translate(self.as_bytes()).map_err(map_bio_err)?;
        Ok(String::from_utf8_lossy(&residues).into_owned())
    }

    /// Index of the only occurrence of `needle`, or None when absent or repeated.
    fn find_unique(&self, needle: &Bound<'_, PyAny>) -> PyResult<Option<usize>> {
        let needle = utils::extract_dna_bytes(needle)?;
        Ok(self.inner.find_unique(&needle))
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.as_bytes())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __richcmp__(&self, other: &Bound<'_, PyAny>, op: CompareOp) -> PyResult<bool> {
        let other = utils::extract_dna_bytes(other)
            .map_err(|_| PyTypeError::new_err("expected DNA, str, or bytes-like object"))?;

        match op {
            CompareOp::Eq => Ok(self.as_bytes() == other.as_slice()),
            CompareOp::Ne => Ok(self.as_bytes() != other.as_slice()),
            CompareOp::Lt => Ok(self.as_bytes() < other.as_slice()),
            CompareOp::Le => Ok(self.as_bytes() <= other.as_slice()),
            CompareOp::Gt => Ok(self.as_bytes() > other.as_slice()),
            CompareOp::Ge => Ok(self.as_bytes() >= other.as_slice()),
        }
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.as_bytes())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("DNA({:?})", self.inner.to_string())
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DNA>()?;
    Ok(())
}

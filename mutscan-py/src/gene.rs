#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::dna::DNA;
use crate::report::SkippedRecord;
use crate::utils::{self, map_bio_err, parse_on_error};
use mutscan_core::io::genes;
use mutscan_core::seq::Gene as CoreGene;

#[pyclass(frozen, name = "Gene")]
#[derive(Clone)]
pub struct PyGene {
    pub(crate) inner: CoreGene,
}

#[pymethods]
impl PyGene {
    #[new]
    #[pyo3(signature = (name, seq, *, id=0, organism=None, comment=None))]
    fn new(
        name: &str,
        seq: &Bound<'_, PyAny>,
        id: u32,
        organism: Option<&str>,
        comment: Option<&str>,
    ) -> PyResult<Self> {
        let mut inner = CoreGene::new(id, name, utils::extract_dna(seq)?);
        if let Some(organism) = organism {
            inner = inner.with_organism(organism);
        }
        if let Some(comment) = comment {
            inner = inner.with_comment(comment);
        }
        Ok(Self { inner })
    }

    #[getter]
    fn id(&self) -> u32 {
        self.inner.id
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn organism(&self) -> Option<&str> {
        self.inner.organism()
    }

    #[getter]
    fn comment(&self) -> Option<&str> {
        self.inner.comment()
    }

    #[getter]
    fn seq(&self) -> DNA {
        DNA {
            inner: self.inner.seq().clone(),
        }
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Gene(id={}, name={:?}, len={})",
            self.inner.id,
            self.inner.name(),
            self.inner.len()
        )
    }
}

/// Read a `name;sequence;organism;comment` gene list; returns `(genes, skipped)`.
#[pyfunction]
#[pyo3(signature = (path, *, on_error="raise"))]
fn read_genes(path: &str, on_error: &str) -> PyResult<(Vec<PyGene>, Vec<SkippedRecord>)> {
    let on_error = parse_on_error(on_error)?;
    let report = genes::read_genes_path(path, on_error).map_err(map_bio_err)?;
    let genes = report
        .data
        .into_iter()
        .map(|inner| PyGene { inner })
        .collect();
    let skipped = report
        .skipped
        .into_iter()
        .map(SkippedRecord::from)
        .collect();
    Ok((genes, skipped))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGene>()?;
    m.add_function(wrap_pyfunction!(read_genes, m)?)?;
    Ok(())
}

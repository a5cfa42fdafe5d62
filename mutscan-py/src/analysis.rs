#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::dna::DNA;
use crate::gene::PyGene;
use crate::utils::{self, map_bio_err, parse_on_error};
use mutscan_core::io::OnError;
use mutscan_core::mutation::{MutationKind, MutationRecord as CoreMutationRecord};
use mutscan_core::seq::{Gene as CoreGene, QualityTrace};
use mutscan_core::{
    analysis, AlignmentMode, AnalysisConfig as CoreConfig, AnalyzedSequence as CoreAnalyzed,
};

#[pyclass(frozen, name = "AnalysisConfig")]
#[derive(Clone)]
pub struct PyAnalysisConfig {
    pub(crate) inner: CoreConfig,
}

#[pymethods]
impl PyAnalysisConfig {
    #[new]
    #[pyo3(signature = (*, min_anchor_len=9, quality_run_limit=5, frame_error_warn=10, frame_error_limit=100, mode="amino_acid", reverse_complement=true))]
    fn new(
        min_anchor_len: usize,
        quality_run_limit: usize,
        frame_error_warn: usize,
        frame_error_limit: usize,
        mode: &str,
        reverse_complement: bool,
    ) -> PyResult<Self> {
        let mode = match mode.to_ascii_lowercase().as_str() {
            "amino_acid" | "aa" => AlignmentMode::AminoAcid,
            "nucleotide" | "nt" => AlignmentMode::Nucleotide,
            _ => {
                return Err(PyValueError::new_err(
                    "mode must be 'amino_acid' or 'nucleotide'",
                ))
            }
        };
        let inner = CoreConfig::default()
            .with_min_anchor_len(min_anchor_len)
            .with_quality_run_limit(quality_run_limit)
            .with_frame_error_limits(frame_error_warn, frame_error_limit)
            .with_mode(mode)
            .with_reverse_complement(reverse_complement);
        inner.validate().map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn min_anchor_len(&self) -> usize {
        self.inner.min_anchor_len
    }

    #[getter]
    fn quality_run_limit(&self) -> usize {
        self.inner.quality_run_limit
    }

    #[getter]
    fn frame_error_warn(&self) -> usize {
        self.inner.frame_error_warn
    }

    #[getter]
    fn frame_error_limit(&self) -> usize {
        self.inner.frame_error_limit
    }

    #[getter]
    fn mode(&self) -> &'static str {
        match self.inner.mode {
            AlignmentMode::AminoAcid => "amino_acid",
            AlignmentMode::Nucleotide => "nucleotide",
        }
    }

    #[getter]
    fn reverse_complement(&self) -> bool {
        self.inner.try_reverse_complement
    }
}

#[pyclass(frozen, name = "MutationRecord")]
#[derive(Clone)]
pub struct PyMutationRecord {
    inner: CoreMutationRecord,
}

#[pymethods]
impl PyMutationRecord {
    /// Parse the serialized form, e.g. "W11L", "+1W2", "-1A2".
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        let inner = text.parse().map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn kind(&self) -> &'static str {
        match self.inner.kind {
            MutationKind::Substitution => "substitution",
            MutationKind::Insertion => "insertion",
            MutationKind::Deletion => "deletion",
            MutationKind::Silent => "silent",
        }
    }

    #[getter]
    fn position(&self) -> usize {
        self.inner.position
    }

    #[getter]
    fn reference(&self) -> char {
        self.inner.reference as char
    }

    #[getter]
    fn observed(&self) -> char {
        self.inner.observed as char
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("MutationRecord({:?})", self.inner.to_string())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

#[pyclass(frozen, name = "AnalyzedSequence")]
#[derive(Clone)]
pub struct PyAnalyzedSequence {
    pub(crate) inner: CoreAnalyzed,
}

#[pymethods]
impl PyAnalyzedSequence {
    #[new]
    #[pyo3(signature = (name, seq, quality=None))]
    fn new(name: &str, seq: &Bound<'_, PyAny>, quality: Option<Vec<u8>>) -> PyResult<Self> {
        let seq = utils::extract_dna(seq)?;
        let quality = QualityTrace::new(quality.unwrap_or_default());
        let inner = CoreAnalyzed::new(name, seq, quality).map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn seq(&self) -> DNA {
        DNA {
            inner: self.inner.seq.clone(),
        }
    }

    #[getter]
    fn trimmed(&self) -> DNA {
        DNA {
            inner: self.inner.trimmed.clone(),
        }
    }

    #[getter]
    fn left_vector(&self) -> DNA {
        DNA {
            inner: self.inner.left_vector.clone(),
        }
    }

    #[getter]
    fn right_vector(&self) -> DNA {
        DNA {
            inner: self.inner.right_vector.clone(),
        }
    }

    #[getter]
    fn reversed(&self) -> bool {
        self.inner.reversed
    }

    #[getter]
    fn gene_id(&self) -> Option<u32> {
        self.inner.gene_id
    }

    #[getter]
    fn offset(&self) -> Option<isize> {
        self.inner.offset
    }

    #[getter]
    fn mutations(&self) -> Vec<PyMutationRecord> {
        self.inner
            .mutations
            .iter()
            .map(|&inner| PyMutationRecord { inner })
            .collect()
    }

    #[getter]
    fn reading_frame_error(&self) -> bool {
        self.inner.reading_frame_error
    }

    #[getter]
    fn average_quality(&self) -> f64 {
        self.inner.average_quality
    }

    #[getter]
    fn trim_percentage(&self) -> f64 {
        self.inner.trim_percentage
    }

    fn mutation_strings(&self) -> Vec<String> {
        self.inner.mutation_strings()
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalyzedSequence(name={:?}, offset={:?}, mutations={})",
            self.inner.name(),
            self.inner.offset,
            self.inner.mutations.len()
        )
    }
}

fn config_or_default(config: Option<PyRef<'_, PyAnalysisConfig>>) -> CoreConfig {
    config.map(|c| c.inner.clone()).unwrap_or_default()
}

/// Run the full pipeline on one read. A given `offset` skips the anchor search.
#[pyfunction]
#[pyo3(signature = (read, gene, config=None, *, offset=None))]
fn analyze(
    py: Python<'_>,
    read: PyRef<'_, PyAnalyzedSequence>,
    gene: PyRef<'_, PyGene>,
    config: Option<PyRef<'_, PyAnalysisConfig>>,
    offset: Option<isize>,
) -> PyResult<PyAnalyzedSequence> {
    let config = config_or_default(config);
    let read = read.inner.clone();
    let gene: CoreGene = gene.inner.clone();
    let out = py
        .allow_threads(|| match offset {
            Some(offset) => analysis::analyze_with_offset(read, &gene, offset, &config),
            None => analysis::analyze(read, &gene, &config),
        })
        .map_err(map_bio_err)?;
    Ok(PyAnalyzedSequence { inner: out })
}

/// Analyze many reads against one gene; failed reads raise or come back as None.
#[pyfunction]
#[pyo3(signature = (reads, gene, config=None, *, on_error="raise"))]
fn analyze_batch(
    py: Python<'_>,
    reads: Vec<PyRef<'_, PyAnalyzedSequence>>,
    gene: PyRef<'_, PyGene>,
    config: Option<PyRef<'_, PyAnalysisConfig>>,
    on_error: &str,
) -> PyResult<Vec<Option<PyAnalyzedSequence>>> {
    let on_error = parse_on_error(on_error)?;
    let config = config_or_default(config);
    let reads: Vec<CoreAnalyzed> = reads.iter().map(|r| r.inner.clone()).collect();
    let gene: CoreGene = gene.inner.clone();
    let results = py.allow_threads(|| analysis::analyze_batch(&reads, &gene, &config));

    results
        .into_iter()
        .map(|result| match (result, on_error) {
            (Ok(inner), _) => Ok(Some(PyAnalyzedSequence { inner })),
            (Err(_), OnError::Skip) => Ok(None),
            (Err(err), OnError::Raise) => Err(map_bio_err(err)),
        })
        .collect()
}

/// First gene holding a unique anchor for `seq`, as `(index, offset)`.
#[pyfunction]
#[pyo3(signature = (seq, genes, config=None))]
fn assign_gene(
    py: Python<'_>,
    seq: &Bound<'_, PyAny>,
    genes: Vec<PyRef<'_, PyGene>>,
    config: Option<PyRef<'_, PyAnalysisConfig>>,
) -> PyResult<Option<(usize, isize)>> {
    let seq = utils::extract_dna(seq)?;
    let config = config_or_default(config);
    let genes: Vec<CoreGene> = genes.iter().map(|g| g.inner.clone()).collect();
    let hit = py.allow_threads(|| {
        analysis::assign_gene(&seq, &genes, &config).map(|(gene, offset)| {
            let idx = genes
                .iter()
                .position(|g| std::ptr::eq(g, gene))
                .unwrap_or_default();
            (idx, offset)
        })
    });
    Ok(hit)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnalysisConfig>()?;
    m.add_class::<PyMutationRecord>()?;
    m.add_class::<PyAnalyzedSequence>()?;
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_batch, m)?)?;
    m.add_function(wrap_pyfunction!(assign_gene, m)?)?;
    Ok(())
}

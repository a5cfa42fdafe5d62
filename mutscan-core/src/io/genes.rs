//! Reader for the `name;sequence;organism;comment` gene list.
//!
//! Lines starting with `#` are comments. A literal `none` in the optional
//! columns stands for an absent value.

use crate::error::{BioError, BioResult};
use crate::io::{OnError, ReadReport, SkippedRecord};
use crate::seq::{DnaSeq, Gene};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const NULL: &str = "none";

pub fn read_genes_path(
    path: impl AsRef<Path>,
    on_error: OnError,
) -> BioResult<ReadReport<Vec<Gene>>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let file = File::open(path_ref).map_err(|e| BioError::GeneParse {
        path: path_str.clone(),
        source: csv::Error::from(e),
    })?;
    read_from(file, &path_str, on_error)
}

/// Parse a gene list. Gene ids are assigned 1, 2, ... in file order over accepted rows.
pub fn read_genes<R: Read>(reader: R, on_error: OnError) -> BioResult<ReadReport<Vec<Gene>>> {
    read_from(reader, "<reader>", on_error)
}

fn read_from<R: Read>(
    reader: R,
    path: &str,
    on_error: OnError,
) -> BioResult<ReadReport<Vec<Gene>>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut genes: Vec<Gene> = Vec::new();
    let mut skipped: Vec<SkippedRecord> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| BioError::GeneParse {
            path: path.to_string(),
            source: e,
        })?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(0);
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        match parse_gene(&record, line, genes.len() as u32 + 1) {
            Ok(gene) => genes.push(gene),
            Err(err) => match on_error {
                OnError::Raise => return Err(err),
                OnError::Skip => {
                    let column = match err {
                        BioError::GeneInvalidSequence { .. } => "sequence",
                        _ => "name",
                    };
                    log::warn!("{path}: skipping gene at line {line}: {err}");
                    skipped.push(SkippedRecord {
                        row: line,
                        id: optional(&record, 0).map(Into::into),
                        column: column.into(),
                        message: err.to_string().into_boxed_str(),
                    });
                }
            },
        }
    }

    Ok(ReadReport {
        data: genes,
        skipped,
    })
}

fn parse_gene(record: &StringRecord, line: usize, id: u32) -> BioResult<Gene> {
    let name = optional(record, 0).ok_or(BioError::GeneFormat {
        msg: "missing gene name",
        line,
    })?;
    let seq_field = optional(record, 1).ok_or(BioError::GeneFormat {
        msg: "missing gene sequence",
        line,
    })?;
    let seq = DnaSeq::new(seq_field.as_bytes().to_vec()).map_err(|e| {
        BioError::GeneInvalidSequence {
            line,
            source: Box::new(e),
        }
    })?;

    let mut gene = Gene::new(id, name, seq);
    if let Some(organism) = optional(record, 2) {
        gene = gene.with_organism(organism);
    }
    if let Some(comment) = optional(record, 3) {
        gene = gene.with_comment(comment);
    }
    Ok(gene)
}

fn optional<'r>(record: &'r StringRecord, idx: usize) -> Option<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case(NULL))
}

use crate::seq::dna::DnaSeq;

/// A reference gene: its coding sequence plus identity metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gene {
    pub id: u32,
    pub name: Box<str>,
    pub organism: Option<Box<str>>,
    pub comment: Option<Box<str>>,
    pub seq: DnaSeq,
}

impl Gene {
    pub fn new(id: u32, name: impl Into<Box<str>>, seq: DnaSeq) -> Self {
        Self {
            id,
            name: name.into(),
            organism: None,
            comment: None,
            seq,
        }
    }

    pub fn with_organism(mut self, organism: impl Into<Box<str>>) -> Self {
        self.organism = Some(organism.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<Box<str>>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn organism(&self) -> Option<&str> {
        self.organism.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Per-base call confidences, index-aligned with the untrimmed read.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QualityTrace {
    scores: Vec<u8>,
}

impl QualityTrace {
    pub fn new(scores: Vec<u8>) -> Self {
        Self { scores }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Mean score, 0.0 for an empty trace.
    pub fn average(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.scores.iter().map(|&q| q as u64).sum();
        sum as f64 / self.scores.len() as f64
    }

    pub fn reversed(&self) -> Self {
        let mut scores = self.scores.clone();
        scores.reverse();
        Self { scores }
    }
}

impl From<Vec<u8>> for QualityTrace {
    fn from(scores: Vec<u8>) -> Self {
        Self::new(scores)
    }
}

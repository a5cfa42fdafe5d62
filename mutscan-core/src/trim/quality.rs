/// Clip position for a quality trace: everything from the returned index on is discarded.
///
/// `average` is the read's own mean quality, so the cut point depends on the
/// data. Bases scoring below it are counted as a run; a base at or above it
/// accepts the run and itself. When a run reaches `run_limit` the scan stops
/// and returns the position reached before that run. A shorter run left at
/// the end of the trace is dropped as well.
pub fn quality_clip(scores: &[u8], average: f64, run_limit: usize) -> usize {
    let run_limit = run_limit.max(1);
    let mut retained = 0usize;
    let mut run = 0usize;
    for (i, &q) in scores.iter().enumerate() {
        if (q as f64) < average {
            run += 1;
            if run >= run_limit {
                return retained;
            }
        } else {
            retained = i + 1;
            run = 0;
        }
    }
    retained
}

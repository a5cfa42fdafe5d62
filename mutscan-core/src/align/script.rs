use super::matrix::{compute, EditMatrix, EditTag, TagMatrix};
use crate::error::BioResult;

/// One edit turning the reference `a` into the observed `b`.
///
/// `position` is a 0-based index into `a`. An insertion at `p` places its
/// residue before `a[p]` (or at the end when `p == a.len()`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOperation {
    Substitution { position: usize, from: u8, to: u8 },
    Insertion { position: usize, inserted: u8 },
    Deletion { position: usize, deleted: u8 },
}

impl EditOperation {
    pub fn position(&self) -> usize {
        match *self {
            EditOperation::Substitution { position, .. }
            | EditOperation::Insertion { position, .. }
            | EditOperation::Deletion { position, .. } => position,
        }
    }
}

/// Walk `matrix` from its bottom-right corner back to the origin.
///
/// Tie-breaks, in order: diagonal when it is no larger than both other
/// predecessors and equals the current value or one less; then up
/// (deletion) when it is no larger than left and one less than current;
/// otherwise left (insertion).
pub fn backtrace(a: &[u8], b: &[u8], matrix: &EditMatrix) -> Vec<EditOperation> {
    trace_from(a, b, matrix, a.len())
}

/// Backtrace starting at (`end_row`, last column); rows past `end_row` are not visited.
fn trace_from(a: &[u8], b: &[u8], matrix: &EditMatrix, end_row: usize) -> Vec<EditOperation> {
    debug_assert_eq!(matrix.rows(), a.len() + 1);
    debug_assert_eq!(matrix.cols(), b.len() + 1);
    debug_assert!(end_row <= a.len());

    let mut rev_ops: Vec<EditOperation> = Vec::new();
    let mut row = end_row;
    let mut col = b.len();

    while row > 0 && col > 0 {
        let cur = matrix.get(row, col);
        let diag = matrix.get(row - 1, col - 1);
        let up = matrix.get(row - 1, col);
        let left = matrix.get(row, col - 1);

        if diag <= up && diag <= left && (diag == cur || diag + 1 == cur) {
            if diag + 1 == cur {
                rev_ops.push(EditOperation::Substitution {
                    position: row - 1,
                    from: a[row - 1],
                    to: b[col - 1],
                });
            }
            row -= 1;
            col -= 1;
        } else if up <= left && up + 1 == cur {
            rev_ops.push(EditOperation::Deletion {
                position: row - 1,
                deleted: a[row - 1],
            });
            row -= 1;
        } else {
            if left + 1 == cur {
                rev_ops.push(EditOperation::Insertion {
                    position: row,
                    inserted: b[col - 1],
                });
            }
            col -= 1;
        }
    }

    // Leading indels before the first diagonal step.
    while row > 0 {
        rev_ops.push(EditOperation::Deletion {
            position: row - 1,
            deleted: a[row - 1],
        });
        row -= 1;
    }
    while col > 0 {
        rev_ops.push(EditOperation::Insertion {
            position: 0,
            inserted: b[col - 1],
        });
        col -= 1;
    }

    rev_ops.reverse();
    rev_ops
}

/// Compute the matrix and backtrace it in one call.
pub fn edit_script(a: &[u8], b: &[u8]) -> Vec<EditOperation> {
    let matrix = compute(a, b);
    backtrace(a, b, &matrix)
}

/// Edit script for `b` against the prefix of `a` it covers best.
///
/// Reference past that prefix is overhang and costs nothing. The prefix
/// ends at a row of the last matrix column holding its minimum; among equal
/// rows the one nearest `b.len()` wins, then the shorter. The script never
/// deletes the last residue of the prefix.
pub fn overlap_script(a: &[u8], b: &[u8]) -> Vec<EditOperation> {
    let matrix = compute(a, b);
    let last = b.len();
    let end_row = (0..matrix.rows())
        .min_by_key(|&row| (matrix.get(row, last), row.abs_diff(last)))
        .unwrap_or(0);
    trace_from(a, b, &matrix, end_row)
}

/// Follow an operation-tag grid from the bottom-right corner.
///
/// Fails with `UndefinedMutationType` on an `e` tag.
pub fn tag_script(a: &[u8], b: &[u8], tags: &TagMatrix) -> BioResult<Vec<EditOperation>> {
    debug_assert_eq!(tags.rows(), a.len() + 1);
    debug_assert_eq!(tags.cols(), b.len() + 1);

    let mut rev_ops = Vec::new();
    let mut row = a.len();
    let mut col = b.len();

    while row > 0 || col > 0 {
        let tag = tags.get(row, col);
        if let Some(op) = tag.operation(a, b, row, col)? {
            rev_ops.push(op);
        }
        match tag {
            EditTag::Deletion => row -= 1,
            EditTag::Insertion => col -= 1,
            _ => {
                row -= 1;
                col -= 1;
            }
        }
    }

    rev_ops.reverse();
    Ok(rev_ops)
}

/// Rebuild the observed string from the reference and an ordered script.
pub fn apply_script(a: &[u8], ops: &[EditOperation]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + ops.len());
    let mut cursor = 0usize;
    for op in ops {
        let pos = op.position();
        out.extend_from_slice(&a[cursor..pos]);
        match *op {
            EditOperation::Substitution { to, .. } => {
                out.push(to);
                cursor = pos + 1;
            }
            EditOperation::Insertion { inserted, .. } => {
                out.push(inserted);
                cursor = pos;
            }
            EditOperation::Deletion { .. } => {
                cursor = pos + 1;
            }
        }
    }
    out.extend_from_slice(&a[cursor..]);
    out
}

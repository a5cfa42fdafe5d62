use crate::error::{BioError, BioResult};
use crate::align::script::EditOperation;
use std::ops::Index;

/// (len(a)+1) x (len(b)+1) grid of edit distances, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl EditMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols + col]
    }

    /// Edit distance between the full strings.
    pub fn distance(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl Index<usize> for EditMatrix {
    type Output = [u32];

    fn index(&self, row: usize) -> &[u32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

/// Operation that produced a cell, in derivation priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTag {
    Deletion,
    Insertion,
    Change,
    NoChange,
    Error,
}

impl EditTag {
    pub fn as_char(self) -> char {
        match self {
            EditTag::Deletion => 'd',
            EditTag::Insertion => 'i',
            EditTag::Change => 'c',
            EditTag::NoChange => 'n',
            EditTag::Error => 'e',
        }
    }

    /// The operation this tag stands for at cell (row, col); `NoChange` has none.
    pub fn operation(
        self,
        a: &[u8],
        b: &[u8],
        row: usize,
        col: usize,
    ) -> BioResult<Option<EditOperation>> {
        match self {
            EditTag::Deletion => Ok(Some(EditOperation::Deletion {
                position: row - 1,
                deleted: a[row - 1],
            })),
            EditTag::Insertion => Ok(Some(EditOperation::Insertion {
                position: row,
                inserted: b[col - 1],
            })),
            EditTag::Change => Ok(Some(EditOperation::Substitution {
                position: row - 1,
                from: a[row - 1],
                to: b[col - 1],
            })),
            EditTag::NoChange => Ok(None),
            EditTag::Error => Err(BioError::UndefinedMutationType {
                tag: self.as_char(),
                row,
                col,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagMatrix {
    rows: usize,
    cols: usize,
    data: Vec<EditTag>,
}

impl TagMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> EditTag {
        self.data[row * self.cols + col]
    }

    /// Overwrites one tag; lets callers feed hand-built tag grids to `tag_script`.
    pub fn set(&mut self, row: usize, col: usize, tag: EditTag) {
        self.data[row * self.cols + col] = tag;
    }
}

fn seeded(rows: usize, cols: usize) -> EditMatrix {
    let mut data = vec![0u32; rows * cols];
    for (i, cell) in data.iter_mut().step_by(cols).enumerate() {
        *cell = i as u32;
    }
    for (j, cell) in data[..cols].iter_mut().enumerate() {
        *cell = j as u32;
    }
    EditMatrix { rows, cols, data }
}

#[inline]
fn fill_cell(m: &mut EditMatrix, a: &[u8], b: &[u8], i: usize, j: usize) -> (u32, u32) {
    let cols = m.cols;
    let cost = u32::from(a[i - 1] != b[j - 1]);
    let up = m.data[(i - 1) * cols + j];
    let left = m.data[i * cols + j - 1];
    let diag = m.data[(i - 1) * cols + j - 1];
    let v = (up + 1).min(left + 1).min(diag + cost);
    m.data[i * cols + j] = v;
    (v, cost)
}

pub fn compute(a: &[u8], b: &[u8]) -> EditMatrix {
    let mut m = seeded(a.len() + 1, b.len() + 1);
    for i in 1..m.rows {
        for j in 1..m.cols {
            fill_cell(&mut m, a, b, i, j);
        }
    }
    m
}

pub fn compute_with_ops(a: &[u8], b: &[u8]) -> (EditMatrix, TagMatrix) {
    let mut m = seeded(a.len() + 1, b.len() + 1);
    let rows = m.rows;
    let cols = m.cols;
    let mut tags = TagMatrix {
        rows,
        cols,
        data: vec![EditTag::NoChange; rows * cols],
    };
    for j in 1..cols {
        tags.data[j] = EditTag::Insertion;
    }
    for i in 1..rows {
        tags.data[i * cols] = EditTag::Deletion;
    }

    for i in 1..rows {
        for j in 1..cols {
            let (v, cost) = fill_cell(&mut m, a, b, i, j);
            let up = m.get(i - 1, j);
            let left = m.get(i, j - 1);
            let diag = m.get(i - 1, j - 1);
            let tag = if v == up + 1 {
                EditTag::Deletion
            } else if v == left + 1 {
                EditTag::Insertion
            } else if v == diag + cost {
                if cost == 1 {
                    EditTag::Change
                } else {
                    EditTag::NoChange
                }
            } else {
                EditTag::Error
            };
            debug_assert_ne!(tag, EditTag::Error, "unreachable tag at ({i}, {j})");
            tags.data[i * cols + j] = tag;
        }
    }
    (m, tags)
}

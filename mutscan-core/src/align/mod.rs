//! Unit-cost edit distance and edit scripts.
//!
//! Strings are byte slices: `a` is the reference axis (rows), `b` the observed axis (columns).

pub mod matrix;
pub mod script;

pub use matrix::{compute, compute_with_ops, EditMatrix, EditTag, TagMatrix};
pub use script::{
    apply_script, backtrace, edit_script, overlap_script, tag_script, EditOperation,
};

pub mod classify;
pub mod record;

pub use classify::{classify, Classification};
pub use record::{MutationKind, MutationRecord, GAP};

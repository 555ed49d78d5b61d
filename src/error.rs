use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StructureError {
    #[error("structure has no cells")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// an expected outcome, not a fault
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("no solution")]
pub struct Unsatisfiable;

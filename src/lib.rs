pub mod error;
pub mod grid;
pub mod order;
pub mod parse;
pub mod solve;
pub mod words;

pub use crate::error::{StructureError, Unsatisfiable};
pub use crate::grid::{Direction, Grid, Puzzle};
pub use crate::parse::{Slot, SlotId};
pub use crate::solve::{is_consistent, solve, Assignment, DomainStore, SolveStats, Solver};
pub use crate::words::{WordId, WordPool};

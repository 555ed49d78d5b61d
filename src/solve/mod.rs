use std::time::{Duration, Instant};

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::Unsatisfiable;
use crate::grid::Puzzle;
use crate::parse::SlotId;
use crate::words::{WordId, WordPool};

pub mod domains;
pub mod propagate;
mod search;

pub use domains::DomainStore;

// assign and unassign are exact inverses, so a failed branch leaves no
// residue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    assigned: usize,
}

impl Assignment {
    pub fn new(slot_count: usize) -> Assignment {
        Assignment {
            words: vec![None; slot_count],
            assigned: 0,
        }
    }

    pub fn assign(&mut self, slot: SlotId, word: WordId) {
        if self.words[slot].is_none() {
            self.assigned += 1;
        }
        self.words[slot] = Some(word);
    }

    pub fn unassign(&mut self, slot: SlotId) {
        if self.words[slot].is_some() {
            self.assigned -= 1;
        }
        self.words[slot] = None;
    }

    pub fn get(&self, slot: SlotId) -> Option<WordId> {
        self.words[slot]
    }

    pub fn is_complete(&self) -> bool {
        self.assigned == self.words.len()
    }

    pub fn len(&self) -> usize {
        self.assigned
    }

    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(slot, &word)| word.map(|word| (slot, word)))
    }
}

// no word used twice, every word the exact length of its slot, every
// filled crossing agreeing on its letter; partial assignments are fine
pub fn is_consistent(puzzle: &Puzzle, pool: &WordPool, assignment: &Assignment) -> bool {
    let mut used = FxHashSet::default();
    for (slot, word) in assignment.iter() {
        if !used.insert(word) {
            return false;
        }
        if pool.length(word) != puzzle.slots()[slot].length {
            return false;
        }
    }

    for ((a, b), (i, j)) in puzzle.overlaps() {
        let (wa, wb) = match (assignment.get(a), assignment.get(b)) {
            (Some(wa), Some(wb)) => (wa, wb),
            _ => continue,
        };
        if pool.letter(wa, i) != pool.letter(wb, j) {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub states: u64,
    pub backtracks: u64,
    pub eliminations: u64,
    pub duration: Duration,
}

pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    pool: &'p WordPool,
    stats: SolveStats,
}

impl<'p> Solver<'p> {
    pub fn new(puzzle: &'p Puzzle, pool: &'p WordPool) -> Solver<'p> {
        Solver {
            puzzle,
            pool,
            stats: SolveStats::default(),
        }
    }

    pub fn solve(&mut self) -> Result<Assignment, Unsatisfiable> {
        let start = Instant::now();
        let result = self.run();
        self.stats.duration = start.elapsed();
        result
    }

    fn run(&mut self) -> Result<Assignment, Unsatisfiable> {
        // stats cover one run, not the solver's lifetime
        self.stats = SolveStats::default();

        let mut domains = DomainStore::new(self.puzzle.slots(), self.pool);

        // a slot with no words of its length can never be filled
        for slot in 0..self.puzzle.slots().len() {
            if domains.is_empty(slot) {
                debug!("no candidates fit slot {}", slot);
                return Err(Unsatisfiable);
            }
        }

        if !propagate::ac3(self.puzzle, self.pool, &mut domains, &mut self.stats) {
            return Err(Unsatisfiable);
        }
        debug!(
            "arc consistency eliminated {} candidates",
            self.stats.eliminations
        );

        let mut assignment = Assignment::new(self.puzzle.slots().len());
        if !search::backtrack(
            self.puzzle,
            self.pool,
            &domains,
            &mut assignment,
            &mut self.stats,
        ) {
            return Err(Unsatisfiable);
        }

        debug_assert!(is_consistent(self.puzzle, self.pool, &assignment));
        Ok(assignment)
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

pub fn solve(puzzle: &Puzzle, pool: &WordPool) -> Result<Assignment, Unsatisfiable> {
    Solver::new(puzzle, pool).solve()
}

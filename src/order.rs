use core::cmp::Ordering;

use crate::grid::Puzzle;
use crate::parse::SlotId;
use crate::solve::{Assignment, DomainStore};
use crate::words::{WordId, WordPool};

// the best slot to fill next compares greatest
#[derive(Eq, PartialEq, Debug)]
pub struct SlotPriority {
    pub(crate) slot: SlotId,
    candidates: usize,
    degree: usize,
}

impl SlotPriority {
    pub(crate) fn new(slot: SlotId, puzzle: &Puzzle, domains: &DomainStore) -> SlotPriority {
        SlotPriority {
            slot,
            candidates: domains.candidates(slot).len(),
            degree: puzzle.neighbors(slot).len(),
        }
    }
}

impl PartialOrd for SlotPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotPriority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // fewer candidates wins
        if self.candidates != other.candidates {
            return other.candidates.cmp(&self.candidates);
        }
        // more crossings wins
        if self.degree != other.degree {
            return self.degree.cmp(&other.degree);
        }
        // lower index wins
        other.slot.cmp(&self.slot)
    }
}

pub fn select_slot(
    puzzle: &Puzzle,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<SlotId> {
    (0..puzzle.slots().len())
        .filter(|&slot| assignment.get(slot).is_none())
        .map(|slot| SlotPriority::new(slot, puzzle, domains))
        .max()
        .map(|priority| priority.slot)
}

// least constraining first: a candidate's cost is the number of words it
// disagrees with across the still-unassigned crossing slots
pub fn order_values(
    puzzle: &Puzzle,
    pool: &WordPool,
    domains: &DomainStore,
    assignment: &Assignment,
    slot: SlotId,
) -> Vec<WordId> {
    let mut result = domains.candidates(slot).to_vec();
    result.sort_by_key(|&word| {
        let mut conflicts = 0;
        for &neighbor in puzzle.neighbors(slot) {
            if assignment.get(neighbor).is_some() {
                continue;
            }
            let (i, j) = puzzle.overlap(slot, neighbor).unwrap();
            let letter = pool.letter(word, i);
            conflicts += domains
                .candidates(neighbor)
                .iter()
                .filter(|&&other| pool.letter(other, j) != letter)
                .count();
        }
        conflicts
    });
    result
}

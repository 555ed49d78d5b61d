use std::collections::VecDeque;

use log::debug;

use crate::grid::Puzzle;
use crate::parse::SlotId;
use crate::words::WordPool;

use super::domains::DomainStore;
use super::SolveStats;

// seeds the worklist with every crossing pair in both orderings; false
// means a domain emptied
pub fn ac3(
    puzzle: &Puzzle,
    pool: &WordPool,
    domains: &mut DomainStore,
    stats: &mut SolveStats,
) -> bool {
    let mut arcs = VecDeque::new();
    for x in 0..puzzle.slots().len() {
        for &y in puzzle.neighbors(x) {
            arcs.push_back((x, y));
        }
    }
    run(puzzle, pool, domains, stats, arcs)
}

// starts from the given arcs instead of all of them; arcs between slots
// that do not cross are skipped
pub fn ac3_with_arcs(
    puzzle: &Puzzle,
    pool: &WordPool,
    domains: &mut DomainStore,
    stats: &mut SolveStats,
    arcs: Vec<(SlotId, SlotId)>,
) -> bool {
    run(puzzle, pool, domains, stats, VecDeque::from(arcs))
}

fn run(
    puzzle: &Puzzle,
    pool: &WordPool,
    domains: &mut DomainStore,
    stats: &mut SolveStats,
    mut arcs: VecDeque<(SlotId, SlotId)>,
) -> bool {
    while let Some((x, y)) = arcs.pop_front() {
        let overlap = match puzzle.overlap(x, y) {
            Some(overlap) => overlap,
            None => continue,
        };

        let before = domains.candidates(x).len();
        if !domains.revise(x, y, overlap, pool) {
            continue;
        }
        stats.eliminations += (before - domains.candidates(x).len()) as u64;

        if domains.is_empty(x) {
            debug!("slot {} has no candidates left", x);
            return false;
        }

        // shrinking x can strand candidates in the slots that leaned on it
        for &z in puzzle.neighbors(x) {
            if z != y && !arcs.contains(&(z, x)) {
                arcs.push_back((z, x));
            }
        }
    }
    true
}

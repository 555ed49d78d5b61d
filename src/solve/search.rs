use log::trace;

use crate::grid::Puzzle;
use crate::order::{order_values, select_slot};
use crate::words::WordPool;

use super::domains::DomainStore;
use super::{is_consistent, Assignment, SolveStats};

// tries candidates for one slot at a time, undoing each one that leads
// nowhere; returns whether the assignment was completed
pub(crate) fn backtrack(
    puzzle: &Puzzle,
    pool: &WordPool,
    domains: &DomainStore,
    assignment: &mut Assignment,
    stats: &mut SolveStats,
) -> bool {
    if assignment.is_complete() {
        return true;
    }

    let slot = match select_slot(puzzle, domains, assignment) {
        Some(slot) => slot,
        None => return false,
    };

    for word in order_values(puzzle, pool, domains, assignment, slot) {
        stats.states += 1;
        assignment.assign(slot, word);
        if is_consistent(puzzle, pool, assignment)
            && backtrack(puzzle, pool, domains, assignment, stats)
        {
            return true;
        }
        assignment.unassign(slot);
    }

    trace!("no fit for slot {}", slot);
    stats.backtracks += 1;
    false
}

#[cfg(test)]
mod tests {
    use crate::grid::Puzzle;
    use crate::solve::{is_consistent, Assignment, DomainStore, SolveStats};
    use crate::words::WordPool;

    use super::backtrack;

    #[test]
    fn backtrack_works() {
        let puzzle = Puzzle::parse(
            "
#.#
...
#.#
",
        )
        .unwrap();
        let pool = WordPool::new(vec![String::from("cat"), String::from("tar")]);
        let domains = DomainStore::new(puzzle.slots(), &pool);
        let mut assignment = Assignment::new(puzzle.slots().len());
        let mut stats = SolveStats::default();

        assert!(backtrack(
            &puzzle,
            &pool,
            &domains,
            &mut assignment,
            &mut stats
        ));
        assert!(assignment.is_complete());
        assert!(is_consistent(&puzzle, &pool, &assignment));
    }

    #[test]
    fn backtrack_fills_a_ring() {
        let puzzle = Puzzle::parse(
            "
....
.##.
.##.
....
",
        )
        .unwrap();
        let pool = WordPool::new(vec![
            String::from("sand"),
            String::from("drip"),
            String::from("soup"),
            String::from("pump"),
        ]);
        let mut domains = DomainStore::new(puzzle.slots(), &pool);
        let mut stats = SolveStats::default();
        assert!(crate::solve::propagate::ac3(
            &puzzle,
            &pool,
            &mut domains,
            &mut stats
        ));

        let mut assignment = Assignment::new(puzzle.slots().len());
        assert!(backtrack(
            &puzzle,
            &pool,
            &domains,
            &mut assignment,
            &mut stats
        ));
        assert!(assignment.is_complete());
        assert!(is_consistent(&puzzle, &pool, &assignment));

        // all four words used exactly once
        let mut used: Vec<usize> = assignment.iter().map(|(_, word)| word).collect();
        used.sort_unstable();
        assert_eq!(used, vec![0, 1, 2, 3]);
    }

    #[test]
    fn backtrack_reports_failure_and_leaves_nothing_behind() {
        let puzzle = Puzzle::parse(
            "
#.#
...
#.#
",
        )
        .unwrap();
        let pool = WordPool::new(vec![String::from("cat"), String::from("dog")]);
        let domains = DomainStore::new(puzzle.slots(), &pool);
        let mut assignment = Assignment::new(puzzle.slots().len());
        let mut stats = SolveStats::default();

        assert!(!backtrack(
            &puzzle,
            &pool,
            &domains,
            &mut assignment,
            &mut stats
        ));
        assert!(assignment.is_empty());
        assert!(stats.backtracks > 0);
    }
}

use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{Direction, Grid};

pub type SlotId = usize;

// a maximal run of open cells that takes a word
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Slot {
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
    pub direction: Direction,
}

impl Slot {
    pub fn cell(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.start_row, self.start_col + index),
            Direction::Down => (self.start_row + index, self.start_col),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |index| self.cell(index))
    }
}

pub(crate) fn parse_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    let mut start_row = None;
    let mut start_col = None;
    let mut length = 0;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                // found an open cell; is it our first?
                if start_row == None {
                    start_row = Some(row);
                    start_col = Some(col);
                }
                length += 1;
            } else {
                // runs of one cell belong to the crossing direction
                if length >= 2 {
                    result.push(Slot {
                        start_row: start_row.unwrap(),
                        start_col: start_col.unwrap(),
                        length,
                        direction: Direction::Across,
                    });
                }
                length = 0;
                start_row = None;
                start_col = None;
            }
        }
        // have to process end of row
        if length >= 2 {
            result.push(Slot {
                start_row: start_row.unwrap(),
                start_col: start_col.unwrap(),
                length,
                direction: Direction::Across,
            });
        }
        length = 0;
        start_row = None;
        start_col = None;
    }

    let mut start_row = None;
    let mut start_col = None;
    let mut length = 0;

    for col in 0..grid.width() {
        for row in 0..grid.height() {
            if grid.is_open(row, col) {
                if start_row == None {
                    start_row = Some(row);
                    start_col = Some(col);
                }
                length += 1;
            } else {
                if length >= 2 {
                    result.push(Slot {
                        start_row: start_row.unwrap(),
                        start_col: start_col.unwrap(),
                        length,
                        direction: Direction::Down,
                    });
                }
                length = 0;
                start_row = None;
                start_col = None;
            }
        }
        // have to process end of column
        if length >= 2 {
            result.push(Slot {
                start_row: start_row.unwrap(),
                start_col: start_col.unwrap(),
                length,
                direction: Direction::Down,
            });
        }
        length = 0;
        start_row = None;
        start_col = None;
    }

    // an open cell no run covers still needs a word of its own
    let mut covered = FxHashSet::default();
    for slot in &result {
        for cell in slot.cells() {
            covered.insert(cell);
        }
    }
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) && !covered.contains(&(row, col)) {
                result.push(Slot {
                    start_row: row,
                    start_col: col,
                    length: 1,
                    direction: Direction::Across,
                });
            }
        }
    }

    result
}

// both orderings of each crossing pair map to the shared cell's index
// within each slot
pub(crate) fn find_overlaps(slots: &[Slot]) -> FxHashMap<(SlotId, SlotId), (usize, usize)> {
    let mut by_cell: FxHashMap<(usize, usize), Vec<(SlotId, usize)>> = FxHashMap::default();
    for (id, slot) in slots.iter().enumerate() {
        for (index, cell) in slot.cells().enumerate() {
            by_cell.entry(cell).or_default().push((id, index));
        }
    }

    let mut result = FxHashMap::default();
    for slots_at_cell in by_cell.values() {
        for &(a, i) in slots_at_cell {
            for &(b, j) in slots_at_cell {
                if a != b {
                    result.insert((a, b), (i, j));
                }
            }
        }
    }
    result
}

pub(crate) fn build_neighbors(
    slot_count: usize,
    overlaps: &FxHashMap<(SlotId, SlotId), (usize, usize)>,
) -> Vec<Vec<SlotId>> {
    let mut result = vec![vec![]; slot_count];
    for &(a, b) in overlaps.keys() {
        result[a].push(b);
    }
    // sorted so that walking neighbors is deterministic
    for neighbors in result.iter_mut() {
        neighbors.sort_unstable();
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::grid::{Direction, Grid};

    use super::{build_neighbors, find_overlaps, parse_slots, Slot};

    #[test]
    fn parse_slots_works() {
        let grid = Grid::parse(
            "
...
...
...
",
        )
        .unwrap();
        let result = parse_slots(&grid);

        assert_eq!(result.len(), 6);
        assert_eq!(
            result[0],
            Slot {
                start_row: 0,
                start_col: 0,
                length: 3,
                direction: Direction::Across
            }
        );
        assert_eq!(
            result[2],
            Slot {
                start_row: 2,
                start_col: 0,
                length: 3,
                direction: Direction::Across
            }
        );
        assert_eq!(
            result[3],
            Slot {
                start_row: 0,
                start_col: 0,
                length: 3,
                direction: Direction::Down
            }
        );
        assert_eq!(
            result[5],
            Slot {
                start_row: 0,
                start_col: 2,
                length: 3,
                direction: Direction::Down
            }
        );
    }

    #[test]
    fn single_cell_runs_are_ignored() {
        let grid = Grid::parse(
            "
#.#
...
#.#
",
        )
        .unwrap();
        let result = parse_slots(&grid);

        assert_eq!(result.len(), 2);
        assert_eq!(
            result[0],
            Slot {
                start_row: 1,
                start_col: 0,
                length: 3,
                direction: Direction::Across
            }
        );
        assert_eq!(
            result[1],
            Slot {
                start_row: 0,
                start_col: 1,
                length: 3,
                direction: Direction::Down
            }
        );
    }

    #[test]
    fn lone_cell_becomes_slot() {
        let grid = Grid::parse(".").unwrap();
        let result = parse_slots(&grid);

        assert_eq!(
            result,
            vec![Slot {
                start_row: 0,
                start_col: 0,
                length: 1,
                direction: Direction::Across
            }]
        );
    }

    #[test]
    fn covered_cells_take_no_extra_slot() {
        let grid = Grid::parse(
            "
...
###
...
",
        )
        .unwrap();
        let result = parse_slots(&grid);

        // two across runs; every column run is a covered single cell
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|slot| slot.length == 3));
    }

    #[test]
    fn find_overlaps_works() {
        let grid = Grid::parse(
            "
...
...
...
",
        )
        .unwrap();
        let slots = parse_slots(&grid);
        let overlaps = find_overlaps(&slots);

        // every across row crosses every down column, both orderings kept
        assert_eq!(overlaps.len(), 18);
        assert_eq!(overlaps.get(&(0, 3)), Some(&(0, 0)));
        assert_eq!(overlaps.get(&(3, 0)), Some(&(0, 0)));
        assert_eq!(overlaps.get(&(1, 4)), Some(&(1, 1)));
        assert_eq!(overlaps.get(&(2, 3)), Some(&(0, 2)));
        assert_eq!(overlaps.get(&(0, 1)), None);
    }

    #[test]
    fn build_neighbors_works() {
        let grid = Grid::parse(
            "
...
...
...
",
        )
        .unwrap();
        let slots = parse_slots(&grid);
        let overlaps = find_overlaps(&slots);
        let neighbors = build_neighbors(slots.len(), &overlaps);

        assert_eq!(neighbors[0], vec![3, 4, 5]);
        assert_eq!(neighbors[4], vec![0, 1, 2]);
    }
}

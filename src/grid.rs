use rustc_hash::FxHashMap;

use crate::error::StructureError;
use crate::parse::{build_neighbors, find_overlaps, parse_slots, Slot, SlotId};
use crate::solve::Assignment;
use crate::words::WordPool;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Across,
    Down,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    pub(crate) cells: Vec<bool>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Grid {
    // `.` and `_` are open, anything else is blocked
    pub fn parse(input: &str) -> Result<Grid, StructureError> {
        let mut lines: Vec<&str> = input.lines().collect();
        while lines.first().map_or(false, |line| line.trim().is_empty()) {
            lines.remove(0);
        }
        while lines.last().map_or(false, |line| line.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(StructureError::Empty);
        }

        let width = lines[0].chars().count();
        let height = lines.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(StructureError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for c in line.chars() {
                cells.push(c == '.' || c == '_');
            }
        }

        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }
}

// slots, overlaps and neighbor lists never change after construction
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(SlotId, SlotId), (usize, usize)>,
    neighbors: Vec<Vec<SlotId>>,
}

impl Puzzle {
    pub fn parse(input: &str) -> Result<Puzzle, StructureError> {
        Grid::parse(input).map(Puzzle::new)
    }

    pub fn new(grid: Grid) -> Puzzle {
        let slots = parse_slots(&grid);
        let overlaps = find_overlaps(&slots);
        let neighbors = build_neighbors(slots.len(), &overlaps);
        Puzzle {
            grid,
            slots,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    // index of the shared cell within each slot, if the two slots cross
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(a, b)).copied()
    }

    pub fn overlaps(&self) -> impl Iterator<Item = ((SlotId, SlotId), (usize, usize))> + '_ {
        self.overlaps.iter().map(|(&pair, &overlap)| (pair, overlap))
    }

    pub fn neighbors(&self, slot: SlotId) -> &[SlotId] {
        &self.neighbors[slot]
    }

    // blocked and unfilled cells come back as None
    pub fn render(&self, pool: &WordPool, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut result = vec![vec![None; self.grid.width]; self.grid.height];
        for (slot, word) in assignment.iter() {
            for (index, (row, col)) in self.slots[slot].cells().enumerate() {
                result[row][col] = Some(pool.letter(word, index));
            }
        }
        result
    }
}

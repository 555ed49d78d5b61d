use rustc_hash::{FxHashMap, FxHashSet};

use crate::parse::{Slot, SlotId};
use crate::words::{WordId, WordPool};

// construction keeps only words of the slot's exact length; after that
// domains only shrink, and candidate order survives every prune
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<Vec<WordId>>,
}

impl DomainStore {
    pub fn new(slots: &[Slot], pool: &WordPool) -> DomainStore {
        let mut by_length: FxHashMap<usize, Vec<WordId>> = FxHashMap::default();
        for id in pool.ids() {
            by_length.entry(pool.length(id)).or_default().push(id);
        }

        DomainStore {
            domains: slots
                .iter()
                .map(|slot| by_length.get(&slot.length).cloned().unwrap_or_default())
                .collect(),
        }
    }

    pub fn candidates(&self, slot: SlotId) -> &[WordId] {
        &self.domains[slot]
    }

    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.domains[slot].is_empty()
    }

    // drops every candidate of x with no agreeing candidate in y at the
    // crossing; an emptied domain is left for the caller to notice
    pub fn revise(
        &mut self,
        x: SlotId,
        y: SlotId,
        overlap: (usize, usize),
        pool: &WordPool,
    ) -> bool {
        let (i, j) = overlap;
        let supported: FxHashSet<char> = self.domains[y]
            .iter()
            .map(|&word| pool.letter(word, j))
            .collect();

        let before = self.domains[x].len();
        self.domains[x].retain(|&word| supported.contains(&pool.letter(word, i)));
        self.domains[x].len() != before
    }

    pub fn snapshot(&self) -> Vec<Vec<WordId>> {
        self.domains.clone()
    }

    pub fn restore(&mut self, snapshot: Vec<Vec<WordId>>) {
        self.domains = snapshot;
    }
}

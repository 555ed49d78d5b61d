use rustc_hash::FxHashSet;

pub type WordId = usize;

// lengths count chars, not bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
    letters: Vec<Vec<char>>,
}

impl WordPool {
    pub fn new(words: Vec<String>) -> WordPool {
        let mut seen = FxHashSet::default();
        let mut pool = WordPool::default();
        for word in words {
            // first occurrence wins
            if seen.contains(&word) {
                continue;
            }
            seen.insert(word.clone());
            pool.letters.push(word.chars().collect());
            pool.words.push(word);
        }
        pool
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn ids(&self) -> std::ops::Range<WordId> {
        0..self.words.len()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    pub fn length(&self, id: WordId) -> usize {
        self.letters[id].len()
    }

    pub fn letter(&self, id: WordId, index: usize) -> char {
        self.letters[id][index]
    }
}

#[cfg(test)]
mod tests {
    use super::WordPool;

    #[test]
    fn dedup_works() {
        let pool = WordPool::new(vec![
            String::from("cat"),
            String::from("dog"),
            String::from("cat"),
            String::from("emu"),
            String::from("dog"),
        ]);

        assert_eq!(3, pool.len());
        assert_eq!("cat", pool.word(0));
        assert_eq!("dog", pool.word(1));
        assert_eq!("emu", pool.word(2));
    }

    #[test]
    fn letters_works() {
        let pool = WordPool::new(vec![String::from("cat"), String::from("naïve")]);

        assert_eq!(3, pool.length(0));
        assert_eq!('a', pool.letter(0, 1));

        // chars, not bytes
        assert_eq!(5, pool.length(1));
        assert_eq!('ï', pool.letter(1, 2));
    }
}

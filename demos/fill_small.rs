use crossfill::{solve, Puzzle, WordPool};

fn main() {
    let structure = std::fs::read_to_string("data/cross.txt").expect("failed to read structure");
    let puzzle = Puzzle::parse(&structure).expect("failed to parse structure");

    let words = std::fs::read_to_string("data/words_small.txt").expect("failed to read words");
    let pool = WordPool::new(words.lines().map(|line| line.to_uppercase()).collect());

    match solve(&puzzle, &pool) {
        Ok(assignment) => {
            for row in puzzle.render(&pool, &assignment) {
                let line: String = row.into_iter().map(|cell| cell.unwrap_or('█')).collect();
                println!("{}", line);
            }
        }
        Err(_) => println!("No solution."),
    }
}

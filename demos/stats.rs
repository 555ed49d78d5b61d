use crossfill::{Puzzle, Solver, WordPool};

fn main() {
    let structure = std::fs::read_to_string("data/ring.txt").expect("failed to read structure");
    let puzzle = Puzzle::parse(&structure).expect("failed to parse structure");

    let words = std::fs::read_to_string("data/words_ring.txt").expect("failed to read words");
    let pool = WordPool::new(words.lines().map(|line| line.to_uppercase()).collect());

    let mut solver = Solver::new(&puzzle, &pool);
    match solver.solve() {
        Ok(assignment) => {
            for row in puzzle.render(&pool, &assignment) {
                let line: String = row.into_iter().map(|cell| cell.unwrap_or('█')).collect();
                println!("{}", line);
            }
        }
        Err(_) => println!("No solution."),
    }

    let stats = solver.stats();
    println!();
    println!("states: {}", stats.states);
    println!("backtracks: {}", stats.backtracks);
    println!("eliminations: {}", stats.eliminations);
    println!("duration: {:?}", stats.duration);
}

extern crate clap;

use clap::{App, Arg};
use crossfill::{Assignment, Puzzle, Solver, Unsatisfiable, WordPool};

fn main() -> Result<(), String> {
    env_logger::init();

    let matches = App::new("crossfill")
        .arg(
            Arg::with_name("structure")
                .short("s")
                .long("structure")
                .value_name("FILE")
                .help("Grid structure location")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("Word list location, one word per line or a json array")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Write the filled grid here as well"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .takes_value(false)
                .help("Print solve statistics"),
        )
        .get_matches();

    let structure = matches.value_of("structure").expect("structure not included");
    let structure = std::fs::read_to_string(structure).expect("failed to read structure");

    let puzzle = match Puzzle::parse(&structure) {
        Ok(puzzle) => puzzle,
        Err(err) => return Err(format!("bad structure: {}", err)),
    };

    let words = matches.value_of("words").expect("words not included");
    let pool = WordPool::new(load_words(words)?);

    let mut solver = Solver::new(&puzzle, &pool);
    match solver.solve() {
        Ok(assignment) => {
            let rendered = render_text(&puzzle, &pool, &assignment);
            print!("{}", rendered);
            if let Some(output) = matches.value_of("output") {
                std::fs::write(output, &rendered).expect("failed to write output");
            }
        }
        Err(Unsatisfiable) => println!("No solution."),
    }

    if matches.is_present("stats") {
        let stats = solver.stats();
        println!("states: {}", stats.states);
        println!("backtracks: {}", stats.backtracks);
        println!("eliminations: {}", stats.eliminations);
        println!("duration: {:?}", stats.duration);
    }

    Ok(())
}

fn load_words(path: &str) -> Result<Vec<String>, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|err| format!("failed to read {}: {}", path, err))?;
    parse_words(path, &contents)
}

// a `.json` path holds an array of words, anything else one word per line;
// either way words come out upper-cased with blanks dropped
fn parse_words(path: &str, contents: &str) -> Result<Vec<String>, String> {
    let words = if path.ends_with(".json") {
        serde_json::from_str::<Vec<String>>(contents)
            .map_err(|err| format!("bad word list {}: {}", path, err))?
    } else {
        contents.lines().map(String::from).collect()
    };

    Ok(words
        .into_iter()
        .map(|word| word.trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect())
}

fn render_text(puzzle: &Puzzle, pool: &WordPool, assignment: &Assignment) -> String {
    let mut result = String::new();
    for row in puzzle.render(pool, assignment) {
        for cell in row {
            result.push(cell.unwrap_or('█'));
        }
        result.push('\n');
    }
    result
}

//! Example demonstrating deduction-only solving of the bundled puzzles.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle medium
//! ```
//!
//! Pass-level solver tracing goes through `log`:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_puzzle -- --puzzle seven-star
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use zonedoku_core::Givens;
use zonedoku_solver::{Board, Status};

const EASY: &str = "
    ___ 3__ _4_
    2_4 ___ 5__
    _69 __7 38_
    __1 _7_ __2
    ___ 4_1 ___
    7__ _5_ 6__
    _43 6__ 87_
    __8 ___ 1_9
    _2_ __9 ___
";

const MEDIUM: &str = "
    __3 ___ ___
    _7_ 8__ 96_
    _2_ 75_ __1
    ___ ___ 85_
    __6 ___ 7__
    _19 ___ ___
    3__ _94 _7_
    _62 __1 _3_
    ___ ___ 6__
";

const HARD: &str = "
    _4_ _91 6__
    2__ ___ _5_
    __6 ___ __3
    _7_ 3__ ___
    __2 _7_ 4__
    ___ __2 _6_
    4__ ___ 1__
    _9_ ___ __8
    __7 56_ _9_
";

const VERY_HARD: &str = "
    ___ ___ ___
    _1_ _74 2__
    __2 __8 _3_
    ___ 3__ 82_
    _8_ _4_ _9_
    _76 __5 ___
    _5_ 4__ 6__
    __1 96_ _4_
    ___ ___ ___
";

const VERY_VERY_HARD: &str = "
    _8_ __9 ___
    9__ _3_ __6
    6__ 7__ _4_
    7__ 2__ 5__
    8__ _7_ __1
    __3 __6 __2
    _5_ __8 __3
    1__ _2_ __4
    ___ 9__ _5_
";

const SEVEN_STAR: &str = "
    _12 ___ _3_
    ___ 34_ __6
    _7_ __5 4__
    2__ 6__ ___
    __3 _7_ 8__
    ___ __4 __9
    __1 7__ _2_
    8__ _53 ___
    _9_ ___ 31_
";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Puzzle {
    Easy,
    Medium,
    Hard,
    VeryHard,
    VeryVeryHard,
    SevenStar,
}

impl Puzzle {
    fn text(self) -> &'static str {
        match self {
            Self::Easy => EASY,
            Self::Medium => MEDIUM,
            Self::Hard => HARD,
            Self::VeryHard => VERY_HARD,
            Self::VeryVeryHard => VERY_VERY_HARD,
            Self::SevenStar => SEVEN_STAR,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle to solve.
    #[arg(long, value_name = "NAME", default_value = "medium")]
    puzzle: Puzzle,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let givens: Givens = match args.puzzle.text().parse() {
        Ok(givens) => givens,
        Err(err) => {
            eprintln!("Bad puzzle definition: {err}");
            process::exit(2);
        }
    };

    let mut board = Board::new(&givens);
    println!("Problem ({} givens):", givens.len());
    println!("{}", board.snapshot());

    match board.solve() {
        Ok(Status::Solved) => {
            println!("Solved:");
            println!("{}", board.snapshot());
        }
        Ok(Status::Stalled) => {
            let snapshot = board.snapshot();
            println!(
                "Stalled at {} of 81 cells; trial and error needed:",
                snapshot.resolved_count()
            );
            println!("{snapshot}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Puzzle is contradictory: {err}");
            process::exit(1);
        }
    }
}

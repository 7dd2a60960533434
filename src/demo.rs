use std::error::Error;

use clap::Parser;
use log::info;
use rand::Rng;

use puzzle_solver::{Direction, Face, Move, RubiksCube, Solver};

/// Walks the cube API end to end: applies moves, prints the unfolded net,
/// undoes, scrambles, and solves.
#[derive(Parser)]
struct Args {
    /// Comma-separated moves to apply instead of the built-in sequence,
    /// e.g. "white cw, blue ccw".
    #[arg(long)]
    moves: Option<String>,
    /// Number of random moves in the scramble handed to the solver. Full
    /// 15-25 move scrambles are far beyond what the search can handle.
    #[arg(long, default_value_t = 4)]
    scramble: usize,
    /// Skip the solve step.
    #[arg(long)]
    no_solve: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut cube = RubiksCube::new();
    match &args.moves {
        Some(input) => {
            for token in input.split(',') {
                let m: Move = token.trim().parse()?;
                cube.rotate(m.face, m.direction);
            }
        }
        None => {
            cube.rotate(Face::White, Direction::CounterClockwise);
            cube.rotate(Face::Blue, Direction::Clockwise);
            cube.rotate(Face::Green, Direction::Clockwise);
            cube.rotate(Face::Yellow, Direction::CounterClockwise);
        }
    }
    println!("Current state of the cube:\n{}", cube);

    cube.undo_move();
    println!("After undoing the last move:\n{}", cube);

    cube.scramble();
    println!("After a full scramble:\n{}", cube);

    cube.reset();

    let mut rng = rand::thread_rng();
    for _ in 0..args.scramble {
        let m = Move::ALL[rng.gen_range(0..Move::ALL.len())];
        info!("scrambling with {}", m);
        cube.rotate(m.face, m.direction);
    }
    println!("Scrambled with {} random moves:\n{}", args.scramble, cube);

    if args.no_solve {
        return Ok(());
    }

    // round-trip through the saved form, as a caller persisting scrambles
    // would
    let saved = cube.save_state();
    let scrambled = RubiksCube::restore_state(&saved)?;

    info!("searching for a solution");
    let solver = Solver::new(scrambled);
    println!("Solved in {} moves:\n", solver.get_num_moves());
    for state in solver.get_solution() {
        println!("{}", state);
    }

    Ok(())
}

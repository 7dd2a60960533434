//! A 3x3 Rubik's Cube simulator and best-first solver.
//!
//! The cube is a total mapping from 54 sticker positions to colors; a
//! face rotation is a permutation of that mapping driven by fixed lookup
//! tables (`sequences`, `adjacency`). The solver is a generic A*-style
//! search over anything implementing [`PuzzleState`]; the cube's distance
//! estimate deliberately overestimates, so solutions come back quickly
//! for shallow scrambles but are not guaranteed shortest-possible.
//!
//! ```
//! use puzzle_solver::{Direction, Face, RubiksCube, Solver};
//!
//! let mut cube = RubiksCube::new();
//! cube.rotate(Face::Blue, Direction::Clockwise);
//!
//! let solver = Solver::new(cube);
//! assert_eq!(solver.get_num_moves(), 1);
//! assert!(solver.get_solution().last().unwrap().is_solved());
//! ```

pub mod adjacency;
pub mod face;
mod net;
pub mod rubiks_cube;
pub mod sequences;
pub mod solver;
pub mod sticker;

pub use crate::face::{Color, Direction, Face, Move, ParseMoveError};
pub use crate::rubiks_cube::{RestoreStateError, RubiksCube};
pub use crate::solver::{PuzzleState, Solver};
pub use crate::sticker::StickerPosition;

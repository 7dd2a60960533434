use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the six faces of the cube, named after its center color.
///
/// The declaration order is the canonical face order: move numbering and
/// neighbor enumeration walk the faces in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::White,
        Face::Yellow,
        Face::Green,
        Face::Blue,
        Face::Red,
        Face::Orange,
    ];

    /// The face on the opposite side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::White => Face::Yellow,
            Face::Yellow => Face::White,
            Face::Green => Face::Blue,
            Face::Blue => Face::Green,
            Face::Red => Face::Orange,
            Face::Orange => Face::Red,
        }
    }

    /// The color every sticker on this face has when the cube is solved.
    pub const fn home_color(self) -> Color {
        match self {
            Face::White => Color::White,
            Face::Yellow => Color::Yellow,
            Face::Green => Color::Green,
            Face::Blue => Color::Blue,
            Face::Red => Color::Red,
            Face::Orange => Color::Orange,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Face::White => "white",
            Face::Yellow => "yellow",
            Face::Green => "green",
            Face::Blue => "blue",
            Face::Red => "red",
            Face::Orange => "orange",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .iter()
            .copied()
            .find(|face| face.name() == s)
            .ok_or_else(|| ParseMoveError::UnknownFace(s.to_string()))
    }
}

/// A quarter-turn direction, as seen when looking at the rotating face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Direction::Clockwise => "cw",
            Direction::CounterClockwise => "ccw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cw" => Ok(Direction::Clockwise),
            "ccw" => Ok(Direction::CounterClockwise),
            _ => Err(ParseMoveError::UnknownDirection(s.to_string())),
        }
    }
}

/// A sticker color. Renders as the lowercase initial of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Red => 'r',
            Color::Orange => 'o',
        }
    }

    pub fn from_letter(letter: char) -> Option<Color> {
        Color::ALL.iter().copied().find(|c| c.letter() == letter)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A quarter turn of one face.
///
/// There are exactly 12 moves; `Move::ALL` lists them in face-major order,
/// clockwise before counter-clockwise. That order is the fixed move
/// numbering (1 through 12) used for scrambling and neighbor enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    pub const ALL: [Move; 12] = [
        Move::new(Face::White, Direction::Clockwise),
        Move::new(Face::White, Direction::CounterClockwise),
        Move::new(Face::Yellow, Direction::Clockwise),
        Move::new(Face::Yellow, Direction::CounterClockwise),
        Move::new(Face::Green, Direction::Clockwise),
        Move::new(Face::Green, Direction::CounterClockwise),
        Move::new(Face::Blue, Direction::Clockwise),
        Move::new(Face::Blue, Direction::CounterClockwise),
        Move::new(Face::Red, Direction::Clockwise),
        Move::new(Face::Red, Direction::CounterClockwise),
        Move::new(Face::Orange, Direction::Clockwise),
        Move::new(Face::Orange, Direction::CounterClockwise),
    ];

    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    /// The move undoing this one.
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.direction.inverse())
    }

    /// The 1-based move number of this move in `Move::ALL`.
    pub fn number(self) -> usize {
        Move::ALL
            .iter()
            .position(|&m| m == self)
            .expect("every move appears in Move::ALL")
            + 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.face, self.direction)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(face), Some(direction), None) => {
                Ok(Move::new(face.parse()?, direction.parse()?))
            }
            _ => Err(ParseMoveError::MalformedMove(s.to_string())),
        }
    }
}

/// Failure to parse a face, direction, or move token.
///
/// Bad tokens are rejected at this boundary so they can never reach the
/// permutation tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("unknown face `{0}`")]
    UnknownFace(String),
    #[error("unknown direction `{0}` (expected `cw` or `ccw`)")]
    UnknownDirection(String),
    #[error("expected `<face> <direction>`, got `{0}`")]
    MalformedMove(String),
}

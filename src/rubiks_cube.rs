use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjacency;
use crate::face::{Color, Direction, Face, Move};
use crate::net;
use crate::sequences;
use crate::solver::PuzzleState;
use crate::sticker::{StickerPosition, CENTER_SLOT};

/// The colors of all 54 stickers, indexed by `StickerPosition::index`.
pub type Stickers = [Color; 54];

/// A 3x3 Rubik's Cube.
///
/// The cube is a total mapping from sticker positions to colors, stored as
/// a flat array. Every mutation goes through `rotate`, which pushes a
/// snapshot onto the history stack, so `undo_move` can walk back to the
/// construction-time state one move at a time.
#[derive(Debug, Clone)]
pub struct RubiksCube {
    // Never empty; the top entry is always the live state.
    history: Vec<Stickers>,
}

impl RubiksCube {
    /// Creates a solved cube.
    pub fn new() -> RubiksCube {
        let mut stickers = [Color::White; 54];
        for pos in StickerPosition::all() {
            stickers[pos.index()] = pos.face.home_color();
        }
        RubiksCube::from_stickers(stickers)
    }

    /// Creates a cube in the given state. Its history starts here: this
    /// state is the new cube's undo base.
    fn from_stickers(stickers: Stickers) -> RubiksCube {
        RubiksCube {
            history: vec![stickers],
        }
    }

    pub(crate) fn stickers(&self) -> &Stickers {
        self.history
            .last()
            .expect("the history stack always holds the live state")
    }

    /// The color currently at `pos`.
    pub fn color_at(&self, pos: StickerPosition) -> Color {
        self.stickers()[pos.index()]
    }

    /// Rotates the given face a quarter turn in the given direction.
    pub fn rotate(&mut self, face: Face, direction: Direction) {
        let next = rotated(self.stickers(), face, direction);
        self.history.push(next);
    }

    /// Undoes the most recent rotation. Does nothing when the history is
    /// already down to its base state.
    pub fn undo_move(&mut self) {
        if self.history.len() > 1 {
            self.history.pop();
        }
    }

    /// Drops every move, returning to the cube's construction-time state.
    pub fn reset(&mut self) {
        self.history.truncate(1);
    }

    /// Applies 15 to 25 uniformly random moves.
    pub fn scramble(&mut self) {
        let mut rng = rand::thread_rng();
        let num_moves = rng.gen_range(15..=25);
        for _ in 0..num_moves {
            let m = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            self.rotate(m.face, m.direction);
        }
    }

    /// Whether every sticker is back on the face it belongs to. Centers
    /// never move, so they pass trivially.
    pub fn is_solved(&self) -> bool {
        StickerPosition::all().all(|pos| self.color_at(pos) == pos.face.home_color())
    }

    /// An estimate of how far this state is from solved: each sticker
    /// costs 1 when it is off its home face, or 2 when it sits on the face
    /// diametrically opposite its home.
    ///
    /// This is not an exact move count and not a lower bound either (one
    /// quarter turn can fix up to 20 stickers at once, so the estimate can
    /// overshoot the true distance). The search uses it purely to order
    /// its fringe, which is why solutions are not guaranteed to be
    /// shortest-possible.
    pub fn distance_to_solved(&self) -> u32 {
        StickerPosition::all()
            .map(|pos| {
                let color = self.color_at(pos);
                if color == pos.face.home_color() {
                    0
                } else if color == pos.face.opposite().home_color() {
                    2
                } else {
                    1
                }
            })
            .sum()
    }

    /// The 12 states one move away, in move-number order. Each neighbor is
    /// an independently owned cube sharing no storage with this one.
    pub fn neighbors(&self) -> Neighbors {
        Neighbors {
            scratch: RubiksCube::from_stickers(*self.stickers()),
            moves: Move::ALL.iter(),
        }
    }

    /// Serializes the current sticker colors to JSON.
    pub fn save_state(&self) -> String {
        let saved = SavedState {
            stickers: self.stickers().iter().map(|color| color.letter()).collect(),
        };
        serde_json::to_string_pretty(&saved).expect("a sticker string always serializes")
    }

    /// Rebuilds a cube from `save_state` output, rejecting states that
    /// could not have come from this cube: wrong sticker counts, unknown
    /// colors, or centers that moved.
    pub fn restore_state(saved: &str) -> Result<RubiksCube, RestoreStateError> {
        let saved: SavedState = serde_json::from_str(saved)?;
        let letters: Vec<char> = saved.stickers.chars().collect();
        if letters.len() != 54 {
            return Err(RestoreStateError::WrongStickerCount(letters.len()));
        }

        let mut stickers = [Color::White; 54];
        for (i, &letter) in letters.iter().enumerate() {
            stickers[i] =
                Color::from_letter(letter).ok_or(RestoreStateError::UnknownColor(letter))?;
        }

        for &color in &Color::ALL {
            let count = stickers.iter().filter(|&&c| c == color).count();
            if count != 9 {
                return Err(RestoreStateError::WrongColorCount(color, count));
            }
        }
        for &face in &Face::ALL {
            let center = StickerPosition::new(face, CENTER_SLOT);
            if stickers[center.index()] != face.home_color() {
                return Err(RestoreStateError::MovedCenter(face));
            }
        }

        Ok(RubiksCube::from_stickers(stickers))
    }
}

impl Default for RubiksCube {
    fn default() -> RubiksCube {
        RubiksCube::new()
    }
}

// Two cubes are the same state when their sticker mappings agree; how they
// got there does not matter.
impl PartialEq for RubiksCube {
    fn eq(&self, other: &RubiksCube) -> bool {
        self.stickers() == other.stickers()
    }
}

impl Eq for RubiksCube {}

impl fmt::Display for RubiksCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&net::render(self.stickers()))
    }
}

impl PuzzleState for RubiksCube {
    type Neighbors = Neighbors;

    fn distance_to_solved(&self) -> u32 {
        RubiksCube::distance_to_solved(self)
    }

    fn is_solved(&self) -> bool {
        RubiksCube::is_solved(self)
    }

    fn neighbors(&self) -> Neighbors {
        RubiksCube::neighbors(self)
    }
}

/// Iterator over the 12 single-move successors of a cube state.
///
/// Applies each move to a private scratch cube, materializes the result as
/// an independent value, and reverts the scratch before the next move.
pub struct Neighbors {
    scratch: RubiksCube,
    moves: std::slice::Iter<'static, Move>,
}

impl Iterator for Neighbors {
    type Item = RubiksCube;

    fn next(&mut self) -> Option<RubiksCube> {
        let m = self.moves.next()?;
        self.scratch.rotate(m.face, m.direction);
        let neighbor = RubiksCube::from_stickers(*self.scratch.stickers());
        self.scratch.undo_move();
        Some(neighbor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

/// Computes the sticker array after one quarter turn.
///
/// Every read comes from the pre-rotation array and every write goes into
/// a fresh copy, so destinations aliasing sources within the same turn can
/// never observe a partially updated value.
fn rotated(stickers: &Stickers, face: Face, direction: Direction) -> Stickers {
    let mut next = *stickers;

    // the rotating face's own stickers
    for slot in 1..=4 {
        let to = StickerPosition::new(face, sequences::next_edge_slot(slot, direction));
        next[to.index()] = stickers[StickerPosition::new(face, slot).index()];
    }
    for slot in 5..=8 {
        let to = StickerPosition::new(face, sequences::next_corner_slot(slot, direction));
        next[to.index()] = stickers[StickerPosition::new(face, slot).index()];
    }

    // the 12 perimeter stickers on the neighboring faces
    for &from in adjacency::adjacent_positions(face) {
        let to_face = sequences::next_face(face, from.face, direction);
        let to_slot = if from.is_edge() {
            sequences::next_adjacent_edge_slot(face, to_face, from.slot, direction)
        } else {
            sequences::next_adjacent_corner_slot(face, to_face, from.slot, direction)
        };
        next[StickerPosition::new(to_face, to_slot).index()] = stickers[from.index()];
    }

    next
}

#[derive(Serialize, Deserialize)]
struct SavedState {
    // 54 color letters in dense position order
    stickers: String,
}

/// Failure to rebuild a cube from a saved state.
#[derive(Debug, Error)]
pub enum RestoreStateError {
    #[error("state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected 54 stickers, got {0}")]
    WrongStickerCount(usize),
    #[error("unknown color `{0}`")]
    UnknownColor(char),
    #[error("expected 9 `{0}` stickers, got {1}")]
    WrongColorCount(Color, usize),
    #[error("the {0} center sticker must keep its home color")]
    MovedCenter(Face),
}

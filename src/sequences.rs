//! The fixed permutation tables behind a face rotation.
//!
//! Three lookups cooperate to move a sticker: the own-face 4-cycles say
//! where a rotating face's own stickers go, the face rings say which
//! neighboring face a perimeter sticker lands on, and the slot rules say
//! which slot it occupies there. All of it is immutable data; nothing here
//! is ever written after compile time.

use crate::face::{Direction, Face};

// The own-face 4-cycles. A clockwise turn advances one step.
const EDGE_CYCLE: [u8; 4] = [1, 2, 3, 4];
const CORNER_CYCLE: [u8; 4] = [5, 6, 7, 8];

/// The four faces adjacent to some face, in the order they cycle under a
/// clockwise rotation of that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSequence(pub [Face; 4]);

impl FaceSequence {
    /// The face one step from `from` in the given direction.
    pub fn next(&self, from: Face, direction: Direction) -> Face {
        let i = self
            .0
            .iter()
            .position(|&face| face == from)
            .unwrap_or_else(|| panic!("{} is not in this face ring", from));
        match direction {
            Direction::Clockwise => self.0[(i + 1) % 4],
            Direction::CounterClockwise => self.0[(i + 3) % 4],
        }
    }

    pub fn contains(&self, face: Face) -> bool {
        self.0.contains(&face)
    }
}

static WHITE_RING: FaceSequence =
    FaceSequence([Face::Orange, Face::Blue, Face::Red, Face::Green]);
static YELLOW_RING: FaceSequence =
    FaceSequence([Face::Red, Face::Blue, Face::Orange, Face::Green]);
static GREEN_RING: FaceSequence =
    FaceSequence([Face::White, Face::Red, Face::Yellow, Face::Orange]);
static BLUE_RING: FaceSequence =
    FaceSequence([Face::White, Face::Orange, Face::Yellow, Face::Red]);
static RED_RING: FaceSequence = FaceSequence([Face::White, Face::Blue, Face::Yellow, Face::Green]);
static ORANGE_RING: FaceSequence =
    FaceSequence([Face::Yellow, Face::Blue, Face::White, Face::Green]);

/// The ring of faces surrounding `face`.
pub fn face_ring(face: Face) -> &'static FaceSequence {
    match face {
        Face::White => &WHITE_RING,
        Face::Yellow => &YELLOW_RING,
        Face::Green => &GREEN_RING,
        Face::Blue => &BLUE_RING,
        Face::Red => &RED_RING,
        Face::Orange => &ORANGE_RING,
    }
}

/// The face a perimeter sticker of `rotating` lands on when its sticker
/// currently sits on `sticker_face`.
pub fn next_face(rotating: Face, sticker_face: Face, direction: Direction) -> Face {
    face_ring(rotating).next(sticker_face, direction)
}

/// Where an edge slot on the rotating face itself ends up.
pub fn next_edge_slot(slot: u8, direction: Direction) -> u8 {
    cycle(&EDGE_CYCLE, slot, direction)
}

/// Where a corner slot on the rotating face itself ends up.
pub fn next_corner_slot(slot: u8, direction: Direction) -> u8 {
    cycle(&CORNER_CYCLE, slot, direction)
}

fn cycle(slots: &[u8; 4], slot: u8, direction: Direction) -> u8 {
    let i = slots
        .iter()
        .position(|&s| s == slot)
        .unwrap_or_else(|| panic!("slot {} is not in the 4-cycle {:?}", slot, slots));
    match direction {
        Direction::Clockwise => slots[(i + 1) % 4],
        Direction::CounterClockwise => slots[(i + 3) % 4],
    }
}

/// How a perimeter sticker's slot number is rewritten when it crosses from
/// one neighboring face to the next.
///
/// The reference faces (white and yellow) cycle slots directly; blue and
/// green land edges on fixed slots and swap opposite corner slots for
/// certain crossings; red and orange leave slot numbers untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotRule {
    /// Follow the slot 4-cycle in the direction of rotation.
    CycleWith,
    /// Follow the slot 4-cycle against the direction of rotation.
    CycleAgainst,
    /// The slot number is the same on the destination face.
    Keep,
    /// Land on a fixed slot regardless of origin.
    Constant(u8),
    /// Swap opposite corner slots (5 <-> 7, 6 <-> 8).
    Swap,
    /// Swap opposite corner slots, but only for clockwise rotations.
    SwapIfCw,
    /// Swap opposite corner slots, but only for counter-clockwise rotations.
    SwapIfCcw,
}

/// The edge slot rule for a sticker of `rotating`'s perimeter landing on
/// `destination`. Every physically adjacent pair is listed; anything else
/// is a programming error.
fn edge_rule(rotating: Face, destination: Face) -> SlotRule {
    use Face::*;
    match (rotating, destination) {
        (White, Orange) | (White, Blue) | (White, Red) | (White, Green) => SlotRule::CycleWith,
        (Yellow, Red) | (Yellow, Blue) | (Yellow, Orange) | (Yellow, Green) => {
            SlotRule::CycleAgainst
        }
        (Green, Yellow) => SlotRule::Constant(3),
        (Green, White) | (Green, Red) | (Green, Orange) => SlotRule::Constant(1),
        (Blue, Yellow) => SlotRule::Constant(1),
        (Blue, White) | (Blue, Orange) | (Blue, Red) => SlotRule::Constant(3),
        (Red, White) | (Red, Blue) | (Red, Yellow) | (Red, Green) => SlotRule::Keep,
        (Orange, Yellow) | (Orange, Blue) | (Orange, White) | (Orange, Green) => SlotRule::Keep,
        (rotating, destination) => {
            panic!("{} is not on the perimeter of {}", destination, rotating)
        }
    }
}

/// The corner slot rule, keyed the same way as `edge_rule`.
fn corner_rule(rotating: Face, destination: Face) -> SlotRule {
    use Face::*;
    match (rotating, destination) {
        (White, Orange) | (White, Blue) | (White, Red) | (White, Green) => SlotRule::CycleWith,
        (Yellow, Red) | (Yellow, Blue) | (Yellow, Orange) | (Yellow, Green) => {
            SlotRule::CycleAgainst
        }
        (Green, White) => SlotRule::Keep,
        (Green, Yellow) => SlotRule::Swap,
        (Green, Orange) => SlotRule::SwapIfCw,
        (Green, Red) => SlotRule::SwapIfCcw,
        (Blue, White) => SlotRule::Keep,
        (Blue, Yellow) => SlotRule::Swap,
        (Blue, Orange) => SlotRule::SwapIfCcw,
        (Blue, Red) => SlotRule::SwapIfCw,
        (Red, White) | (Red, Blue) | (Red, Yellow) | (Red, Green) => SlotRule::Keep,
        (Orange, Yellow) | (Orange, Blue) | (Orange, White) | (Orange, Green) => SlotRule::Keep,
        (rotating, destination) => {
            panic!("{} is not on the perimeter of {}", destination, rotating)
        }
    }
}

/// Resolves the slot an adjacent-face edge sticker lands on.
pub fn next_adjacent_edge_slot(
    rotating: Face,
    destination: Face,
    slot: u8,
    direction: Direction,
) -> u8 {
    apply_rule(edge_rule(rotating, destination), &EDGE_CYCLE, slot, direction)
}

/// Resolves the slot an adjacent-face corner sticker lands on.
pub fn next_adjacent_corner_slot(
    rotating: Face,
    destination: Face,
    slot: u8,
    direction: Direction,
) -> u8 {
    apply_rule(
        corner_rule(rotating, destination),
        &CORNER_CYCLE,
        slot,
        direction,
    )
}

fn apply_rule(rule: SlotRule, slots: &[u8; 4], slot: u8, direction: Direction) -> u8 {
    match rule {
        SlotRule::CycleWith => cycle(slots, slot, direction),
        SlotRule::CycleAgainst => cycle(slots, slot, direction.inverse()),
        SlotRule::Keep => slot,
        SlotRule::Constant(fixed) => fixed,
        SlotRule::Swap => swap_opposite_corner(slot),
        SlotRule::SwapIfCw => match direction {
            Direction::Clockwise => swap_opposite_corner(slot),
            Direction::CounterClockwise => slot,
        },
        SlotRule::SwapIfCcw => match direction {
            Direction::Clockwise => slot,
            Direction::CounterClockwise => swap_opposite_corner(slot),
        },
    }
}

fn swap_opposite_corner(slot: u8) -> u8 {
    match slot {
        5 => 7,
        7 => 5,
        6 => 8,
        8 => 6,
        _ => panic!("slot {} is not a corner", slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_face_cycles() {
        assert_eq!(next_edge_slot(1, Direction::Clockwise), 2);
        assert_eq!(next_edge_slot(4, Direction::Clockwise), 1);
        assert_eq!(next_edge_slot(1, Direction::CounterClockwise), 4);
        assert_eq!(next_corner_slot(5, Direction::Clockwise), 6);
        assert_eq!(next_corner_slot(8, Direction::Clockwise), 5);
        assert_eq!(next_corner_slot(5, Direction::CounterClockwise), 8);
    }

    #[test]
    fn test_cycles_are_4_cycles() {
        for &direction in &[Direction::Clockwise, Direction::CounterClockwise] {
            for start in 1..=4 {
                let mut slot = start;
                for _ in 0..4 {
                    slot = next_edge_slot(slot, direction);
                }
                assert_eq!(slot, start);
            }
            for start in 5..=8 {
                let mut slot = start;
                for _ in 0..4 {
                    slot = next_corner_slot(slot, direction);
                }
                assert_eq!(slot, start);
            }
        }
    }

    #[test]
    fn test_face_rings() {
        for &face in &Face::ALL {
            let ring = face_ring(face);
            assert!(!ring.contains(face));
            assert!(!ring.contains(face.opposite()));
            for &neighbor in &ring.0 {
                // one step forward then one step back is a no-op
                let forward = ring.next(neighbor, Direction::Clockwise);
                assert_eq!(ring.next(forward, Direction::CounterClockwise), neighbor);
                // four steps comes back around
                let mut around = neighbor;
                for _ in 0..4 {
                    around = ring.next(around, Direction::Clockwise);
                }
                assert_eq!(around, neighbor);
            }
        }
    }

    #[test]
    fn test_corner_swaps() {
        // blue sends corners onto yellow swapped in both directions
        assert_eq!(
            next_adjacent_corner_slot(Face::Blue, Face::Yellow, 6, Direction::Clockwise),
            8
        );
        assert_eq!(
            next_adjacent_corner_slot(Face::Blue, Face::Yellow, 7, Direction::CounterClockwise),
            5
        );
        // onto red only clockwise
        assert_eq!(
            next_adjacent_corner_slot(Face::Blue, Face::Red, 5, Direction::Clockwise),
            7
        );
        assert_eq!(
            next_adjacent_corner_slot(Face::Blue, Face::Red, 5, Direction::CounterClockwise),
            5
        );
        // green mirrors blue: onto orange only clockwise
        assert_eq!(
            next_adjacent_corner_slot(Face::Green, Face::Orange, 6, Direction::Clockwise),
            8
        );
        assert_eq!(
            next_adjacent_corner_slot(Face::Green, Face::Orange, 6, Direction::CounterClockwise),
            6
        );
    }

    #[test]
    fn test_reference_faces_cycle_directly() {
        assert_eq!(
            next_adjacent_edge_slot(Face::White, Face::Blue, 1, Direction::Clockwise),
            2
        );
        // yellow cycles against its rotation direction
        assert_eq!(
            next_adjacent_edge_slot(Face::Yellow, Face::Blue, 3, Direction::Clockwise),
            2
        );
        assert_eq!(
            next_adjacent_corner_slot(Face::Yellow, Face::Red, 8, Direction::Clockwise),
            7
        );
    }

    #[test]
    #[should_panic]
    fn test_opposite_face_is_rejected() {
        next_adjacent_edge_slot(Face::White, Face::Yellow, 1, Direction::Clockwise);
    }

    #[test]
    #[should_panic]
    fn test_slot_outside_cycle_is_rejected() {
        next_edge_slot(5, Direction::Clockwise);
    }
}

//! Which stickers on neighboring faces move when a face rotates.
//!
//! Each face owns a fixed perimeter of 12 sticker positions: three per
//! neighboring face (corner, edge, corner), listed in the same order the
//! face ring cycles them. The order matters; it lines the perimeter up
//! with the rotating face's own sticker cycles.

use crate::face::Face;
use crate::sticker::StickerPosition;

const fn p(face: Face, slot: u8) -> StickerPosition {
    StickerPosition::new(face, slot)
}

static WHITE_PERIMETER: [StickerPosition; 12] = [
    p(Face::Orange, 8),
    p(Face::Orange, 4),
    p(Face::Orange, 7),
    p(Face::Blue, 5),
    p(Face::Blue, 1),
    p(Face::Blue, 8),
    p(Face::Red, 6),
    p(Face::Red, 2),
    p(Face::Red, 5),
    p(Face::Green, 7),
    p(Face::Green, 3),
    p(Face::Green, 6),
];

static YELLOW_PERIMETER: [StickerPosition; 12] = [
    p(Face::Red, 8),
    p(Face::Red, 4),
    p(Face::Red, 7),
    p(Face::Blue, 6),
    p(Face::Blue, 3),
    p(Face::Blue, 7),
    p(Face::Orange, 5),
    p(Face::Orange, 2),
    p(Face::Orange, 6),
    p(Face::Green, 5),
    p(Face::Green, 1),
    p(Face::Green, 8),
];

static GREEN_PERIMETER: [StickerPosition; 12] = [
    p(Face::White, 5),
    p(Face::White, 1),
    p(Face::White, 8),
    p(Face::Red, 5),
    p(Face::Red, 1),
    p(Face::Red, 8),
    p(Face::Yellow, 6),
    p(Face::Yellow, 3),
    p(Face::Yellow, 7),
    p(Face::Orange, 5),
    p(Face::Orange, 1),
    p(Face::Orange, 8),
];

static BLUE_PERIMETER: [StickerPosition; 12] = [
    p(Face::White, 6),
    p(Face::White, 3),
    p(Face::White, 7),
    p(Face::Orange, 6),
    p(Face::Orange, 3),
    p(Face::Orange, 7),
    p(Face::Yellow, 5),
    p(Face::Yellow, 1),
    p(Face::Yellow, 8),
    p(Face::Red, 6),
    p(Face::Red, 3),
    p(Face::Red, 7),
];

static RED_PERIMETER: [StickerPosition; 12] = [
    p(Face::White, 8),
    p(Face::White, 4),
    p(Face::White, 7),
    p(Face::Blue, 8),
    p(Face::Blue, 4),
    p(Face::Blue, 7),
    p(Face::Yellow, 8),
    p(Face::Yellow, 4),
    p(Face::Yellow, 7),
    p(Face::Green, 8),
    p(Face::Green, 4),
    p(Face::Green, 7),
];

static ORANGE_PERIMETER: [StickerPosition; 12] = [
    p(Face::Yellow, 5),
    p(Face::Yellow, 2),
    p(Face::Yellow, 6),
    p(Face::Blue, 5),
    p(Face::Blue, 2),
    p(Face::Blue, 6),
    p(Face::White, 5),
    p(Face::White, 2),
    p(Face::White, 6),
    p(Face::Green, 5),
    p(Face::Green, 2),
    p(Face::Green, 6),
];

/// The 12 sticker positions that move onto new faces when `face` rotates.
pub fn adjacent_positions(face: Face) -> &'static [StickerPosition; 12] {
    match face {
        Face::White => &WHITE_PERIMETER,
        Face::Yellow => &YELLOW_PERIMETER,
        Face::Green => &GREEN_PERIMETER,
        Face::Blue => &BLUE_PERIMETER,
        Face::Red => &RED_PERIMETER,
        Face::Orange => &ORANGE_PERIMETER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Direction;
    use crate::sequences;

    #[test]
    fn test_perimeter_shape() {
        for &face in &Face::ALL {
            let perimeter = adjacent_positions(face);
            let ring = sequences::face_ring(face);

            // three stickers per neighboring face, in ring order
            for (i, group) in perimeter.chunks(3).enumerate() {
                for pos in group {
                    assert_eq!(pos.face, ring.0[i]);
                }
                assert!(group[0].is_corner());
                assert!(group[1].is_edge());
                assert!(group[2].is_corner());
            }

            // all 12 are distinct and none sits on the rotating face itself
            // or its opposite
            for (i, a) in perimeter.iter().enumerate() {
                assert_ne!(a.face, face);
                assert_ne!(a.face, face.opposite());
                for b in &perimeter[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    /// One rotation must map each perimeter exactly onto itself. Together
    /// with the ring tests this exercises every (rotating face, direction,
    /// destination face) combination the slot rules can be asked about.
    #[test]
    fn test_rotation_permutes_the_perimeter() {
        for &face in &Face::ALL {
            for &direction in &[Direction::Clockwise, Direction::CounterClockwise] {
                let perimeter = adjacent_positions(face);
                let mut images: Vec<StickerPosition> = perimeter
                    .iter()
                    .map(|pos| {
                        let to_face = sequences::next_face(face, pos.face, direction);
                        let to_slot = if pos.is_edge() {
                            sequences::next_adjacent_edge_slot(face, to_face, pos.slot, direction)
                        } else {
                            sequences::next_adjacent_corner_slot(face, to_face, pos.slot, direction)
                        };
                        StickerPosition::new(to_face, to_slot)
                    })
                    .collect();

                for image in &images {
                    assert!(
                        perimeter.contains(image),
                        "rotating {} {} sent a sticker to {:?}, which is off the perimeter",
                        face,
                        direction,
                        image
                    );
                }
                images.sort_by_key(|pos| pos.index());
                images.dedup();
                assert_eq!(images.len(), 12, "rotating {} {} collided", face, direction);
            }
        }
    }
}

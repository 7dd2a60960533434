use crate::face::Face;

/// The slot of the fixed center sticker on every face.
pub const CENTER_SLOT: u8 = 9;

/// A fixed location on the cube: a face plus a slot on that face.
///
/// Slots 1 through 4 are edges, 5 through 8 are corners, and slot 9 is the
/// center, which never moves. The slot numbers are relative to each face;
/// the permutation and adjacency tables are what keep them consistent with
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerPosition {
    pub face: Face,
    pub slot: u8,
}

impl StickerPosition {
    pub const fn new(face: Face, slot: u8) -> StickerPosition {
        assert!(1 <= slot && slot <= 9);
        StickerPosition { face, slot }
    }

    /// Dense encoding of this position into 0..54, used to index the
    /// sticker array directly instead of going through a map.
    pub const fn index(self) -> usize {
        self.face as usize * 9 + (self.slot as usize - 1)
    }

    pub const fn is_edge(self) -> bool {
        1 <= self.slot && self.slot <= 4
    }

    pub const fn is_corner(self) -> bool {
        5 <= self.slot && self.slot <= 8
    }

    pub const fn is_center(self) -> bool {
        self.slot == CENTER_SLOT
    }

    /// All 54 positions, face-major in canonical face order.
    pub fn all() -> impl Iterator<Item = StickerPosition> {
        Face::ALL
            .iter()
            .flat_map(|&face| (1..=9).map(move |slot| StickerPosition::new(face, slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_dense() {
        let indices: Vec<usize> = StickerPosition::all().map(|pos| pos.index()).collect();
        assert_eq!(indices, (0..54).collect::<Vec<_>>());
    }

    #[test]
    fn test_slot_classification() {
        for pos in StickerPosition::all() {
            let classes = [pos.is_edge(), pos.is_corner(), pos.is_center()];
            assert_eq!(classes.iter().filter(|&&c| c).count(), 1);
        }
        assert!(StickerPosition::new(Face::White, 1).is_edge());
        assert!(StickerPosition::new(Face::White, 4).is_edge());
        assert!(StickerPosition::new(Face::White, 5).is_corner());
        assert!(StickerPosition::new(Face::White, 8).is_corner());
        assert!(StickerPosition::new(Face::White, CENTER_SLOT).is_center());
    }

    #[test]
    fn test_equality_is_by_field() {
        assert_eq!(
            StickerPosition::new(Face::Red, 3),
            StickerPosition::new(Face::Red, 3)
        );
        assert_ne!(
            StickerPosition::new(Face::Red, 3),
            StickerPosition::new(Face::Red, 4)
        );
        assert_ne!(
            StickerPosition::new(Face::Red, 3),
            StickerPosition::new(Face::Blue, 3)
        );
    }
}

//! Rendering of a cube state as an unfolded cross-shaped net.
//!
//! The net is a 9x12 character grid: the orange face on top, the four
//! equatorial faces (green, white, blue, yellow) side by side in the
//! middle band, and the red face on the bottom. Cells outside the cross
//! are drawn as `-`. The grid is derived from the sticker mapping on
//! demand; it is never the authoritative representation.

use crate::face::Face;
use crate::rubiks_cube::Stickers;
use crate::sticker::StickerPosition;

// A face's slot numbers laid out as the 3x3 grid it renders as.
const FACE_GRID: [[u8; 3]; 3] = [[5, 2, 6], [1, 9, 3], [8, 4, 7]];

// The equatorial faces of the middle band, left to right.
const MIDDLE_BAND: [Face; 4] = [Face::Green, Face::White, Face::Blue, Face::Yellow];

pub(crate) fn render(stickers: &Stickers) -> String {
    let mut out = String::new();
    for row in 0..9 {
        let mut cells = ['-'; 12];
        let grid_row = row % 3;
        match row / 3 {
            0 => fill_face(&mut cells, 3, Face::Orange, grid_row, stickers),
            1 => {
                for (i, &face) in MIDDLE_BAND.iter().enumerate() {
                    fill_face(&mut cells, i * 3, face, grid_row, stickers);
                }
            }
            _ => fill_face(&mut cells, 3, Face::Red, grid_row, stickers),
        }
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*cell);
        }
        out.push('\n');
    }
    out
}

fn fill_face(cells: &mut [char; 12], start: usize, face: Face, grid_row: usize, s: &Stickers) {
    for (i, &slot) in FACE_GRID[grid_row].iter().enumerate() {
        cells[start + i] = s[StickerPosition::new(face, slot).index()].letter();
    }
}

//! Mapping between surface pixels and board cells
//!
//! The drawing surface is split into three equal zones along each axis.

use crate::board::{Pos, BOARD_SIZE};

/// Cell under the point (`x`, `y`) on a `width` x `height` surface.
///
/// Coordinates are relative to the surface's top-left corner. Points off
/// the surface, or a degenerate surface, map to `None`.
pub fn cell_at(x: f32, y: f32, width: f32, height: f32) -> Option<Pos> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
        return None;
    }

    let zones = BOARD_SIZE as f32;
    let col = ((x / (width / zones)).floor() as usize).min(BOARD_SIZE - 1);
    let row = ((y / (height / zones)).floor() as usize).min(BOARD_SIZE - 1);
    Some(Pos::new(row as u8, col as u8))
}

/// Pixel bounds of a cell as `(left, top, right, bottom)`
pub fn cell_bounds(pos: Pos, width: f32, height: f32) -> (f32, f32, f32, f32) {
    let zones = BOARD_SIZE as f32;
    let cell_w = width / zones;
    let cell_h = height / zones;
    let left = pos.col as f32 * cell_w;
    let top = pos.row as f32 * cell_h;
    (left, top, left + cell_w, top + cell_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zones() {
        assert_eq!(cell_at(0.0, 0.0, 600.0, 600.0), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(599.0, 10.0, 600.0, 600.0), Some(Pos::new(0, 2)));
        assert_eq!(cell_at(300.0, 300.0, 600.0, 600.0), Some(Pos::CENTER));
        assert_eq!(cell_at(199.9, 400.0, 600.0, 600.0), Some(Pos::new(2, 0)));
    }

    #[test]
    fn test_non_square_surface() {
        assert_eq!(cell_at(350.0, 50.0, 900.0, 300.0), Some(Pos::new(0, 1)));
        assert_eq!(cell_at(850.0, 250.0, 900.0, 300.0), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_outside_surface() {
        assert_eq!(cell_at(-1.0, 10.0, 600.0, 600.0), None);
        assert_eq!(cell_at(10.0, 600.0, 600.0, 600.0), None);
        assert_eq!(cell_at(10.0, 10.0, 0.0, 600.0), None);
        assert_eq!(cell_at(f32::NAN, 10.0, 600.0, 600.0), None);
    }

    #[test]
    fn test_bounds_round_trip() {
        for idx in 0..9 {
            let pos = Pos::from_index(idx);
            let (left, top, right, bottom) = cell_bounds(pos, 600.0, 450.0);
            let mid = ((left + right) / 2.0, (top + bottom) / 2.0);
            assert_eq!(cell_at(mid.0, mid.1, 600.0, 450.0), Some(pos));
        }
    }
}

/// Pixel constants and the literal crosshair table.
///
/// The table is row-major: `CROSSHAIR[y][x]`. Row 4 and column 4 are the
/// black arms, rows/columns 3 and 5 are the white outline, and the four 3x3
/// corners are transparent.
use image::Rgba;

use crate::config::ICON_SIZE;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const SIZE: usize = ICON_SIZE as usize;

// Shorthands to keep the table readable
const K: Rgba<u8> = BLACK;
const W: Rgba<u8> = WHITE;
const T: Rgba<u8> = TRANSPARENT;

pub const CROSSHAIR: [[Rgba<u8>; SIZE]; SIZE] = [
    [T, T, T, W, K, W, T, T, T],
    [T, T, T, W, K, W, T, T, T],
    [T, T, T, W, K, W, T, T, T],
    [W, W, W, W, K, W, W, W, W],
    [K, K, K, K, K, K, K, K, K],
    [W, W, W, W, K, W, W, W, W],
    [T, T, T, W, K, W, T, T, T],
    [T, T, T, W, K, W, T, T, T],
    [T, T, T, W, K, W, T, T, T],
];

/// Look up the pattern pixel at column `x`, row `y`
pub fn pixel_at(x: u32, y: u32) -> Rgba<u8> {
    CROSSHAIR[y as usize][x as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARMS: [u32; 3] = [3, 4, 5];

    #[test]
    fn test_center_row_and_column_are_black() {
        for i in 0..ICON_SIZE {
            assert_eq!(pixel_at(i, 4), BLACK, "row 4, column {}", i);
            assert_eq!(pixel_at(4, i), BLACK, "column 4, row {}", i);
        }
    }

    #[test]
    fn test_outline_rows_are_white_except_center() {
        for y in [3, 5] {
            for x in 0..ICON_SIZE {
                let expected = if x == 4 { BLACK } else { WHITE };
                assert_eq!(pixel_at(x, y), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_outline_columns_mirror_rows() {
        for x in [3, 5] {
            for y in 0..ICON_SIZE {
                let expected = if y == 4 { BLACK } else { WHITE };
                assert_eq!(pixel_at(x, y), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_corners_are_transparent() {
        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                if ARMS.contains(&x) || ARMS.contains(&y) {
                    continue;
                }
                assert_eq!(pixel_at(x, y), TRANSPARENT, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_pattern_is_symmetric() {
        for y in 0..SIZE {
            for x in 0..SIZE {
                assert_eq!(CROSSHAIR[y][x], CROSSHAIR[x][y]);
                assert_eq!(CROSSHAIR[y][x], CROSSHAIR[y][SIZE - 1 - x]);
            }
        }
    }
}

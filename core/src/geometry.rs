// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pixel-to-cell coordinate math
//!
//! Converts between physical pointer coordinates and logical board cells.
//! Out-of-bounds clicks are a normal event, reported through the
//! [`OFF_BOARD`] sentinel rather than an error.

use serde::{Deserialize, Serialize};

use crate::Coord;

/// Sentinel for a pointer axis that falls outside the playable grid
pub const OFF_BOARD: i32 = -1;

/// Pixel layout of the rendered board
///
/// Front-ends pass this explicitly instead of relying on process-wide
/// constants, so the same math works across UI backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Blank space around the board, in pixels
    pub margin: i32,
    /// Space above the board reserved for header text, in pixels
    pub header_height: i32,
    /// Side length of one cell, in pixels
    pub cell_size: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: 15,
            header_height: 30,
            cell_size: 50,
        }
    }
}

/// Map a pointer position to a `(row, col)` cell index
///
/// Each axis is validated independently: an axis outside `[0, board_size)`
/// comes back as [`OFF_BOARD`] while the other axis keeps its value.
/// Positions above or left of the margin floor toward negative infinity,
/// so they land outside the valid range and are caught the same way.
pub fn pixel_to_cell(x: i32, y: i32, board_size: u8, layout: &Layout) -> (i32, i32) {
    let mut row = (y - layout.margin - layout.header_height).div_euclid(layout.cell_size);
    let mut col = (x - layout.margin).div_euclid(layout.cell_size);

    let size = board_size as i32;
    if !(0..size).contains(&row) {
        row = OFF_BOARD;
    }
    if !(0..size).contains(&col) {
        col = OFF_BOARD;
    }

    (row, col)
}

/// Pixel center of a cell, used when drawing pieces
pub fn cell_center(coord: Coord, layout: &Layout) -> (i32, i32) {
    let x = layout.margin + layout.cell_size * (coord.col as i32) + layout.cell_size / 2;
    let y = layout.header_height
        + layout.margin
        + layout.cell_size * (coord.row as i32)
        + layout.cell_size / 2;
    (x, y)
}

/// Vertical center of the header band, used for instructional text
pub fn header_center_y(layout: &Layout) -> i32 {
    (layout.header_height + layout.margin) / 2
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use gorgons_core::{cell_center, pixel_to_cell, Coord, Layout, OFF_BOARD};

#[test]
fn click_inside_a_cell_maps_to_that_cell() {
    let layout = Layout::default();

    // First cell spans x in [15, 65) and y in [45, 95)
    assert_eq!(pixel_to_cell(16, 46, 9, &layout), (0, 0));
    assert_eq!(pixel_to_cell(64, 94, 9, &layout), (0, 0));
    assert_eq!(pixel_to_cell(65, 95, 9, &layout), (1, 1));
}

#[test]
fn pixel_to_cell_inverts_cell_center_on_every_cell() {
    let layout = Layout::default();
    let size = 9;

    for row in 0..size {
        for col in 0..size {
            let (x, y) = cell_center(Coord::new(row, col), &layout);
            assert_eq!(
                pixel_to_cell(x, y, size, &layout),
                (row as i32, col as i32),
                "center of ({}, {})",
                row,
                col
            );
        }
    }
}

#[test]
fn click_left_of_the_margin_floors_to_off_board() {
    let layout = Layout::default();

    // col = floor((-10 - 15) / 50) = -1, row = floor((50 - 45) / 50) = 0
    assert_eq!(pixel_to_cell(-10, 50, 9, &layout), (0, OFF_BOARD));
}

#[test]
fn click_above_the_header_floors_to_off_board() {
    let layout = Layout::default();

    assert_eq!(pixel_to_cell(20, 10, 9, &layout), (OFF_BOARD, 0));
    assert_eq!(pixel_to_cell(20, -200, 9, &layout), (OFF_BOARD, 0));
}

#[test]
fn axes_are_validated_independently() {
    let layout = Layout::default();

    // Both axes out of range
    assert_eq!(pixel_to_cell(-10, 0, 9, &layout), (OFF_BOARD, OFF_BOARD));

    // Past the right edge only: col = floor((500 - 15) / 50) = 9
    assert_eq!(pixel_to_cell(500, 50, 9, &layout), (0, OFF_BOARD));

    // Past the bottom edge only
    assert_eq!(pixel_to_cell(20, 600, 9, &layout), (OFF_BOARD, 0));
}

#[test]
fn bounds_scale_with_board_size() {
    let layout = Layout::default();

    // (500, 500) is cell (9, 9): off a 9x9 board, on a 13x13 board
    assert_eq!(pixel_to_cell(500, 500, 9, &layout), (OFF_BOARD, OFF_BOARD));
    assert_eq!(pixel_to_cell(500, 500, 13, &layout), (9, 9));
}

#[test]
fn custom_layout_shifts_the_grid() {
    let layout = Layout {
        margin: 10,
        header_height: 0,
        cell_size: 20,
    };

    assert_eq!(pixel_to_cell(10, 10, 5, &layout), (0, 0));
    assert_eq!(pixel_to_cell(49, 49, 5, &layout), (1, 1));
    assert_eq!(cell_center(Coord::new(2, 3), &layout), (80, 60));
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use gorgons_core::{Board, CellState, Coord};

/// Render the board as ASCII art
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut output = String::new();

    output.push_str(&column_labels(size));

    for row in 0..size {
        // Row number (1-indexed), repeated on the right
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..size {
            let symbol = match board.get(Coord::new(row, col)) {
                Some(CellState::Red) => 'R',
                Some(CellState::Blue) => 'B',
                Some(CellState::Stone) => '#',
                Some(CellState::Empty) | None => '.',
            };
            output.push(' ');
            output.push(symbol);
        }

        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    output.push_str(&column_labels(size));

    output
}

fn column_labels(size: u8) -> String {
    let mut line = String::from("   ");
    for col in 0..size {
        line.push(' ');
        line.push(column_char(col));
    }
    line.push('\n');
    line
}

/// Convert a column index to a label character
fn column_char(col: u8) -> char {
    if col < 26 {
        (b'A' + col) as char
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gorgons_core::{initial_board, GameConfig};

    #[test]
    fn renders_default_board_with_labels() {
        let initial = initial_board(&GameConfig::default()).unwrap();
        let output = render_board(&initial.board);

        // Column labels top and bottom, 9 board rows between them
        assert!(output.starts_with("    A B C D E F G H I\n"));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 11);

        // Top row: red gorgons at columns 0 and 2
        assert_eq!(lines[1], " 1  R . R . . . . . . 1");
        // Center stone
        assert_eq!(lines[5], " 5  . . . . # . . . . 5");
        // Bottom row: blue gorgons at columns 1 and 3
        assert_eq!(lines[9], " 9  . B . B . . . . . 9");
    }

    #[test]
    fn renders_even_board_stone_block() {
        let config = GameConfig {
            board_size: 8,
            red_count: 1,
            blue_count: 1,
        };
        let initial = initial_board(&config).unwrap();
        let output = render_board(&initial.board);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[4], " 4  . . . # # . . . 4");
        assert_eq!(lines[5], " 5  . . . # # . . . 5");
    }

    #[test]
    fn column_labels_are_sequential() {
        assert_eq!(column_char(0), 'A');
        assert_eq!(column_char(8), 'I');
        assert_eq!(column_char(25), 'Z');
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Initial board setup
//!
//! Produces the turn-zero grid: a blocked stone region at the center and
//! each side's gorgons on their home row. The whole computation is pure;
//! validation happens before any cell is written.

use serde::{Deserialize, Serialize};

use crate::{Board, CellState, Coord, Player, SetupError};

/// Configuration for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows and columns of the square grid
    pub board_size: u8,
    /// Gorgons placed for the red side
    pub red_count: u8,
    /// Gorgons placed for the blue side
    pub blue_count: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 9,
            red_count: 2,
            blue_count: 2,
        }
    }
}

/// A single piece assignment, in the order pieces were placed
///
/// Renderers that layer sprites care about this order; the grid itself
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The side the gorgon belongs to
    pub player: Player,
    /// Where it was placed
    pub coord: Coord,
}

/// The completed turn-zero state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialBoard {
    /// The grid with stones and gorgons in place
    pub board: Board,
    /// Every gorgon placement, red side first, each side left to right
    pub placements: Vec<Placement>,
}

/// Build the initial board for the given configuration
///
/// Fails before touching the grid when a side requests more gorgons than
/// half the board size, or when the board is too small to hold the
/// blocked center region.
pub fn initial_board(config: &GameConfig) -> Result<InitialBoard, SetupError> {
    let size = config.board_size;
    if size == 0 {
        return Err(SetupError::BoardTooSmall { size });
    }

    let max = size / 2;
    if config.red_count > max {
        return Err(SetupError::TooManyGorgons {
            player: Player::Red,
            requested: config.red_count,
            max,
        });
    }
    if config.blue_count > max {
        return Err(SetupError::TooManyGorgons {
            player: Player::Blue,
            requested: config.blue_count,
            max,
        });
    }

    let mut board = Board::new(size);

    for coord in center_stones(size) {
        board.set(coord, CellState::Stone);
    }

    let mut placements = Vec::with_capacity((config.red_count + config.blue_count) as usize);

    // Red on the top row at even columns, left to right
    for i in 0..config.red_count {
        let coord = Coord::new(0, 2 * i);
        board.set(coord, CellState::Red);
        placements.push(Placement {
            player: Player::Red,
            coord,
        });
    }

    // Blue on the bottom row at odd columns, left to right
    for i in 0..config.blue_count {
        let coord = Coord::new(size - 1, 2 * i + 1);
        board.set(coord, CellState::Blue);
        placements.push(Placement {
            player: Player::Blue,
            coord,
        });
    }

    tracing::debug!(
        board_size = size,
        red = config.red_count,
        blue = config.blue_count,
        stones = board.count_of(CellState::Stone),
        "initial board built"
    );

    Ok(InitialBoard { board, placements })
}

/// Coordinates of the blocked center region
///
/// A single cell when the board size is odd, a 2x2 block when it is even.
fn center_stones(size: u8) -> Vec<Coord> {
    if size % 2 == 0 {
        let m = size / 2 - 1;
        vec![
            Coord::new(m, m),
            Coord::new(m, m + 1),
            Coord::new(m + 1, m),
            Coord::new(m + 1, m + 1),
        ]
    } else {
        let m = size / 2;
        vec![Coord::new(m, m)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_board_has_single_center_stone() {
        assert_eq!(center_stones(9), vec![Coord::new(4, 4)]);
    }

    #[test]
    fn even_board_has_two_by_two_center_block() {
        assert_eq!(
            center_stones(8),
            vec![
                Coord::new(3, 3),
                Coord::new(3, 4),
                Coord::new(4, 3),
                Coord::new(4, 4),
            ]
        );
    }
}

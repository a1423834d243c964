// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gorgons Core - Board Model and Setup
//!
//! This crate provides the core board functionality including:
//! - Grid representation with empty, stone, and gorgon cells
//! - Deterministic initial placement for both players
//! - Pixel-to-cell coordinate math for pointer input
//!
//! Rendering, move legality, and win detection live outside this crate;
//! callers drive the board through the pure functions exposed here.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod geometry;
pub mod setup;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player side in a Gorgons game (Red or Blue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Red player, placed along the top row
    Red,
    /// Blue player, placed along the bottom row
    Blue,
}

impl Player {
    /// Returns the opposing player
    pub fn opponent(&self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// The cell state a gorgon of this player occupies
    pub fn cell(&self) -> CellState {
        match self {
            Player::Red => CellState::Red,
            Player::Blue => CellState::Blue,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Blue => write!(f, "Blue"),
        }
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No piece and no obstruction
    Empty,
    /// Permanently blocked cell near the board center
    Stone,
    /// Occupied by a red gorgon
    Red,
    /// Occupied by a blue gorgon
    Blue,
}

/// Board coordinate representing a cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top
    pub row: u8,
    /// Column index, 0 at the left
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate is on a board of the given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.row < board_size && self.col < board_size
    }
}

/// Errors that can occur while setting up a board
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A side requested more gorgons than half the board size allows
    #[error("{player} gorgon count {requested} exceeds half the board size ({max})")]
    TooManyGorgons {
        /// The side whose count is out of range
        player: Player,
        /// The requested number of gorgons
        requested: u8,
        /// The maximum allowed, half the board size rounded down
        max: u8,
    },

    /// The board has no cells to host the blocked center region
    #[error("Board size {size} is too small to set up")]
    BoardTooSmall {
        /// The rejected board size
        size: u8,
    },
}

pub use board::Board;
pub use geometry::{cell_center, header_center_y, pixel_to_cell, Layout, OFF_BOARD};
pub use setup::{initial_board, GameConfig, InitialBoard, Placement};

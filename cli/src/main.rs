// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gorgons CLI - headless board setup
//!
//! Builds the initial board for a given configuration and prints it,
//! either as ASCII art or as JSON. Useful for eyeballing placements and
//! for integration tests that should not pull in a graphical front-end.

mod render;

use anyhow::Result;
use clap::Parser;
use gorgons_core::{initial_board, GameConfig};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "gorgons-cli", about = "Gorgons board setup tool", version)]
struct Args {
    /// Board size (rows and columns)
    #[clap(long, default_value_t = 9)]
    size: u8,

    /// Number of red gorgons
    #[clap(long, default_value_t = 2)]
    red: u8,

    /// Number of blue gorgons
    #[clap(long, default_value_t = 2)]
    blue: u8,

    /// Emit the initial board as JSON instead of ASCII
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = GameConfig {
        board_size: args.size,
        red_count: args.red,
        blue_count: args.blue,
    };

    tracing::info!(?config, "setting up board");
    let initial = initial_board(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&initial)?);
    } else {
        print!("{}", render::render_board(&initial.board));
    }

    Ok(())
}

//! Game configuration constants.
//!
//! Window geometry, grid geometry and the tick rate are fixed at compile time.

/// Window width in logical pixels.
pub const WIDTH: u32 = 600;

/// Window height in logical pixels.
pub const HEIGHT: u32 = 400;

/// Side of one grid cell in pixels.
pub const GRID_SIZE: u32 = 20;

/// Number of columns in the play grid.
pub const GRID_WIDTH: u32 = WIDTH / GRID_SIZE;

/// Number of rows in the play grid.
pub const GRID_HEIGHT: u32 = HEIGHT / GRID_SIZE;

/// Simulation steps per second.
pub const TICK_RATE_HZ: u32 = 10;

pub const TITLE: &str = "Snake Game";

pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);

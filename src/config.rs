use crossterm::style::Color;

use crate::grid::Grid;
use crate::GridInt;

// The canonical board is 640x480px at 20px cells.
pub const GRID_WIDTH: GridInt = 32;
pub const GRID_HEIGHT: GridInt = 24;
pub const TICKS_PER_SECOND: u32 = 20;

/// Immutable per-session configuration, built once in `main` and handed
/// to the orchestrator.
#[derive(Copy, Clone, Debug)]
pub struct GameConfig {
    pub grid: Grid,
    pub ticks_per_second: u32,
    pub background: Color,
    pub snake_fill: Color,
    pub food_fill: Color,
    pub cell_border: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            ticks_per_second: TICKS_PER_SECOND,
            background: Color::Black,
            snake_fill: Color::Rgb { r: 0, g: 255, b: 0 },
            food_fill: Color::Rgb { r: 255, g: 0, b: 0 },
            cell_border: Color::Rgb { r: 93, g: 216, b: 228 },
        }
    }
}

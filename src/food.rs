use rand::Rng;

use crate::grid::Grid;
use crate::snake::Snake;
use crate::Cell;

/// A single food item occupying one grid cell, never inside the snake.
pub struct Food {
    position: Cell,
}

impl Food {
    /// Places the first food item for a session.
    pub fn spawn(grid: Grid, snake: &Snake, rng: &mut impl Rng) -> Self {
        let mut food = Food { position: (0, 0) };
        food.relocate(grid, snake, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Uniformly samples cells until one misses the snake's body.
    ///
    /// Known limitation: this loops forever if the snake occupies every
    /// cell of the grid.
    pub fn relocate(&mut self, grid: Grid, snake: &Snake, rng: &mut impl Rng) {
        loop {
            let sample = (rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
            if !snake.occupies(sample) {
                self.position = sample;
                return;
            }
        }
    }

    #[cfg(test)]
    pub fn at(position: Cell) -> Self {
        Food { position }
    }
}

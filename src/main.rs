mod config;
mod food;
mod game;
mod grid;
mod input;
mod snake;
mod term;

pub type GridInt = u16;
pub type Cell = (GridInt, GridInt);

use log::info;

use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::term::{FrameClock, TermManager};

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    if let Err(err) = run(config) {
        eprintln!("terminal error: {}", err);
        std::process::exit(1);
    }
}

fn run(config: GameConfig) -> crossterm::Result<()> {
    info!(
        "starting {}x{} session at {} ticks/s",
        config.grid.width, config.grid.height, config.ticks_per_second
    );

    let term = TermManager::new(&config)?;
    let clock = FrameClock::new(config.ticks_per_second);

    // The terminal is restored when the game drops its TermManager.
    SnakeGame::new(config, term, clock).run()
}

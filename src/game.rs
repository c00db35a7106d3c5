use crossterm::style::Color;
use crossterm::Result;
use log::{debug, info};

use crate::config::GameConfig;
use crate::food::Food;
use crate::input::InputEvent;
use crate::snake::{MoveResult, Snake};
use crate::Cell;

/// Drawing surface. `clear` wipes the frame, `draw_cell` paints one grid
/// cell, `present` makes the queued output visible.
pub trait Renderer {
    fn clear(&mut self, color: Color) -> Result<()>;
    fn draw_cell(&mut self, cell: Cell, fill: Color, border: Color) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// Non-blocking input drain; zero or more events per poll.
pub trait InputSource {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}

/// Blocks until the next frame boundary at a fixed nominal rate.
pub trait Clock {
    fn tick_wait(&mut self);
}

/// Owns the snake and the food for one session and runs the tick loop.
pub struct SnakeGame<T, C>
where
    T: Renderer + InputSource,
    C: Clock,
{
    config: GameConfig,
    snake: Snake,
    food: Food,
    term: T,
    clock: C,
}

impl<T, C> SnakeGame<T, C>
where
    T: Renderer + InputSource,
    C: Clock,
{
    pub fn new(config: GameConfig, term: T, clock: C) -> Self {
        let snake = Snake::new(config.grid);
        let food = Food::spawn(config.grid, &snake, &mut rand::thread_rng());
        SnakeGame { config, snake, food, term, clock }
    }

    /// Runs ticks at the configured rate until a quit event arrives.
    pub fn run(mut self) -> Result<()> {
        loop {
            if !self.tick()? {
                break;
            }
        }
        info!("quit requested, shutting down");
        Ok(())
    }

    /// One simulation step. Returns false when the loop must terminate.
    fn tick(&mut self) -> Result<bool> {
        for event in self.term.poll_events()? {
            match event {
                InputEvent::Quit => return Ok(false),
                InputEvent::Turn(heading) => self.snake.set_pending_heading(heading),
            }
        }

        self.snake.commit_heading();

        let vacated = match self.snake.advance() {
            MoveResult::Moved { vacated } => vacated,
            MoveResult::Collided => None,
        };

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food
                .relocate(self.config.grid, &self.snake, &mut rand::thread_rng());
            debug!("food eaten, target length now {}", self.snake.target_length());
        }

        self.redraw(vacated)?;
        self.clock.tick_wait();
        Ok(true)
    }

    fn redraw(&mut self, vacated: Option<Cell>) -> Result<()> {
        let cfg = &self.config;
        self.term.clear(cfg.background)?;
        for &cell in self.snake.body() {
            self.term.draw_cell(cell, cfg.snake_fill, cfg.cell_border)?;
        }
        self.term
            .draw_cell(self.food.position(), cfg.food_fill, cfg.cell_border)?;
        if let Some(tail) = vacated {
            self.term.draw_cell(tail, cfg.background, cfg.background)?;
        }
        self.term.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Heading;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum DrawCall {
        Clear(Color),
        Cell(Cell, Color, Color),
        Present,
    }

    struct FakeTerm {
        queued: VecDeque<Vec<InputEvent>>,
        calls: Vec<DrawCall>,
    }

    impl FakeTerm {
        fn new(queued: Vec<Vec<InputEvent>>) -> Self {
            FakeTerm { queued: queued.into_iter().collect(), calls: vec![] }
        }
    }

    impl Renderer for FakeTerm {
        fn clear(&mut self, color: Color) -> Result<()> {
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn draw_cell(&mut self, cell: Cell, fill: Color, border: Color) -> Result<()> {
            self.calls.push(DrawCall::Cell(cell, fill, border));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.calls.push(DrawCall::Present);
            Ok(())
        }
    }

    impl InputSource for FakeTerm {
        fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
            Ok(self.queued.pop_front().unwrap_or_default())
        }
    }

    struct NoWait;

    impl Clock for NoWait {
        fn tick_wait(&mut self) {}
    }

    fn game_with_events(events: Vec<Vec<InputEvent>>) -> SnakeGame<FakeTerm, NoWait> {
        SnakeGame::new(GameConfig::default(), FakeTerm::new(events), NoWait)
    }

    #[test]
    fn tick_advances_the_head_one_cell() {
        let mut game = game_with_events(vec![]);
        game.food = Food::at((0, 0));
        assert!(game.tick().unwrap());
        assert_eq!(game.snake.head(), (17, 12));
    }

    #[test]
    fn turn_event_is_applied_on_the_same_tick() {
        let mut game = game_with_events(vec![vec![InputEvent::Turn(Heading::Down)]]);
        game.food = Food::at((0, 0));
        game.tick().unwrap();
        assert_eq!(game.snake.head(), (16, 13));
    }

    #[test]
    fn reversal_event_does_not_turn_the_snake() {
        let mut game = game_with_events(vec![vec![InputEvent::Turn(Heading::Left)]]);
        game.food = Food::at((0, 0));
        game.tick().unwrap();
        assert_eq!(game.snake.head(), (17, 12));
    }

    #[test]
    fn eating_food_grows_and_relocates_it() {
        let mut game = game_with_events(vec![]);
        game.food = Food::at((17, 12));
        game.tick().unwrap();
        assert_eq!(game.snake.target_length(), 2);
        assert_ne!(game.food.position(), (17, 12));
        assert!(!game.snake.occupies(game.food.position()));
    }

    #[test]
    fn quit_event_terminates_the_run_loop() {
        let game = game_with_events(vec![vec![InputEvent::Quit]]);
        game.run().unwrap();
    }

    #[test]
    fn redraw_clears_draws_and_presents_in_order() {
        let mut game = game_with_events(vec![]);
        game.food = Food::at((0, 0));
        game.tick().unwrap();

        let cfg = game.config;
        let calls = &game.term.calls;
        assert_eq!(calls[0], DrawCall::Clear(cfg.background));
        assert_eq!(*calls.last().unwrap(), DrawCall::Present);
        assert!(calls.contains(&DrawCall::Cell((17, 12), cfg.snake_fill, cfg.cell_border)));
        assert!(calls.contains(&DrawCall::Cell((0, 0), cfg.food_fill, cfg.cell_border)));
        // vacated tail painted over with the background color
        assert!(calls.contains(&DrawCall::Cell((16, 12), cfg.background, cfg.background)));
    }
}

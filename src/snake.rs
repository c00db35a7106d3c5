use std::collections::VecDeque;

use log::debug;

use crate::grid::{Grid, Heading};
use crate::Cell;
use MoveResult::*;

pub enum MoveResult {
    /// The head moved one cell. `vacated` is the tail cell given up on a
    /// non-growth step, so the renderer can erase it.
    Moved { vacated: Option<Cell> },
    /// The head ran into the body; the snake has been reset.
    Collided,
}

/// The player-controlled snake. The body is ordered head first and never
/// contains duplicate cells while alive.
pub struct Snake {
    grid: Grid,
    body: VecDeque<Cell>,
    heading: Heading,
    pending: Option<Heading>,
    target_length: usize,
}

impl Snake {
    /// A single cell at the board center, heading right.
    pub fn new(grid: Grid) -> Self {
        let mut body = VecDeque::new();
        body.push_back(grid.center());
        Snake {
            grid,
            body,
            heading: Heading::Right,
            pending: None,
            target_length: 1,
        }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        // The body always holds at least one cell
        *self.body.front().unwrap()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Records a turn request for the next tick. A request that would
    /// reverse the current heading is dropped silently, since the head
    /// would move straight into the neck.
    pub fn set_pending_heading(&mut self, heading: Heading) {
        if heading.is_reverse_of(self.heading) {
            return;
        }
        self.pending = Some(heading);
    }

    /// Consumes the pending heading, if any, making it current. Called
    /// once per tick before `advance`.
    pub fn commit_heading(&mut self) {
        if let Some(heading) = self.pending.take() {
            self.heading = heading;
        }
    }

    /// Moves the head one cell along the current heading, wrapping at the
    /// board edges, and trims the tail unless the snake is still growing
    /// towards its target length.
    pub fn advance(&mut self) -> MoveResult {
        let new_head = self.grid.wrap(self.head(), self.heading);

        // Collision is checked against every segment behind the head
        // before the tail is popped, so stepping onto the tail cell
        // counts even though it is about to be vacated.
        if self.body.iter().skip(1).any(|&cell| cell == new_head) {
            debug!("self-collision at {:?}, resetting", new_head);
            self.reset();
            return Collided;
        }

        self.body.push_front(new_head);
        let vacated = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };
        Moved { vacated }
    }

    /// Raises the target length by one; the body catches up over the
    /// following advances.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Back to the initial state: one cell at the center, heading right.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.grid.center());
        self.target_length = 1;
        self.heading = Heading::Right;
        self.pending = None;
    }
}

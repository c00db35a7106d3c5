use std::io::{self, stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::event::{poll, read, Event};
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, Result};

use crate::config::GameConfig;
use crate::game::{Clock, InputSource, Renderer};
use crate::input::{self, InputEvent};
use crate::{Cell, GridInt};

// Terminal glyphs are roughly twice as tall as wide, so two columns per
// grid cell keeps the cells square-ish.
const CELL_COLS: GridInt = 2;
const CELL_GLYPHS: &str = "[]";

/// Crossterm-backed implementation of the Renderer and InputSource
/// contracts. Cells are painted as background-colored character runs,
/// with the glyphs carrying the border color.
pub struct TermManager {
    stdout: Stdout,
    grid_width: GridInt,
    grid_height: GridInt,
    frame_color: Color,
}

impl TermManager {
    /// Enters the alternate screen in raw mode with a hidden cursor.
    /// The terminal is restored when the manager is dropped.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        let needed_cols = config.grid.width * CELL_COLS + 2;
        let needed_rows = config.grid.height + 2;
        if cols < needed_cols || rows < needed_rows {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "terminal is {}x{}, the board needs at least {}x{}",
                    cols, rows, needed_cols, needed_rows
                ),
            )
            .into());
        }

        let mut manager = TermManager {
            stdout: stdout(),
            grid_width: config.grid.width,
            grid_height: config.grid.height,
            frame_color: config.cell_border,
        };
        execute!(manager.stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(manager)
    }

    // Playfield is offset by one row and one column for the frame.
    fn cell_origin(&self, cell: Cell) -> (u16, u16) {
        (cell.0 * CELL_COLS + 1, cell.1 + 1)
    }

    fn draw_frame(&mut self) -> Result<()> {
        let width = self.grid_width * CELL_COLS + 2;
        let end_y = self.grid_height + 1;

        let frame_color = self.frame_color;
        queue!(self.stdout, SetForegroundColor(frame_color))?;
        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            queue!(
                self.stdout,
                cursor::MoveTo(x, 0),
                Print(ch),
                cursor::MoveTo(x, end_y),
                Print(ch)
            )?;
        }
        for y in 1..end_y {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y),
                Print('|'),
                cursor::MoveTo(width - 1, y),
                Print('|')
            )?;
        }
        Ok(())
    }
}

impl Renderer for TermManager {
    fn clear(&mut self, color: Color) -> Result<()> {
        queue!(self.stdout, SetBackgroundColor(color), Clear(ClearType::All))?;
        self.draw_frame()
    }

    fn draw_cell(&mut self, cell: Cell, fill: Color, border: Color) -> Result<()> {
        let (x, y) = self.cell_origin(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetBackgroundColor(fill),
            SetForegroundColor(border),
            Print(CELL_GLYPHS)
        )
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl InputSource for TermManager {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_secs(0))? {
            if let Event::Key(key) = read()? {
                if let Some(event) = input::map_key(&key) {
                    events.push(event);
                }
            }
        }

        Ok(events)
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
    }
}

/// Fixed-rate frame pacing built on a blocking sleep.
pub struct FrameClock {
    period: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second;
        FrameClock { period, deadline: Instant::now() + period }
    }
}

impl Clock for FrameClock {
    fn tick_wait(&mut self) {
        let now = Instant::now();
        if self.deadline > now {
            sleep(self.deadline - now);
            self.deadline += self.period;
        } else {
            // fell behind a full frame; rebase instead of bursting
            self.deadline = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_clock_waits_at_least_one_period() {
        let mut clock = FrameClock::new(100);
        let start = Instant::now();
        clock.tick_wait();
        clock.tick_wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}

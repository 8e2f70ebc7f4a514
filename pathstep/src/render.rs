//! Crossterm terminal front end for the demo binary.
//!
//! Reads the engine only through its observation surface.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathstep::{Engine, TileState, TileView};
use rand::Rng;

/// What the user asked for while we waited for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Reset,
    None,
}

/// Background colour of a tile: walls black, open set green, closed set
/// red, endpoints and route blue, everything else white.
pub fn tile_color(v: &TileView) -> Color {
    match v.state {
        TileState::Obstacle => Color::Black,
        TileState::Start | TileState::End | TileState::Route => Color::Blue,
        TileState::Unexplored if v.in_open => Color::Green,
        TileState::Unexplored if v.in_closed => Color::Red,
        TileState::Unexplored => Color::White,
    }
}

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Draw the grid, a status line and optionally the cost overlay.
    pub fn draw<R: Rng>(&mut self, engine: &Engine<R>, show_costs: bool) -> io::Result<()> {
        let n = engine.dimension();
        queue!(self.out, cursor::MoveTo(0, 0))?;
        for y in 0..n {
            for x in 0..n {
                let Some(v) = engine.tile_at(x, y) else {
                    continue;
                };
                queue!(
                    self.out,
                    SetBackgroundColor(tile_color(&v)),
                    SetForegroundColor(Color::DarkGrey),
                    Print(format!("{} ", v.state.glyph())),
                )?;
            }
            queue!(self.out, ResetColor, Print("\r\n"))?;
        }

        let stats = engine.stats();
        queue!(
            self.out,
            terminal::Clear(ClearType::CurrentLine),
            Print(format!(
                "{:?}  expansions {}  open {}  closed {}  route {}   [r]eset [q]uit\r\n",
                stats.state, stats.expansions, stats.open, stats.closed, stats.route_len
            )),
        )?;

        if show_costs {
            for row in engine.cost_rows() {
                queue!(self.out, Print(row), Print("\r\n"))?;
            }
        }
        self.out.flush()
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Input> {
        if !event::poll(timeout)? {
            return Ok(Input::None);
        }
        Ok(match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
                KeyCode::Char('r') => Input::Reset,
                _ => Input::None,
            },
            _ => Input::None,
        })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

//! Rich pane: split list + detail, driven by single key presses.
//!
//! The pane owns only UI state (input mode, search buffer, table cursor).
//! Every key becomes at most one `Command` for the session, and the screen
//! is redrawn after each one. Waiting for the next key blocks; there is no
//! background work.

mod app;
mod keymap;
mod ui;
mod views;

pub use app::App;

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::traits::{Frontend, PresentationError};
use crate::presentation::guard::{RenderFeatures, Tier};
use crate::session::{Dispatch, SessionController};

pub struct RichPane {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    restored: bool,
}

impl RichPane {
    /// Put the terminal into raw mode (and the alternate screen when the
    /// features allow it). Anything set up before a failure is undone.
    pub fn new(features: RenderFeatures) -> Result<Self, PresentationError> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if features.alternate_screen
            && let Err(e) = execute!(stdout, EnterAlternateScreen)
        {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore_terminal(features.alternate_screen);
                return Err(e.into());
            }
        };

        let mut pane = Self {
            terminal,
            app: App::new(features),
            restored: false,
        };
        if let Err(e) = pane.terminal.clear() {
            let _ = pane.restore();
            return Err(e.into());
        }
        Ok(pane)
    }

    fn event_loop(&mut self, session: &mut SessionController) -> Result<(), PresentationError> {
        while !session.is_terminated() {
            self.terminal
                .draw(|frame| ui::draw(frame, &mut self.app, session))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.app.handle_key(key, session) == Dispatch::Quit {
                        break;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        if !self.app.features.alternate_screen {
            self.terminal.clear()?;
        }
        restore_terminal(self.app.features.alternate_screen)?;
        self.terminal.show_cursor()
    }
}

fn restore_terminal(alternate_screen: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if alternate_screen {
        execute!(io::stdout(), LeaveAlternateScreen)?;
    }
    Ok(())
}

impl Drop for RichPane {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Frontend for RichPane {
    fn tier(&self) -> Tier {
        Tier::Rich
    }

    fn run(&mut self, session: &mut SessionController) -> Result<(), PresentationError> {
        let result = self.event_loop(session);
        let restored = self.restore();
        result?;
        restored?;
        Ok(())
    }
}

mod keyboard;
mod screen;

use self::screen::Screen;
use crate::calc::io::{CalcIo, View};
use crate::calc::key::Key;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::{
    fmt::{self, Display},
    io,
};

/// A `crossterm`-based implementation of `CalcIo`.
#[derive(Debug)]
pub struct TerminalIo {
    screen: Screen,
}

impl TerminalIo {
    pub fn setup() -> Result<Self> {
        terminal::enable_raw_mode()?;
        io::stdout()
            .execute(EnterAlternateScreen)?
            .execute(Hide)?
            .execute(Clear(ClearType::All))?;

        Ok(Self {
            screen: Screen::default(),
        })
    }
}

/// Helper for `TerminalIo::render`.
struct RawModeText<'a>(&'a Screen);

impl<'a> Display for RawModeText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Translate \n to \r\n to work correctly with raw-mode terminal.
        write!(f, "{}", self.0.to_string().replace('\n', "\r\n"))
    }
}

impl CalcIo for TerminalIo {
    fn blocking_get_key(&mut self) -> io::Result<Key> {
        keyboard::wait_for_key()
    }

    fn render(&mut self, view: View<'_>) -> io::Result<()> {
        self.screen.draw(&view);
        io::stdout()
            .execute(Clear(ClearType::All))?
            .execute(MoveTo(0, 0))?
            .execute(Print(RawModeText(&self.screen)))?;
        Ok(())
    }
}

impl Drop for TerminalIo {
    fn drop(&mut self) {
        fn try_drop(this: &mut TerminalIo) -> Result<()> {
            // Reset the terminal mode. Otherwise it gets all wonky, and you
            // have to close it and open a new one.
            io::stdout().execute(Show)?.execute(LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;

            // The alternate screen's contents are gone now; print the final
            // display again so the last result stays visible.
            print!("{}", this.screen);
            Ok(())
        }

        // Ignore errors.
        try_drop(self).ok();
    }
}

//! Terminal setup and teardown.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;

use crate::renderer::{RenderResult, RendererError};

/// Raw-mode, alternate-screen terminal. Restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn new() -> RenderResult<Self> {
        enable_raw_mode()
            .map_err(|err| RendererError::InitFailed(format!("raw mode: {err}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).inspect_err(|_| teardown_terminal())?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).inspect_err(|_| teardown_terminal())?;
        terminal.clear().inspect_err(|_| teardown_terminal())?;

        log::debug!("Terminal session started");
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> RenderResult<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> RenderResult<Size> {
        Ok(self.terminal.size()?)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
        log::debug!("Terminal session restored");
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

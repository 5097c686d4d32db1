//! Application lifecycle: terminal session and event loop.

use asciigram_render::{TerminalRenderer, TerminalSession};
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::AppConfig;
use crate::editor::Editor;
use crate::error::AppResult;
use crate::workspace::Workspace;

/// The interactive editor.
pub struct App {
    workspace: Workspace,
    renderer: TerminalRenderer,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            workspace: Workspace::new(Editor::from_config(config)),
            renderer: TerminalRenderer::new(),
        }
    }

    /// Run until the user quits. The terminal is restored on return, also on
    /// error.
    pub fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::new()?;
        log::info!("Editor started");

        loop {
            let size = session.size()?;
            let editor = &mut self.workspace.editor;
            editor.set_viewport(size.width, size.height);
            editor.clamp_cursor();

            let (workspace, renderer) = (&self.workspace, &mut self.renderer);
            session.draw(|frame| workspace.draw(frame, renderer))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.workspace.handle_key(key);
                }
                Event::Resize(width, height) => log::debug!("Resized to {width}x{height}"),
                _ => {}
            }
            if self.workspace.should_quit() {
                break;
            }
        }

        log::info!("Editor closed");
        Ok(())
    }
}

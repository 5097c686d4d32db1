//! The editor wired to its layer stack.

use asciigram_core::Surface;
use asciigram_render::{RenderContext, Renderer};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::buffer::Buffer;

use crate::editor::Editor;
use crate::layers::{LayerStack, Mode, NormalMode, Request, Universal};

/// Everything needed to turn key presses into frames.
pub struct Workspace {
    pub editor: Editor,
    layers: LayerStack,
    mode: Mode,
    quit: bool,
}

impl Workspace {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            layers: LayerStack::new(Box::new(Universal), Box::new(NormalMode)),
            mode: Mode::Normal,
            quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of open pop-ups.
    pub fn popups(&self) -> usize {
        self.layers.popups()
    }

    /// Dispatch one key press and settle the editor for the next frame.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.layers.event(key, &mut self.editor) {
            log::trace!("{:?} not handled in {} mode", key.code, self.mode.label());
        }
        self.apply_requests();
        self.editor.clamp_cursor();
        self.layers.frame(&mut self.editor);
        self.apply_requests();
    }

    /// Switch the mode layer. The old mode's exit runs before the new one
    /// is entered.
    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("Mode {} -> {}", self.mode.label(), mode.label());
        self.mode = mode;
        self.layers.replace_mode(&mut self.editor, |editor| mode.enter(editor));
    }

    fn apply_requests(&mut self) {
        while let Some(request) = self.editor.take_request() {
            match request {
                Request::SetMode(mode) => self.set_mode(mode),
                Request::Push(layer) => self.layers.push(layer),
                Request::Pop => {
                    self.layers.pop(&mut self.editor);
                }
                Request::Quit => {
                    log::info!("Quit requested");
                    self.quit = true;
                }
            }
        }
    }

    fn with_context<R>(&self, f: impl FnOnce(&RenderContext) -> R) -> R {
        let overlay = |surface: &mut dyn Surface| self.layers.post(&self.editor, surface);
        let ctx = RenderContext::new(&self.editor.document, self.editor.cursor)
            .with_mode_label(self.mode.label())
            .with_selection(self.editor.selection)
            .with_status_message(self.editor.status())
            .with_status_bar(self.editor.show_status_bar())
            .with_overlay(&overlay);
        f(&ctx)
    }

    /// Draw a frame, cursor included.
    pub fn draw(&self, frame: &mut Frame<'_>, renderer: &mut dyn Renderer) {
        self.with_context(|ctx| renderer.draw(frame, ctx));
    }

    /// Draw into a bare buffer.
    pub fn render(&self, buffer: &mut Buffer, renderer: &mut dyn Renderer) {
        self.with_context(|ctx| renderer.render(ctx, buffer));
    }
}

//! Asciigram Render Library
//!
//! Draws the document, the current selection and the status bar into a
//! ratatui frame, and owns the terminal while the editor runs.

mod renderer;
mod session;
mod terminal;

pub use renderer::{Overlay, RenderContext, RenderResult, Renderer, RendererError, TerminalRenderer};
pub use session::TerminalSession;
pub use terminal::TerminalSurface;

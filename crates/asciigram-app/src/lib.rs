//! Asciigram Application
//!
//! The terminal editor: configuration, the layer stack of editing modes,
//! clipboard integration and the event loop.

mod app;
pub mod clipboard;
pub mod config;
pub mod demo;
pub mod editor;
mod error;
pub mod layers;
mod register;
mod shortcuts;
mod workspace;

pub use app::App;
pub use config::{AppConfig, CONFIG_ENV, ConfigError, ConfigResult};
pub use editor::Editor;
pub use error::{AppError, AppResult};
pub use register::Register;
pub use shortcuts::{Section, Shortcut, ShortcutRegistry};
pub use workspace::Workspace;

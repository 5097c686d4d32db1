//! Clipboard sinks for exported text.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to start clipboard thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Somewhere to send copied text.
///
/// `copy` only submits the text. Sinks that finish in the background report
/// their own failures through the log.
pub trait ClipboardSink {
    fn copy(&mut self, text: String) -> Result<(), ClipboardError>;

    /// Short name for status messages.
    fn name(&self) -> &'static str;
}

/// Keeps copies in memory. The history handle can be cloned to inspect what
/// was copied.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent copy.
    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.borrow().is_empty()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: String) -> Result<(), ClipboardError> {
        self.history.borrow_mut().push(text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// The desktop clipboard.
///
/// Each copy runs on its own detached thread. On Linux that thread keeps
/// serving the selection until another program takes it over.
#[cfg(feature = "native")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "native")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn set_text(text: String) -> Result<(), arboard::Error> {
        let mut clipboard = arboard::Clipboard::new()?;
        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            clipboard.set().wait().text(text)
        }
        #[cfg(not(target_os = "linux"))]
        {
            clipboard.set_text(text)
        }
    }
}

#[cfg(feature = "native")]
impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: String) -> Result<(), ClipboardError> {
        std::thread::Builder::new()
            .name("clipboard".into())
            .spawn(move || {
                let len = text.len();
                match Self::set_text(text) {
                    Ok(()) => log::debug!("Clipboard released {len} bytes"),
                    Err(e) => log::warn!("Failed to set clipboard: {e}"),
                }
            })?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system clipboard"
    }
}

/// Clipboard chosen by configuration.
pub fn clipboard_for(system: bool) -> Box<dyn ClipboardSink> {
    #[cfg(feature = "native")]
    {
        if system {
            return Box::new(SystemClipboard::new());
        }
    }
    #[cfg(not(feature = "native"))]
    {
        if system {
            log::warn!("Built without system clipboard support, keeping copies in memory");
        }
    }
    Box::new(MemoryClipboard::new())
}

use std::error::Error;

pub struct ClipboardManager;

impl ClipboardManager {
    pub fn new() -> Self {
        Self
    }

    /// Copy text to the system clipboard
    #[cfg(windows)]
    pub fn set_text(&self, text: &str) -> Result<(), Box<dyn Error>> {
        use clipboard_win::{formats, set_clipboard};

        match set_clipboard(formats::Unicode, text) {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("Clipboard write error: {}", e).into()),
        }
    }

    /// No clipboard backend on this platform; callers degrade to
    /// printed output the user can select manually.
    #[cfg(not(windows))]
    pub fn set_text(&self, _text: &str) -> Result<(), Box<dyn Error>> {
        Err("Clipboard is not available on this platform".into())
    }
}

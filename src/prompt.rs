//! Text Prompt
//!
//! Request/response interaction used by the edit operation.

/// Asks the user for a line of text
pub trait TextPrompt {
    /// Returns `None` when the user cancels
    fn request_text(&self, message: &str, default: &str) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn request_text(&self, message: &str, default: &str) -> Option<String> {
        self(message, default)
    }
}

/// Blocking `window.prompt()` dialog
pub struct BrowserPrompt;

impl TextPrompt for BrowserPrompt {
    fn request_text(&self, message: &str, default: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message_and_default(message, default) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("[PROMPT] prompt() failed: {:?}", e);
                None
            }
        }
    }
}

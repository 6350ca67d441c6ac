use std::fmt;

/// Destination for the "copy identifier" command.
pub trait Clipboard {
    fn set(&mut self, contents: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug)]
pub struct ClipboardError(String);

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard error: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self(err.to_string())
    }
}

/// System clipboard using arboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl Clipboard for SystemClipboard {
    fn set(&mut self, contents: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::new("clipboard not initialized"));
        };
        clipboard.set_text(contents.to_string())?;
        Ok(())
    }
}

/// Clipboard that keeps everything in memory. Used where no system
/// clipboard exists (and in tests).
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Vec<String>,
    pub fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn failing(message: &str) -> Self {
        Self {
            contents: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn set(&mut self, contents: &str) -> Result<(), ClipboardError> {
        if let Some(message) = &self.fail_with {
            return Err(ClipboardError::new(message.clone()));
        }
        self.contents.push(contents.to_string());
        Ok(())
    }
}

//! Effectful operations the interpreter depends on but does not implement.
//!
//! Hosts supply concrete implementations (see [`crate::utils::browser`],
//! [`crate::utils::clipboard`] and [`crate::core::storage`]); tests swap in
//! fakes from `utils::test_utils`.

use std::fmt;

/// Opens a URL in a new browsing context.
pub trait UrlOpener: Send + Sync {
    fn open_url(&self, url: &str) -> Result<(), String>;
}

/// Writes text to the system clipboard. May be refused by the platform.
#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Durable string storage keyed by name.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "State store I/O error: {err}"),
            StoreError::Encode(msg) => write!(f, "State store encode error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Bundle of the host's side-effect capabilities.
pub struct Capabilities {
    pub browser: Box<dyn UrlOpener>,
    pub clipboard: Box<dyn Clipboard>,
}

impl Capabilities {
    pub fn new(browser: Box<dyn UrlOpener>, clipboard: Box<dyn Clipboard>) -> Self {
        Self { browser, clipboard }
    }
}

use crate::core::capabilities::UrlOpener;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex, PoisonError};

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> Result<(), String> {
        launch(url)
    }
}

/// Records URLs instead of opening them, for non-interactive runs.
///
/// Clones share one queue, so the caller can keep a handle and drain it once
/// the command's output has been printed.
#[derive(Debug, Default, Clone)]
pub struct QueuedBrowser {
    queue: Arc<Mutex<Vec<String>>>,
}

impl QueuedBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_opened(&self) -> Vec<String> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl UrlOpener for QueuedBrowser {
    fn open_url(&self, url: &str) -> Result<(), String> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        Ok(())
    }
}

fn launch(url: &str) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        return spawn_detached("open", &[url]);
    }
    #[cfg(target_os = "windows")]
    {
        return spawn_detached("cmd", &["/C", "start", "", url]);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return spawn_detached("xdg-open", &[url]);
    }

    #[allow(unreachable_code)]
    Err(format!("no browser launcher configured for URL: {url}"))
}

// The launcher's output would corrupt the terminal UI.
fn spawn_detached(cmd: &str, args: &[&str]) -> Result<(), String> {
    Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|err| format!("failed to launch browser with {cmd}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_urls_drain_in_order() {
        let browser = QueuedBrowser::new();
        let handle = browser.clone();
        browser.open_url("https://a.example").unwrap();
        browser.open_url("https://b.example").unwrap();
        assert_eq!(
            handle.take_opened(),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(handle.take_opened().is_empty());
    }
}

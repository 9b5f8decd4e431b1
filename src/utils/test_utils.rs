use crate::core::app::{App, AppOptions};
use crate::core::capabilities::{Capabilities, Clipboard, KeyValueStore, StoreError, UrlOpener};
use crate::core::content::Content;
use crate::core::storage::MemoryStore;
use std::sync::{Arc, Mutex};

/// Records every URL it is asked to open.
#[derive(Clone, Default)]
pub struct RecordingBrowser {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl UrlOpener for RecordingBrowser {
    fn open_url(&self, url: &str) -> Result<(), String> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Clipboard that either accepts everything or rejects everything.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub reject: bool,
    pub written: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        if self.reject {
            return Err("NotAllowedError: clipboard permission denied".to_string());
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Store shared between a test and the app under test.
#[derive(Clone, Default)]
pub struct SharedStore {
    pub inner: Arc<Mutex<MemoryStore>>,
}

impl SharedStore {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.lock().unwrap().set(key, value)
    }
}

pub struct TestHandles {
    pub browser: RecordingBrowser,
    pub clipboard: FakeClipboard,
    pub store: SharedStore,
}

impl TestHandles {
    pub fn opened(&self) -> Vec<String> {
        self.browser.opened.lock().unwrap().clone()
    }

    pub fn copied(&self) -> Vec<String> {
        self.clipboard.written.lock().unwrap().clone()
    }
}

pub fn test_content() -> Content {
    Content::builtin().expect("builtin content")
}

pub fn create_test_app() -> (App, TestHandles) {
    create_test_app_with(test_content(), MemoryStore::new(), false)
}

pub fn create_test_app_with_store(store: MemoryStore) -> (App, TestHandles) {
    create_test_app_with(test_content(), store, false)
}

pub fn create_test_app_with(
    content: Content,
    store: MemoryStore,
    reject_clipboard: bool,
) -> (App, TestHandles) {
    let handles = TestHandles {
        browser: RecordingBrowser::default(),
        clipboard: FakeClipboard {
            reject: reject_clipboard,
            ..FakeClipboard::default()
        },
        store: SharedStore::new(store),
    };
    let capabilities = Capabilities::new(
        Box::new(handles.browser.clone()),
        Box::new(handles.clipboard.clone()),
    );
    let app = App::new(
        content,
        capabilities,
        Box::new(handles.store.clone()),
        AppOptions::default(),
    );
    (app, handles)
}

/// App whose URL opens go to `browser`, for hosts that consume them.
pub fn create_test_app_with_browser(content: Content, browser: Box<dyn UrlOpener>) -> App {
    let capabilities = Capabilities::new(browser, Box::new(FakeClipboard::default()));
    App::new(
        content,
        capabilities,
        Box::new(MemoryStore::new()),
        AppOptions::default(),
    )
}

/// Content with `count` generated projects.
pub fn content_with_projects(count: usize, page_size: usize) -> Content {
    let mut toml = String::from(
        r#"
resume_url = "https://example.com/resume.pdf"

[bio]
name = "Test Person"
role = "Tester"
location = "Nowhere"
about = "About text"
skills = ["Rust"]

[contact]
email = "test@example.com"
"#,
    );
    for i in 1..=count {
        toml.push_str(&format!(
            r#"
[[projects]]
title = "project-{i}"
description = "Description {i}"
tech = ["Tech{i}"]
demo_url = "https://demo.example.com/{i}"
source_url = "https://source.example.com/{i}"
"#
        ));
    }
    Content::from_toml_str(&toml)
        .expect("generated content")
        .with_page_size(page_size)
}

pub mod app;
pub mod capabilities;
pub mod config;
pub mod content;
pub mod markup;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod theme;

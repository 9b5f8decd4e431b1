//! Theme and history persistence on top of a [`KeyValueStore`].
//!
//! Values are stored as JSON. Themes written by older builds were stored as
//! bare strings (`matrix` instead of `"matrix"`); those are still accepted on
//! read and rewritten in the JSON form the next time the theme changes.

use crate::core::capabilities::KeyValueStore;
use crate::core::theme::ThemeName;
use tracing::{debug, warn};

pub const THEME_KEY: &str = "termfolio.theme";
pub const HISTORY_KEY: &str = "termfolio.history";
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

pub fn load_theme(store: &dyn KeyValueStore, fallback: ThemeName) -> ThemeName {
    let Some(raw) = store.get(THEME_KEY) else {
        return fallback;
    };
    match serde_json::from_str::<ThemeName>(&raw) {
        Ok(theme) => theme,
        Err(_) => match raw.parse::<ThemeName>() {
            Ok(theme) => {
                debug!(value = %raw, "accepted legacy theme value");
                theme
            }
            Err(_) => fallback,
        },
    }
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: ThemeName) {
    let value = match serde_json::to_string(&theme) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "failed to encode theme");
            return;
        }
    };
    if let Err(err) = store.set(THEME_KEY, value) {
        warn!(error = %err, "failed to persist theme");
    }
}

pub fn load_history(store: &dyn KeyValueStore) -> Vec<String> {
    store
        .get(HISTORY_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .unwrap_or_default()
}

/// Persist the newest `limit` entries.
pub fn save_history(store: &mut dyn KeyValueStore, history: &[String], limit: usize) {
    let start = history.len().saturating_sub(limit);
    let value = match serde_json::to_string(&history[start..]) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "failed to encode history");
            return;
        }
    };
    if let Err(err) = store.set(HISTORY_KEY, value) {
        warn!(error = %err, "failed to persist history");
    }
}

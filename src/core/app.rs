use crate::commands::{self, CommandContext, CommandRegistry, CommandResult, Effect};
use crate::core::capabilities::{Capabilities, KeyValueStore};
use crate::core::content::Content;
use crate::core::markup::OutputLine;
use crate::core::preferences::{self, DEFAULT_HISTORY_LIMIT};
use crate::core::session::{OutputBlock, SessionState};
use crate::core::theme::ThemeName;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    /// Theme used when the store has none.
    pub default_theme: ThemeName,
    pub history_limit: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// A running portfolio shell: content, commands, host capabilities and the
/// session they act on.
pub struct App {
    pub session: SessionState,
    content: Content,
    registry: CommandRegistry,
    capabilities: Capabilities,
    store: Box<dyn KeyValueStore>,
    history_limit: usize,
}

impl App {
    pub fn new(
        content: Content,
        capabilities: Capabilities,
        store: Box<dyn KeyValueStore>,
        options: AppOptions,
    ) -> Self {
        let theme = preferences::load_theme(store.as_ref(), options.default_theme);
        let history = preferences::load_history(store.as_ref());
        debug!(%theme, history = history.len(), "restored session preferences");
        Self {
            session: SessionState::new(theme, history),
            content,
            registry: CommandRegistry::builtin(),
            capabilities,
            store,
            history_limit: options.history_limit,
        }
    }

    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn theme(&self) -> ThemeName {
        self.session.theme
    }

    pub fn command_context(&self) -> CommandContext<'_> {
        CommandContext {
            content: &self.content,
            registry: &self.registry,
        }
    }

    /// Submit a line as if typed at the prompt.
    pub async fn submit(&mut self, input: &str) {
        commands::process_input(self, input).await;
    }

    /// Submit whatever is in the input buffer and clear it.
    pub async fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.session.input);
        self.submit(&input).await;
    }

    pub(crate) fn record_history(&mut self, input: &str) {
        self.session.push_history(input);
        preferences::save_history(
            self.store.as_mut(),
            self.session.history(),
            self.history_limit,
        );
    }

    pub(crate) async fn finish_command(&mut self, input: &str, result: CommandResult) {
        let CommandResult { mut lines, effect } = result;
        if let Some(effect) = effect {
            self.apply_effect(effect, &mut lines).await;
        }
        if !lines.is_empty() {
            self.session.append_block(OutputBlock {
                input: input.to_string(),
                lines,
            });
        }
    }

    async fn apply_effect(&mut self, effect: Effect, lines: &mut Vec<OutputLine>) {
        match effect {
            Effect::OpenUrl(url) => {
                if let Err(err) = self.capabilities.browser.open_url(&url) {
                    warn!(%url, error = %err, "failed to open url");
                }
            }
            Effect::CopyToClipboard {
                text,
                copied,
                blocked,
            } => match self.capabilities.clipboard.write_text(&text).await {
                Ok(()) => lines.push(copied),
                Err(err) => {
                    warn!(error = %err, "clipboard write rejected");
                    lines.push(blocked);
                }
            },
            Effect::SetTheme(theme) => {
                self.session.theme = theme;
                preferences::save_theme(self.store.as_mut(), theme);
            }
            Effect::ClearScrollback => self.session.clear_scrollback(),
        }
    }

    /// Recall the previous history entry into the input buffer.
    ///
    /// Always returns `true`: the key is consumed even when history is empty,
    /// so hosts never fall through to caret movement.
    pub fn history_up(&mut self) -> bool {
        self.session.history_up();
        true
    }

    pub fn history_down(&mut self) -> bool {
        self.session.history_down();
        true
    }

    /// Complete the command name in the input buffer when exactly one
    /// command matches. Returns whether the buffer changed.
    pub fn complete_input(&mut self) -> bool {
        let input = self.session.input.trim_start();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return false;
        }
        match self.registry.matching(input).as_slice() {
            [only] => {
                self.session.input = format!("{only} ");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::preferences::{HISTORY_KEY, THEME_KEY};
    use crate::core::storage::MemoryStore;
    use crate::core::theme::ThemeName;
    use crate::utils::test_utils::{create_test_app, create_test_app_with_store};

    #[test]
    fn restores_theme_and_history_from_store() {
        let store = MemoryStore::new()
            .with_value(THEME_KEY, "\"matrix\"")
            .with_value(HISTORY_KEY, "[\"/about\",\"/help\"]");
        let (app, _) = create_test_app_with_store(store);
        assert_eq!(app.theme(), ThemeName::Matrix);
        assert_eq!(app.session.history(), ["/about", "/help"]);
        assert!(app.session.scrollback.is_empty());
    }

    #[test]
    fn completion_fills_unique_command() {
        let (mut app, _) = create_test_app();
        app.session.input = "/pro".into();
        assert!(app.complete_input());
        assert_eq!(app.session.input, "/projects ");

        app.session.input = "/".into();
        assert!(!app.complete_input());
        app.session.input = "open 1".into();
        assert!(!app.complete_input());
    }

    #[tokio::test]
    async fn submit_input_takes_the_buffer() {
        let (mut app, _) = create_test_app();
        app.session.input = "/about".into();
        app.submit_input().await;
        assert!(app.session.input.is_empty());
        assert_eq!(app.session.history(), ["/about"]);
        assert_eq!(app.session.scrollback.len(), 1);
    }
}

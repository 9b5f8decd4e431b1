//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, assembles an [`App`] from
//! configuration and content, and dispatches to the interactive shell or one
//! of the non-interactive subcommands.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::core::app::{App, AppOptions};
use crate::core::capabilities::{Capabilities, KeyValueStore, UrlOpener};
use crate::core::config::Config;
use crate::core::content::Content;
use crate::core::preferences::{self, DEFAULT_HISTORY_LIMIT};
use crate::core::storage::{FileStore, MemoryStore};
use crate::core::theme::ThemeName;
use crate::ui::event_loop::run_shell;
use crate::ui::markup::to_plain_text;
use crate::ui::renderer::PROMPT;
use crate::ui::theme::load_builtin_themes;
use crate::utils::browser::{QueuedBrowser, SystemBrowser};
use crate::utils::clipboard::SystemClipboard;
use crate::utils::logging::init_file_logging;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A terminal-styled portfolio shell")]
#[command(
    long_about = "Termfolio presents a developer portfolio as a shell session. Type slash \
commands to browse projects, read the bio, and reach contact links.\n\n\
Controls:\n\
  Enter             Run the current line\n\
  Up/Down           Recall previous lines\n\
  Tab               Complete a command name\n\
  PageUp/PageDown   Scroll the output\n\
  Ctrl+U            Clear the input line\n\
  Esc or Ctrl+C     Quit\n\n\
Environment Variables:\n\
  TERMFOLIO_LOG     Log filter used with --log (default: info)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Portfolio content file (TOML) to use instead of the built-in one
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Projects shown per /projects page
    #[arg(long, global = true, value_name = "N")]
    pub page_size: Option<usize>,

    /// Theme to start with, overriding the saved one
    #[arg(short = 't', long, global = true, value_name = "THEME")]
    pub theme: Option<ThemeName>,

    /// Write diagnostic logs to this file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Keep theme and history in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell (default)
    Run,
    /// Run each line through the shell and print the output
    Exec {
        /// Lines to run, in order
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// List available themes
    Themes,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load()?;

    if let Some(log_file) = args.log.as_ref().or(config.log_file.as_ref()) {
        init_file_logging(log_file)?;
        info!(path = %log_file.display(), "logging enabled");
    }

    let store = open_store(args.no_persist)?;

    match args.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => {
            let app = build_app(&args, &config, store, Box::new(SystemBrowser))?;
            run_shell(app).await
        }
        Commands::Exec { lines } => {
            let browser = QueuedBrowser::new();
            let mut app = build_app(&args, &config, store, Box::new(browser.clone()))?;
            for line in lines {
                print!("{}", exec_line(&mut app, &browser, line).await);
            }
            Ok(())
        }
        Commands::Themes => {
            let current = args.theme.unwrap_or_else(|| {
                preferences::load_theme(store.as_ref(), config.default_theme())
            });
            print!("{}", list_themes(current));
            Ok(())
        }
    }
}

fn open_store(no_persist: bool) -> Result<Box<dyn KeyValueStore>, Box<dyn Error>> {
    if no_persist {
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = FileStore::open_default()?;
    debug!(path = %store.path().display(), "using state file");
    Ok(Box::new(store))
}

fn load_content(args: &Args, config: &Config) -> Result<Content, Box<dyn Error>> {
    let content = match args.content.as_ref().or(config.content_path.as_ref()) {
        Some(path) => Content::load_from_path(path)?,
        None => Content::builtin()?,
    };
    Ok(match args.page_size.or(config.page_size) {
        Some(page_size) => content.with_page_size(page_size),
        None => content,
    })
}

fn build_app(
    args: &Args,
    config: &Config,
    store: Box<dyn KeyValueStore>,
    browser: Box<dyn UrlOpener>,
) -> Result<App, Box<dyn Error>> {
    let content = load_content(args, config)?;
    let options = AppOptions {
        default_theme: config.default_theme(),
        history_limit: config.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
    };
    let capabilities = Capabilities::new(browser, Box::new(SystemClipboard));
    let mut app = App::new(content, capabilities, store, options);
    // Applies to this session only; /theme still persists
    if let Some(theme) = args.theme {
        app.session.theme = theme;
    }
    Ok(app)
}

/// Run one line and render any block it produced as plain text, followed by
/// the URLs it asked to open.
pub async fn exec_line(app: &mut App, browser: &QueuedBrowser, line: &str) -> String {
    let before = app.session.scrollback.len();
    app.submit(line).await;

    let mut out = String::new();
    if app.session.scrollback.len() > before {
        if let Some(block) = app.session.scrollback.last() {
            out.push_str(&format!("{PROMPT} {}\n", block.input));
            for line in &block.lines {
                out.push_str(&to_plain_text(&line.to_markup()));
                out.push('\n');
            }
        }
    }
    for url in browser.take_opened() {
        out.push_str(&format!("-> {url}\n"));
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

pub fn list_themes(current: ThemeName) -> String {
    let mut out = String::from("Available themes:\n\n");
    for spec in load_builtin_themes() {
        let mark = if spec.id.eq_ignore_ascii_case(current.as_str()) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!("  {} {} - {}\n", mark, spec.id, spec.display_name));
    }
    out.push_str(&format!("\nCurrent: {current}\n"));
    out
}

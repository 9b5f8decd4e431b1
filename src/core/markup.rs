//! Markup-safe output construction.
//!
//! Every line the interpreter produces ends up embedded in HTML-style markup,
//! so free text must be escaped before it gets there. [`Markup`] can only be
//! built through the helpers in this module, which escape anything that is not
//! explicitly trusted. Handlers therefore cannot smuggle raw user text into a
//! [`OutputLine::Safe`] line.

use std::fmt;

/// Escape the five markup-sensitive characters.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Markup that is known to be safe to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escape plain text into markup.
    pub fn text(text: &str) -> Self {
        Markup(escape(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join fragments with an escaped separator.
    pub fn join<I>(parts: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        let mut builder = MarkupBuilder::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                builder.push_text(separator);
            }
            builder.push(part);
        }
        builder.build()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Incremental builder mixing escaped text and trusted fragments.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    buf: String,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub fn push(&mut self, markup: Markup) -> &mut Self {
        self.buf.push_str(&markup.0);
        self
    }

    pub fn build(&mut self) -> Markup {
        Markup(std::mem::take(&mut self.buf))
    }
}

/// Pill-style inline element.
pub fn render_tag(text: &str) -> Markup {
    Markup(format!("<span class=\"tag\">{}</span>", escape(text)))
}

/// Accent-styled inline element.
pub fn render_title(text: &str) -> Markup {
    Markup(format!("<span class=\"title\">{}</span>", escape(text)))
}

/// Anchor to a trusted URL. Only the label is escaped.
pub fn render_link(url: &str, label: &str) -> Markup {
    Markup(format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        url,
        escape(label)
    ))
}

/// Render a list of tags separated by single spaces.
pub fn render_tags<S: AsRef<str>>(items: &[S]) -> Markup {
    Markup::join(items.iter().map(|item| render_tag(item.as_ref())), " ")
}

/// A single line of interpreter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Pre-built markup, already safe.
    Safe(Markup),
    /// Plain text that still needs escaping.
    Escape(String),
}

impl OutputLine {
    pub fn text(text: impl Into<String>) -> Self {
        OutputLine::Escape(text.into())
    }

    pub fn to_markup(&self) -> Markup {
        match self {
            OutputLine::Safe(markup) => markup.clone(),
            OutputLine::Escape(text) => Markup::text(text),
        }
    }
}

impl From<Markup> for OutputLine {
    fn from(markup: Markup) -> Self {
        OutputLine::Safe(markup)
    }
}

//! Turns interpreter markup into styled terminal text.
//!
//! Only the small vocabulary produced by [`crate::core::markup`] is
//! recognized: tag and title spans plus anchors. Anything else is shown
//! as text.

use crate::core::markup::Markup;
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Tag(String),
    Title(String),
    Link { url: String, label: String },
}

const TAG_OPEN: &str = "<span class=\"tag\">";
const TITLE_OPEN: &str = "<span class=\"title\">";
const SPAN_CLOSE: &str = "</span>";
const LINK_OPEN: &str = "<a href=\"";
const LINK_CLOSE: &str = "</a>";

/// Reverse [`crate::core::markup::escape`].
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let mut matched = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
        ] {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(ch);
                rest = tail;
                matched = true;
                break;
            }
        }
        if !matched {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

pub fn parse_markup(markup: &Markup) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = markup.as_str();

    while !rest.is_empty() {
        if let Some((segment, tail)) = parse_element(rest) {
            if !text.is_empty() {
                segments.push(Segment::Text(unescape(&std::mem::take(&mut text))));
            }
            segments.push(segment);
            rest = tail;
            continue;
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            text.push(ch);
        }
        rest = chars.as_str();
    }

    if !text.is_empty() {
        segments.push(Segment::Text(unescape(&text)));
    }
    segments
}

fn parse_element(input: &str) -> Option<(Segment, &str)> {
    if let Some(tail) = input.strip_prefix(TAG_OPEN) {
        let end = tail.find(SPAN_CLOSE)?;
        let segment = Segment::Tag(unescape(&tail[..end]));
        return Some((segment, &tail[end + SPAN_CLOSE.len()..]));
    }
    if let Some(tail) = input.strip_prefix(TITLE_OPEN) {
        let end = tail.find(SPAN_CLOSE)?;
        let segment = Segment::Title(unescape(&tail[..end]));
        return Some((segment, &tail[end + SPAN_CLOSE.len()..]));
    }
    if let Some(tail) = input.strip_prefix(LINK_OPEN) {
        let url_end = tail.find('"')?;
        let url = &tail[..url_end];
        let after_url = &tail[url_end..];
        let label_start = after_url.find('>')? + 1;
        let label_tail = &after_url[label_start..];
        let label_end = label_tail.find(LINK_CLOSE)?;
        let segment = Segment::Link {
            url: url.to_string(),
            label: unescape(&label_tail[..label_end]),
        };
        return Some((segment, &label_tail[label_end + LINK_CLOSE.len()..]));
    }
    None
}

/// Plain-text rendering used outside the full-screen UI.
pub fn to_plain_text(markup: &Markup) -> String {
    let mut out = String::new();
    for segment in parse_markup(markup) {
        match segment {
            Segment::Text(text) | Segment::Title(text) => out.push_str(&text),
            Segment::Tag(text) => {
                out.push('[');
                out.push_str(&text);
                out.push(']');
            }
            Segment::Link { url, label } => {
                out.push_str(&label);
                if label != url {
                    out.push_str(" (");
                    out.push_str(&url);
                    out.push(')');
                }
            }
        }
    }
    out
}

pub fn to_line(markup: &Markup, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span<'static>> = parse_markup(markup)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => Span::styled(text, theme.text_style),
            Segment::Title(text) => Span::styled(text, theme.title_style),
            Segment::Tag(text) => Span::styled(format!(" {text} "), theme.tag_style),
            Segment::Link { label, .. } => Span::styled(label, theme.link_style),
        })
        .collect();
    Line::from(spans)
}

use crate::core::theme::ThemeName;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::sync::LazyLock;

const BUILTIN_THEMES: &str = include_str!("../builtin_themes.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub tag: Option<String>,
    pub link: Option<String>,
    pub prompt: Option<String>,
    pub input_border: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

static BUILTIN_SPECS: LazyLock<Vec<ThemeSpec>> =
    LazyLock::new(|| match toml::from_str::<BuiltinThemesConfig>(BUILTIN_THEMES) {
        Ok(config) => config.themes,
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse builtin themes");
            Vec::new()
        }
    });

pub fn load_builtin_themes() -> &'static [ThemeSpec] {
    &BUILTIN_SPECS
}

pub fn find_builtin_theme(id: &str) -> Option<&'static ThemeSpec> {
    load_builtin_themes()
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
}

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    pub text_style: Style,
    pub muted_style: Style,
    pub title_style: Style,
    pub tag_style: Style,
    pub link_style: Style,
    pub prompt_style: Style,
    pub input_border_style: Style,
}

impl Theme {
    pub fn for_name(name: ThemeName) -> Self {
        match find_builtin_theme(name.as_str()) {
            Some(spec) => Self::from_spec(spec),
            None => Self::fallback(),
        }
    }

    /// Palette-only theme used when the built-in specs are unavailable.
    pub fn fallback() -> Self {
        Theme {
            background_color: Color::Black,
            text_style: Style::default().fg(Color::White),
            muted_style: Style::default().fg(Color::DarkGray),
            title_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tag_style: Style::default().fg(Color::Green),
            link_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::UNDERLINED),
            prompt_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            input_border_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        let fallback = Self::fallback();
        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(fallback.background_color);

        Theme {
            background_color,
            text_style: parse_style(&spec.text).unwrap_or(fallback.text_style),
            muted_style: parse_style(&spec.muted).unwrap_or(fallback.muted_style),
            title_style: parse_style(&spec.accent).unwrap_or(fallback.title_style),
            tag_style: parse_style(&spec.tag).unwrap_or(fallback.tag_style),
            link_style: parse_style(&spec.link).unwrap_or(fallback.link_style),
            prompt_style: parse_style(&spec.prompt).unwrap_or(fallback.prompt_style),
            input_border_style: parse_style(&spec.input_border)
                .unwrap_or(fallback.input_border_style),
        }
    }
}

/// Palette for the session's current theme, rebuilt only when the name changes.
#[derive(Debug, Clone)]
pub struct ThemeCache {
    name: ThemeName,
    theme: Theme,
}

impl ThemeCache {
    pub fn new(name: ThemeName) -> Self {
        Self {
            name,
            theme: Theme::for_name(name),
        }
    }

    pub fn get(&mut self, name: ThemeName) -> &Theme {
        if self.name != name {
            self.name = name;
            self.theme = Theme::for_name(name);
        }
        &self.theme
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if let Some(c) = parse_hex_color(&lower) {
        return Some(c);
    }
    match lower.as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark-grey" | "darkgray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() == 3 {
        let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
        let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
        let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

/// Parse `color,modifier,...`. Returns `None` when nothing is set.
fn parse_style(s: &Option<String>) -> Option<Style> {
    let spec = s.as_deref()?;
    let mut style = Style::default();
    for tok in spec.split(',').map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if let Some(color) = parse_color(tok) {
            style = style.fg(color);
        } else {
            match tok {
                "bold" => style = style.add_modifier(Modifier::BOLD),
                "reversed" => style = style.add_modifier(Modifier::REVERSED),
                "italic" => style = style.add_modifier(Modifier::ITALIC),
                "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
                _ => {}
            }
        }
    }
    Some(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_name_has_a_builtin_spec() {
        for name in ThemeName::ALL {
            assert!(
                find_builtin_theme(name.as_str()).is_some(),
                "missing builtin theme {name}"
            );
        }
    }

    #[test]
    fn matrix_theme_uses_green_text() {
        let theme = Theme::for_name(ThemeName::Matrix);
        assert_eq!(theme.background_color, Color::Black);
        assert_eq!(theme.text_style.fg, Some(Color::Rgb(0x00, 0xff, 0x41)));
    }

    #[test]
    fn cache_follows_theme_changes() {
        let mut cache = ThemeCache::new(ThemeName::Dark);
        let dark_bg = cache.get(ThemeName::Dark).background_color;
        assert_eq!(dark_bg, Color::Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!(cache.get(ThemeName::Matrix).background_color, Color::Black);
        assert_eq!(cache.name(), ThemeName::Matrix);
    }

    #[test]
    fn builtin_specs_are_parsed_once() {
        let first = load_builtin_themes().as_ptr();
        assert_eq!(first, load_builtin_themes().as_ptr());
        assert_eq!(load_builtin_themes().len(), ThemeName::ALL.len());
    }

    #[test]
    fn style_parsing_reads_colors_and_modifiers() {
        let style = parse_style(&Some("#fff, bold, underlined".to_string())).unwrap();
        assert_eq!(style.fg, Some(Color::Rgb(255, 255, 255)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(parse_style(&None).is_none());
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
    }
}

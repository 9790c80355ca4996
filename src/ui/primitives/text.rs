use std::fmt;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Accent,
    Dim,
    Success,
    Warning,
    Error,
    Highlight,
}

/// A piece of text with a semantic style, rendered lazily so plain output
/// stays byte-identical to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    text: String,
    style: TextStyle,
    bold: bool,
}

impl Styled {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Plain)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Accent)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Dim)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Error)
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::Highlight)
    }

    fn with_style(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let color = match self.style {
            TextStyle::Plain => {
                if self.bold {
                    return format!("{}", self.text.as_str().bold());
                }
                return self.text.clone();
            }
            TextStyle::Accent => theme::colors::ACCENT,
            TextStyle::Dim => theme::colors::DIM,
            TextStyle::Success => theme::colors::SUCCESS,
            TextStyle::Warning => theme::colors::WARNING,
            TextStyle::Error => theme::colors::ERROR,
            TextStyle::Highlight => theme::colors::HIGHLIGHT,
        };

        let mut styled = self.text.as_str().with(color);
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Display width of a string, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}

/// Greedy word wrap to at most `width` columns per line. Words longer than
/// the width get a line of their own rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        if visible_width(&current) + 1 + visible_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Horizontal rule across `width` columns.
pub fn rule(width: usize, supports_unicode: bool) -> String {
    let ch = if supports_unicode {
        theme::borders::HORIZONTAL
    } else {
        theme::borders_ascii::HORIZONTAL
    };
    ch.repeat(width)
}

/// Center `text` within `width` columns (left-biased on odd padding).
pub fn center(text: &str, width: usize) -> String {
    let w = visible_width(text);
    if w >= width {
        return text.to_string();
    }
    let pad = (width - w) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::visible_width;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Plain,
    Accent,
    Dim,
}

/// A bordered content panel with the title embedded in the top border:
///
/// ```text
/// ╭─ Title ─────────────╮
/// │ line                │
/// ╰─────────────────────╯
/// ```
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    lines: Vec<String>,
    width: Option<u16>,
    style: PanelStyle,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.lines.push(part.to_string());
        }
        if self.lines.is_empty() {
            // `lines()` yields nothing for "", but an explicit push should
            // still produce a row.
            self.lines.push(String::new());
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn inner_width(&self) -> usize {
        let content_max = self.lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        let title_min = self
            .title
            .as_deref()
            .map(|t| t.width() + 4) // "─ title ─" needs room inside the top border
            .unwrap_or(0);
        match self.width {
            // Fixed width: inner = total minus the two border columns and
            // the two padding spaces.
            Some(w) => (w as usize).saturating_sub(4).max(content_max.min(1)),
            None => content_max.max(title_min).max(2),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (tl, tr, bl, br, h, v) = if supports_unicode {
            (
                theme::borders::TOP_LEFT,
                theme::borders::TOP_RIGHT,
                theme::borders::BOTTOM_LEFT,
                theme::borders::BOTTOM_RIGHT,
                theme::borders::HORIZONTAL,
                theme::borders::VERTICAL,
            )
        } else {
            (
                theme::borders_ascii::TOP_LEFT,
                theme::borders_ascii::TOP_RIGHT,
                theme::borders_ascii::BOTTOM_LEFT,
                theme::borders_ascii::BOTTOM_RIGHT,
                theme::borders_ascii::HORIZONTAL,
                theme::borders_ascii::VERTICAL,
            )
        };

        let inner = self.inner_width();
        let mut out = String::new();

        let top = match &self.title {
            Some(title) => {
                let head = format!("{}{} {} ", tl, h, title);
                let used = 1 + 1 + 1 + title.width() + 1; // corner, dash, spaces, title
                let fill = (inner + 4).saturating_sub(used + 1);
                format!("{}{}{}", head, h.repeat(fill), tr)
            }
            None => format!("{}{}{}", tl, h.repeat(inner + 2), tr),
        };
        out.push_str(&self.paint(&top, supports_color));
        out.push('\n');

        for line in &self.lines {
            let pad = inner.saturating_sub(visible_width(line));
            out.push_str(&self.paint(v, supports_color));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push(' ');
            out.push_str(&self.paint(v, supports_color));
            out.push('\n');
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner + 2), br);
        out.push_str(&self.paint(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Plain => return s.to_string(),
            PanelStyle::Accent => theme::colors::ACCENT,
            PanelStyle::Dim => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_embeds_title_in_top_border() {
        let mut p = Panel::with_title("Education");
        p.push("Acadia University");
        let rendered = p.render(false, true);
        let top = rendered.lines().next().unwrap();
        assert!(top.starts_with("╭─ Education "));
        assert!(top.ends_with('╮'));
    }

    #[test]
    fn panel_rows_are_flush() {
        let mut p = Panel::with_title("T");
        p.push("short");
        p.push("a much longer line here");
        let rendered = p.render(false, true);
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn panel_splits_multiline_content_into_rows() {
        let mut p = Panel::new();
        p.push("Line1\nLine2");
        let rendered = p.render(false, true);
        let line2 = rendered
            .lines()
            .find(|l| l.contains("Line2"))
            .expect("expected Line2 to appear in output");
        assert!(line2.starts_with('│'));
    }

    #[test]
    fn panel_ascii_borders_without_unicode() {
        let mut p = Panel::with_title("T");
        p.push("x");
        let rendered = p.render(false, false);
        assert!(rendered.starts_with("+-"));
        assert!(!rendered.contains('╭'));
    }
}

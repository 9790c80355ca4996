//! Status and role-kind badges.
//!
//! The lookups are fixed enumerations over the known content strings; any
//! unrecognized value falls back to the neutral style rather than failing.

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Info,
    Warning,
    Purple,
    Neutral,
}

impl BadgeStyle {
    fn color(&self) -> Color {
        match self {
            BadgeStyle::Success => theme::colors::SUCCESS,
            BadgeStyle::Info => theme::colors::ACCENT,
            BadgeStyle::Warning => theme::colors::WARNING,
            BadgeStyle::Purple => theme::colors::HIGHLIGHT,
            BadgeStyle::Neutral => theme::colors::DIM,
        }
    }
}

/// Project status to badge style. Known: Completed, Ongoing, Planning.
pub fn status_style(status: &str) -> BadgeStyle {
    match status {
        "Completed" => BadgeStyle::Success,
        "Ongoing" => BadgeStyle::Info,
        "Planning" => BadgeStyle::Warning,
        _ => BadgeStyle::Neutral,
    }
}

/// Experience role kind to badge style.
pub fn role_kind_style(kind: &str) -> BadgeStyle {
    match kind {
        "Current Role" => BadgeStyle::Success,
        "Previous Role" => BadgeStyle::Info,
        "Leadership Role" => BadgeStyle::Purple,
        "Foundation Role" => BadgeStyle::Warning,
        "Career Start" => BadgeStyle::Neutral,
        _ => BadgeStyle::Neutral,
    }
}

#[derive(Debug, Clone)]
pub struct Badge<'a> {
    label: &'a str,
    style: BadgeStyle,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str, style: BadgeStyle) -> Self {
        Self { label, style }
    }

    pub fn status(label: &'a str) -> Self {
        Self::new(label, status_style(label))
    }

    pub fn role_kind(label: &'a str) -> Self {
        Self::new(label, role_kind_style(label))
    }

    /// A secondary "tag" badge for technology chips.
    pub fn tag(label: &'a str) -> Self {
        Self::new(label, BadgeStyle::Neutral)
    }

    pub fn render(&self, supports_color: bool) -> String {
        let text = format!("[{}]", self.label);
        if !supports_color {
            return text;
        }
        format!("{}", text.as_str().with(self.style.color()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lookup_is_exhaustive_over_known_values() {
        assert_eq!(status_style("Completed"), BadgeStyle::Success);
        assert_eq!(status_style("Ongoing"), BadgeStyle::Info);
        assert_eq!(status_style("Planning"), BadgeStyle::Warning);
    }

    #[test]
    fn status_lookup_falls_back_on_unknown() {
        assert_eq!(status_style("Cancelled"), BadgeStyle::Neutral);
        assert_eq!(status_style(""), BadgeStyle::Neutral);
        assert_eq!(status_style("completed"), BadgeStyle::Neutral); // case-sensitive
    }

    #[test]
    fn role_kind_lookup_covers_all_known_kinds() {
        assert_eq!(role_kind_style("Current Role"), BadgeStyle::Success);
        assert_eq!(role_kind_style("Previous Role"), BadgeStyle::Info);
        assert_eq!(role_kind_style("Leadership Role"), BadgeStyle::Purple);
        assert_eq!(role_kind_style("Foundation Role"), BadgeStyle::Warning);
        assert_eq!(role_kind_style("Career Start"), BadgeStyle::Neutral);
    }

    #[test]
    fn role_kind_lookup_falls_back_on_unknown() {
        assert_eq!(role_kind_style("Sabbatical"), BadgeStyle::Neutral);
    }

    #[test]
    fn badge_renders_plain_brackets_without_color() {
        let badge = Badge::status("Ongoing");
        assert_eq!(badge.render(false), "[Ongoing]");
    }

    #[test]
    fn badge_renders_ansi_with_color() {
        let badge = Badge::status("Completed");
        assert!(badge.render(true).contains("\u{1b}["));
    }
}

use crossterm::style::Color;

/// Design tokens for the Folio UI.
///
/// Design constraints:
/// - Semantic colors only (`colors::*`)
/// - All glyphs and borders must be sourced from this module
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
    /// Brand accent (the original page leans blue).
    pub const ACCENT: Color = Color::Blue;
    pub const HIGHLIGHT: Color = Color::Magenta;
}

pub mod glyphs {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const BULLET: &str = "•";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "↑";

    // Content icons.
    pub const SHIELD: &str = "⛨";
    pub const NETWORK: &str = "⇶";
    pub const USERS: &str = "☍";
    pub const GEAR: &str = "⚙";
    pub const IDEA: &str = "✦";
    pub const TARGET: &str = "◎";
    pub const CLOCK: &str = "◷";
    pub const AWARD: &str = "❖";
    pub const MAIL: &str = "✉";
    pub const LINK: &str = "⛓";
    pub const PIN: &str = "⌖";
    pub const PHONE: &str = "☎";
    pub const CALENDAR: &str = "▦";
    pub const ZAP: &str = "⚡";
    pub const TREND: &str = "↗";
    pub const BUILDING: &str = "▣";

    // Navigation shell.
    pub const MENU: &str = "☰";
    pub const CLOSE: &str = "✕";
}

pub mod glyphs_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[X]";
    pub const WARNING: &str = "[!]";
    pub const BULLET: &str = "*";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = "^";

    pub const SHIELD: &str = "[SEC]";
    pub const NETWORK: &str = "[NET]";
    pub const USERS: &str = "[TEAM]";
    pub const GEAR: &str = "[ENG]";
    pub const IDEA: &str = "[IDEA]";
    pub const TARGET: &str = "[AIM]";
    pub const CLOCK: &str = "[YRS]";
    pub const AWARD: &str = "[CERT]";
    pub const MAIL: &str = "[MAIL]";
    pub const LINK: &str = "[LINK]";
    pub const PIN: &str = "[LOC]";
    pub const PHONE: &str = "[TEL]";
    pub const CALENDAR: &str = "[CAL]";
    pub const ZAP: &str = "[FIX]";
    pub const TREND: &str = "[UP]";
    pub const BUILDING: &str = "[CO]";

    pub const MENU: &str = "[=]";
    pub const CLOSE: &str = "[x]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

//! Navigation shell: the sticky header state machine that sits above the
//! scrolling page. Tracks scroll position, the overflow menu and its cursor.

use crate::ui::primitives::text::{rule, visible_width, Styled};
use crate::ui::theme;
use crate::ui::{SectionId, UiContext};

/// Scroll offsets past this many rows switch the header into its compact,
/// scrolled presentation.
pub const SCROLL_THRESHOLD: usize = 50;

/// Sections reachable from the header, in display order.
pub const NAV_ITEMS: [SectionId; 5] = [
    SectionId::About,
    SectionId::Experience,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavShell {
    pub scrolled: bool,
    pub menu_open: bool,
    pub cursor: usize,
}

impl Default for NavShell {
    fn default() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            cursor: 0,
        }
    }
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new scroll offset. The header flips into its scrolled state
    /// strictly past the threshold.
    pub fn on_scroll(&mut self, offset: usize) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.cursor = 0;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn cursor_up(&mut self) {
        if self.cursor == 0 {
            self.cursor = NAV_ITEMS.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % NAV_ITEMS.len();
    }

    pub fn selected(&self) -> SectionId {
        NAV_ITEMS[self.cursor]
    }

    /// Resolve a navigation target to a scroll offset. The menu closes no
    /// matter what; an unresolvable target is a silent no-op.
    pub fn navigate<F>(&mut self, target: SectionId, resolve: F) -> Option<usize>
    where
        F: FnOnce(SectionId) -> Option<usize>,
    {
        self.menu_open = false;
        resolve(target)
    }

    /// Jump back to the top of the page. Also closes the menu.
    pub fn to_top(&mut self) -> usize {
        self.menu_open = false;
        0
    }

    /// Render the header bar (plus the dropdown when the menu is open).
    pub fn render_header(&self, brand: &str, ctx: &UiContext) -> Vec<String> {
        let width = ctx.width as usize;
        let mut lines = Vec::new();

        let brand_text = if self.scrolled {
            Styled::accent(brand).bold().render(ctx.color)
        } else {
            Styled::plain(brand).bold().render(ctx.color)
        };

        let items: Vec<String> = NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, section)| format!("{} {}", i + 1, section.label()))
            .collect();
        let nav = Styled::dim(items.join("  ")).render(ctx.color);

        let menu_glyph = if ctx.unicode {
            if self.menu_open {
                theme::glyphs::CLOSE
            } else {
                theme::glyphs::MENU
            }
        } else if self.menu_open {
            theme::glyphs_ascii::CLOSE
        } else {
            theme::glyphs_ascii::MENU
        };

        let left = format!("{}  {}", brand_text, nav);
        let pad = width
            .saturating_sub(visible_width(&left) + visible_width(menu_glyph))
            .max(1);
        lines.push(format!("{}{}{}", left, " ".repeat(pad), menu_glyph));

        if self.menu_open {
            for (i, section) in NAV_ITEMS.iter().enumerate() {
                let marker = if i == self.cursor { ">" } else { " " };
                let label = if i == self.cursor {
                    Styled::accent(section.label()).bold().render(ctx.color)
                } else {
                    Styled::plain(section.label()).render(ctx.color)
                };
                lines.push(format!("  {} {}", marker, label));
            }
        }

        lines.push(if self.scrolled {
            Styled::accent(rule(width, ctx.unicode)).render(ctx.color)
        } else {
            Styled::dim(rule(width, ctx.unicode)).render(ctx.color)
        });

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            animation: false,
            width: 80,
            height: 24,
        }
    }

    #[test]
    fn scrolled_flips_strictly_past_threshold() {
        let mut shell = NavShell::new();
        shell.on_scroll(SCROLL_THRESHOLD);
        assert!(!shell.scrolled);
        shell.on_scroll(SCROLL_THRESHOLD + 1);
        assert!(shell.scrolled);
        shell.on_scroll(0);
        assert!(!shell.scrolled);
    }

    #[test]
    fn navigate_closes_menu_even_for_missing_anchor() {
        let mut shell = NavShell::new();
        shell.toggle_menu();
        assert!(shell.menu_open);
        let hit = shell.navigate(SectionId::Projects, |_| None);
        assert_eq!(hit, None);
        assert!(!shell.menu_open);
    }

    #[test]
    fn navigate_resolves_known_anchor() {
        let mut shell = NavShell::new();
        shell.toggle_menu();
        let hit = shell.navigate(SectionId::Skills, |s| {
            (s == SectionId::Skills).then_some(42)
        });
        assert_eq!(hit, Some(42));
        assert!(!shell.menu_open);
    }

    #[test]
    fn to_top_closes_menu_and_returns_zero() {
        let mut shell = NavShell::new();
        shell.toggle_menu();
        assert_eq!(shell.to_top(), 0);
        assert!(!shell.menu_open);
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut shell = NavShell::new();
        shell.toggle_menu();
        shell.cursor_up();
        assert_eq!(shell.cursor, NAV_ITEMS.len() - 1);
        shell.cursor_down();
        assert_eq!(shell.cursor, 0);
        assert_eq!(shell.selected(), SectionId::About);
    }

    #[test]
    fn header_dropdown_lists_items_when_open() {
        let mut shell = NavShell::new();
        let closed = shell.render_header("LBT", &plain_ctx());
        shell.toggle_menu();
        let open = shell.render_header("LBT", &plain_ctx());
        assert_eq!(open.len(), closed.len() + NAV_ITEMS.len());
        assert!(open.iter().any(|l| l.contains("> About")));
    }
}

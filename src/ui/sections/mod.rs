//! Section renderers: each one maps a slice of the content store to a block
//! of text, independent of every other section.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::AboutView;
pub use contact::ContactView;
pub use experience::ExperienceView;
pub use footer::FooterView;
pub use hero::HeroView;
pub use projects::ProjectsView;
pub use skills::SkillsView;

use crate::ui::primitives::text::{center, rule, wrap, Styled};
use crate::ui::UiContext;

/// Usable content width for section layout. Very wide terminals get a capped
/// column so paragraphs stay readable.
pub(crate) fn layout_width(ctx: &UiContext) -> usize {
    (ctx.width as usize).clamp(40, 88)
}

/// Centered section heading with a wrapped blurb underneath, in the shape
/// every section of the original page used.
pub(crate) fn section_heading(title: &str, blurb: &str, ctx: &UiContext) -> String {
    let width = layout_width(ctx);
    let mut out = String::new();

    out.push_str(&center(
        &Styled::plain(title).bold().render(ctx.color),
        width,
    ));
    out.push('\n');
    out.push_str(&Styled::dim(rule(width, ctx.unicode)).render(ctx.color));
    out.push('\n');
    for line in wrap(blurb, width.saturating_sub(8)) {
        out.push_str(&center(&Styled::dim(line).render(ctx.color), width));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Flow short labels into comma-free rows of bracketed chips.
pub(crate) fn chip_rows(labels: &[String], width: usize, color: bool) -> Vec<String> {
    use crate::ui::primitives::badge::Badge;
    use crate::ui::primitives::text::visible_width;

    let mut rows = Vec::new();
    let mut current = String::new();
    for label in labels {
        let chip = Badge::tag(label).render(color);
        if current.is_empty() {
            current = chip;
        } else if visible_width(&current) + 1 + visible_width(&chip) <= width {
            current.push(' ');
            current.push_str(&chip);
        } else {
            rows.push(std::mem::take(&mut current));
            current = chip;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::primitives::text::visible_width;

    #[test]
    fn chip_rows_stay_within_width() {
        let labels: Vec<String> = ["GSM", "Ethernet", "SIP", "5G Infrastructure"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = chip_rows(&labels, 20, false);
        assert!(rows.iter().all(|r| visible_width(r) <= 20));
        let joined = rows.join(" ");
        assert!(joined.contains("[GSM]"));
        assert!(joined.contains("[5G Infrastructure]"));
    }
}

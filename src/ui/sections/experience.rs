use crate::content::ExperienceEntry;
use crate::ui::primitives::badge::Badge;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{wrap, Styled};
use crate::ui::sections::{chip_rows, layout_width, section_heading};
use crate::ui::widgets::panel::{Panel, PanelStyle};
use crate::ui::UiContext;

pub struct ExperienceView<'a> {
    entries: &'a [ExperienceEntry],
}

impl<'a> ExperienceView<'a> {
    pub fn new(entries: &'a [ExperienceEntry]) -> Self {
        Self { entries }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        let width = layout_width(ctx);
        let mut out = section_heading(
            "Professional Experience",
            "Three decades of progressive leadership in telecommunications, from \
             software design to vulnerability management, with consistent focus on \
             innovation and team excellence.",
            ctx,
        );

        for entry in self.entries {
            let mut panel = Panel::with_title(format!(
                "{} {}",
                Icon::Building.render(ctx.unicode),
                entry.role
            ))
            .style(PanelStyle::Accent);

            panel.push(format!(
                "{}  {}",
                Styled::accent(entry.company.as_str()).bold().render(ctx.color),
                Badge::role_kind(&entry.kind).render(ctx.color),
            ));
            panel.push(
                Styled::dim(format!(
                    "{}  {} {}  ({})",
                    entry.period.display(),
                    Icon::Pin.render(ctx.unicode),
                    entry.location,
                    entry.years,
                ))
                .render(ctx.color),
            );
            panel.blank();

            for line in wrap(&entry.description, width.saturating_sub(4)) {
                panel.push(line);
            }
            panel.blank();

            panel.push(Styled::plain("Key Achievements").bold().render(ctx.color));
            for achievement in &entry.achievements {
                let bullet = Icon::Bullet.colored(ctx.color, ctx.unicode);
                let mut first = true;
                for line in wrap(achievement, width.saturating_sub(8)) {
                    if first {
                        panel.push(format!("{} {}", bullet, line));
                        first = false;
                    } else {
                        panel.push(format!("  {}", line));
                    }
                }
            }
            panel.blank();

            for row in chip_rows(&entry.technologies, width.saturating_sub(4), ctx.color) {
                panel.push(row);
            }

            out.push_str(&panel.render(ctx.color, ctx.unicode));
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

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
    fn experience_lists_entries_newest_first() {
        let store = content::store();
        let out = ExperienceView::new(&store.experience).render(&plain_ctx());
        let senior = out.find("Senior Program Manager").unwrap();
        let newbridge = out.find("Newbridge Networks Corporation").unwrap();
        assert!(senior < newbridge);
    }

    #[test]
    fn experience_badges_every_role_kind() {
        let store = content::store();
        let out = ExperienceView::new(&store.experience).render(&plain_ctx());
        assert!(out.contains("[Current Role]"));
        assert!(out.contains("[Career Start]"));
    }

    #[test]
    fn experience_shows_open_ended_period_as_present() {
        let store = content::store();
        let out = ExperienceView::new(&store.experience).render(&plain_ctx());
        assert!(out.contains("January 2010 - Present"));
    }
}

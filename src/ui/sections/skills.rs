use crate::content::{Certification, SkillCategory};
use crate::ui::primitives::badge::Badge;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Styled;
use crate::ui::sections::{chip_rows, layout_width, section_heading};
use crate::ui::widgets::panel::{Panel, PanelStyle};
use crate::ui::widgets::skill_bar::SkillBar;
use crate::ui::UiContext;

const BAR_WIDTH: u16 = 24;

pub struct SkillsView<'a> {
    categories: &'a [SkillCategory],
    certifications: &'a [Certification],
    competencies: &'a [String],
}

impl<'a> SkillsView<'a> {
    pub fn new(
        categories: &'a [SkillCategory],
        certifications: &'a [Certification],
        competencies: &'a [String],
    ) -> Self {
        Self {
            categories,
            certifications,
            competencies,
        }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        let width = layout_width(ctx);
        let mut out = section_heading(
            "Skills & Expertise",
            "Comprehensive skill set developed through three decades of \
             telecommunications leadership, specializing in vulnerability \
             management and program leadership.",
            ctx,
        );

        let name_col = self
            .categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0);

        for category in self.categories {
            let mut panel = Panel::with_title(format!(
                "{} {}",
                Icon::from(category.icon).render(ctx.unicode),
                category.title
            ))
            .style(PanelStyle::Accent);

            for skill in &category.skills {
                let mut bar = SkillBar::new(skill.proficiency);
                bar.set_width(BAR_WIDTH);
                panel.push(format!(
                    "{:<name_col$}  {} {:>3}%",
                    skill.name,
                    bar.render(ctx.color, ctx.unicode),
                    bar.proficiency(),
                ));
            }
            out.push_str(&panel.render(ctx.color, ctx.unicode));
            out.push('\n');
        }

        if !self.certifications.is_empty() {
            let mut panel = Panel::with_title(format!(
                "{} Professional Certifications",
                Icon::Target.render(ctx.unicode)
            ))
            .style(PanelStyle::Dim);
            for cert in self.certifications {
                panel.push(Styled::plain(cert.name.as_str()).bold().render(ctx.color));
                panel.push(Styled::dim(cert.issuer.as_str()).render(ctx.color));
                panel.push(format!(
                    "{}  {}",
                    Badge::new(&cert.status, crate::ui::primitives::badge::BadgeStyle::Success)
                        .render(ctx.color),
                    Styled::dim(cert.relevance.as_str()).render(ctx.color),
                ));
                panel.blank();
            }
            out.push_str(&panel.render(ctx.color, ctx.unicode));
            out.push('\n');
        }

        if !self.competencies.is_empty() {
            let mut panel = Panel::with_title(format!(
                "{} Core Competencies",
                Icon::Zap.render(ctx.unicode)
            ))
            .style(PanelStyle::Dim);
            for row in chip_rows(self.competencies, width.saturating_sub(4), ctx.color) {
                panel.push(row);
            }
            out.push_str(&panel.render(ctx.color, ctx.unicode));
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
    fn skills_render_every_category_with_bars() {
        let store = content::store();
        let view = SkillsView::new(&store.skills, &store.certifications, &store.core_competencies);
        let out = view.render(&plain_ctx());
        for category in &store.skills {
            assert!(out.contains(&category.title), "missing {}", category.title);
        }
        // ASCII bars use '#' for the filled portion.
        assert!(out.contains('#'));
        assert!(out.contains("95%"));
    }

    #[test]
    fn skills_include_competency_chips() {
        let store = content::store();
        let view = SkillsView::new(&store.skills, &store.certifications, &store.core_competencies);
        let out = view.render(&plain_ctx());
        assert!(out.contains("[Strategic Planning]"));
        assert!(out.contains("[Client Relations]"));
    }
}

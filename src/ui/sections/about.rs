use crate::content::{Certification, EducationEntry, ProfessionalSummary, Statistics};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{wrap, Styled};
use crate::ui::sections::{chip_rows, layout_width, section_heading};
use crate::ui::widgets::panel::{Panel, PanelStyle};
use crate::ui::UiContext;

pub struct AboutView<'a> {
    summary: &'a ProfessionalSummary,
    statistics: &'a Statistics,
    education: &'a [EducationEntry],
    certifications: &'a [Certification],
}

impl<'a> AboutView<'a> {
    pub fn new(
        summary: &'a ProfessionalSummary,
        statistics: &'a Statistics,
        education: &'a [EducationEntry],
        certifications: &'a [Certification],
    ) -> Self {
        Self {
            summary,
            statistics,
            education,
            certifications,
        }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        let width = layout_width(ctx);
        let mut out = section_heading("About Me", &self.summary.overview, ctx);

        out.push_str(&self.stats_row(ctx));
        out.push('\n');

        out.push_str(&Styled::plain("Professional Summary").bold().render(ctx.color));
        out.push('\n');
        for paragraph in &self.summary.paragraphs {
            for line in wrap(paragraph, width) {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(&Styled::plain("Core Strengths").bold().render(ctx.color));
        out.push('\n');
        for strength in &self.summary.strengths {
            let mut panel = Panel::with_title(format!(
                "{} {}",
                Icon::from(strength.icon).render(ctx.unicode),
                strength.title
            ))
            .style(PanelStyle::Dim);
            for line in wrap(&strength.description, width.saturating_sub(4)) {
                panel.push(line);
            }
            out.push_str(&panel.render(ctx.color, ctx.unicode));
        }
        out.push('\n');

        if !self.summary.expertise.is_empty() {
            out.push_str(&Styled::plain("Areas of Expertise").bold().render(ctx.color));
            out.push('\n');
            for row in chip_rows(&self.summary.expertise, width, ctx.color) {
                out.push_str(&row);
                out.push('\n');
            }
            out.push('\n');
        }

        if let Some(edu) = self.education.first() {
            let mut panel = Panel::with_title("Education").style(PanelStyle::Accent);
            panel.push(Styled::plain(edu.degree.as_str()).bold().render(ctx.color));
            panel.push(edu.institution.as_str());
            panel.push(
                Styled::dim(format!(
                    "{} - {}, {}",
                    edu.start_year, edu.end_year, edu.location
                ))
                .render(ctx.color),
            );
            out.push_str(&panel.render(ctx.color, ctx.unicode));
            out.push('\n');
        }

        if !self.certifications.is_empty() {
            let mut panel = Panel::with_title("Certifications").style(PanelStyle::Accent);
            for cert in self.certifications {
                panel.push(format!(
                    "{} {}",
                    Icon::Award.colored(ctx.color, ctx.unicode),
                    cert.name
                ));
            }
            out.push_str(&panel.render(ctx.color, ctx.unicode));
        }

        out
    }

    fn stats_row(&self, ctx: &UiContext) -> String {
        let s = self.statistics;
        let cells: [(Icon, String, &str); 4] = [
            (
                Icon::Clock,
                format!("{}+", s.years_experience),
                "Years Experience",
            ),
            (
                Icon::Award,
                format!("{}+", s.years_at_current),
                "Years at Nokia",
            ),
            (
                Icon::Target,
                format!("{}+", s.projects_managed),
                "Projects Managed",
            ),
            (
                Icon::Shield,
                s.security_domains.to_string(),
                "Security Domains",
            ),
        ];

        let mut out = String::new();
        for (icon, number, label) in cells {
            out.push_str(&format!(
                "{} {} {}   ",
                icon.colored(ctx.color, ctx.unicode),
                Styled::plain(number).bold().render(ctx.color),
                Styled::dim(label).render(ctx.color),
            ));
        }
        out.push('\n');
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
    fn about_renders_stats_summary_and_education() {
        let store = content::store();
        let view = AboutView::new(
            &store.summary,
            &store.statistics,
            &store.education,
            &store.certifications,
        );
        let out = view.render(&plain_ctx());
        assert!(out.contains("About Me"));
        assert!(out.contains("31+"));
        assert!(out.contains("Years Experience"));
        assert!(out.contains("Acadia University"));
        assert!(out.contains("Certified SAFe® 4 Product Owner"));
    }

    #[test]
    fn about_lists_every_strength() {
        let store = content::store();
        let view = AboutView::new(
            &store.summary,
            &store.statistics,
            &store.education,
            &store.certifications,
        );
        let out = view.render(&plain_ctx());
        for strength in &store.summary.strengths {
            assert!(out.contains(&strength.title), "missing {}", strength.title);
        }
    }
}

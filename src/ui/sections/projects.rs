use crate::content::ProjectEntry;
use crate::ui::primitives::badge::Badge;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{wrap, Styled};
use crate::ui::sections::{chip_rows, layout_width, section_heading};
use crate::ui::widgets::panel::{Panel, PanelStyle};
use crate::ui::UiContext;

/// Turn a camelCase metric key into a display label by inserting a space
/// before every capital letter. "teamSize" becomes "team Size"; keys with
/// no capitals pass through unchanged.
pub fn metric_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label.trim().to_string()
}

pub struct ProjectsView<'a> {
    projects: &'a [ProjectEntry],
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a [ProjectEntry]) -> Self {
        Self { projects }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        let width = layout_width(ctx);
        let mut out = section_heading(
            "Key Projects",
            "Major initiatives spanning vulnerability management, network security \
             and organizational transformation, each delivered with measurable \
             impact.",
            ctx,
        );

        for project in self.projects {
            let mut panel = Panel::with_title(format!(
                "{} {}",
                Icon::from(project.icon).render(ctx.unicode),
                project.title
            ))
            .style(PanelStyle::Accent);

            panel.push(format!(
                "{}  {}",
                Styled::dim(project.category.as_str()).render(ctx.color),
                Badge::status(&project.status).render(ctx.color),
            ));
            panel.push(
                Styled::dim(format!(
                    "{} {}",
                    Icon::Clock.render(ctx.unicode),
                    project.duration
                ))
                .render(ctx.color),
            );
            panel.blank();

            for line in wrap(&project.description, width.saturating_sub(4)) {
                panel.push(line);
            }
            panel.blank();

            if !project.metrics.is_empty() {
                let cells: Vec<String> = project
                    .metrics
                    .iter()
                    .map(|m| {
                        format!(
                            "{} {}",
                            Styled::plain(m.value.as_str()).bold().render(ctx.color),
                            Styled::dim(metric_label(&m.key)).render(ctx.color),
                        )
                    })
                    .collect();
                panel.push(cells.join("   "));
                panel.blank();
            }

            self.push_list(&mut panel, "Challenges", Icon::Warning, &project.challenges, width, ctx);
            self.push_list(&mut panel, "Solutions", Icon::Zap, &project.solutions, width, ctx);
            self.push_list(&mut panel, "Impact", Icon::Trend, &project.impact, width, ctx);

            for row in chip_rows(&project.technologies, width.saturating_sub(4), ctx.color) {
                panel.push(row);
            }

            out.push_str(&panel.render(ctx.color, ctx.unicode));
            out.push('\n');
        }

        out
    }

    fn push_list(
        &self,
        panel: &mut Panel,
        heading: &str,
        icon: Icon,
        items: &[String],
        width: usize,
        ctx: &UiContext,
    ) {
        if items.is_empty() {
            return;
        }
        panel.push(format!(
            "{} {}",
            icon.colored(ctx.color, ctx.unicode),
            Styled::plain(heading).bold().render(ctx.color),
        ));
        for item in items {
            let bullet = Icon::Bullet.colored(ctx.color, ctx.unicode);
            let mut first = true;
            for line in wrap(item, width.saturating_sub(8)) {
                if first {
                    panel.push(format!("{} {}", bullet, line));
                    first = false;
                } else {
                    panel.push(format!("  {}", line));
                }
            }
        }
        panel.blank();
    }
}

use chrono::Datelike;

use crate::content::{FooterContent, Profile};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{rule, wrap, Styled};
use crate::ui::sections::layout_width;
use crate::ui::shell::NAV_ITEMS;
use crate::ui::UiContext;

pub struct FooterView<'a> {
    profile: &'a Profile,
    footer: &'a FooterContent,
}

impl<'a> FooterView<'a> {
    pub fn new(profile: &'a Profile, footer: &'a FooterContent) -> Self {
        Self { profile, footer }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        self.render_with_year(ctx, chrono::Local::now().year())
    }

    fn render_with_year(&self, ctx: &UiContext, year: i32) -> String {
        let width = layout_width(ctx);
        let mut out = String::new();

        out.push_str(&Styled::dim(rule(width, ctx.unicode)).render(ctx.color));
        out.push('\n');

        out.push_str(
            &Styled::accent(self.profile.name.as_str())
                .bold()
                .render(ctx.color),
        );
        out.push('\n');
        for line in wrap(&self.footer.tagline, width) {
            out.push_str(&Styled::dim(line).render(ctx.color));
            out.push('\n');
        }
        out.push('\n');

        for fact in &self.footer.facts {
            out.push_str(&format!(
                "{} {}   ",
                Icon::from(fact.icon).colored(ctx.color, ctx.unicode),
                fact.text
            ));
        }
        out.push_str("\n\n");

        out.push_str(&Styled::plain("Quick Links").bold().render(ctx.color));
        out.push('\n');
        let links: Vec<&str> = NAV_ITEMS.iter().map(|s| s.label()).collect();
        out.push_str(&Styled::dim(links.join("  |  ")).render(ctx.color));
        out.push_str("\n\n");

        for section in &self.footer.sections {
            out.push_str(&Styled::plain(section.title.as_str()).bold().render(ctx.color));
            out.push('\n');
            for item in &section.items {
                out.push_str(&format!(
                    "{} {}\n",
                    Icon::Bullet.colored(ctx.color, ctx.unicode),
                    item
                ));
            }
            out.push('\n');
        }

        out.push_str(&Styled::dim(rule(width, ctx.unicode)).render(ctx.color));
        out.push('\n');
        out.push_str(
            &Styled::dim(format!(
                "© {} {}. All rights reserved.",
                year, self.profile.name
            ))
            .render(ctx.color),
        );
        out.push('\n');
        for line in wrap(&self.footer.notice, width) {
            out.push_str(&Styled::dim(line).render(ctx.color));
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
    fn footer_shows_brand_links_and_copyright_year() {
        let store = content::store();
        let view = FooterView::new(&store.profile, &store.footer);
        let out = view.render_with_year(&plain_ctx(), 2026);
        assert!(out.contains("Lay Been Tan"));
        assert!(out.contains("© 2026 Lay Been Tan. All rights reserved."));
        assert!(out.contains("About  |  Experience  |  Skills  |  Projects  |  Contact"));
    }

    #[test]
    fn footer_lists_every_section_item() {
        let store = content::store();
        let view = FooterView::new(&store.profile, &store.footer);
        let out = view.render_with_year(&plain_ctx(), 2026);
        for section in &store.footer.sections {
            assert!(out.contains(&section.title), "missing {}", section.title);
            for item in &section.items {
                assert!(out.contains(item), "missing {}", item);
            }
        }
        assert!(out.contains("confidentiality agreements"));
    }
}

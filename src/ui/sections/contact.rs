use crate::content::ContactInfo;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{wrap, Styled};
use crate::ui::sections::{layout_width, section_heading};
use crate::ui::widgets::panel::{Panel, PanelStyle};
use crate::ui::UiContext;

pub struct ContactView<'a> {
    contact: &'a ContactInfo,
}

impl<'a> ContactView<'a> {
    pub fn new(contact: &'a ContactInfo) -> Self {
        Self { contact }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        let width = layout_width(ctx);
        let mut out = section_heading(
            "Get In Touch",
            "Interested in discussing telecommunications security, vulnerability \
             management, or program leadership opportunities? I welcome \
             professional inquiries.",
            ctx,
        );

        let mut methods = Panel::with_title("Contact Information").style(PanelStyle::Accent);
        for method in &self.contact.methods {
            methods.push(format!(
                "{} {}",
                Icon::from(method.icon).colored(ctx.color, ctx.unicode),
                Styled::plain(method.title.as_str()).bold().render(ctx.color),
            ));
            match &method.href {
                Some(href) => methods.push(format!(
                    "  {} ({})",
                    method.value,
                    Styled::dim(href.as_str()).render(ctx.color)
                )),
                None => methods.push(format!("  {}", method.value)),
            }
            methods.push(
                Styled::dim(format!("  {}", method.description)).render(ctx.color),
            );
            methods.blank();
        }
        out.push_str(&methods.render(ctx.color, ctx.unicode));
        out.push('\n');

        let mut availability = Panel::with_title("Availability").style(PanelStyle::Dim);
        for slot in &self.contact.availability {
            availability.push(format!(
                "{} {}",
                Icon::from(slot.icon).colored(ctx.color, ctx.unicode),
                Styled::plain(slot.title.as_str()).bold().render(ctx.color),
            ));
            for line in wrap(&slot.description, width.saturating_sub(6)) {
                availability.push(format!("  {}", line));
            }
            availability.blank();
        }
        out.push_str(&availability.render(ctx.color, ctx.unicode));
        out.push('\n');

        let mut pitch = Panel::with_title("Why Work With Me?").style(PanelStyle::Dim);
        for point in &self.contact.pitch {
            pitch.push(format!(
                "{} {}",
                Icon::Success.colored(ctx.color, ctx.unicode),
                point
            ));
        }
        out.push_str(&pitch.render(ctx.color, ctx.unicode));
        out.push('\n');

        for line in wrap(&self.contact.response_note, width) {
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
    fn contact_lists_methods_with_links() {
        let out = ContactView::new(&content::store().contact).render(&plain_ctx());
        assert!(out.contains("laybeentan@yahoo.com"));
        assert!(out.contains("mailto:laybeentan@yahoo.com"));
        assert!(out.contains("Ottawa, ON Canada"));
    }

    #[test]
    fn contact_shows_availability_and_response_note() {
        let out = ContactView::new(&content::store().contact).render(&plain_ctx());
        assert!(out.contains("Consulting Opportunities"));
        assert!(out.contains("Professional Mentoring"));
        assert!(out.contains("24-48"));
    }
}

use crate::content::Profile;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{center, rule, wrap, Styled};
use crate::ui::sections::layout_width;
use crate::ui::UiContext;

/// Opening section: name, title, tagline and contact line.
pub struct HeroView<'a> {
    profile: &'a Profile,
}

impl<'a> HeroView<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn render(&self, ctx: &UiContext) -> String {
        let width = layout_width(ctx);
        let mut out = String::new();

        out.push_str(&Styled::accent(rule(width, ctx.unicode)).render(ctx.color));
        out.push('\n');

        let years_badge = format!(
            "{} {}+ Years in Telecommunications",
            Icon::Calendar.colored(ctx.color, ctx.unicode),
            self.profile.years_experience
        );
        out.push_str(&center(&years_badge, width));
        out.push_str("\n\n");

        out.push_str(&center(
            &Styled::accent(self.profile.name.as_str())
                .bold()
                .render(ctx.color),
            width,
        ));
        out.push('\n');
        out.push_str(&center(
            &Styled::plain(self.profile.title.as_str())
                .bold()
                .render(ctx.color),
            width,
        ));
        out.push_str("\n\n");

        for line in wrap(&self.profile.tagline, width.saturating_sub(10)) {
            out.push_str(&center(&Styled::dim(line).render(ctx.color), width));
            out.push('\n');
        }
        out.push('\n');

        let whereabouts = format!(
            "{} {}   {} {}   {} {}",
            Icon::Pin.colored(ctx.color, ctx.unicode),
            self.profile.location,
            Icon::Mail.colored(ctx.color, ctx.unicode),
            self.profile.email,
            Icon::Link.colored(ctx.color, ctx.unicode),
            self.profile.linkedin,
        );
        out.push_str(&center(&whereabouts, width));
        out.push('\n');

        out.push_str(&Styled::accent(rule(width, ctx.unicode)).render(ctx.color));
        out.push('\n');
        out
    }
}

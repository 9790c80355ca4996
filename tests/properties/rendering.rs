//! Property tests for the text and widget primitives.

use proptest::prelude::*;

use folio::ui::primitives::badge::Badge;
use folio::ui::primitives::text::{visible_width, wrap};
use folio::ui::sections::projects::metric_label;
use folio::ui::widgets::skill_bar::SkillBar;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Status badges never panic; unknown statuses still render
    /// their label in brackets.
    #[test]
    fn property_status_badge_renders_any_label(status in ".{0,40}") {
        let rendered = Badge::status(&status).render(false);
        prop_assert_eq!(rendered, format!("[{}]", status));
    }

    /// PROPERTY: Role kind badges never panic on arbitrary input.
    #[test]
    fn property_role_kind_badge_never_panics(kind in ".{0,40}") {
        let _ = Badge::role_kind(&kind).render(true);
    }

    /// PROPERTY: The bar fill never exceeds the configured width, for any
    /// proficiency and any width.
    #[test]
    fn property_skill_bar_fill_within_width(
        proficiency in any::<u8>(),
        width in 1u16..=120,
    ) {
        let mut bar = SkillBar::new(proficiency);
        bar.set_width(width);
        let rendered = bar.render(false, false);
        prop_assert_eq!(rendered.chars().count(), width as usize);
    }

    /// PROPERTY: Wrapped lines stay within the requested width unless a
    /// single word is wider than the whole line.
    #[test]
    fn property_wrap_respects_width(
        text in "[a-z ]{0,200}",
        width in 1usize..=60,
    ) {
        for line in wrap(&text, width) {
            let fits = visible_width(&line) <= width;
            let single_word = !line.contains(' ');
            prop_assert!(fits || single_word, "line {:?} overflows {}", line, width);
        }
    }

    /// PROPERTY: Metric labels never carry leading or trailing whitespace.
    #[test]
    fn property_metric_label_is_trimmed(key in "[a-zA-Z]{0,32}") {
        let label = metric_label(&key);
        prop_assert_eq!(label.trim().to_string(), label);
    }
}

//! Proficiency bar for the skills section.

use crossterm::style::Stylize;

use crate::ui::theme;

const DEFAULT_WIDTH: u16 = 24;

/// Clamp a proficiency value into the displayable [0,100] range.
pub fn clamp_proficiency(value: u8) -> u8 {
    value.min(100)
}

/// A filled-proportion bar. Input outside [0,100] is clamped for display;
/// it never overflows the bar.
#[derive(Debug, Clone, Copy)]
pub struct SkillBar {
    proficiency: u8,
    width: u16,
}

impl SkillBar {
    pub fn new(proficiency: u8) -> Self {
        Self {
            proficiency: clamp_proficiency(proficiency),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width.max(1);
    }

    pub fn proficiency(&self) -> u8 {
        self.proficiency
    }

    pub(crate) fn segments(&self) -> (usize, usize) {
        let width = self.width.max(1) as usize;
        let ratio = self.proficiency as f64 / 100.0;
        let filled = (ratio * width as f64).round().clamp(0.0, width as f64) as usize;
        (filled, width - filled)
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (filled, empty) = self.segments();
        let (full_ch, empty_ch) = if supports_unicode {
            ("█", "░")
        } else {
            ("#", ".")
        };

        let full = full_ch.repeat(filled);
        let rest = empty_ch.repeat(empty);
        if supports_color {
            format!(
                "{}{}",
                full.as_str().with(theme::colors::ACCENT),
                rest.as_str().with(theme::colors::DIM)
            )
        } else {
            format!("{}{}", full, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(clamp_proficiency(150), 100);
        assert_eq!(clamp_proficiency(100), 100);
        assert_eq!(clamp_proficiency(0), 0);
        assert_eq!(SkillBar::new(255).proficiency(), 100);
    }

    #[test]
    fn zero_renders_empty_bar() {
        let mut bar = SkillBar::new(0);
        bar.set_width(10);
        assert_eq!(bar.render(false, false), "..........");
    }

    #[test]
    fn hundred_renders_full_bar() {
        let mut bar = SkillBar::new(100);
        bar.set_width(10);
        assert_eq!(bar.render(false, false), "##########");
    }

    #[test]
    fn fill_never_exceeds_width() {
        for p in [0u8, 1, 49, 50, 99, 100, 200, 255] {
            let mut bar = SkillBar::new(p);
            bar.set_width(24);
            let (filled, empty) = bar.segments();
            assert_eq!(filled + empty, 24);
        }
    }

    #[test]
    fn unicode_bar_uses_block_glyphs() {
        let mut bar = SkillBar::new(50);
        bar.set_width(10);
        let rendered = bar.render(false, true);
        assert!(rendered.contains('█'));
        assert!(rendered.contains('░'));
    }
}

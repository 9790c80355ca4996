use crate::cli::ColorWhen;
use crate::config::{AnimationMode, ColorMode, Config};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one invocation: CLI flags beat config,
/// config beats detected capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
    pub width: u16,
    pub height: u16,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, cli_no_animation: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_color, cli_no_animation, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let animation = if cli_no_animation || caps.is_ci {
            false
        } else {
            match config.output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always => caps.is_tty,
                AnimationMode::Auto => caps.is_tty && !caps.is_ci,
            }
        };

        Self {
            color,
            unicode,
            animation,
            width: caps.width,
            height: caps.height,
        }
    }

    /// Override the layout width (used by `print --width`).
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(20);
        self
    }
}

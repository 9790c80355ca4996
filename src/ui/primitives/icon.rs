use crossterm::style::Stylize;

use crate::content::IconTag;
use crate::ui::theme;

/// Renderable icon set: every content `IconTag` plus shell-only glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Bullet,
    Arrow,
    Pointer,
    Shield,
    Network,
    Users,
    Gear,
    Idea,
    Target,
    Clock,
    Award,
    Mail,
    Link,
    Pin,
    Phone,
    Calendar,
    Zap,
    Trend,
    Building,
    Menu,
    Close,
}

impl From<IconTag> for Icon {
    fn from(tag: IconTag) -> Self {
        match tag {
            IconTag::Shield => Icon::Shield,
            IconTag::Network => Icon::Network,
            IconTag::Users => Icon::Users,
            IconTag::Gear => Icon::Gear,
            IconTag::Idea => Icon::Idea,
            IconTag::Target => Icon::Target,
            IconTag::Clock => Icon::Clock,
            IconTag::Award => Icon::Award,
            IconTag::Mail => Icon::Mail,
            IconTag::Link => Icon::Link,
            IconTag::Pin => Icon::Pin,
            IconTag::Phone => Icon::Phone,
            IconTag::Calendar => Icon::Calendar,
            IconTag::Zap => Icon::Zap,
            IconTag::Trend => Icon::Trend,
            IconTag::Building => Icon::Building,
        }
    }
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::glyphs::SUCCESS,
                Icon::Error => theme::glyphs::ERROR,
                Icon::Warning => theme::glyphs::WARNING,
                Icon::Bullet => theme::glyphs::BULLET,
                Icon::Arrow => theme::glyphs::ARROW,
                Icon::Pointer => theme::glyphs::POINTER,
                Icon::Shield => theme::glyphs::SHIELD,
                Icon::Network => theme::glyphs::NETWORK,
                Icon::Users => theme::glyphs::USERS,
                Icon::Gear => theme::glyphs::GEAR,
                Icon::Idea => theme::glyphs::IDEA,
                Icon::Target => theme::glyphs::TARGET,
                Icon::Clock => theme::glyphs::CLOCK,
                Icon::Award => theme::glyphs::AWARD,
                Icon::Mail => theme::glyphs::MAIL,
                Icon::Link => theme::glyphs::LINK,
                Icon::Pin => theme::glyphs::PIN,
                Icon::Phone => theme::glyphs::PHONE,
                Icon::Calendar => theme::glyphs::CALENDAR,
                Icon::Zap => theme::glyphs::ZAP,
                Icon::Trend => theme::glyphs::TREND,
                Icon::Building => theme::glyphs::BUILDING,
                Icon::Menu => theme::glyphs::MENU,
                Icon::Close => theme::glyphs::CLOSE,
            }
        } else {
            match self {
                Icon::Success => theme::glyphs_ascii::SUCCESS,
                Icon::Error => theme::glyphs_ascii::ERROR,
                Icon::Warning => theme::glyphs_ascii::WARNING,
                Icon::Bullet => theme::glyphs_ascii::BULLET,
                Icon::Arrow => theme::glyphs_ascii::ARROW,
                Icon::Pointer => theme::glyphs_ascii::POINTER,
                Icon::Shield => theme::glyphs_ascii::SHIELD,
                Icon::Network => theme::glyphs_ascii::NETWORK,
                Icon::Users => theme::glyphs_ascii::USERS,
                Icon::Gear => theme::glyphs_ascii::GEAR,
                Icon::Idea => theme::glyphs_ascii::IDEA,
                Icon::Target => theme::glyphs_ascii::TARGET,
                Icon::Clock => theme::glyphs_ascii::CLOCK,
                Icon::Award => theme::glyphs_ascii::AWARD,
                Icon::Mail => theme::glyphs_ascii::MAIL,
                Icon::Link => theme::glyphs_ascii::LINK,
                Icon::Pin => theme::glyphs_ascii::PIN,
                Icon::Phone => theme::glyphs_ascii::PHONE,
                Icon::Calendar => theme::glyphs_ascii::CALENDAR,
                Icon::Zap => theme::glyphs_ascii::ZAP,
                Icon::Trend => theme::glyphs_ascii::TREND,
                Icon::Building => theme::glyphs_ascii::BUILDING,
                Icon::Menu => theme::glyphs_ascii::MENU,
                Icon::Close => theme::glyphs_ascii::CLOSE,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Zap => theme::colors::WARNING,
            Icon::Bullet | Icon::Arrow | Icon::Pin | Icon::Clock | Icon::Calendar => {
                theme::colors::DIM
            }
            Icon::Pointer | Icon::Trend | Icon::Idea => theme::colors::SUCCESS,
            Icon::Shield | Icon::Target => theme::colors::ERROR,
            Icon::Award => theme::colors::HIGHLIGHT,
            Icon::Network
            | Icon::Users
            | Icon::Gear
            | Icon::Mail
            | Icon::Link
            | Icon::Phone
            | Icon::Building
            | Icon::Menu
            | Icon::Close => theme::colors::ACCENT,
        };
        format!("{}", s.with(color))
    }
}

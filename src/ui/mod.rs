//! Presentation layer: theme tokens, terminal detection, primitives,
//! widgets, the section renderers and the navigation shell.

pub mod context;
pub mod primitives;
pub mod sections;
pub mod shell;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use context::UiContext;

/// Identifier for one vertical section of the page.
///
/// Doubles as the anchor vocabulary for navigation; reordering or removing
/// sections must never break navigation (missing anchors no-op).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }
}

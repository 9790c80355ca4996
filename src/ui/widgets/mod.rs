pub mod panel;
pub mod skill_bar;

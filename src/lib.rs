//! folio - a terminal portfolio for Lay Been Tan
//!
//! Renders a single-page professional portfolio in the terminal: an
//! interactive scrolling viewer plus `print`, `export` and `contact`
//! subcommands for non-interactive use.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod ui;

// Re-exports for convenience
pub use api::{ContactAck, ContactForm, DataSource, StaticDataSource, ACK_MESSAGE};
pub use config::Config;
pub use content::{store, ContentStore};
pub use error::{FolioError, FolioResult};

//! Embedded NovaDocs UI — an API-documentation viewer served from assets
//! bundled into the binary, mountable under a configurable path prefix.

mod config;
mod error;
mod index;
mod mime;
mod static_files;

pub use config::{LayoutConfig, ThemeConfig, UiConfig};
pub use error::UiError;
pub use static_files::router;

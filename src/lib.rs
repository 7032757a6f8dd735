//! custom-localizer
//!
//! Request-scoped string localization: culture negotiation, a fixed in-memory
//! translation catalog, and an HTML page rendered per the active culture.

pub mod catalog;
pub mod config;
pub mod culture;
pub mod error;
pub mod localizer;
pub mod negotiate;
pub mod render;
pub mod server;
pub mod template;

pub use localizer::{
    LocalizerFactory,
    StringLocalizer,
};

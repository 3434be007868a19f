//! struk-export
//!
//! Receipt HTML rendering and PDF capture through a headless browser.

pub mod chrome;
pub mod error;
pub mod pdf;
pub mod render;
pub mod store;
pub mod styles;

//! struk-core
//!
//! Pure domain types for receipt batches, boundary validation and the
//! Indonesian display formatting shared by the export and HTTP crates.
//! No I/O lives here.

pub mod error;
pub mod format;
pub mod models;

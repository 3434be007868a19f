//! Display formatting for receipts, following Indonesian (`id-ID`)
//! conventions.

pub mod currency;
pub mod timestamp;

pub use currency::{format_quantity, format_rupiah};
pub use timestamp::{display_time_zone, format_epoch_millis, format_timestamp, INVALID_DATE};

//! Prelude module for calendar_age crate.
//!
//! Re-exports the derive macros used from derive_more.

#[allow(unused_imports)]
pub use derive_more::{Display, Into};

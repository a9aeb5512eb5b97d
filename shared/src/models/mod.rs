//! Data models
//!
//! Canonical in-memory entities. Backend records reach these types only
//! through [`crate::record::normalize_record`], so every entity carries a
//! uniform `id` regardless of the wire dialect it came from.

pub mod menu_item;
pub mod serde_helpers;
pub mod team_member;
pub mod unit;
pub mod weather;

// Re-exports
pub use menu_item::*;
pub use team_member::*;
pub use unit::*;
pub use weather::*;

//! Shared types for the Cardápio workspace
//!
//! Canonical domain models and the record normalizer used by both the
//! backend gateway and the application store.

pub mod models;
pub mod record;

// Re-exports
pub use models::{MenuItem, MenuPayload, MenuUpdate, TeamMember, Unit, WeatherInfo};
pub use record::{CanonicalRecord, Dialect, RecordError, normalize_record};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

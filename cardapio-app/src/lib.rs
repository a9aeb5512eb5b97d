//! Cardápio - menu management for a multi-unit restaurant
//!
//! # Modules
//!
//! - [`core`] - state store, actions, and derived views
//! - [`events`] - state change notifications
//! - [`logger`] - tracing setup for the binary
//! - [`utils`] - currency display

pub mod core;
pub mod events;
pub mod logger;
pub mod utils;

pub use crate::core::{
    ConfirmDialog, MenuView, RestaurantState, RestaurantStore, StaticConfirm, StoreOptions,
};
pub use events::StateChange;
pub use logger::{init_logger, init_logger_with_level};

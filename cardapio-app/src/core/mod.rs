//! Core application layer
//!
//! - `store`: the single state container and its actions
//! - `state`: state shape, filter and sort value objects
//! - `form`: menu form value object and validation
//! - `views`: pure derived projections over state
//! - `units`: menu-item/team-member to unit joins
//! - `confirm`: interactive yes/no gate for destructive actions

pub mod confirm;
pub mod form;
pub mod state;
pub mod store;
pub mod units;
pub mod views;

pub use confirm::{ConfirmDialog, StaticConfirm};
pub use form::{FormData, FormError, FormUpdate};
pub use state::{
    AvailabilityFilter, FilterUpdate, FiltersState, RestaurantState, SortConfig, SortDirection,
    SortKey, StoreOptions,
};
pub use store::RestaurantStore;
pub use units::UnitIndex;
pub use views::{MenuView, ViewMemo};

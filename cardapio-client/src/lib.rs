//! Cardápio Client - remote data access for the menu application
//!
//! Provides the backend gateway (Parse or PostgREST dialect, chosen once
//! from configuration) and the weather provider.

pub mod config;
pub mod error;
pub mod gateway;
pub mod weather;

pub use config::{
    ApiProvider, ClientConfig, Collections, Coordinates, ParseCredentials, SupabaseCredentials,
    WeatherLocations,
};
pub use error::{ClientError, ClientResult, WeatherError};
pub use gateway::{DataClient, ParseClient, SupabaseClient, connect};
pub use weather::{OpenMeteoClient, WeatherProvider};

// Re-export shared types for convenience
pub use shared::{Dialect, MenuItem, MenuPayload, MenuUpdate, TeamMember, Unit, WeatherInfo};

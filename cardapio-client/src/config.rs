//! Client configuration
//!
//! Read once at startup; the selected provider never changes afterwards.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | API_PROVIDER | back4app | `back4app` (Parse dialect) or `supabase` (PostgREST dialect) |
//! | MENU_COLLECTION | Menu | Menu items class/table |
//! | TEAM_COLLECTION | Team | Team members class/table |
//! | UNIT_COLLECTION | Unit | Units class/table |
//! | PARSE_APP_ID / PARSE_REST_KEY / PARSE_SERVER_URL | - | Parse credentials |
//! | SUPABASE_URL / SUPABASE_ANON_KEY | - | Supabase credentials |
//! | HTTP_TIMEOUT_SECS | unset | Optional request timeout |
//! | WEATHER_BASE_URL | https://api.open-meteo.com | Forecast service |

use std::sync::Arc;

use crate::gateway::{DataClient, connect};
use crate::weather::OpenMeteoClient;
use crate::{ClientResult, WeatherError};

/// Default Open-Meteo endpoint
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

/// Which backend dialect to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiProvider {
    /// Back4App / Parse REST
    #[default]
    Back4App,
    /// Supabase / PostgREST
    Supabase,
}

impl ApiProvider {
    /// Anything other than `supabase` selects the Parse dialect
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("supabase") {
            ApiProvider::Supabase
        } else {
            ApiProvider::Back4App
        }
    }
}

/// Backend collection (Parse class / PostgREST table) names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub menu: String,
    pub team: String,
    pub unit: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            menu: "Menu".into(),
            team: "Team".into(),
            unit: "Unit".into(),
        }
    }
}

/// Parse (dialect A) credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseCredentials {
    pub app_id: Option<String>,
    pub rest_key: Option<String>,
    pub server_url: Option<String>,
}

/// Supabase (dialect B) credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupabaseCredentials {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ordered city -> coordinates table
///
/// The city names double as the static unit option list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLocations {
    entries: Vec<(String, Coordinates)>,
}

impl WeatherLocations {
    pub fn new(entries: Vec<(String, Coordinates)>) -> Self {
        Self { entries }
    }

    /// Coordinates for an exact city name
    pub fn get(&self, city: &str) -> Option<Coordinates> {
        self.entries
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, coords)| *coords)
    }

    /// City names in table order
    pub fn cities(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl Default for WeatherLocations {
    fn default() -> Self {
        let table = [
            ("São Paulo", -23.5505, -46.6333),
            ("Rio de Janeiro", -22.9068, -43.1729),
            ("Belo Horizonte", -19.9167, -43.9345),
            ("Curitiba", -25.4284, -49.2733),
            ("Recife", -8.0476, -34.877),
        ];
        Self::new(
            table
                .into_iter()
                .map(|(name, latitude, longitude)| {
                    (name.to_string(), Coordinates { latitude, longitude })
                })
                .collect(),
        )
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub provider: ApiProvider,
    pub collections: Collections,
    pub parse: ParseCredentials,
    pub supabase: SupabaseCredentials,
    /// Request timeout in seconds; `None` leaves requests unbounded
    pub timeout: Option<u64>,
    pub weather_base_url: String,
    pub weather_locations: WeatherLocations,
}

impl ClientConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Collections::default();

        Self {
            provider: read("API_PROVIDER")
                .map(|name| ApiProvider::from_name(&name))
                .unwrap_or_default(),
            collections: Collections {
                menu: read("MENU_COLLECTION").unwrap_or(defaults.menu),
                team: read("TEAM_COLLECTION").unwrap_or(defaults.team),
                unit: read("UNIT_COLLECTION").unwrap_or(defaults.unit),
            },
            parse: ParseCredentials {
                app_id: read("PARSE_APP_ID"),
                rest_key: read("PARSE_REST_KEY"),
                server_url: read("PARSE_SERVER_URL"),
            },
            supabase: SupabaseCredentials {
                url: read("SUPABASE_URL"),
                api_key: read("SUPABASE_ANON_KEY"),
            },
            timeout: read("HTTP_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
            weather_base_url: read("WEATHER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.into()),
            weather_locations: WeatherLocations::default(),
        }
    }

    /// Set the provider
    pub fn with_provider(mut self, provider: ApiProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Set Parse credentials
    pub fn with_parse(
        mut self,
        server_url: impl Into<String>,
        app_id: impl Into<String>,
        rest_key: impl Into<String>,
    ) -> Self {
        self.parse = ParseCredentials {
            app_id: Some(app_id.into()),
            rest_key: Some(rest_key.into()),
            server_url: Some(server_url.into()),
        };
        self
    }

    /// Set Supabase credentials
    pub fn with_supabase(mut self, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.supabase = SupabaseCredentials {
            url: Some(url.into()),
            api_key: Some(api_key.into()),
        };
        self
    }

    /// Set the forecast service base URL
    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Static unit options (the coordinate table's cities)
    pub fn static_unit_options(&self) -> Vec<String> {
        self.weather_locations.cities()
    }

    /// Create the data client for the configured provider
    pub fn build_data_client(&self) -> ClientResult<Arc<dyn DataClient>> {
        connect(self)
    }

    /// Create the weather provider
    pub fn build_weather_provider(&self) -> Result<OpenMeteoClient, WeatherError> {
        OpenMeteoClient::new(self)
    }

    pub(crate) fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = self.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        builder.build()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

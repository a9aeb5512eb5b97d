//! Application state
//!
//! Plain value objects. The store replaces them wholesale on every change;
//! nothing hands out `&mut` into a live state.

use std::sync::Arc;

use cardapio_client::{ClientConfig, WeatherLocations};
use shared::{MenuItem, TeamMember, Unit, WeatherInfo};

use super::form::FormData;

/// "Every location" sentinel for the city selector
pub const ALL_LOCATIONS: &str = "TODOS";
/// "Every category" sentinel for the category filter
pub const ALL_CATEGORIES: &str = "TODAS";
/// Weather prompt shown while no city is selected
pub const SELECT_CITY_PROMPT: &str = "Selecione uma cidade.";
/// Base category list; loaded items may add more
pub const BASE_CATEGORIES: [&str; 5] = [
    "Entrada",
    "Prato principal",
    "Sobremesa",
    "Bebida",
    "Promoção",
];

/// Availability filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    /// Picker value (`TODOS` / `DISPONIVEL` / `INDISPONIVEL`)
    pub fn code(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "TODOS",
            AvailabilityFilter::Available => "DISPONIVEL",
            AvailabilityFilter::Unavailable => "INDISPONIVEL",
        }
    }

    /// Unknown codes mean no filtering
    pub fn from_code(code: &str) -> Self {
        match code {
            "DISPONIVEL" => AvailabilityFilter::Available,
            "INDISPONIVEL" => AvailabilityFilter::Unavailable,
            _ => AvailabilityFilter::All,
        }
    }

    pub fn accepts(&self, available: bool) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => available,
            AvailabilityFilter::Unavailable => !available,
        }
    }
}

/// Menu filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersState {
    /// Case-insensitive substring of the item name
    pub name: String,
    /// Exact category, or [`ALL_CATEGORIES`]
    pub category: String,
    pub availability: AvailabilityFilter,
    /// Inclusive bounds as typed; blank or non-numeric means unconstrained
    pub min_price: String,
    pub max_price: String,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: ALL_CATEGORIES.into(),
            availability: AvailabilityFilter::All,
            min_price: String::new(),
            max_price: String::new(),
        }
    }
}

/// Single-field filter change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Name(String),
    Category(String),
    Availability(AvailabilityFilter),
    MinPrice(String),
    MaxPrice(String),
}

impl FiltersState {
    /// Copy with one field replaced
    pub fn with(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Name(v) => next.name = v,
            FilterUpdate::Category(v) => next.category = v,
            FilterUpdate::Availability(v) => next.availability = v,
            FilterUpdate::MinPrice(v) => next.min_price = v,
            FilterUpdate::MaxPrice(v) => next.max_price = v,
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Unit,
            direction: SortDirection::Asc,
        }
    }
}

impl SortConfig {
    /// Same key flips direction; a new key starts ascending
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Static inputs fixed at store construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Unit options used until (or unless) units with names are loaded
    pub static_unit_options: Vec<String>,
    pub base_categories: Vec<String>,
}

impl StoreOptions {
    pub fn new(static_unit_options: Vec<String>) -> Self {
        Self {
            static_unit_options,
            base_categories: BASE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Static units come from the weather coordinate table
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.static_unit_options())
    }

    /// First static unit, or empty when none are configured
    pub fn default_unit(&self) -> String {
        self.static_unit_options.first().cloned().unwrap_or_default()
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new(WeatherLocations::default().cities())
    }
}

/// Everything the screens render
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantState {
    /// Replaced wholesale on reload; pointer identity signals a change
    pub menu_items: Arc<Vec<MenuItem>>,
    pub units: Vec<Unit>,
    pub team_members: Vec<TeamMember>,
    /// Unit picker options (loaded unit names, or the static list)
    pub unit_options: Vec<String>,
    pub filters: FiltersState,
    pub sort_config: SortConfig,
    pub form_data: FormData,
    /// Item being edited; `None` means the form creates
    pub editing_id: Option<String>,
    pub is_saving: bool,
    pub is_loading_menu: bool,
    /// Latest success/failure text
    pub status_message: String,
    /// Selected city ([`ALL_LOCATIONS`] for every unit)
    pub weather_city: String,
    pub weather_info: Option<WeatherInfo>,
    pub weather_message: String,
    pub is_loading_units: bool,
    pub units_loaded: bool,
    pub is_loading_team: bool,
    pub team_loaded: bool,
    pub category_options: Vec<String>,
    /// [`ALL_LOCATIONS`] followed by the static units
    pub location_options: Vec<String>,
}

impl RestaurantState {
    pub fn new(options: &StoreOptions) -> Self {
        let mut location_options = vec![ALL_LOCATIONS.to_string()];
        location_options.extend(options.static_unit_options.iter().cloned());

        Self {
            menu_items: Arc::new(Vec::new()),
            units: Vec::new(),
            team_members: Vec::new(),
            unit_options: options.static_unit_options.clone(),
            filters: FiltersState::default(),
            sort_config: SortConfig::default(),
            form_data: FormData::empty(options.default_unit()),
            editing_id: None,
            is_saving: false,
            is_loading_menu: false,
            status_message: String::new(),
            weather_city: ALL_LOCATIONS.into(),
            weather_info: None,
            weather_message: SELECT_CITY_PROMPT.into(),
            is_loading_units: false,
            units_loaded: false,
            is_loading_team: false,
            team_loaded: false,
            category_options: options.base_categories.clone(),
            location_options,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// First unit option, falling back to `fallback`
    pub(crate) fn first_unit_option(&self, fallback: &str) -> String {
        self.unit_options
            .first()
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

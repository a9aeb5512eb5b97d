//! Derived views
//!
//! Pure projections over [`RestaurantState`]. No I/O; callers re-run them
//! whenever the store publishes a change, or go through [`ViewMemo`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use shared::{MenuItem, TeamMember, Unit};

use super::form::parse_price;
use super::state::{
    ALL_CATEGORIES, ALL_LOCATIONS, FiltersState, RestaurantState, SortConfig, SortDirection,
    SortKey,
};
use super::units::{UnitIndex, menu_item_in_unit};

/// Base categories plus every distinct category in use
pub fn category_options(base: &[String], items: &[MenuItem]) -> Vec<String> {
    let mut options = base.to_vec();
    for item in items {
        if !item.category.is_empty() && !options.contains(&item.category) {
            options.push(item.category.clone());
        }
    }
    options
}

/// Apply, in order: city, name, category, availability, price bounds
pub fn filter_items(items: &[MenuItem], city: &str, filters: &FiltersState) -> Vec<MenuItem> {
    let needle = filters.name.to_lowercase();
    let min_price = parse_price(&filters.min_price);
    let max_price = parse_price(&filters.max_price);

    items
        .iter()
        .filter(|item| city == ALL_LOCATIONS || menu_item_in_unit(item, city))
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .filter(|item| filters.category == ALL_CATEGORIES || item.category == filters.category)
        .filter(|item| filters.availability.accepts(item.available))
        .filter(|item| match (min_price, item.price) {
            (Some(min), Some(price)) => price >= min,
            _ => true,
        })
        .filter(|item| match (max_price, item.price) {
            (Some(max), Some(price)) => price <= max,
            _ => true,
        })
        .cloned()
        .collect()
}

/// Stable sort by the selected key
///
/// String keys compare case-insensitively. A missing price orders before
/// every priced item.
pub fn sort_items(items: &[MenuItem], sort: SortConfig) -> Vec<MenuItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by(a: &MenuItem, b: &MenuItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Unit => {
            let unit_a = a.unit.as_deref().unwrap_or_default().to_lowercase();
            let unit_b = b.unit.as_deref().unwrap_or_default().to_lowercase();
            unit_a.cmp(&unit_b)
        }
    }
}

pub fn available_count(items: &[MenuItem]) -> usize {
    items.iter().filter(|item| item.available).count()
}

/// Menu items per unit name; unassigned items are skipped
pub fn menu_count_by_unit(items: &[MenuItem]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for unit in items.iter().filter_map(MenuItem::unit_name) {
        *counts.entry(unit.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Unit picker for the team screen
pub fn team_unit_options(units: &[Unit]) -> Vec<String> {
    let mut options = vec![ALL_LOCATIONS.to_string()];
    options.extend(
        units
            .iter()
            .filter_map(Unit::display_name)
            .map(str::to_owned),
    );
    options
}

/// Team members working at the selected unit (by name)
pub fn team_for_unit<'m>(
    members: &'m [TeamMember],
    units: &[Unit],
    selected: &str,
) -> Vec<&'m TeamMember> {
    let index = UnitIndex::new(units);
    members
        .iter()
        .filter(|member| {
            selected == ALL_LOCATIONS || index.unit_name_for_member(member) == Some(selected)
        })
        .collect()
}

/// The menu screen's projection
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    /// Filtered, then sorted
    pub items: Vec<MenuItem>,
    /// Available among the filtered items
    pub available_count: usize,
    pub category_options: Vec<String>,
}

impl MenuView {
    pub fn build(state: &RestaurantState) -> Self {
        let filtered = filter_items(&state.menu_items, &state.weather_city, &state.filters);
        Self {
            available_count: available_count(&filtered),
            items: sort_items(&filtered, state.sort_config),
            category_options: category_options(&state.category_options, &state.menu_items),
        }
    }
}

#[derive(Debug, Clone)]
struct MemoInputs {
    menu_items: Arc<Vec<MenuItem>>,
    city: String,
    filters: FiltersState,
    sort: SortConfig,
    base_categories: Vec<String>,
}

impl MemoInputs {
    fn capture(state: &RestaurantState) -> Self {
        Self {
            menu_items: state.menu_items.clone(),
            city: state.weather_city.clone(),
            filters: state.filters.clone(),
            sort: state.sort_config,
            base_categories: state.category_options.clone(),
        }
    }

    /// Shallow equality: the menu list is compared by identity
    fn matches(&self, state: &RestaurantState) -> bool {
        Arc::ptr_eq(&self.menu_items, &state.menu_items)
            && self.city == state.weather_city
            && self.filters == state.filters
            && self.sort == state.sort_config
            && self.base_categories == state.category_options
    }
}

/// Rebuilds [`MenuView`] only when one of its inputs changed
#[derive(Debug, Default)]
pub struct ViewMemo {
    cached: Option<(MemoInputs, Arc<MenuView>)>,
    builds: usize,
}

impl ViewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, state: &RestaurantState) -> Arc<MenuView> {
        if let Some((inputs, view)) = &self.cached
            && inputs.matches(state)
        {
            return view.clone();
        }

        let view = Arc::new(MenuView::build(state));
        self.cached = Some((MemoInputs::capture(state), view.clone()));
        self.builds += 1;
        view
    }

    /// How many times the view was actually computed
    pub fn builds(&self) -> usize {
        self.builds
    }
}

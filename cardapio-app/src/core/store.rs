//! Restaurant store
//!
//! One state container shared by every screen. Each action is a sequence of
//! state assignments around at most one awaited gateway or provider call;
//! every assignment is published to subscribers, so loading flags are
//! observable before and after the call.
//!
//! Actions do not lock against each other. `is_saving` and the loading flags
//! are for the UI to disable its controls.

use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cardapio_client::{ClientError, DataClient, WeatherProvider};
use parking_lot::RwLock;
use shared::{MenuItem, MenuPayload, MenuUpdate};
use tokio::sync::broadcast;

use super::confirm::ConfirmDialog;
use super::form::{FormData, FormUpdate};
use super::state::{
    ALL_LOCATIONS, FilterUpdate, RestaurantState, SELECT_CITY_PROMPT, SortKey, StoreOptions,
};
use super::units::UnitIndex;
use super::views::MenuView;
use crate::events::StateChange;

/// Subscriber queue depth; slower subscribers observe `Lagged`
const EVENT_CAPACITY: usize = 64;

struct StateCell {
    state: Arc<RestaurantState>,
    revision: u64,
}

pub struct RestaurantStore {
    cell: RwLock<StateCell>,
    events: broadcast::Sender<StateChange>,
    data: Arc<dyn DataClient>,
    weather: Arc<dyn WeatherProvider>,
    confirm: Arc<dyn ConfirmDialog>,
    options: StoreOptions,
    /// Latest issued menu reload; older responses are dropped
    menu_requests: AtomicU64,
    /// Latest issued weather lookup; older responses are dropped
    weather_requests: AtomicU64,
}

impl std::fmt::Debug for RestaurantStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = self.cell.read();
        f.debug_struct("RestaurantStore")
            .field("dialect", &self.data.dialect())
            .field("revision", &cell.revision)
            .field("menu_items", &cell.state.menu_items.len())
            .finish()
    }
}

impl RestaurantStore {
    pub fn new(
        data: Arc<dyn DataClient>,
        weather: Arc<dyn WeatherProvider>,
        confirm: Arc<dyn ConfirmDialog>,
        options: StoreOptions,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            cell: RwLock::new(StateCell {
                state: Arc::new(RestaurantState::new(&options)),
                revision: 0,
            }),
            events,
            data,
            weather,
            confirm,
            options,
            menu_requests: AtomicU64::new(0),
            weather_requests: AtomicU64::new(0),
        }
    }

    // ========== Observation ==========

    /// Current state; cheap to clone and never mutated afterwards
    pub fn snapshot(&self) -> Arc<RestaurantState> {
        self.cell.read().state.clone()
    }

    pub fn revision(&self) -> u64 {
        self.cell.read().revision
    }

    pub fn read<R>(&self, f: impl FnOnce(&RestaurantState) -> R) -> R {
        f(&self.cell.read().state)
    }

    /// Receive every subsequent state assignment
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.events.subscribe()
    }

    /// Menu screen projection of the current state
    pub fn menu_view(&self) -> MenuView {
        MenuView::build(&self.snapshot())
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Apply one assignment and publish the result
    fn set(&self, f: impl FnOnce(&mut RestaurantState)) {
        let mut cell = self.cell.write();
        f(Arc::make_mut(&mut cell.state));
        cell.revision += 1;

        // Sent under the lock so subscribers see revisions in order
        let change = StateChange {
            revision: cell.revision,
            state: cell.state.clone(),
        };
        let _ = self.events.send(change);
    }

    // ========== Loading ==========

    /// Replace the menu cache with the backend's list
    pub async fn load_menu(&self) {
        self.reload_menu(true).await;
    }

    /// Reloads issued after a mutation keep the mutation's status message
    async fn reload_menu(&self, clear_status: bool) {
        let request = self.menu_requests.fetch_add(1, Ordering::SeqCst) + 1;
        self.set(|s| {
            s.is_loading_menu = true;
            if clear_status {
                s.status_message.clear();
            }
        });

        let result = self.data.list_menu().await;
        if self.menu_requests.load(Ordering::SeqCst) != request {
            tracing::debug!(request, "Discarding stale menu response");
            return;
        }

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Menu loaded");
                self.set(|s| {
                    s.menu_items = Arc::new(items);
                    s.is_loading_menu = false;
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load menu");
                self.set(|s| {
                    s.status_message = status_text(&err, "Erro ao carregar cardápio.");
                    s.is_loading_menu = false;
                });
            }
        }
    }

    /// Load units once per session unless `force` is set
    pub async fn load_units(&self, force: bool) {
        if !force && self.read(|s| s.units_loaded) {
            tracing::debug!("Units already loaded");
            return;
        }
        self.set(|s| s.is_loading_units = true);

        match self.data.list_units().await {
            Ok(units) => {
                let names = UnitIndex::new(&units).names();
                let options = if names.is_empty() {
                    self.options.static_unit_options.clone()
                } else {
                    names
                };
                let fallback = self.options.default_unit();
                tracing::debug!(count = units.len(), options = options.len(), "Units loaded");

                self.set(|s| {
                    if !s.is_editing() && !options.contains(&s.form_data.unit) {
                        s.form_data.unit = options.first().cloned().unwrap_or(fallback);
                    }
                    s.units = units;
                    s.unit_options = options;
                    s.units_loaded = true;
                    s.is_loading_units = false;
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load units");
                self.set(|s| {
                    s.status_message = status_text(&err, "Erro ao carregar unidades.");
                    s.is_loading_units = false;
                });
            }
        }
    }

    /// Load team members once per session unless `force` is set
    pub async fn load_team(&self, force: bool) {
        if !force && self.read(|s| s.team_loaded) {
            tracing::debug!("Team already loaded");
            return;
        }
        self.set(|s| s.is_loading_team = true);

        match self.data.list_team().await {
            Ok(members) => {
                tracing::debug!(count = members.len(), "Team loaded");
                self.set(|s| {
                    s.team_members = members;
                    s.team_loaded = true;
                    s.is_loading_team = false;
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load team");
                self.set(|s| {
                    s.status_message = status_text(&err, "Erro ao carregar equipe.");
                    s.is_loading_team = false;
                });
            }
        }
    }

    // ========== Weather ==========

    /// Select a city and fetch its weather
    ///
    /// Outside edit mode the form's unit follows the city (or the first
    /// unit option when the city is not one).
    pub async fn set_weather_city(&self, city: &str) {
        self.set(|s| s.weather_city = city.to_string());

        if city != ALL_LOCATIONS && !self.read(RestaurantState::is_editing) {
            let fallback = self.options.default_unit();
            self.set(|s| {
                s.form_data.unit = if s.unit_options.iter().any(|u| u == city) {
                    city.to_string()
                } else {
                    s.first_unit_option(&fallback)
                };
            });
        }

        self.load_weather(Some(city)).await;
    }

    /// Fetch weather for `city`, or the selected city when `None`
    pub async fn load_weather(&self, city: Option<&str>) {
        let city = match city {
            Some(city) => city.to_string(),
            None => self.read(|s| s.weather_city.clone()),
        };
        let request = self.weather_requests.fetch_add(1, Ordering::SeqCst) + 1;

        if city == ALL_LOCATIONS {
            self.set(|s| {
                s.weather_info = None;
                s.weather_message = SELECT_CITY_PROMPT.into();
            });
            return;
        }

        let result = self.weather.current_weather(&city).await;
        if self.weather_requests.load(Ordering::SeqCst) != request {
            tracing::debug!(city = %city, "Discarding stale weather response");
            return;
        }

        match result {
            Ok(info) => {
                tracing::debug!(city = %city, temperature = info.temperature, "Weather loaded");
                self.set(|s| {
                    s.weather_info = Some(info);
                    s.weather_message.clear();
                });
            }
            Err(err) => {
                tracing::warn!(city = %city, error = %err, "Failed to load weather");
                self.set(|s| {
                    s.weather_info = None;
                    s.weather_message = status_text(&err, "Erro ao buscar o clima.");
                });
            }
        }
    }

    // ========== Form, filters, sort ==========

    /// "Apply to all units" is ignored while editing
    pub fn update_form(&self, update: FormUpdate) {
        if matches!(update, FormUpdate::ApplyAllUnits(_)) && self.read(RestaurantState::is_editing)
        {
            return;
        }
        self.set(|s| s.form_data = s.form_data.with(update));
    }

    pub fn update_filter(&self, update: FilterUpdate) {
        self.set(|s| s.filters = s.filters.with(update));
    }

    pub fn toggle_sort(&self, key: SortKey) {
        self.set(|s| s.sort_config = s.sort_config.toggled(key));
    }

    // ========== Mutations ==========

    /// Validate the form, then update the edited item or create new ones
    ///
    /// Creation across several units is sequential and stops at the first
    /// failure; records created before it stay on the backend.
    pub async fn submit_form(&self) {
        let (form, editing_id, weather_city, unit_options) = self.read(|s| {
            (
                s.form_data.clone(),
                s.editing_id.clone(),
                s.weather_city.clone(),
                s.unit_options.clone(),
            )
        });

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(error = %err, "Form rejected");
                self.set(|s| s.status_message = err.to_string());
                return;
            }
        };

        self.set(|s| {
            s.is_saving = true;
            s.status_message.clear();
        });

        let saved = match editing_id.as_deref() {
            Some(id) => self
                .data
                .update_menu(id, &MenuUpdate::from(payload.for_unit(form.unit.as_str())))
                .await
                .map(|item| {
                    tracing::info!(id = %item.id, "Menu item updated");
                    "Item atualizado."
                }),
            None => {
                let targets = if form.apply_all_units {
                    unit_options.clone()
                } else {
                    vec![form.unit.clone()]
                };
                self.create_for_units(&payload, &targets)
                    .await
                    .map(|_| "Novo item adicionado.")
            }
        };

        match saved {
            Ok(message) => {
                let seed = if weather_city != ALL_LOCATIONS && unit_options.contains(&weather_city)
                {
                    weather_city
                } else {
                    unit_options
                        .first()
                        .cloned()
                        .unwrap_or_else(|| self.options.default_unit())
                };
                self.set(|s| {
                    s.status_message = message.into();
                    s.form_data = FormData::empty(seed);
                    s.editing_id = None;
                });
                self.reload_menu(false).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to save menu item");
                self.set(|s| s.status_message = status_text(&err, "Erro ao salvar."));
            }
        }

        self.set(|s| s.is_saving = false);
    }

    async fn create_for_units(
        &self,
        payload: &MenuPayload,
        units: &[String],
    ) -> Result<Vec<MenuItem>, ClientError> {
        let mut created = Vec::with_capacity(units.len());
        for unit in units {
            let item = self.data.create_menu(&payload.for_unit(unit.as_str())).await?;
            tracing::info!(id = %item.id, unit = %unit, "Menu item created");
            created.push(item);
        }
        Ok(created)
    }

    /// Load an item into the form and mark it as the edit target
    pub fn start_edit(&self, item: &MenuItem) {
        let form = FormData::from_item(item, &self.options.default_unit());
        self.set(|s| {
            s.form_data = form;
            s.editing_id = Some(item.id.clone());
            s.status_message = "Editando item.".into();
        });
    }

    pub fn cancel_edit(&self) {
        let form = FormData::empty(self.options.default_unit());
        self.set(|s| {
            s.editing_id = None;
            s.form_data = form;
            s.status_message = "Edição cancelada.".into();
        });
    }

    /// Flip availability with a single-field update
    pub async fn toggle_availability(&self, item: &MenuItem) {
        let update = MenuUpdate::availability(!item.available);
        match self.data.update_menu(&item.id, &update).await {
            Ok(_) => {
                tracing::info!(id = %item.id, available = !item.available, "Availability updated");
                self.set(|s| s.status_message = "Disponibilidade atualizada.".into());
                self.reload_menu(false).await;
            }
            Err(err) => {
                tracing::warn!(id = %item.id, error = %err, "Failed to update availability");
                self.set(|s| {
                    s.status_message = status_text(&err, "Erro ao atualizar disponibilidade.");
                });
            }
        }
    }

    /// Delete after explicit confirmation; a refusal changes nothing
    pub async fn delete_item(&self, item: &MenuItem) {
        let message = format!("Deseja remover \"{}\"?", item.name);
        if !self.confirm.confirm("Excluir prato", &message).await {
            tracing::debug!(id = %item.id, "Deletion cancelled");
            return;
        }

        match self.data.delete_menu(&item.id).await {
            Ok(()) => {
                tracing::info!(id = %item.id, "Menu item deleted");
                self.set(|s| s.status_message = "Item removido.".into());
                self.reload_menu(false).await;
            }
            Err(err) => {
                tracing::warn!(id = %item.id, error = %err, "Failed to delete menu item");
                self.set(|s| s.status_message = status_text(&err, "Erro ao excluir."));
            }
        }
    }
}

/// Error text for the status area, or `fallback` when it has none
fn status_text(err: &impl Display, fallback: &str) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

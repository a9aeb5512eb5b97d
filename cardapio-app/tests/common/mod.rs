//! In-memory collaborators for driving the store

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cardapio_app::{ConfirmDialog, RestaurantStore, StoreOptions};
use cardapio_client::{ClientError, ClientResult, DataClient, WeatherError, WeatherProvider};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::{Dialect, MenuItem, MenuPayload, MenuUpdate, TeamMember, Unit, WeatherInfo};
use tokio::sync::Notify;

/// One gateway call as the store issued it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListMenu,
    CreateMenu(MenuPayload),
    UpdateMenu(String, MenuUpdate),
    DeleteMenu(String),
    ListUnits,
    ListTeam,
}

/// Backend stand-in holding the "remote" records
#[derive(Default)]
pub struct FakeDataClient {
    calls: Mutex<Vec<Call>>,
    menu: Mutex<Vec<MenuItem>>,
    units: Mutex<Vec<Unit>>,
    team: Mutex<Vec<TeamMember>>,
    /// 1-based create call that fails
    fail_create_at: Mutex<Option<usize>>,
    fail_reads: Mutex<bool>,
    fail_writes: Mutex<bool>,
    /// Each queued gate holds one `list_menu` call until notified
    menu_gates: Mutex<VecDeque<Arc<Notify>>>,
    next_id: Mutex<usize>,
}

impl FakeDataClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_menu(items: Vec<MenuItem>) -> Arc<Self> {
        let fake = Self::default();
        *fake.menu.lock() = items;
        Arc::new(fake)
    }

    pub fn set_units(&self, units: Vec<Unit>) {
        *self.units.lock() = units;
    }

    pub fn set_team(&self, team: Vec<TeamMember>) {
        *self.team.lock() = team;
    }

    pub fn push_remote(&self, item: MenuItem) {
        self.menu.lock().push(item);
    }

    pub fn fail_create_at(&self, call: usize) {
        *self.fail_create_at.lock() = Some(call);
    }

    pub fn fail_reads(&self) {
        *self.fail_reads.lock() = true;
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock() = true;
    }

    /// Hold the next `list_menu` call until the returned gate is notified
    pub fn gate_next_menu_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.menu_gates.lock().push_back(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    pub fn creates(&self) -> Vec<MenuPayload> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Call::CreateMenu(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn remote_menu(&self) -> Vec<MenuItem> {
        self.menu.lock().clone()
    }

    /// Wait until at least `n` calls were recorded
    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..200 {
            if self.calls.lock().len() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected {n} gateway calls, saw {:?}", self.calls());
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn read_result(&self) -> ClientResult<()> {
        if *self.fail_reads.lock() {
            Err(backend_error("Falha ao listar."))
        } else {
            Ok(())
        }
    }

    fn write_result(&self) -> ClientResult<()> {
        if *self.fail_writes.lock() {
            Err(backend_error("Falha ao gravar."))
        } else {
            Ok(())
        }
    }
}

pub fn backend_error(message: &str) -> ClientError {
    ClientError::Backend {
        status: 400,
        message: message.to_string(),
    }
}

#[async_trait]
impl DataClient for FakeDataClient {
    fn dialect(&self) -> Dialect {
        Dialect::Parse
    }

    async fn list_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.record(Call::ListMenu);
        // Snapshot before waiting, like a response already in flight
        let snapshot = self.menu.lock().clone();
        let gate = self.menu_gates.lock().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.read_result()?;
        Ok(snapshot)
    }

    async fn create_menu(&self, payload: &MenuPayload) -> ClientResult<MenuItem> {
        self.record(Call::CreateMenu(payload.clone()));
        let creates = self.count(|c| matches!(c, Call::CreateMenu(_)));
        if *self.fail_create_at.lock() == Some(creates) {
            return Err(backend_error("Falha ao criar."));
        }
        self.write_result()?;

        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            format!("novo-{next}")
        };
        let item = MenuItem {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: Some(payload.price),
            category: payload.category.clone(),
            unit: payload.unit.clone(),
            available: payload.available,
        };
        self.menu.lock().push(item.clone());
        Ok(item)
    }

    async fn update_menu(&self, id: &str, update: &MenuUpdate) -> ClientResult<MenuItem> {
        self.record(Call::UpdateMenu(id.to_string(), update.clone()));
        self.write_result()?;

        let mut menu = self.menu.lock();
        let item = menu
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| backend_error("Object not found."))?;
        if let Some(name) = &update.name {
            item.name = name.clone();
        }
        if let Some(description) = &update.description {
            item.description = description.clone();
        }
        if let Some(price) = update.price {
            item.price = Some(price);
        }
        if let Some(category) = &update.category {
            item.category = category.clone();
        }
        if let Some(available) = update.available {
            item.available = available;
        }
        if let Some(unit) = &update.unit {
            item.unit = Some(unit.clone());
        }
        Ok(item.clone())
    }

    async fn delete_menu(&self, id: &str) -> ClientResult<()> {
        self.record(Call::DeleteMenu(id.to_string()));
        self.write_result()?;
        self.menu.lock().retain(|i| i.id != id);
        Ok(())
    }

    async fn list_units(&self) -> ClientResult<Vec<Unit>> {
        self.record(Call::ListUnits);
        self.read_result()?;
        Ok(self.units.lock().clone())
    }

    async fn list_team(&self) -> ClientResult<Vec<TeamMember>> {
        self.record(Call::ListTeam);
        self.read_result()?;
        Ok(self.team.lock().clone())
    }
}

/// Weather stand-in knowing a fixed set of cities
pub struct FakeWeather {
    cities: Vec<String>,
    calls: Mutex<Vec<String>>,
    gates: Mutex<VecDeque<Arc<Notify>>>,
}

impl FakeWeather {
    pub fn new(cities: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            cities: cities.iter().map(|c| c.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
            gates: Mutex::new(VecDeque::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn gate_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().push_back(gate.clone());
        gate
    }

    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..200 {
            if self.calls.lock().len() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected {n} weather calls, saw {:?}", self.calls());
    }
}

/// Temperature encodes the city name length so responses are distinguishable
pub fn weather_for(city: &str) -> WeatherInfo {
    WeatherInfo {
        temperature: city.chars().count() as f64,
        windspeed: 10.0,
        time: "2026-10-14T12:00".into(),
    }
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current_weather(&self, city: &str) -> Result<WeatherInfo, WeatherError> {
        self.calls.lock().push(city.to_string());
        let gate = self.gates.lock().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.cities.iter().any(|c| c == city) {
            Ok(weather_for(city))
        } else {
            Err(WeatherError::UnsupportedLocation(city.to_string()))
        }
    }
}

/// Confirmation stand-in with a fixed answer
pub struct RecordingConfirm {
    answer: bool,
    prompts: Mutex<Vec<(String, String)>>,
}

impl RecordingConfirm {
    pub fn new(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ConfirmDialog for RecordingConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.prompts
            .lock()
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}

pub const CITIES: [&str; 5] = [
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Curitiba",
    "Recife",
];

pub fn options() -> StoreOptions {
    StoreOptions::new(CITIES.iter().map(|c| c.to_string()).collect())
}

pub struct Harness {
    pub store: Arc<RestaurantStore>,
    pub data: Arc<FakeDataClient>,
    pub weather: Arc<FakeWeather>,
    pub confirm: Arc<RecordingConfirm>,
}

pub fn harness_with(data: Arc<FakeDataClient>, confirm_answer: bool) -> Harness {
    let weather = FakeWeather::new(&CITIES);
    let confirm = RecordingConfirm::new(confirm_answer);
    let store = Arc::new(RestaurantStore::new(
        data.clone(),
        weather.clone(),
        confirm.clone(),
        options(),
    ));
    Harness {
        store,
        data,
        weather,
        confirm,
    }
}

pub fn harness() -> Harness {
    harness_with(FakeDataClient::new(), true)
}

pub fn menu_item(id: &str, name: &str, unit: &str, price: i64, available: bool) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        description: String::new(),
        price: Some(Decimal::new(price, 0)),
        category: "Prato principal".into(),
        unit: Some(unit.into()),
        available,
    }
}

pub fn unit(id: &str, name: Option<&str>) -> Unit {
    Unit {
        id: id.into(),
        name: name.map(str::to_owned),
        city: None,
        address: None,
        phone: None,
        description: None,
        weather_location: None,
    }
}

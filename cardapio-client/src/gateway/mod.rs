//! Backend gateway
//!
//! One capability set over two REST dialects. The concrete client is picked
//! once by [`connect`] and handed out as `Arc<dyn DataClient>`.

mod http;
pub mod parse;
pub mod supabase;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::is_valid_price;
use shared::{Decimal, Dialect, MenuItem, MenuPayload, MenuUpdate, TeamMember, Unit};

use crate::{ApiProvider, ClientConfig, ClientError, ClientResult};

pub use parse::ParseClient;
pub use supabase::SupabaseClient;

/// Gateway trait
///
/// Every record returned has gone through the normalizer.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Wire dialect spoken by this client
    fn dialect(&self) -> Dialect;

    async fn list_menu(&self) -> ClientResult<Vec<MenuItem>>;
    async fn create_menu(&self, payload: &MenuPayload) -> ClientResult<MenuItem>;
    async fn update_menu(&self, id: &str, update: &MenuUpdate) -> ClientResult<MenuItem>;
    async fn delete_menu(&self, id: &str) -> ClientResult<()>;
    async fn list_units(&self) -> ClientResult<Vec<Unit>>;
    async fn list_team(&self) -> ClientResult<Vec<TeamMember>>;
}

/// Build the client for the configured provider
pub fn connect(config: &ClientConfig) -> ClientResult<Arc<dyn DataClient>> {
    let client: Arc<dyn DataClient> = match config.provider {
        ApiProvider::Back4App => Arc::new(ParseClient::new(config)?),
        ApiProvider::Supabase => Arc::new(SupabaseClient::new(config)?),
    };
    tracing::info!(dialect = %client.dialect(), "Data client ready");
    Ok(client)
}

/// Reject negative prices before anything is sent
pub(crate) fn ensure_valid_price(price: Option<Decimal>) -> ClientResult<()> {
    match price {
        Some(price) if !is_valid_price(price) => {
            Err(ClientError::Validation("Preço inválido.".into()))
        }
        _ => Ok(()),
    }
}

/// Normalize and decode one backend record
pub(crate) fn decode_record<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    match value {
        Value::Object(fields) => Ok(shared::normalize_record(fields).into_entity()?),
        other => Err(ClientError::InvalidResponse(format!(
            "esperado um objeto, recebido {other}"
        ))),
    }
}

/// Normalize and decode an array of backend records
pub(crate) fn decode_records<T: DeserializeOwned>(value: Value) -> ClientResult<Vec<T>> {
    match value {
        Value::Array(records) => records.into_iter().map(decode_record).collect(),
        other => Err(ClientError::InvalidResponse(format!(
            "esperada uma lista, recebido {other}"
        ))),
    }
}

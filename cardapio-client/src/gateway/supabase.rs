//! PostgREST dialect (Supabase)
//!
//! Tables live under `<SUPABASE_URL>/rest/v1`. Writes ask for
//! `Prefer: return=representation` and answer the affected rows as an array.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{Dialect, MenuItem, MenuPayload, MenuUpdate, TeamMember, Unit};

use super::http::RestTransport;
use super::{DataClient, decode_record, decode_records, ensure_valid_price};
use crate::{ClientConfig, ClientError, ClientResult, Collections};

const MISSING_CREDENTIALS: &str =
    "Configure as variáveis do Supabase antes de utilizar este provedor.";
const INVALID_KEY: &str = "Chave do Supabase inválida.";

/// PostgREST-dialect data client
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    /// Configuration problem found at construction; every call then fails fast
    transport: Result<RestTransport, &'static str>,
    collections: Collections,
}

impl SupabaseClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let creds = &config.supabase;
        let transport = match (&creds.url, &creds.api_key) {
            (Some(url), Some(api_key)) => match auth_headers(api_key) {
                Ok(headers) => {
                    let base_url = format!("{}/rest/v1", url.trim_end_matches('/'));
                    Ok(RestTransport::new(
                        config.http_client()?,
                        &base_url,
                        headers,
                        Dialect::Postgrest,
                    ))
                }
                Err(message) => {
                    tracing::warn!("Supabase key is not a valid header value; requests will be refused");
                    Err(message)
                }
            },
            _ => {
                tracing::warn!("Supabase credentials incomplete; requests will be refused");
                Err(MISSING_CREDENTIALS)
            }
        };

        Ok(Self {
            transport,
            collections: config.collections.clone(),
        })
    }

    fn transport(&self) -> ClientResult<&RestTransport> {
        self.transport
            .as_ref()
            .map_err(|message| ClientError::Configuration((*message).into()))
    }

    async fn list<T: DeserializeOwned>(&self, table: &str) -> ClientResult<Vec<T>> {
        let body = self
            .transport()?
            .send(Method::GET, table, &[("select", "*".to_string())], None)
            .await?;
        decode_records(body)
    }
}

fn auth_headers(api_key: &str) -> Result<HeaderMap, &'static str> {
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("apikey"), header_value(api_key)?);
    headers.insert(AUTHORIZATION, header_value(&format!("Bearer {api_key}"))?);
    headers.insert(
        HeaderName::from_static("prefer"),
        HeaderValue::from_static("return=representation"),
    );
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, &'static str> {
    HeaderValue::from_str(value).map_err(|_| INVALID_KEY)
}

fn id_filter(id: &str) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

/// First row of a representation response
fn first_row(body: Value) -> ClientResult<MenuItem> {
    match body {
        Value::Array(rows) => match rows.into_iter().next() {
            Some(row) => decode_record(row),
            None => Err(ClientError::InvalidResponse(
                "nenhum registro retornado".into(),
            )),
        },
        other => decode_record(other),
    }
}

#[async_trait]
impl DataClient for SupabaseClient {
    fn dialect(&self) -> Dialect {
        Dialect::Postgrest
    }

    async fn list_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.list(&self.collections.menu).await
    }

    async fn create_menu(&self, payload: &MenuPayload) -> ClientResult<MenuItem> {
        let transport = self.transport()?;
        ensure_valid_price(Some(payload.price))?;

        let body = serde_json::to_value(payload)?;
        let rows = transport
            .send(Method::POST, &self.collections.menu, &[], Some(&body))
            .await?;
        first_row(rows)
    }

    async fn update_menu(&self, id: &str, update: &MenuUpdate) -> ClientResult<MenuItem> {
        let transport = self.transport()?;
        ensure_valid_price(update.price)?;

        let body = serde_json::to_value(update)?;
        let rows = transport
            .send(
                Method::PATCH,
                &self.collections.menu,
                &id_filter(id),
                Some(&body),
            )
            .await?;
        first_row(rows)
    }

    async fn delete_menu(&self, id: &str) -> ClientResult<()> {
        self.transport()?
            .send(Method::DELETE, &self.collections.menu, &id_filter(id), None)
            .await?;
        Ok(())
    }

    async fn list_units(&self) -> ClientResult<Vec<Unit>> {
        self.list(&self.collections.unit).await
    }

    async fn list_team(&self) -> ClientResult<Vec<TeamMember>> {
        self.list(&self.collections.team).await
    }
}

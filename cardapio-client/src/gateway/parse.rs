//! Parse REST dialect (Back4App)
//!
//! `GET /classes/<Class>` answers `{results: [...]}`; writes answer only
//! `objectId` and timestamps, so they are merged over the sent payload.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::{Dialect, MenuItem, MenuPayload, MenuUpdate, TeamMember, Unit};

use super::http::RestTransport;
use super::{DataClient, decode_record, decode_records, ensure_valid_price};
use crate::{ClientConfig, ClientError, ClientResult, Collections};

const MISSING_CREDENTIALS: &str = "Configure as variáveis do Back4App/Parse antes de continuar.";
const INVALID_CREDENTIAL: &str = "Credencial do Parse inválida.";

/// Parse-dialect data client
#[derive(Debug, Clone)]
pub struct ParseClient {
    /// Configuration problem found at construction; every call then fails fast
    transport: Result<RestTransport, &'static str>,
    collections: Collections,
}

impl ParseClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let creds = &config.parse;
        let transport = match (&creds.server_url, &creds.app_id, &creds.rest_key) {
            (Some(url), Some(app_id), Some(rest_key)) => match auth_headers(app_id, rest_key) {
                Ok(headers) => Ok(RestTransport::new(
                    config.http_client()?,
                    url,
                    headers,
                    Dialect::Parse,
                )),
                Err(message) => {
                    tracing::warn!("Parse credentials are not valid header values; requests will be refused");
                    Err(message)
                }
            },
            _ => {
                tracing::warn!("Parse credentials incomplete; requests will be refused");
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

    async fn list<T: DeserializeOwned>(&self, class: &str) -> ClientResult<Vec<T>> {
        let body = self
            .transport()?
            .send(Method::GET, &format!("classes/{class}"), &[], None)
            .await?;
        match body {
            Value::Object(mut map) => match map.remove("results") {
                Some(results) => decode_records(results),
                None => Err(ClientError::InvalidResponse("resposta sem 'results'".into())),
            },
            other => decode_records(other),
        }
    }
}

fn auth_headers(app_id: &str, rest_key: &str) -> Result<HeaderMap, &'static str> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-parse-application-id"),
        header_value(app_id)?,
    );
    headers.insert(
        HeaderName::from_static("x-parse-rest-api-key"),
        header_value(rest_key)?,
    );
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, &'static str> {
    HeaderValue::from_str(value).map_err(|_| INVALID_CREDENTIAL)
}

/// Write responses must be objects; anything else is not a Parse reply
fn into_object(value: Value) -> ClientResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::InvalidResponse(format!(
            "esperado um objeto, recebido {other}"
        ))),
    }
}

#[async_trait]
impl DataClient for ParseClient {
    fn dialect(&self) -> Dialect {
        Dialect::Parse
    }

    async fn list_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.list(&self.collections.menu).await
    }

    async fn create_menu(&self, payload: &MenuPayload) -> ClientResult<MenuItem> {
        let transport = self.transport()?;
        ensure_valid_price(Some(payload.price))?;

        let body = serde_json::to_value(payload)?;
        let created = transport
            .send(
                Method::POST,
                &format!("classes/{}", self.collections.menu),
                &[],
                Some(&body),
            )
            .await?;

        let created = into_object(created)?;
        let mut merged = into_object(body)?;
        merged.extend(created);
        decode_record(Value::Object(merged))
    }

    async fn update_menu(&self, id: &str, update: &MenuUpdate) -> ClientResult<MenuItem> {
        let transport = self.transport()?;
        ensure_valid_price(update.price)?;

        let body = serde_json::to_value(update)?;
        let updated = transport
            .send(
                Method::PUT,
                &format!("classes/{}/{id}", self.collections.menu),
                &[],
                Some(&body),
            )
            .await?;

        let updated = into_object(updated)?;
        let mut merged = into_object(body)?;
        merged.extend(updated);
        merged.insert("objectId".into(), Value::String(id.to_string()));
        decode_record(Value::Object(merged))
    }

    async fn delete_menu(&self, id: &str) -> ClientResult<()> {
        self.transport()?
            .send(
                Method::DELETE,
                &format!("classes/{}/{id}", self.collections.menu),
                &[],
                None,
            )
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

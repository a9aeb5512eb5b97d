// cardapio-client/src/gateway/http.rs
// Shared REST transport for both dialects

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use shared::Dialect;

use crate::{ClientError, ClientResult};

/// Pre-authenticated JSON transport bound to one base URL
#[derive(Debug, Clone)]
pub(crate) struct RestTransport {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    dialect: Dialect,
}

impl RestTransport {
    pub(crate) fn new(client: Client, base_url: &str, headers: HeaderMap, dialect: Dialect) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
            dialect,
        }
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers.clone());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        tracing::debug!(dialect = %self.dialect, %method, path, "Sending request");
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            Some(Value::Null)
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        if !status.is_success() {
            let message = error_message(self.dialect, body.as_ref());
            tracing::warn!(dialect = %self.dialect, status = status.as_u16(), error = %message, "Backend error");
            return Err(ClientError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        body.ok_or_else(|| ClientError::InvalidResponse("corpo da resposta não é JSON".into()))
    }
}

/// Dialect-specific error message extraction
fn error_message(dialect: Dialect, body: Option<&Value>) -> String {
    match dialect {
        Dialect::Parse => body
            .and_then(|b| b.get("error"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| "Erro ao comunicar com o Parse.".into()),
        Dialect::Postgrest => match body {
            Some(array @ Value::Array(_)) => array.to_string(),
            Some(b) => b
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| "Erro no Supabase.".into()),
            None => "Erro no Supabase.".into(),
        },
    }
}

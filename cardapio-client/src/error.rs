//! Client error types
//!
//! `Display` output is shown to restaurant staff as-is, hence pt-BR.

use thiserror::Error;

/// Gateway error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required credentials for the selected provider are absent
    #[error("{0}")]
    Configuration(String),

    /// Network, DNS, or timeout failure
    #[error("Falha de comunicação com o servidor: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` is extracted per dialect
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Resposta inválida do servidor: {0}")]
    InvalidResponse(String),

    /// Payload rejected before reaching the backend
    #[error("{0}")]
    Validation(String),

    /// Serialization error
    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<shared::RecordError> for ClientError {
    fn from(err: shared::RecordError) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}

/// Result type for gateway operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Weather provider error type
#[derive(Debug, Error)]
pub enum WeatherError {
    /// City is not in the coordinate table
    #[error("Cidade não suportada.")]
    UnsupportedLocation(String),

    /// The request never produced a response
    #[error("Não foi possível buscar o clima.")]
    Transport(#[from] reqwest::Error),

    /// The forecast service answered with a non-2xx status
    #[error("Não foi possível buscar o clima.")]
    Request { status: u16 },

    /// `current_weather` missing or undecodable
    #[error("Resposta inválida do serviço de clima.")]
    MalformedResponse,
}

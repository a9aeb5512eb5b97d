// cardapio-client/tests/weather_provider.rs
// Open-Meteo client against a local mock

mod common;

use cardapio_client::{ClientConfig, OpenMeteoClient, WeatherError, WeatherProvider};
use common::MockServer;
use serde_json::json;

fn client_for(base_url: &str) -> OpenMeteoClient {
    ClientConfig::default()
        .with_weather_base_url(base_url)
        .build_weather_provider()
        .unwrap()
}

#[tokio::test]
async fn test_current_weather_for_known_city() {
    let server = MockServer::start(|_| {
        (
            200,
            json!({
                "latitude": -8.05,
                "longitude": -34.88,
                "current_weather": { "temperature": 29.1, "windspeed": 14.4, "time": "2024-05-01T14:00" }
            }),
        )
    })
    .await;

    let info = client_for(&server.base_url)
        .current_weather("Recife")
        .await
        .unwrap();

    assert_eq!(info.temperature, 29.1);
    assert_eq!(info.windspeed, 14.4);
    assert_eq!(info.time, "2024-05-01T14:00");

    let request = &server.requests()[0];
    assert_eq!(request.path, "/v1/forecast");
    for param in [
        "latitude=-8.0476",
        "longitude=-34.877",
        "current_weather=true",
        "timezone=auto",
        "windspeed_unit=kmh",
    ] {
        assert!(request.query.contains(param), "missing {param} in {}", request.query);
    }
}

#[tokio::test]
async fn test_unsupported_city_makes_no_request() {
    let server = MockServer::start(|_| (200, json!({}))).await;

    let err = client_for(&server.base_url)
        .current_weather("Lisboa")
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::UnsupportedLocation(city) if city == "Lisboa"));
    assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn test_missing_current_weather_is_malformed() {
    let server = MockServer::start(|_| (200, json!({ "hourly": {} }))).await;

    let err = client_for(&server.base_url)
        .current_weather("Curitiba")
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::MalformedResponse));
    assert_eq!(err.to_string(), "Resposta inválida do serviço de clima.");
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start(|_| (503, json!({ "reason": "busy" }))).await;

    let err = client_for(&server.base_url)
        .current_weather("São Paulo")
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Request { status: 503 }));
}

#[tokio::test]
async fn test_transport_failure() {
    let url = common::closed_port_url().await;

    let err = client_for(&url).current_weather("Recife").await.unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)));
}

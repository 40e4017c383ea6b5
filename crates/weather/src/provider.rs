//! OpenWeatherMap current-conditions client.
//!
//! Calls the `/data/2.5/weather` endpoint and maps the nested response
//! into a flat [`WeatherObservation`]. The free tier reports temperature
//! in Kelvin; no unit conversion happens here.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::WeatherError;
use crate::models::WeatherObservation;

const BASE_URL: &str = "https://api.openweathermap.org";

/// Trait for sources of current weather conditions.
///
/// The diary service holds this trait object so tests can supply a
/// canned observation instead of hitting the network.
#[async_trait]
pub trait CurrentWeatherProvider: Send + Sync {
    /// Fetch the current conditions for the configured location.
    async fn fetch_current(&self) -> Result<WeatherObservation, WeatherError>;
}

// ============================================================================
// API response structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct OwmResponse {
    #[serde(default)]
    weather: Vec<OwmCondition>,
    main: Option<OwmMain>,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

/// Decode an OpenWeatherMap response body into an observation.
///
/// The endpoint reports an array of condition blocks; only the first is
/// meaningful for a single-location query.
pub fn parse_observation(body: &str) -> Result<WeatherObservation, WeatherError> {
    let response: OwmResponse = serde_json::from_str(body).map_err(|e| WeatherError::Parse {
        message: e.to_string(),
    })?;

    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Parse {
            message: "weather conditions missing from response".to_string(),
        })?;
    let main = response.main.ok_or_else(|| WeatherError::Parse {
        message: "temperature block missing from response".to_string(),
    })?;

    Ok(WeatherObservation {
        condition: condition.main,
        icon: condition.icon,
        temperature: main.temp,
    })
}

// ============================================================================
// OpenWeatherMapProvider
// ============================================================================

/// OpenWeatherMap provider for current conditions of a fixed city.
pub struct OpenWeatherMapProvider {
    client: Client,
    api_key: String,
    city: String,
    base_url: String,
}

impl OpenWeatherMapProvider {
    /// Create a new provider with the given API key and city name.
    pub fn new(api_key: String, city: String) -> Self {
        Self::new_with_base_url(api_key, city, BASE_URL)
    }

    /// Create a provider against a non-default endpoint, for tests.
    pub fn new_with_base_url(api_key: String, city: String, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            city,
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl CurrentWeatherProvider for OpenWeatherMapProvider {
    async fn fetch_current(&self) -> Result<WeatherObservation, WeatherError> {
        debug!("fetching current weather for {}", self.city);

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", self.city.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Unavailable {
                        message: "request timed out".to_string(),
                    }
                } else {
                    WeatherError::Unavailable {
                        message: format!("request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }
        if !status.is_success() {
            return Err(WeatherError::Unavailable {
                message: format!("provider answered with status {}", status),
            });
        }

        let body = response.text().await.map_err(|e| WeatherError::Unavailable {
            message: format!("failed to read response body: {}", e),
        })?;

        parse_observation(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenWeatherMapProvider {
        OpenWeatherMapProvider::new_with_base_url(
            "test-key".to_string(),
            "seoul".to_string(),
            &server.uri(),
        )
    }

    #[tokio::test]
    async fn fetch_current_decodes_a_successful_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "seoul"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"weather": [{"main": "Clear", "icon": "01d"}], "main": {"temp": 283.2}}"#,
            ))
            .mount(&mock_server)
            .await;

        let observation = provider(&mock_server).fetch_current().await.unwrap();
        assert_eq!(observation.condition, "Clear");
        assert_eq!(observation.icon, "01d");
        assert_eq!(observation.temperature, 283.2);
    }

    #[tokio::test]
    async fn fetch_current_maps_server_errors_to_unavailable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = provider(&mock_server).fetch_current().await.unwrap_err();
        assert!(matches!(err, WeatherError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn fetch_current_maps_401_to_unauthorized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = provider(&mock_server).fetch_current().await.unwrap_err();
        assert!(matches!(err, WeatherError::Unauthorized));
    }

    #[test]
    fn parses_full_response() {
        let body = r#"{
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 283.2, "pressure": 1012, "humidity": 70}
        }"#;

        let observation = parse_observation(body).unwrap();
        assert_eq!(observation.condition, "Clear");
        assert_eq!(observation.icon, "01d");
        assert_eq!(observation.temperature, 283.2);
    }

    #[test]
    fn first_condition_block_wins() {
        let body = r#"{
            "weather": [
                {"main": "Rain", "icon": "10d"},
                {"main": "Mist", "icon": "50d"}
            ],
            "main": {"temp": 290.0}
        }"#;

        let observation = parse_observation(body).unwrap();
        assert_eq!(observation.condition, "Rain");
        assert_eq!(observation.icon, "10d");
    }

    #[test]
    fn missing_conditions_is_parse_error() {
        let body = r#"{"weather": [], "main": {"temp": 283.2}}"#;
        assert!(matches!(
            parse_observation(body),
            Err(WeatherError::Parse { .. })
        ));
    }

    #[test]
    fn missing_temperature_is_parse_error() {
        let body = r#"{"weather": [{"main": "Clear", "icon": "01d"}]}"#;
        assert!(matches!(
            parse_observation(body),
            Err(WeatherError::Parse { .. })
        ));
    }

    #[test]
    fn undecodable_body_is_parse_error() {
        assert!(matches!(
            parse_observation("<html>rate limited</html>"),
            Err(WeatherError::Parse { .. })
        ));
    }
}

//! The fulfillment endpoint.
//!
//! One handler, strictly linear per request:
//! method gate → city extraction → normalize → lookup → fetch → format.
//!
//! Every reachable branch except the method gate answers HTTP 200 with a
//! JSON `fulfillmentText`, so the conversational platform can always speak
//! the result back to the user.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use weather_core::{WeatherProvider, format, geo};

const MSG_ONLY_POST: &str = "Only POST requests allowed";
const MSG_ASK_CITY: &str = "No entendí la ciudad. ¿En qué ciudad quieres saber el tiempo?";
const MSG_FETCH_FAILED: &str = "Error al obtener el clima. Intenta de nuevo más tarde.";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

/// Inbound Dialogflow payload, reduced to the single slot we read.
/// Every level is optional; absence anywhere collapses to "no city".
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FulfillmentRequest {
    query_result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryResult {
    parameters: Option<Parameters>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Parameters {
    city: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FulfillmentResponse {
    fulfillment_text: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn handle(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return (StatusCode::BAD_REQUEST, MSG_ONLY_POST).into_response();
    }

    let Some(city) = extract_city(&body) else {
        return fulfillment(MSG_ASK_CITY);
    };

    let normalized = geo::normalize_city(&city);

    // Echo the city exactly as the caller wrote it, not the normalized form.
    let Some(coords) = geo::lookup(&normalized) else {
        return fulfillment(format!(
            "Lo siento, no tengo datos para {city}. \
             Intenta con: Madrid, Barcelona, París, Londres, Nueva York, Tokio..."
        ));
    };

    // Single error boundary: unreachable provider, non-2xx and malformed
    // payloads all collapse to the same user-facing message.
    match state.provider.current(coords.latitude, coords.longitude).await {
        Ok(conditions) => {
            let text = format::fulfillment_text(&city, &conditions);
            info!(city = %city, "weather data found");
            fulfillment(text)
        }
        Err(err) => {
            error!(city = %city, error = %format!("{err:#}"), "weather fetch failed");
            fulfillment(MSG_FETCH_FAILED)
        }
    }
}

/// Pull the city slot out of the request body. A body that is not JSON, does
/// not carry the nested path, or carries an empty string all yield `None`.
fn extract_city(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<FulfillmentRequest>(body)
        .ok()?
        .query_result?
        .parameters?
        .city
        .filter(|city| !city.is_empty())
}

fn fulfillment(text: impl Into<String>) -> Response {
    Json(FulfillmentResponse {
        fulfillment_text: text.into(),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use weather_core::CurrentConditions;

    #[derive(Debug)]
    struct FixedProvider(CurrentConditions);

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn current(&self, _lat: f64, _lon: f64) -> anyhow::Result<CurrentConditions> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn current(&self, _lat: f64, _lon: f64) -> anyhow::Result<CurrentConditions> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    fn state(provider: impl WeatherProvider + 'static) -> State<AppState> {
        State(AppState {
            provider: Arc::new(provider),
        })
    }

    fn madrid_conditions() -> CurrentConditions {
        CurrentConditions {
            temperature_c: 22.3,
            wind_speed_kmh: 5.46,
            relative_humidity_pct: 40,
            weather_code: 0,
        }
    }

    fn body_for(city: &str) -> Bytes {
        Bytes::from(
            json!({ "queryResult": { "parameters": { "city": city } } }).to_string(),
        )
    }

    async fn fulfillment_text_of(response: Response) -> String {
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value: Value = serde_json::from_slice(&bytes).expect("json body");
        value["fulfillmentText"]
            .as_str()
            .expect("fulfillmentText string")
            .to_string()
    }

    #[tokio::test]
    async fn non_post_is_rejected_with_plain_text() {
        let response = handle(
            state(FixedProvider(madrid_conditions())),
            Method::GET,
            Bytes::new(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        assert_eq!(bytes.as_ref(), MSG_ONLY_POST.as_bytes());
    }

    #[tokio::test]
    async fn missing_city_asks_for_clarification() {
        for body in [
            Bytes::from(json!({}).to_string()),
            Bytes::from(json!({ "queryResult": {} }).to_string()),
            Bytes::from(json!({ "queryResult": { "parameters": {} } }).to_string()),
        ] {
            let response = handle(
                state(FixedProvider(madrid_conditions())),
                Method::POST,
                body,
            )
            .await;

            assert_eq!(fulfillment_text_of(response).await, MSG_ASK_CITY);
        }
    }

    #[tokio::test]
    async fn empty_city_is_treated_as_missing() {
        let response = handle(
            state(FixedProvider(madrid_conditions())),
            Method::POST,
            body_for(""),
        )
        .await;

        assert_eq!(fulfillment_text_of(response).await, MSG_ASK_CITY);
    }

    #[tokio::test]
    async fn non_json_body_is_treated_as_missing_city() {
        let response = handle(
            state(FixedProvider(madrid_conditions())),
            Method::POST,
            Bytes::from_static(b"definitely not json"),
        )
        .await;

        assert_eq!(fulfillment_text_of(response).await, MSG_ASK_CITY);
    }

    #[tokio::test]
    async fn unknown_city_lists_examples_and_echoes_input() {
        let response = handle(
            state(FixedProvider(madrid_conditions())),
            Method::POST,
            body_for("Atlantis"),
        )
        .await;

        let text = fulfillment_text_of(response).await;
        assert!(text.contains("Atlantis"));
        assert!(text.contains("Intenta con: Madrid, Barcelona"));
    }

    #[tokio::test]
    async fn accented_city_resolves_and_is_echoed_verbatim() {
        let response = handle(
            state(FixedProvider(madrid_conditions())),
            Method::POST,
            body_for("PARÍS"),
        )
        .await;

        let text = fulfillment_text_of(response).await;
        assert!(text.starts_with("En PARÍS:"));
    }

    #[tokio::test]
    async fn provider_failure_yields_generic_message_with_status_ok() {
        let response = handle(state(FailingProvider), Method::POST, body_for("madrid")).await;

        assert_eq!(fulfillment_text_of(response).await, MSG_FETCH_FAILED);
    }

    #[tokio::test]
    async fn madrid_end_to_end_text_is_exact() {
        let response = handle(
            state(FixedProvider(madrid_conditions())),
            Method::POST,
            body_for("madrid"),
        )
        .await;

        assert_eq!(
            fulfillment_text_of(response).await,
            "En madrid:\n\
             🌡️ Temperatura: 22.3°C\n\
             Ясно ☀️ / Despejado ☀️\n\
             💨 Viento: 5.5 km/h\n\
             💧 Humedad: 40%"
        );
    }

    #[tokio::test]
    async fn router_applies_method_gate() {
        let app = router(AppState {
            provider: Arc::new(FixedProvider(madrid_conditions())),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn router_serves_post_end_to_end() {
        let app = router(AppState {
            provider: Arc::new(FixedProvider(madrid_conditions())),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body_for("tokyo")))
                    .expect("request"),
            )
            .await
            .expect("response");

        let text = fulfillment_text_of(response).await;
        assert!(text.starts_with("En tokyo:"));
    }
}

//! GraphQL client for the flight-management API.
//!
//! One endpoint serves every query and mutation of the app. The endpoint can
//! be overridden at build time through the `GRAPHQL_FLIGHT_API_URL`
//! environment variable.

use contracts::api::{GraphqlRequest, GraphqlResponse};
use gloo_net::http::Request;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;

static ENDPOINT: Lazy<String> = Lazy::new(|| {
    option_env!("GRAPHQL_FLIGHT_API_URL")
        .map(str::to_string)
        .unwrap_or_else(|| "http://localhost:4000/graphql".to_string())
});

pub fn endpoint() -> &'static str {
    ENDPOINT.as_str()
}

/// Execute a GraphQL operation and decode its `data` into `T`.
///
/// `T` is the shape of the `data` object, i.e. a struct keyed by the
/// operation name. Entries in the `errors` array collapse into `Err`.
pub async fn execute<T: DeserializeOwned>(query: &str, variables: Value) -> Result<T, String> {
    let result = send(query, variables).await;
    if let Err(e) = &result {
        log::error!("GraphQL request failed: {e}");
    }
    result
}

async fn send<T: DeserializeOwned>(query: &str, variables: Value) -> Result<T, String> {
    let body = GraphqlRequest { query, variables };

    let response = Request::post(endpoint())
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| format!("Request failed: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: GraphqlResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))?;
    envelope.into_result()
}

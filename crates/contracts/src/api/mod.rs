//! GraphQL-over-HTTP envelope shared by every operation of the frontend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST body: the query document plus its variables object.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Response envelope. A response can carry both partial `data` and
/// `errors`; any error entry makes the whole operation fail here.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Collapse the envelope into a plain result.
    pub fn into_result(self) -> Result<T, String> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(messages.join("; "));
        }
        self.data.ok_or_else(|| "respuesta sin datos".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn data_envelope_decodes() {
        let raw = json!({ "data": { "value": 7 } }).to_string();
        let resp: GraphqlResponse<Payload> = serde_json::from_str(&raw).unwrap();
        assert_eq!(resp.into_result().unwrap(), Payload { value: 7 });
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let raw = json!({
            "data": null,
            "errors": [
                { "message": "first" },
                { "message": "second" }
            ]
        })
        .to_string();
        let resp: GraphqlResponse<Payload> = serde_json::from_str(&raw).unwrap();
        assert_eq!(resp.into_result(), Err("first; second".to_string()));
    }

    #[test]
    fn missing_data_is_an_error() {
        let raw = json!({}).to_string();
        let resp: GraphqlResponse<Payload> = serde_json::from_str(&raw).unwrap();
        assert!(resp.into_result().is_err());
    }

    #[test]
    fn request_serializes_query_and_variables() {
        let req = GraphqlRequest {
            query: "query($id: String!) { x(id: $id) }",
            variables: json!({ "id": "A320" }),
        };
        let raw = serde_json::to_value(&req).unwrap();
        assert_eq!(raw["variables"]["id"], "A320");
        assert!(raw["query"].as_str().unwrap().starts_with("query"));
    }
}

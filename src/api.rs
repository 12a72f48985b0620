use crate::cocktail::{Cocktail, SearchRequest};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/search";

// Message used when a failure response carries no usable error field.
const GENERIC_FAILURE: &str = "An error occurred while searching";

// Response body: either {"results": [...]} or {"error": "..."}. Both fields
// optional so the error field can take precedence even on a 2xx status.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    results: Option<Vec<Cocktail>>,
}

pub async fn search(endpoint: &str, req: &SearchRequest) -> Result<Vec<Cocktail>, String> {
    let client = reqwest::Client::new();
    let resp = client
        .post(endpoint)
        .json(req)
        .send()
        .await
        .map_err(|e| format!("search request to {endpoint} failed: {e}"))?;
    let ok = resp.status().is_success();
    let body = resp
        .text()
        .await
        .map_err(|e| format!("failed to read search response: {e}"))?;
    decode_response(ok, &body)
}

// Decoding rules, shared by the live client and the tests:
// - unparseable failure body -> generic message
// - an "error" field wins regardless of status
// - non-2xx without an error field -> generic message
// - otherwise the (possibly absent) results sequence
pub fn decode_response(ok: bool, body: &str) -> Result<Vec<Cocktail>, String> {
    let parsed: SearchResponse = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(_) if !ok => return Err(GENERIC_FAILURE.to_string()),
        Err(e) => return Err(format!("failed to parse search response: {e}")),
    };
    if let Some(msg) = parsed.error {
        return Err(msg);
    }
    if !ok {
        return Err(GENERIC_FAILURE.to_string());
    }
    Ok(parsed.results.unwrap_or_default())
}

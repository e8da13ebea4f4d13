use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use llmrandom::dataset::{parse_payload, Observation};

/// Fetches and decodes the results document served next to the page.
pub(super) async fn fetch_observations(url: &str) -> Result<Vec<Observation>, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| format!("fetch: request for {url} failed"))?;
    let resp = resp
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch: expected a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("fetch: {url} returned status {}", resp.status()));
    }

    let body = resp
        .text()
        .map_err(|_| "fetch: body unavailable".to_string())?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| "fetch: reading body failed".to_string())?;
    let body = body
        .as_string()
        .ok_or("fetch: body is not text".to_string())?;

    parse_payload(&body).map_err(|e| e.to_string())
}

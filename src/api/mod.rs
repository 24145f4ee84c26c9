//! Outbound HTTP
//!
//! Browser `fetch` wrappers, organized by data source.

mod rates;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::RateError;

pub use rates::*;

fn network_error(err: JsValue) -> RateError {
    RateError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// GET `url` and return the body as text
async fn fetch_text(url: &str) -> Result<String, RateError> {
    let window = web_sys::window().ok_or(RateError::NoWindow)?;
    let response = JsFuture::from(window.fetch_with_str(url)).await.map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;
    if !response.ok() {
        return Err(RateError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    body.as_string()
        .ok_or_else(|| RateError::Network("response body is not text".to_string()))
}

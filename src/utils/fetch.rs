//! Network fetching utilities with timeout support.
//!
//! Wraps the browser Fetch API, racing every request against a timeout.

use folio_core::ProviderError;
use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Timeout
// =============================================================================

/// Await `promise`, giving up after `timeout_ms`.
///
/// The timer is cleared as soon as the race settles, so a request that
/// wins leaves nothing scheduled behind it.
async fn with_timeout(
    window: &Window,
    promise: Promise,
    timeout_ms: i32,
) -> Result<JsValue, ProviderError> {
    let mut timer = None;
    // Resolves to undefined when the timer fires
    let timeout = Promise::new(&mut |resolve, _| {
        timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms)
            .ok();
    });

    let race = Promise::race(&Array::of2(&promise, &timeout));
    let outcome = JsFuture::from(race).await;

    if let Some(handle) = timer {
        window.clear_timeout_with_handle(handle);
    }

    match outcome {
        Ok(value) if value.is_undefined() => Err(ProviderError::Timeout),
        Ok(value) => Ok(value),
        Err(err) => Err(ProviderError::Network(
            err.as_string().unwrap_or_else(|| "fetch rejected".to_string()),
        )),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text from a URL using the Fetch API with timeout.
///
/// If the request takes longer than `FETCH_TIMEOUT_MS`, returns
/// `ProviderError::Timeout`.
pub async fn fetch_text(url: &str) -> Result<String, ProviderError> {
    let window = web_sys::window().ok_or(ProviderError::Unavailable)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| ProviderError::Network("failed to create request".to_string()))?;

    let fetch_promise = window.fetch_with_request(&request);

    let result = with_timeout(&window, fetch_promise, FETCH_TIMEOUT_MS).await?;
    let resp: Response = result
        .dyn_into()
        .map_err(|_| ProviderError::Network("unexpected fetch result".to_string()))?;

    if !resp.ok() {
        return Err(ProviderError::Http(resp.status()));
    }

    let body = resp
        .text()
        .map_err(|_| ProviderError::Network("failed to read response".to_string()))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|_| ProviderError::Network("failed to read response".to_string()))?;

    text.as_string()
        .ok_or_else(|| ProviderError::Parse("response body is not text".to_string()))
}

//! Browser `fetch` transport for the repository clients.

use alfdocs_core::{Body, HttpRequest, HttpResponse, Transport, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Sends requests with the Fetch API in CORS mode.
///
/// Every HTTP status is handed back to the caller; only exchanges that
/// produce no response at all (CORS, offline, aborted) are errors. No
/// timeout is applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let window =
            web_sys::window().ok_or_else(|| TransportError::new("window not available"))?;

        let headers = Headers::new().map_err(js_error)?;
        headers.set("Accept", "application/json").map_err(js_error)?;

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);
        match &request.body {
            Some(Body::Json(value)) => {
                headers.set("Content-Type", "application/json").map_err(js_error)?;
                opts.set_body(&JsValue::from_str(&value.to_string()));
            }
            Some(Body::Text(text)) => {
                headers.set("Content-Type", "text/plain").map_err(js_error)?;
                opts.set_body(&JsValue::from_str(text));
            }
            None => {}
        }
        opts.set_headers(&headers);

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;
        let resp: Response = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse::new(status, text.as_string().unwrap_or_default()))
    }
}

fn js_error(value: JsValue) -> TransportError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "fetch failed".to_string());
    TransportError::new(message)
}

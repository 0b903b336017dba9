//! `fetch`-backed implementation of the core [`Transport`] seam.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use dhwani_core::{Result, TranslateError, TranslationRequest, Transport, TransportReply};

pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, url: &str, request: &TranslationRequest) -> Result<TransportReply> {
        let body = serde_json::to_string(request)
            .map_err(|e| TranslateError::TransportFailure(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| transport_err("request build failed", &e))?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(|e| transport_err("header set failed", &e))?;

        let window = web_sys::window()
            .ok_or_else(|| TranslateError::TransportFailure("no window".to_string()))?;
        let resp_js = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| transport_err("fetch failed", &e))?;
        let response: Response = resp_js
            .dyn_into()
            .map_err(|_| TranslateError::TransportFailure("not a Response".to_string()))?;

        let status = response.status();
        let text_promise = response
            .text()
            .map_err(|e| transport_err("no response body", &e))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| transport_err("body read failed", &e))?;

        Ok(TransportReply {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn transport_err(context: &str, value: &JsValue) -> TranslateError {
    TranslateError::TransportFailure(format!("{context}: {value:?}"))
}

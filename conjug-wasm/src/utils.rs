use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Console warning, used for rejected drops and malformed round files.
pub fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

/// Absolute URL for a bundled asset, honoring the optional
/// `window.__BASE_URL` set by the host page.
pub fn asset_url(path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = web_sys::window()
        .and_then(|w| {
            let v = js_sys::Reflect::get(&w, &JsValue::from_str("__BASE_URL")).ok()?;
            v.as_string()
        })
        .unwrap_or_else(|| "/".to_string());
    let base = if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    };
    format!("{}{}", base, p.trim_start_matches('/'))
}

/// Fetch a text resource, trying fallback URLs in order.
pub async fn fetch_text_with_fallbacks(window: &Window, urls: &[&str]) -> Option<String> {
    for url in urls {
        let Ok(resp_value) = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url)).await
        else {
            continue;
        };
        let Ok(resp) = resp_value.dyn_into::<web_sys::Response>() else {
            continue;
        };
        if !resp.ok() {
            continue;
        }
        if let Ok(text_promise) = resp.text()
            && let Ok(text_js) = wasm_bindgen_futures::JsFuture::from(text_promise).await
            && let Some(s) = text_js.as_string()
        {
            return Some(s);
        }
    }
    None
}

/// Minimal `?a=b&c=d` parser used at start-up for the round selector.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    for pair in search.trim_start_matches('?').split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

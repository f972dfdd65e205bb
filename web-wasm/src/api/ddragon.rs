//! Data Dragon 取得（ブラウザ fetch）

use async_trait::async_trait;
use champ_gallery_common::{CatalogSource, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// window.fetch による取得口
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSource;

/// JsValue のエラーを文字列化
fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn fetch_response(url: &str) -> std::result::Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    resp_value.dyn_into()
}

#[async_trait(?Send)]
impl CatalogSource for FetchSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = fetch_response(url)
            .await
            .map_err(|e| Error::Network(js_error_message(&e)))?;

        if !resp.ok() {
            return Err(Error::Status {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        let text = resp
            .text()
            .map_err(|e| Error::Network(js_error_message(&e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| Error::Network(js_error_message(&e)))?;

        text.as_string()
            .ok_or_else(|| Error::Parse("レスポンスが文字列ではありません".into()))
    }
}

/// 取得失敗をコンソールに出力
pub fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub fn log_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

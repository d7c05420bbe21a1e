//! Settings Commands
//!
//! Frontend bindings for the backend's key-value preference store.

use serde::Serialize;

use super::{invoke, js_error};

#[derive(Serialize)]
struct KeyArgs<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetArgs<'a> {
    key: &'a str,
    value: &'a str,
}

/// Read one preference. `None` when the key has never been written.
pub async fn get_setting(key: &str) -> Result<Option<String>, String> {
    let js_args = serde_wasm_bindgen::to_value(&KeyArgs { key }).map_err(|e| e.to_string())?;
    let result = invoke("get_setting", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_setting(key: &str, value: &str) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&SetArgs { key, value }).map_err(|e| e.to_string())?;
    invoke("set_setting", js_args).await.map_err(js_error)?;
    Ok(())
}

//! Backend Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod schedule;
mod settings;
mod task;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Stringify a rejected invoke for the `Result<_, String>` surface.
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use schedule::*;
pub use settings::*;
pub use task::*;

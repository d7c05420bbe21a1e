//! Backend Event Channel
//!
//! One-way push events from the backend's reminder scheduler.

use leptos::task::spawn_local;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::ReminderEvent;

/// Event fired by the backend when a reminder comes due.
pub const REMINDER_EVENT: &str = "reminder-due";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &js_sys::Function) -> JsValue;
}

/// Envelope the host wraps around every event payload.
#[derive(Deserialize)]
struct Envelope {
    payload: ReminderEvent,
}

/// Subscribe to reminder events.
///
/// The subscription lives for the whole process, so the closure is leaked
/// rather than dropped. Malformed payloads are logged and skipped.
pub fn on_reminder(handler: impl Fn(ReminderEvent) + 'static) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
        match serde_wasm_bindgen::from_value::<Envelope>(raw) {
            Ok(envelope) => handler(envelope.payload),
            Err(e) => web_sys::console::error_1(
                &format!("[Events] Dropping malformed reminder event: {}", e).into(),
            ),
        }
    });
    spawn_local(async move {
        let _ = listen(REMINDER_EVENT, callback.as_ref().unchecked_ref()).await;
        callback.forget();
    });
}

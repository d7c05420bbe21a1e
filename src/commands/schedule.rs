//! Schedule Commands
//!
//! Frontend bindings for class-schedule backend commands.

use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error};
use crate::models::ScheduleEntry;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
struct EntryArgs<'a> {
    entry: &'a ScheduleEntry,
}

// ========================
// Commands
// ========================

/// Fetch the whole schedule as a day-name -> entries mapping.
pub async fn list_schedule() -> Result<HashMap<String, Vec<ScheduleEntry>>, String> {
    let result = invoke("list_schedule", JsValue::NULL)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Create a schedule entry. `entry.id` must be 0; the backend assigns the real id.
pub async fn create_schedule_entry(entry: &ScheduleEntry) -> Result<ScheduleEntry, String> {
    let js_args = serde_wasm_bindgen::to_value(&EntryArgs { entry }).map_err(|e| e.to_string())?;
    let result = invoke("create_schedule_entry", js_args)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_schedule_entry(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_schedule_entry", js_args)
        .await
        .map_err(js_error)?;
    Ok(())
}

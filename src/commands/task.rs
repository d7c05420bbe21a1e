//! Task Commands
//!
//! Frontend bindings for task-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error};
use crate::models::Task;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
struct TaskArgs<'a> {
    task: &'a Task,
}

#[derive(Serialize)]
struct SetDoneArgs {
    id: i64,
    done: bool,
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_tasks", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Create a task. `task.id` must be 0; the backend assigns the real id.
pub async fn create_task(task: &Task) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&TaskArgs { task }).map_err(|e| e.to_string())?;
    let result = invoke("create_task", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_task_done(id: i64, done: bool) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&SetDoneArgs { id, done }).map_err(|e| e.to_string())?;
    invoke("set_task_done", js_args).await.map_err(js_error)?;
    Ok(())
}

pub async fn delete_task(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_task", js_args).await.map_err(js_error)?;
    Ok(())
}

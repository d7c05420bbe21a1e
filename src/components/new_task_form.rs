//! New Task Form Component
//!
//! Form for creating tasks with a deadline and a reminder lead selection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::dialog;
use crate::models::Task;

/// Reminder lead options; the codes are opaque here and interpreted by the
/// backend scheduler.
const REMINDER_MODES: &[(&str, &str)] = &[
    ("NONE", "No reminder"),
    ("10M", "10 minutes before"),
    ("30M", "30 minutes before"),
    ("1H", "1 hour before"),
    ("1D", "1 day before"),
];

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());
    let (reminder_mode, set_reminder_mode) = signal(String::from("NONE"));

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        let deadline_value = deadline.get();
        if title_value.is_empty() || deadline_value.is_empty() {
            dialog::alert("Title and deadline are required.");
            return;
        }
        let new_task = Task {
            id: 0,
            title: title_value,
            description: description.get().trim().to_string(),
            deadline: deadline_value,
            done: false,
            reminder_mode: reminder_mode.get(),
        };

        spawn_local(async move {
            match commands::create_task(&new_task).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_deadline.set(String::new());
                    set_reminder_mode.set(String::from("NONE"));
                    ctx.reload_tasks();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Tasks] Failed to create task: {}", e).into(),
                    );
                    // Inputs stay as typed so the user can retry
                    dialog::alert(&format!("Could not add task: {}", e));
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <input
                type="datetime-local"
                prop:value=move || deadline.get()
                on:input=move |ev| set_deadline.set(event_target_value(&ev))
            />
            <select
                prop:value=move || reminder_mode.get()
                on:change=move |ev| set_reminder_mode.set(event_target_value(&ev))
            >
                {REMINDER_MODES.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
            <button type="submit">"Add task"</button>
        </form>
    }
}

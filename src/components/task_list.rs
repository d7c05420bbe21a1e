//! Task List Component
//!
//! Partitioned task list: unfinished first, a divider, then finished.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::dialog;
use crate::format::format_deadline;
use crate::models::Task;
use crate::ordering::partition_tasks;

#[component]
pub fn TaskList(tasks: ReadSignal<Vec<Task>>) -> impl IntoView {
    let pending = move || partition_tasks(&tasks.get()).0;
    let done = move || partition_tasks(&tasks.get()).1;

    view! {
        <div class="task-list">
            <Show when=move || tasks.get().is_empty()>
                <p class="empty-state">"No tasks yet."</p>
            </Show>

            <ul class="task-section">
                <For
                    each=pending
                    // Done state is part of the key so a toggled task re-renders
                    key=|task| (task.id, task.done)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>

            <Show when=move || !done().is_empty()>
                <hr class="task-divider" />
                <ul class="task-section done">
                    <For
                        each=done
                        key=|task| (task.id, task.done)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// One task row: done-checkbox, title/description/deadline, delete control.
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let done = task.done;
    let deadline = format_deadline(&task.deadline);
    let description = task.description.clone();
    let row_class = if done { "task-item done" } else { "task-item" };
    let title_class = if done { "task-title struck" } else { "task-title" };

    let on_toggle = move |ev: web_sys::Event| {
        let new_done = event_target_checked(&ev);
        spawn_local(async move {
            match commands::set_task_done(id, new_done).await {
                Ok(()) => ctx.reload_tasks(),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Tasks] Failed to update task {}: {}", id, e).into(),
                    );
                    dialog::alert(&format!("Could not update task: {}", e));
                    // Refetch so the checkbox reverts to backend truth
                    ctx.reload_tasks();
                }
            }
        });
    };

    let on_delete = move || {
        spawn_local(async move {
            match commands::delete_task(id).await {
                Ok(()) => ctx.reload_tasks(),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Tasks] Failed to delete task {}: {}", id, e).into(),
                    );
                    dialog::alert(&format!("Could not delete task: {}", e));
                }
            }
        });
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                class="task-toggle"
                prop:checked=done
                on:change=on_toggle
            />
            <div class="task-body">
                <p class=title_class>{task.title.clone()}</p>
                {(!description.is_empty()).then(|| view! {
                    <p class="task-description">{description.clone()}</p>
                })}
                <p class="task-deadline">{format!("Deadline: {}", deadline)}</p>
            </div>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </li>
    }
}

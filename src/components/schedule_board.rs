//! Schedule Board Component
//!
//! Weekly class schedule grouped by day, in canonical weekday order.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::dialog;
use crate::models::ScheduleEntry;
use crate::ordering::ordered_day_groups;

#[component]
pub fn ScheduleBoard(
    schedule: ReadSignal<HashMap<String, Vec<ScheduleEntry>>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let groups = move || ordered_day_groups(&schedule.get());

    view! {
        <div class="schedule-board">
            <Show when=move || groups().is_empty()>
                <p class="empty-state">"No classes scheduled."</p>
            </Show>

            <For
                each=groups
                key=|(day, entries)| (*day, entries.iter().map(|e| e.id).collect::<Vec<_>>())
                children=move |(day, entries)| view! {
                    <div class="day-group">
                        <h3 class="day-header">{day}</h3>
                        {entries.iter().map(|entry| {
                            let id = entry.id;
                            let on_delete = move || {
                                spawn_local(async move {
                                    match commands::delete_schedule_entry(id).await {
                                        Ok(()) => ctx.reload_schedule(),
                                        Err(e) => {
                                            web_sys::console::error_1(
                                                &format!("[Schedule] Failed to delete entry {}: {}", id, e).into(),
                                            );
                                            dialog::alert(&format!("Could not delete class: {}", e));
                                        }
                                    }
                                });
                            };

                            view! {
                                <div class="schedule-entry">
                                    <div class="entry-body">
                                        <p class="course-name">{entry.course_name.clone()}</p>
                                        <p class="entry-time">
                                            {format!("{} (remind {}m)", entry.start_time, entry.reminder_lead_minutes)}
                                        </p>
                                    </div>
                                    <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            />
        </div>
    }
}

//! New Schedule Form Component
//!
//! Form for adding a weekly class entry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::dialog;
use crate::models::{ScheduleEntry, WEEKDAYS};

#[component]
pub fn NewScheduleForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (course_name, set_course_name) = signal(String::new());
    let (day, set_day) = signal(String::from("Monday"));
    let (start_time, set_start_time) = signal(String::new());
    let (lead_minutes, set_lead_minutes) = signal(String::from("10"));

    let create_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let course_value = course_name.get().trim().to_string();
        let day_value = day.get();
        let time_value = start_time.get();
        if course_value.is_empty() || day_value.is_empty() || time_value.is_empty() {
            dialog::alert("Course, day, and start time are required.");
            return;
        }
        let new_entry = ScheduleEntry {
            id: 0,
            day: day_value,
            course_name: course_value,
            start_time: time_value,
            // Unparseable lead input falls back to 10 minutes
            reminder_lead_minutes: lead_minutes.get().trim().parse().unwrap_or(10),
        };

        spawn_local(async move {
            match commands::create_schedule_entry(&new_entry).await {
                Ok(_) => {
                    set_course_name.set(String::new());
                    set_start_time.set(String::new());
                    ctx.reload_schedule();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Schedule] Failed to create entry: {}", e).into(),
                    );
                    dialog::alert(&format!("Could not add class: {}", e));
                }
            }
        });
    };

    view! {
        <form class="new-schedule-form" on:submit=create_entry>
            <input
                type="text"
                placeholder="Course name"
                prop:value=move || course_name.get()
                on:input=move |ev| set_course_name.set(event_target_value(&ev))
            />
            <select
                prop:value=move || day.get()
                on:change=move |ev| set_day.set(event_target_value(&ev))
            >
                {WEEKDAYS.iter().map(|weekday| view! {
                    <option value=*weekday>{*weekday}</option>
                }).collect_view()}
            </select>
            <input
                type="time"
                prop:value=move || start_time.get()
                on:input=move |ev| set_start_time.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                placeholder="Remind (minutes before)"
                prop:value=move || lead_minutes.get()
                on:input=move |ev| set_lead_minutes.set(event_target_value(&ev))
            />
            <button type="submit">"Add class"</button>
        </form>
    }
}

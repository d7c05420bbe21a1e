//! Planner Frontend App
//!
//! Page navigation, list reload effects, and reminder wiring.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::audio;
use crate::commands;
use crate::components::notification::{push_notice, ActiveNotice};
use crate::components::{
    NavBar, NewScheduleForm, NewTaskForm, NotificationHost, ScheduleBoard, SettingsPanel, TaskList,
};
use crate::context::AppContext;
use crate::events;
use crate::models::{ScheduleEntry, Task};
use crate::prefs::{sound_enabled_from, SOUND_ENABLED_KEY};

/// Page sections; exactly one is visible at a time.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tasks,
    Schedule,
    Settings,
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (current_page, set_current_page) = signal(Page::Tasks);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (schedule, set_schedule) = signal(HashMap::<String, Vec<ScheduleEntry>>::new());
    let (notices, set_notices) = signal(Vec::<ActiveNotice>::new());
    let next_notice_id = StoredValue::new(0u64);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Per-list fetch sequence numbers. A reload completion only lands when
    // it is still the newest fetch for its list, so an overlapping older
    // fetch cannot overwrite a newer render.
    let task_fetch_seq = StoredValue::new(0u64);
    let schedule_fetch_seq = StoredValue::new(0u64);

    // Reload tasks when the task page is shown or a mutation bumps the trigger
    Effect::new(move |_| {
        let _ = ctx.task_reload.get();
        if current_page.get() != Page::Tasks {
            return;
        }
        let seq = task_fetch_seq.get_value() + 1;
        task_fetch_seq.set_value(seq);
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(loaded) => {
                    if task_fetch_seq.get_value() == seq {
                        set_tasks.set(loaded);
                    } else {
                        web_sys::console::log_1(&"[App] Discarding stale task fetch".into());
                    }
                }
                // Read failures keep the previous view
                Err(e) => web_sys::console::error_1(
                    &format!("[App] Failed to load tasks: {}", e).into(),
                ),
            }
        });
    });

    // Same for the schedule
    Effect::new(move |_| {
        let _ = ctx.schedule_reload.get();
        if current_page.get() != Page::Schedule {
            return;
        }
        let seq = schedule_fetch_seq.get_value() + 1;
        schedule_fetch_seq.set_value(seq);
        spawn_local(async move {
            match commands::list_schedule().await {
                Ok(loaded) => {
                    if schedule_fetch_seq.get_value() == seq {
                        set_schedule.set(loaded);
                    } else {
                        web_sys::console::log_1(&"[App] Discarding stale schedule fetch".into());
                    }
                }
                Err(e) => web_sys::console::error_1(
                    &format!("[App] Failed to load schedule: {}", e).into(),
                ),
            }
        });
    });

    // Load the stored sound preference once on startup
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_setting(SOUND_ENABLED_KEY).await {
                Ok(stored) => ctx.set_sound_enabled(sound_enabled_from(stored.as_deref())),
                Err(e) => web_sys::console::error_1(
                    &format!("[App] Failed to load settings: {}", e).into(),
                ),
            }
        });
    });

    // Subscribe once to the backend reminder channel
    Effect::new(move |_| {
        events::on_reminder(move |reminder| {
            web_sys::console::log_1(&format!("[App] Reminder fired: {}", reminder.title).into());
            push_notice(
                notices,
                set_notices,
                next_notice_id,
                reminder.title,
                reminder.message,
            );
            let sound_enabled = ctx.sound_enabled();
            spawn_local(async move {
                audio::play_alert(sound_enabled).await;
            });
        });
    });

    view! {
        <div class="app-layout">
            <NavBar current_page=current_page set_current_page=set_current_page />

            <main class="page-content">
                <Show when=move || current_page.get() == Page::Tasks>
                    <section class="page">
                        <NewTaskForm />
                        <TaskList tasks=tasks />
                    </section>
                </Show>
                <Show when=move || current_page.get() == Page::Schedule>
                    <section class="page">
                        <NewScheduleForm />
                        <ScheduleBoard schedule=schedule />
                    </section>
                </Show>
                <Show when=move || current_page.get() == Page::Settings>
                    <section class="page">
                        <SettingsPanel />
                    </section>
                </Show>
            </main>

            <NotificationHost notices=notices set_notices=set_notices />
        </div>
    }
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the task list from the backend - read
    pub task_reload: ReadSignal<u64>,
    set_task_reload: WriteSignal<u64>,
    /// Trigger to refetch the schedule from the backend - read
    pub schedule_reload: ReadSignal<u64>,
    set_schedule_reload: WriteSignal<u64>,
    sound_enabled: ReadSignal<bool>,
    set_sound_enabled: WriteSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        let (task_reload, set_task_reload) = signal(0u64);
        let (schedule_reload, set_schedule_reload) = signal(0u64);
        // Default-on until the stored preference is loaded
        let (sound_enabled, set_sound_enabled) = signal(true);
        Self {
            task_reload,
            set_task_reload,
            schedule_reload,
            set_schedule_reload,
            sound_enabled,
            set_sound_enabled,
        }
    }

    /// Trigger a refetch of the task list
    pub fn reload_tasks(&self) {
        self.set_task_reload.update(|v| *v += 1);
    }

    /// Trigger a refetch of the schedule
    pub fn reload_schedule(&self) {
        self.set_schedule_reload.update(|v| *v += 1);
    }

    /// Current sound preference, read non-reactively (for event handlers)
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled.get_untracked()
    }

    /// Reactive handle on the sound preference (for the settings toggle)
    pub fn sound_signal(&self) -> ReadSignal<bool> {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.set_sound_enabled.set(enabled);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

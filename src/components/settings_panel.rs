//! Settings Panel Component
//!
//! Sound-notification preference toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::audio;
use crate::commands;
use crate::context::AppContext;
use crate::dialog;
use crate::prefs::{encode_sound_enabled, SOUND_ENABLED_KEY};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let sound = ctx.sound_signal();

    let on_toggle = move |ev: web_sys::Event| {
        let enabled = event_target_checked(&ev);
        ctx.set_sound_enabled(enabled);
        spawn_local(async move {
            if let Err(e) = commands::set_setting(SOUND_ENABLED_KEY, encode_sound_enabled(enabled)).await {
                web_sys::console::error_1(
                    &format!("[Settings] Failed to save sound preference: {}", e).into(),
                );
                dialog::alert(&format!("Could not save settings: {}", e));
            }
            if enabled {
                audio::prime().await;
            }
        });
    };

    view! {
        <section class="settings-panel">
            <h2>"Settings"</h2>
            <label class="setting-row">
                <input
                    type="checkbox"
                    prop:checked=move || sound.get()
                    on:change=on_toggle
                />
                <span>"Play a sound when a reminder fires"</span>
            </label>
        </section>
    }
}

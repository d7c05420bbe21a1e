//! Reminder Notifications
//!
//! Transient popup stack for backend reminder events. Popups stack
//! independently; there is no queueing or coalescing.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before the `show` class is applied, so the CSS enter transition
/// runs from the initial hidden state.
const ENTER_DELAY_MS: u32 = 20;
/// Exit transition duration; removal waits for it.
const EXIT_MS: u32 = 300;
/// Auto-dismiss timeout for unattended popups.
const AUTO_DISMISS_MS: u32 = 8_000;

/// One live popup.
#[derive(Clone)]
pub struct ActiveNotice {
    pub id: u64,
    pub title: String,
    pub message: String,
    visible: RwSignal<bool>,
    closing: StoredValue<bool>,
}

impl ActiveNotice {
    fn new(id: u64, title: String, message: String) -> Self {
        Self {
            id,
            title,
            message,
            visible: RwSignal::new(false),
            closing: StoredValue::new(false),
        }
    }
}

/// Flip a notice into its closing state and start the exit transition.
/// Returns false when the notice is already closing.
fn begin_close(notice: &ActiveNotice) -> bool {
    if notice.closing.get_value() {
        return false;
    }
    notice.closing.set_value(true);
    notice.visible.set(false);
    true
}

/// Remove a notice by id. Returns false when it was already gone.
fn remove_notice(notices: &mut Vec<ActiveNotice>, id: u64) -> bool {
    let before = notices.len();
    notices.retain(|n| n.id != id);
    notices.len() != before
}

/// Hide-then-remove one notice.
///
/// Both the dismiss button and the auto-dismiss timer land here, so it must
/// be idempotent: the first call per notice wins, later calls (and calls
/// for ids already removed) are no-ops.
fn dismiss_notice(
    notices: ReadSignal<Vec<ActiveNotice>>,
    set_notices: WriteSignal<Vec<ActiveNotice>>,
    id: u64,
) {
    let Some(notice) = notices.get_untracked().into_iter().find(|n| n.id == id) else {
        return;
    };
    if !begin_close(&notice) {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(EXIT_MS).await;
        set_notices.update(|list| {
            remove_notice(list, id);
        });
    });
}

/// Append a popup for a freshly fired reminder and arm its two timers
/// (enter transition, auto-dismiss).
pub fn push_notice(
    notices: ReadSignal<Vec<ActiveNotice>>,
    set_notices: WriteSignal<Vec<ActiveNotice>>,
    next_id: StoredValue<u64>,
    title: String,
    message: String,
) {
    let id = next_id.get_value();
    next_id.set_value(id + 1);

    let notice = ActiveNotice::new(id, title, message);
    let visible = notice.visible;
    let closing = notice.closing;
    set_notices.update(|list| list.push(notice));

    spawn_local(async move {
        TimeoutFuture::new(ENTER_DELAY_MS).await;
        if !closing.get_value() {
            visible.set(true);
        }
    });
    spawn_local(async move {
        TimeoutFuture::new(AUTO_DISMISS_MS).await;
        dismiss_notice(notices, set_notices, id);
    });
}

/// Fixed overlay hosting the live notification popups.
#[component]
pub fn NotificationHost(
    notices: ReadSignal<Vec<ActiveNotice>>,
    set_notices: WriteSignal<Vec<ActiveNotice>>,
) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let visible = notice.visible;

                    view! {
                        <div class=move || {
                            if visible.get() { "notification-popup show" } else { "notification-popup" }
                        }>
                            <strong class="notification-title">{notice.title.clone()}</strong>
                            <p class="notification-message">{notice.message.clone()}</p>
                            <button
                                class="notification-dismiss"
                                on:click=move |_| dismiss_notice(notices, set_notices, id)
                            >
                                "Dismiss"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_close_is_idempotent() {
        let notice = ActiveNotice::new(1, "Class soon".to_string(), "Math at 08:00".to_string());

        assert!(begin_close(&notice));
        assert!(!notice.visible.get_untracked());
        // Second attempt is a no-op
        assert!(!begin_close(&notice));
    }

    #[test]
    fn test_remove_notice_twice_is_noop() {
        let mut notices = vec![
            ActiveNotice::new(1, "a".to_string(), "b".to_string()),
            ActiveNotice::new(2, "c".to_string(), "d".to_string()),
        ];

        assert!(remove_notice(&mut notices, 1));
        assert_eq!(notices.len(), 1);
        assert!(!remove_notice(&mut notices, 1));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].id, 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut notices = vec![ActiveNotice::new(7, "a".to_string(), "b".to_string())];
        assert!(!remove_notice(&mut notices, 99));
        assert_eq!(notices.len(), 1);
    }
}

//! Host Dialogs
//!
//! Blocking alert used for validation failures and failed mutations.

/// Show a blocking alert, falling back to the console when the host
/// refuses the dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.alert_with_message(message).is_err() {
        web_sys::console::error_1(&format!("[Dialog] {}", message).into());
    }
}

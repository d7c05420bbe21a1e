//! Notification Sound
//!
//! Playback of the bundled alert sound. Every failure path here is logged
//! and swallowed: notification display never depends on audio.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

const ALERT_SRC: &str = "public/alert.mp3";

/// Play the bundled alert sound if the preference allows it.
pub async fn play_alert(sound_enabled: bool) {
    if !sound_enabled {
        web_sys::console::warn_1(&"[Audio] Sound disabled, skipping alert".into());
        return;
    }
    let Ok(audio) = HtmlAudioElement::new_with_src(ALERT_SRC) else {
        web_sys::console::warn_1(&"[Audio] Could not create audio element".into());
        return;
    };
    match audio.play() {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                web_sys::console::warn_1(
                    &format!("[Audio] Playback failed (possibly blocked by host): {:?}", e).into(),
                );
            }
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[Audio] Playback failed: {:?}", e).into());
        }
    }
}

/// Muted play-and-stop pass, run from the settings toggle handler.
///
/// Hosts may refuse `play()` calls that are not linked to a user gesture;
/// a muted play from the toggle click registers one.
pub async fn prime() {
    let Ok(audio) = HtmlAudioElement::new_with_src(ALERT_SRC) else {
        return;
    };
    audio.set_muted(true);
    if let Ok(promise) = audio.play() {
        let _ = JsFuture::from(promise).await;
    }
    let _ = audio.pause();
    audio.set_muted(false);
}

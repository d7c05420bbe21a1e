//! Sound Preference
//!
//! Encoding of the `sound_enabled` settings key.

/// Settings-store key for the sound-notification preference.
pub const SOUND_ENABLED_KEY: &str = "sound_enabled";

/// Default-on interpretation: only a stored literal `"false"` disables
/// sound; absence or any other value keeps it enabled.
pub fn sound_enabled_from(stored: Option<&str>) -> bool {
    stored != Some("false")
}

/// String encoding written back to the settings store.
pub fn encode_sound_enabled(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_on_law() {
        assert!(!sound_enabled_from(Some("false")));
        assert!(sound_enabled_from(Some("true")));
        assert!(sound_enabled_from(None));
        // Any non-"false" value counts as enabled
        assert!(sound_enabled_from(Some("")));
        assert!(sound_enabled_from(Some("0")));
        assert!(sound_enabled_from(Some("FALSE")));
    }

    #[test]
    fn test_encoding_round_trip() {
        assert_eq!(encode_sound_enabled(true), "true");
        assert_eq!(encode_sound_enabled(false), "false");
        assert!(!sound_enabled_from(Some(encode_sound_enabled(false))));
        assert!(sound_enabled_from(Some(encode_sound_enabled(true))));
    }
}

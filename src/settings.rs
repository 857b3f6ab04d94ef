// Rawhook Settings
// Host-facing configuration snapshot; key bindings round-trip as text

use serde::{Deserialize, Serialize};

use crate::key::RawKey;

/// Startup and interception configuration.
///
/// Hosts keep this in their own config files; `RawKey` fields serialize as
/// the same textual names [`RawKey::parse`] accepts, so bindings survive a
/// round trip through any serde format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookSettings {
    /// Install the global hook family instead of the focus-bound one.
    pub work_in_background: bool,
    /// Swallow handled events instead of forwarding them.
    pub intercept_messages: bool,
    /// Safety-valve key; releasing it while interception is active
    /// force-disables interception.
    pub disable_intercept_key: Option<RawKey>,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            work_in_background: false,
            intercept_messages: false,
            disable_intercept_key: Some(RawKey::ESCAPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_the_escape_valve() {
        let settings = HookSettings::default();
        assert_eq!(settings.disable_intercept_key, Some(RawKey::ESCAPE));
        assert!(!settings.intercept_messages);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = HookSettings {
            work_in_background: false,
            intercept_messages: true,
            disable_intercept_key: Some(RawKey::F11),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"F11\""));
        let back: HookSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let back: HookSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(back, HookSettings::default());
    }
}

// Rawhook Key Identity
// Canonical key value reconciling Win32 virtual codes and hardware scan codes

mod names;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single key or button identity.
///
/// Combines a virtual code (low byte) with a scan code (bits 8..17, the
/// extended bit folded in as +0x100) into one comparable value. Equality,
/// hashing and ordering are by the combined value, so `RawKey` can be used
/// directly as a set or map key.
///
/// When only one code space is known the other stays 0; the all-zero value
/// is [`RawKey::UNKNOWN`], the "not found" sentinel returned by
/// [`RawKey::parse`] for unrecognized input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct RawKey(u32);

/// Which code space the raw hex fallback is rendered in.
///
/// Global (background) hooks reliably report scan codes, thread-local
/// (foreground) hooks only the packed virtual code, so each hook family
/// gets its own fallback shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeSpace {
    /// `vkXXscYYY` - the lossless form used by the global hook family.
    #[default]
    Scan,
    /// `0xXX` - virtual code only, used by the foreground hook family.
    Virtual,
}

/// Output shape for [`RawKey::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFormat {
    /// Name if known, raw fallback otherwise.
    #[default]
    General,
    /// Always the raw hex fallback.
    Raw,
    /// Name and raw fallback together.
    Verbose,
}

/// Rejected textual format specifier.
///
/// This is deliberately loud: a bad specifier is a typo in a format string,
/// not unpredictable runtime input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid key format specifier {0:?} (expected \"general\", \"raw\" or \"verbose\")")]
pub struct KeyFormatError(String);

impl FromStr for KeyFormat {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g" | "general" => Ok(KeyFormat::General),
            "r" | "raw" => Ok(KeyFormat::Raw),
            "v" | "verbose" => Ok(KeyFormat::Verbose),
            _ => Err(KeyFormatError(s.to_string())),
        }
    }
}

const fn fold_scan(sc: u16, extended: bool) -> u16 {
    // Extended keys (right-side modifiers, the navigation cluster, numpad
    // divide) report a scan code below 0x100 plus a flag; folding the flag
    // in keeps them distinct from their numpad twins.
    if extended && sc < 0x100 {
        sc + 0x100
    } else {
        sc & 0x1FF
    }
}

impl RawKey {
    pub(crate) const fn from_parts(vk: u8, sc: u16) -> Self {
        RawKey((vk as u32) | (((sc & 0x1FF) as u32) << 8))
    }

    /// Identity from a virtual code alone; the scan code stays 0.
    pub const fn from_virtual_code(vk: u8) -> Self {
        RawKey::from_parts(vk, 0)
    }

    /// Identity from a scan code alone; the virtual code stays 0.
    pub const fn from_scan_code(sc: u16, extended: bool) -> Self {
        RawKey::from_parts(0, fold_scan(sc, extended))
    }

    /// Identity from both code spaces. `sc` is taken as already folded.
    pub const fn from_virtual_and_scan(vk: u8, sc: u16) -> Self {
        RawKey::from_parts(vk, sc)
    }

    /// Resolve a virtual code to a well-known identity, falling back to an
    /// unnamed virtual-code-only identity.
    pub fn resolve_virtual(vk: u8) -> Self {
        names::by_virtual(vk).unwrap_or(RawKey::from_virtual_code(vk))
    }

    /// Resolve a low-level keyboard event to an identity.
    ///
    /// Tier 1: the virtual code alone matches a well-known identity. Most
    /// keys resolve here, and it keeps the generic name for keys the OS
    /// reports generically (VK 0x10 stays Shift even though the scan code
    /// could pick a side). Tier 2: the combined (virtual, folded scan)
    /// value is itself a well-known identity; this is how scan-only keys
    /// resolve. Tier 3: an unnamed identity carrying the raw virtual code.
    pub fn resolve(vk: u8, sc: u16, extended: bool) -> Self {
        if let Some(key) = names::by_virtual(vk) {
            return key;
        }
        let combined = RawKey::from_parts(vk, fold_scan(sc, extended));
        if names::is_known(combined) {
            return combined;
        }
        RawKey::from_virtual_code(vk)
    }

    /// Virtual code (0 when unknown).
    pub const fn virtual_code(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Scan code with the extended bit folded in (0 when unknown).
    pub const fn scan_code(self) -> u16 {
        ((self.0 >> 8) & 0x1FF) as u16
    }

    /// Combined raw value, usable as a dense map key.
    pub const fn raw_value(self) -> u32 {
        self.0
    }

    pub(crate) const fn from_raw_value(raw: u32) -> Self {
        RawKey(raw & 0x1FFFF)
    }

    /// Whether this is the neutral "not found" sentinel.
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    /// Canonical name, if this identity is in the name table.
    pub fn name(self) -> Option<&'static str> {
        names::name_of(self)
    }

    /// Parse a key from its textual encoding.
    ///
    /// Accepts canonical names and common aliases case-insensitively
    /// ("esc", "m1", "num7"), as well as the raw encodings `vkXXscYYY`,
    /// `vkXX` and `scYYY`. Unrecognized text yields [`RawKey::UNKNOWN`];
    /// callers must treat that as "not found", never as a real binding.
    pub fn parse(text: &str) -> RawKey {
        static RAW_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?i)^(?:vk([0-9a-f]{2}))?(?:sc([0-9a-f]{3}))?$").unwrap()
        });

        let text = text.trim();
        if text.is_empty() {
            return RawKey::UNKNOWN;
        }
        if let Some(caps) = RAW_RE.captures(text) {
            let vk = caps
                .get(1)
                .map(|m| u8::from_str_radix(m.as_str(), 16).unwrap_or(0));
            let sc = caps
                .get(2)
                .map(|m| u16::from_str_radix(m.as_str(), 16).unwrap_or(0));
            match (vk, sc) {
                (Some(vk), Some(sc)) => return RawKey::from_virtual_and_scan(vk, sc),
                (Some(vk), None) => return RawKey::resolve_virtual(vk),
                (None, Some(sc)) => {
                    return names::by_scan(sc).unwrap_or(RawKey::from_parts(0, sc));
                }
                (None, None) => {}
            }
        }
        names::by_name(&text.to_ascii_lowercase()).unwrap_or(RawKey::UNKNOWN)
    }

    /// The raw hex fallback in the given code space.
    pub fn raw_string(self, space: CodeSpace) -> String {
        match space {
            CodeSpace::Scan => format!("vk{:02X}sc{:03X}", self.virtual_code(), self.scan_code()),
            CodeSpace::Virtual => format!("0x{:02X}", self.virtual_code()),
        }
    }

    /// Render this identity in the given format and code space.
    pub fn display(self, format: KeyFormat, space: CodeSpace) -> String {
        match format {
            KeyFormat::Raw => self.raw_string(space),
            KeyFormat::General => self
                .name()
                .map(str::to_owned)
                .unwrap_or_else(|| self.raw_string(space)),
            KeyFormat::Verbose => match self.name() {
                Some(name) => format!("{}, {}", name, self.raw_string(space)),
                None => self.raw_string(space),
            },
        }
    }

    /// Render using a textual format specifier ("general", "raw",
    /// "verbose", or their one-letter forms).
    ///
    /// An unrecognized specifier is a caller bug and fails with a
    /// descriptive [`KeyFormatError`] instead of degrading silently.
    pub fn display_as(self, spec: &str, space: CodeSpace) -> Result<String, KeyFormatError> {
        Ok(self.display(spec.parse()?, space))
    }
}

impl fmt::Display for RawKey {
    /// General format in the scan code space - the lossless textual form
    /// that round-trips through [`RawKey::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(KeyFormat::General, CodeSpace::Scan))
    }
}

impl fmt::Debug for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawKey({})", self.display(KeyFormat::Verbose, CodeSpace::Scan))
    }
}

impl Serialize for RawKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RawKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let key = RawKey::parse(&text);
        if key.is_unknown() && !text.trim().eq_ignore_ascii_case("vk00sc000") {
            return Err(serde::de::Error::custom(format!("unknown key {text:?}")));
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip_for_every_table_entry() {
        for &(key, name) in names::TABLE {
            let rendered = key.display(KeyFormat::General, CodeSpace::Scan);
            assert_eq!(rendered, name);
            assert_eq!(RawKey::parse(&rendered), key, "round trip failed for {name}");
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(RawKey::parse("esc"), RawKey::ESCAPE);
        assert_eq!(RawKey::parse("m1"), RawKey::LEFT_BUTTON);
        assert_eq!(RawKey::parse("num7"), RawKey::NUMPAD7);
        assert_eq!(RawKey::parse("numpad7"), RawKey::NUMPAD7);
        assert_eq!(RawKey::parse("RETURN"), RawKey::ENTER);
        assert_eq!(RawKey::parse("  a  "), RawKey::A);
    }

    #[test]
    fn test_parse_raw_encodings() {
        assert_eq!(RawKey::parse("vk41sc01E"), RawKey::A);
        assert_eq!(RawKey::parse("vk41"), RawKey::A);
        assert_eq!(RawKey::parse("sc11d"), RawKey::RIGHT_CONTROL);
        assert_eq!(RawKey::parse("sc01d"), RawKey::LEFT_CONTROL);
        // Unlisted codes still parse to a raw identity
        assert_eq!(RawKey::parse("vkE8sc123"), RawKey::from_virtual_and_scan(0xE8, 0x123));
    }

    #[test]
    fn test_parse_unrecognized_is_unknown() {
        assert!(RawKey::parse("").is_unknown());
        assert!(RawKey::parse("no-such-key").is_unknown());
        assert!(RawKey::parse("vkZZ").is_unknown());
    }

    #[test]
    fn test_extended_scan_folding() {
        assert_eq!(RawKey::from_scan_code(0x1D, true).scan_code(), 0x11D);
        assert_eq!(RawKey::from_scan_code(0x1D, false).scan_code(), 0x01D);
        assert_ne!(
            RawKey::from_scan_code(0x1D, true),
            RawKey::from_scan_code(0x1D, false)
        );
        // An already-folded code is left alone
        assert_eq!(RawKey::from_scan_code(0x11D, true).scan_code(), 0x11D);
    }

    #[test]
    fn test_tiered_resolution_prefers_virtual_code() {
        // VK 0x10 is the generic Shift; the scan code alone would name a
        // side, but tier 1 wins.
        assert_eq!(RawKey::resolve(0x10, 0x36, false), RawKey::SHIFT);
        assert_eq!(RawKey::resolve(0xA1, 0x36, true), RawKey::RIGHT_SHIFT);
    }

    #[test]
    fn test_tiered_resolution_combined_fallback() {
        // Scan-only keys carry no virtual code and resolve in tier 2.
        assert_eq!(RawKey::resolve(0x00, 0x70, false), RawKey::INTERNATIONAL2);
    }

    #[test]
    fn test_tiered_resolution_raw_fallback() {
        let key = RawKey::resolve(0xE8, 0x123, false);
        assert_eq!(key, RawKey::from_virtual_code(0xE8));
        assert!(key.name().is_none());
    }

    #[test]
    fn test_raw_string_per_code_space() {
        assert_eq!(RawKey::A.raw_string(CodeSpace::Scan), "vk41sc01E");
        assert_eq!(RawKey::A.raw_string(CodeSpace::Virtual), "0x41");
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(RawKey::A.display(KeyFormat::General, CodeSpace::Scan), "A");
        assert_eq!(RawKey::A.display(KeyFormat::Raw, CodeSpace::Scan), "vk41sc01E");
        assert_eq!(
            RawKey::A.display(KeyFormat::Verbose, CodeSpace::Scan),
            "A, vk41sc01E"
        );
        let unnamed = RawKey::from_virtual_code(0xE8);
        assert_eq!(unnamed.display(KeyFormat::General, CodeSpace::Virtual), "0xE8");
    }

    #[test]
    fn test_invalid_format_specifier_fails_loudly() {
        assert!(RawKey::A.display_as("general", CodeSpace::Scan).is_ok());
        assert!(RawKey::A.display_as("G", CodeSpace::Scan).is_ok());
        let err = RawKey::A.display_as("bogus", CodeSpace::Scan).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&RawKey::F11).unwrap();
        assert_eq!(json, "\"F11\"");
        let back: RawKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RawKey::F11);
        assert!(serde_json::from_str::<RawKey>("\"no-such-key\"").is_err());
    }

    #[test]
    fn test_identity_is_a_stable_set_key() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RawKey::LEFT_CONTROL);
        assert!(set.contains(&RawKey::from_virtual_and_scan(0xA2, 0x01D)));
        assert!(!set.contains(&RawKey::RIGHT_CONTROL));
    }
}

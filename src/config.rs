/// Controls how literally the two historically-loose name predicates are
/// interpreted. See the Open Questions in the synthesis design notes:
/// `is_enumerated` scans for `To` anywhere in a setter's name tail, and
/// `is_boolean` matches trailing `On`/`Off` without checking the
/// preceding character is upper-case. Both quirks are preserved by
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Reproduce the historical behavior exactly, including the
    /// unanchored `To`/`On`/`Off` scans.
    #[default]
    Faithful,
    /// Require the character immediately preceding `To`/`On`/`Off` to be
    /// upper-case (or the start of the name), eliminating false
    /// positives like `SetStoreMode` or `Button`.
    Strict,
}

/// Behavior knobs for [`crate::build_properties`]. The synthesis
/// algorithm's structure never changes; this only affects which method
/// names the two loose predicates accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynthesisConfig {
    pub scan_mode: ScanMode,
}

impl SynthesisConfig {
    #[must_use]
    pub fn faithful() -> Self {
        Self {
            scan_mode: ScanMode::Faithful,
        }
    }

    #[must_use]
    pub fn strict() -> Self {
        Self {
            scan_mode: ScanMode::Strict,
        }
    }
}

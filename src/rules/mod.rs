//! Process-wide break rule data
//!
//! The boundary and bidi tables this engine consults are compiled into
//! the binary, but they still follow the one-time-load contract of a
//! data-file based engine: [`load`] must succeed once per process before
//! any locale-aware constructor runs, and a load-time validation failure
//! poisons nothing — the registry simply stays unset and constructors
//! keep failing with `DataNotLoaded`.
//!
//! Only the root (locale-independent) rule tables are embedded, so
//! [`RuleData::select`] resolves every locale to the root tailoring
//! profile. That is the documented fallback convention: an unknown but
//! well-formed locale never fails construction.

use crate::error::{BoundError, Result};
use crate::locale::Locale;
use std::sync::OnceLock;
use unicode_bidi::{bidi_class, BidiClass};
use unicode_linebreak::{break_property, BreakClass};
use unicode_segmentation::UnicodeSegmentation;

static RULE_DATA: OnceLock<RuleData> = OnceLock::new();

/// The tailoring profile a locale resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailoringProfile {
    /// Canonical tag of the profile ("root" for the default rules)
    pub tag: &'static str,
    /// Unicode version of the underlying break tables
    pub unicode_version: (u8, u8, u8),
}

/// Immutable, process-wide rule data installed by [`load`]
#[derive(Debug)]
pub struct RuleData {
    root: TailoringProfile,
}

impl RuleData {
    /// Validate the embedded tables and assemble the registry
    fn build() -> Result<RuleData> {
        // Spot checks across all three table sets; a mismatch means the
        // compiled-in data is unusable and every later operation would
        // misclassify text.
        let line_ok = break_property(0x0A) == BreakClass::LineFeed
            && break_property(0xDB80) == BreakClass::Surrogate
            && break_property(0x10FFFF) == BreakClass::Unknown;
        let bidi_ok = bidi_class('a') == BidiClass::L && bidi_class('\u{05D0}') == BidiClass::R;
        let grapheme_ok = "e\u{0301}".graphemes(true).count() == 1;

        if !(line_ok && bidi_ok && grapheme_ok) {
            return Err(BoundError::DataNotLoaded);
        }

        Ok(RuleData {
            root: TailoringProfile {
                tag: "root",
                unicode_version: unicode_linebreak::UNICODE_VERSION,
            },
        })
    }

    /// Resolve a locale to its tailoring profile
    ///
    /// With only root tables embedded, every locale resolves to the root
    /// profile; the locale has already been validated by parsing.
    pub fn select(&self, _locale: &Locale) -> &TailoringProfile {
        &self.root
    }
}

/// Load and validate the rule data; idempotent
///
/// Must succeed once before any locale-aware construction. Surfaced as
/// `DataNotLoaded` when validation fails, distinct from any per-call
/// error.
pub fn load() -> Result<()> {
    if RULE_DATA.get().is_some() {
        return Ok(());
    }
    let data = RuleData::build()?;
    // A racing load may have won; both installed the same immutable data.
    let _ = RULE_DATA.set(data);
    Ok(())
}

/// Access the loaded rule data
pub fn get() -> Result<&'static RuleData> {
    RULE_DATA.get().ok_or(BoundError::DataNotLoaded)
}

//! Locale identifiers for rule selection
//!
//! A [`Locale`] is an immutable language/region/variant tag. It carries no
//! state of its own; its only job is to pick a tailoring profile out of
//! the loaded rule data. Canonicalization lowercases the language,
//! uppercases the region, and lowercases variants, so `"en_us"`,
//! `"EN-US"` and `"en-US"` all name the same locale.

use crate::error::{BoundError, Result};

/// An immutable locale tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
    variants: Vec<String>,
}

fn is_alphanumeric_ascii(sub: &str) -> bool {
    !sub.is_empty() && sub.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn looks_like_region(sub: &str) -> bool {
    (sub.len() == 2 && sub.bytes().all(|b| b.is_ascii_alphabetic()))
        || (sub.len() == 3 && sub.bytes().all(|b| b.is_ascii_digit()))
}

impl Locale {
    /// The root locale: the fallback every unknown tag resolves to
    pub fn root() -> Self {
        Locale {
            language: String::new(),
            region: None,
            variants: Vec::new(),
        }
    }

    /// Parse and canonicalize a locale tag
    ///
    /// Accepts `-` or `_` separated subtags (`"en-US"`, `"de_DE_phonebook"`).
    /// `"root"` and the empty string name the root locale. Fails with
    /// `UnsupportedLocale` when the tag cannot be parsed; a well-formed tag
    /// always parses, whether or not tailored rules exist for it.
    pub fn create_canonical(tag: &str) -> Result<Self> {
        if tag.is_empty() || tag.eq_ignore_ascii_case("root") {
            return Ok(Locale::root());
        }

        let mut subtags = tag.split(['-', '_']);
        let language = match subtags.next() {
            Some(lang)
                if (2..=8).contains(&lang.len())
                    && lang.bytes().all(|b| b.is_ascii_alphabetic()) =>
            {
                lang.to_ascii_lowercase()
            }
            _ => return Err(BoundError::UnsupportedLocale(tag.to_string())),
        };

        let mut region = None;
        let mut variants = Vec::new();
        for sub in subtags {
            if !is_alphanumeric_ascii(sub) {
                return Err(BoundError::UnsupportedLocale(tag.to_string()));
            }
            if region.is_none() && variants.is_empty() && looks_like_region(sub) {
                region = Some(sub.to_ascii_uppercase());
            } else {
                variants.push(sub.to_ascii_lowercase());
            }
        }

        Ok(Locale {
            language,
            region,
            variants,
        })
    }

    /// The language subtag, lowercase (empty for the root locale)
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region subtag, uppercase, if present
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The full canonical tag, `-` separated (`"root"` for the root locale)
    #[must_use]
    pub fn canonical_tag(&self) -> String {
        if self.language.is_empty() {
            return "root".to_string();
        }
        let mut tag = self.language.clone();
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(region);
        }
        for variant in &self.variants {
            tag.push('-');
            tag.push_str(variant);
        }
        tag
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

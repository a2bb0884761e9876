use super::*;

#[test]
fn test_language_only() {
    let locale = Locale::create_canonical("en").unwrap();
    assert_eq!(locale.language(), "en");
    assert_eq!(locale.region(), None);
    assert_eq!(locale.canonical_tag(), "en");
}

#[test]
fn test_canonicalizes_case() {
    let locale = Locale::create_canonical("EN_us").unwrap();
    assert_eq!(locale.language(), "en");
    assert_eq!(locale.region(), Some("US"));
    assert_eq!(locale.canonical_tag(), "en-US");
}

#[test]
fn test_separators_are_equivalent() {
    let a = Locale::create_canonical("de-DE").unwrap();
    let b = Locale::create_canonical("de_DE").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_variants() {
    let locale = Locale::create_canonical("de_DE_PHONEBOOK").unwrap();
    assert_eq!(locale.canonical_tag(), "de-DE-phonebook");
}

#[test]
fn test_long_variant_subtags_parse() {
    // Variant subtags are not length-capped: PHONEBOOK is 9 characters
    let locale = Locale::create_canonical("de-DE-phonebook").unwrap();
    assert_eq!(locale.canonical_tag(), "de-DE-phonebook");

    let posix = Locale::create_canonical("en_US_POSIX").unwrap();
    assert_eq!(posix.canonical_tag(), "en-US-posix");

    let traditional = Locale::create_canonical("es_ES_TRADITIONAL").unwrap();
    assert_eq!(traditional.canonical_tag(), "es-ES-traditional");
}

#[test]
fn test_numeric_region() {
    let locale = Locale::create_canonical("es-419").unwrap();
    assert_eq!(locale.region(), Some("419"));
}

#[test]
fn test_root() {
    assert_eq!(Locale::create_canonical("").unwrap(), Locale::root());
    assert_eq!(Locale::create_canonical("ROOT").unwrap(), Locale::root());
    assert_eq!(Locale::root().canonical_tag(), "root");
    assert_eq!(Locale::root().language(), "");
}

#[test]
fn test_malformed_tags() {
    for tag in ["e", "123", "en-", "en--US", "en_US!", "verylonglanguage"] {
        let err = Locale::create_canonical(tag).unwrap_err();
        assert_eq!(err, BoundError::UnsupportedLocale(tag.to_string()));
    }
}

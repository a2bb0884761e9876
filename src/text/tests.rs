use super::*;

#[test]
fn test_new_buffer() {
    let buffer = Utf16Buffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
}

#[test]
fn test_utf8_round_trip() {
    let inputs: &[&str] = &["", "hello", "héllo wörld", "日本語", "a𝄞b", "👩‍👩‍👧‍👦"];
    for s in inputs {
        let buffer = Utf16Buffer::from_utf8(s.as_bytes()).unwrap();
        assert_eq!(buffer.to_utf8().unwrap(), *s);
    }
}

#[test]
fn test_from_utf8_rejects_malformed() {
    // Truncated two-byte sequence
    let err = Utf16Buffer::from_utf8(&[0x68, 0xC3]).unwrap_err();
    assert_eq!(err, BoundError::InvalidEncoding);
}

#[test]
fn test_len_counts_units_not_code_points() {
    // U+1D11E MUSICAL SYMBOL G CLEF needs a surrogate pair
    let buffer = Utf16Buffer::from_utf8("𝄞".as_bytes()).unwrap();
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.chars().count(), 1);
}

#[test]
fn test_append_code_point_bmp() {
    let mut buffer = Utf16Buffer::new();
    buffer.append_code_point('a' as u32).unwrap();
    buffer.append_code_point(0x00E9).unwrap(); // é
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.to_utf8().unwrap(), "aé");
}

#[test]
fn test_append_code_point_astral_encodes_pair() {
    let mut buffer = Utf16Buffer::new();
    buffer.append_code_point(0x1D11E).unwrap();
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.code_unit_at(0).unwrap(), 0xD834);
    assert_eq!(buffer.code_unit_at(1).unwrap(), 0xDD1E);
    assert_eq!(buffer.as_units(), &[0xD834, 0xDD1E]);
}

#[test]
fn test_append_code_point_rejects_invalid() {
    let mut buffer = Utf16Buffer::new();
    assert_eq!(
        buffer.append_code_point(0x110000).unwrap_err(),
        BoundError::InvalidCodePoint(0x110000)
    );
    // Lone surrogate would break the structural invariant
    assert_eq!(
        buffer.append_code_point(0xD800).unwrap_err(),
        BoundError::InvalidCodePoint(0xD800)
    );
    assert!(buffer.is_empty());
}

#[test]
fn test_append_buffer() {
    let mut a = Utf16Buffer::from_utf8(b"foo").unwrap();
    let b = Utf16Buffer::from_utf8(b"bar").unwrap();
    a.append_buffer(&b);
    assert_eq!(a.to_utf8().unwrap(), "foobar");
    assert_eq!(b.to_utf8().unwrap(), "bar");
}

#[test]
fn test_code_unit_at_out_of_range() {
    let buffer = Utf16Buffer::from_utf8(b"ab").unwrap();
    assert_eq!(
        buffer.code_unit_at(2).unwrap_err(),
        BoundError::OutOfRange { index: 2, len: 2 }
    );
}

#[test]
fn test_substring() {
    let buffer = Utf16Buffer::from_utf8(b"hello world").unwrap();
    let sub = buffer.substring(6, 11).unwrap();
    assert_eq!(sub.to_utf8().unwrap(), "world");

    let empty = buffer.substring(3, 3).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_substring_bounds_checks() {
    let buffer = Utf16Buffer::from_utf8(b"abc").unwrap();
    assert!(matches!(
        buffer.substring(1, 4),
        Err(BoundError::OutOfRange { index: 4, len: 3 })
    ));
    assert!(matches!(
        buffer.substring(2, 1),
        Err(BoundError::OutOfRange { .. })
    ));
}

#[test]
fn test_substring_refuses_to_split_surrogate_pair() {
    // "a" + G clef: units [a, D834, DD1E]
    let buffer = Utf16Buffer::from_utf8("a𝄞".as_bytes()).unwrap();
    assert!(matches!(
        buffer.substring(0, 2),
        Err(BoundError::OutOfRange { index: 2, .. })
    ));
    assert!(matches!(
        buffer.substring(2, 3),
        Err(BoundError::OutOfRange { index: 2, .. })
    ));
    // Whole pair is fine
    assert_eq!(buffer.substring(1, 3).unwrap().to_utf8().unwrap(), "𝄞");
}

#[test]
fn test_reverse_ascii() {
    let mut buffer = Utf16Buffer::from_utf8(b"abc").unwrap();
    buffer.reverse_in_place().unwrap();
    assert_eq!(buffer.to_utf8().unwrap(), "cba");
}

#[test]
fn test_reverse_keeps_combining_sequence() {
    // "ab́c" with a combining acute on the b
    let mut buffer = Utf16Buffer::from_utf8("ab\u{0301}c".as_bytes()).unwrap();
    buffer.reverse_in_place().unwrap();
    assert_eq!(buffer.to_utf8().unwrap(), "cb\u{0301}a");
}

#[test]
fn test_reverse_keeps_surrogate_pairs() {
    let mut buffer = Utf16Buffer::from_utf8("a𝄞b".as_bytes()).unwrap();
    buffer.reverse_in_place().unwrap();
    assert_eq!(buffer.to_utf8().unwrap(), "b𝄞a");
}

#[test]
fn test_display() {
    let buffer = Utf16Buffer::from_utf8("héllo".as_bytes()).unwrap();
    assert_eq!(format!("{}", buffer), "héllo");
}

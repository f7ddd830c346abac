//! Query-surface tests against the embedded default database.

use confusables::default_db;

#[test]
fn test_to_ascii() {
    let db = default_db();

    let tests = [
        ("hello", "hello"),
        ("h\u{435}ll\u{43E}", "hello"),   // Cyrillic е and о
        ("v\u{456}\u{430}gr\u{430}", "viagra"), // Cyrillic і and а
        ("123", "123"),                   // digit 1 is already ASCII
        ("payp\u{430}l", "paypal"),       // Cyrillic а
        ("\u{DF}", "\u{DF}"),             // ß has a multi-char mapping, kept
    ];

    for (input, expected) in tests {
        assert_eq!(db.to_ascii(input), expected, "to_ascii({input:?})");
    }
}

#[test]
fn test_to_ascii_identity_on_ascii() {
    let db = default_db();
    let all_ascii: String = (0x20u8..0x7F).map(char::from).collect();
    assert_eq!(db.to_ascii(&all_ascii), all_ascii);
}

#[test]
fn test_to_ascii_idempotent() {
    let db = default_db();
    for s in ["h\u{435}ll\u{43E}", "\u{DF}stra\u{DF}e", "m\u{456}xed \u{430}scii"] {
        let once = db.to_ascii(s);
        assert_eq!(db.to_ascii(&once), once, "to_ascii not idempotent on {s:?}");
    }
}

#[test]
fn test_is_confusable() {
    let db = default_db();

    let tests = [
        ("hello", "hello", true),
        ("hello", "h\u{435}ll\u{43E}", true),
        ("viagra", "v\u{456}\u{430}gr\u{430}", true),
        ("paypal", "p\u{430}yp\u{430}l", true),
        ("apple", "\u{430}\u{440}\u{440}le", true), // Cyrillic а and р
        ("123", "l23", true),                       // digit one folds to l
        ("different", "strings", false),
    ];

    for (a, b, expected) in tests {
        assert_eq!(db.is_confusable(a, b), expected, "is_confusable({a:?}, {b:?})");
        // skeleton equality is the definition, and the relation is symmetric
        assert_eq!(db.skeleton(a) == db.skeleton(b), expected);
        assert_eq!(db.is_confusable(b, a), expected);
    }
}

#[test]
fn test_skeleton_deterministic() {
    let db = default_db();
    let input = "p\u{430}yp\u{430}l \u{DF} caf\u{E9}";
    let first = db.skeleton(input);
    for _ in 0..10 {
        assert_eq!(db.skeleton(input), first);
    }
}

#[test]
fn test_skeleton_folds_through_nfd() {
    let db = default_db();
    // Composed and decomposed spellings of café skeletonize identically.
    assert!(db.is_confusable("caf\u{E9}", "cafe\u{301}"));
}

#[test]
fn test_lookup() {
    let db = default_db();

    assert_eq!(db.lookup('\u{430}'), Some(vec!['a']));
    // U+20A1 COLON SIGN maps to C plus a combining overlay
    assert_eq!(db.lookup('\u{20A1}'), Some(vec!['C', '\u{20E6}']));
    assert_eq!(db.lookup('z'), None);
}

#[test]
fn test_lookup_ascii_never_remaps_ascii() {
    let db = default_db();
    for cp in 0u32..0x80 {
        let c = char::from_u32(cp).unwrap();
        assert_eq!(db.lookup_ascii(c), None, "remapped ASCII {c:?}");
    }
}

#[test]
fn test_lookup_defensive_copy() {
    let db = default_db();
    let mut targets = db.lookup('\u{430}').expect("lookup('а') returned None");
    targets[0] = 'Z';
    assert_eq!(db.lookup('\u{430}'), Some(vec!['a']));
}

#[test]
fn test_metadata() {
    let db = default_db();
    assert_eq!(db.unicode_version(), "16.0.0");
    assert!(db.source_url().contains("confusables.txt"));
    assert!(!db.source_date().is_empty());
    assert!(db.generated_at().timestamp() > 0);
    assert!(!db.is_empty());
}

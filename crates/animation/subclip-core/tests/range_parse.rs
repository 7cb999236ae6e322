use subclip_core::range::{FormatError, FrameRange};

#[test]
fn parses_one_based_bounds_to_zero_based() {
    let range = FrameRange::parse("walk=11..20").expect("parse walk=11..20");
    assert_eq!(range, FrameRange::new("walk", 10, 19));

    // Single-frame window
    let blink = FrameRange::parse("blink=1..1").expect("parse blink=1..1");
    assert_eq!(blink, FrameRange::new("blink", 0, 0));
}

#[test]
fn inverted_windows_parse_without_error() {
    // start > end is a policy question for the splitter, not the grammar.
    let range = FrameRange::parse("rewind=20..11").expect("parse rewind=20..11");
    assert_eq!(range, FrameRange::new("rewind", 19, 10));
}

#[test]
fn rejects_specs_that_do_not_match_the_grammar() {
    assert_eq!(
        FrameRange::parse("walk11..20"),
        Err(FormatError::MissingEquals("walk11..20".into()))
    );
    assert_eq!(
        FrameRange::parse("=11..20"),
        Err(FormatError::EmptyName("=11..20".into()))
    );
    assert_eq!(
        FrameRange::parse("my walk=11..20"),
        Err(FormatError::NameWhitespace("my walk".into()))
    );
    assert_eq!(
        FrameRange::parse("walk=1120"),
        Err(FormatError::MissingDots {
            name: "walk".into(),
            bounds: "1120".into(),
        })
    );
    assert_eq!(
        FrameRange::parse("walk=11..twenty"),
        Err(FormatError::BadFrameNumber {
            name: "walk".into(),
            token: "twenty".into(),
        })
    );
    assert_eq!(
        FrameRange::parse("walk=-3..20"),
        Err(FormatError::BadFrameNumber {
            name: "walk".into(),
            token: "-3".into(),
        })
    );
    // Frame numbers are written 1-based; 0 has no 0-based counterpart.
    assert_eq!(
        FrameRange::parse("walk=0..20"),
        Err(FormatError::FrameZero {
            name: "walk".into()
        })
    );
}

#[test]
fn second_equals_lands_in_the_bounds() {
    // split happens at the first '='; the remainder must still parse as bounds
    assert!(matches!(
        FrameRange::parse("walk=11..20=5"),
        Err(FormatError::BadFrameNumber { .. })
    ));
}

#[test]
fn from_str_and_display_round_trip() {
    let range: FrameRange = "run=21..30".parse().expect("FromStr");
    assert_eq!(range, FrameRange::new("run", 20, 29));
    assert_eq!(range.to_string(), "run=21..30");
}

#[test]
fn serializes_as_the_textual_form() {
    let range = FrameRange::new("walk", 10, 19);
    let json = serde_json::to_string(&range).expect("serialize range");
    assert_eq!(json, "\"walk=11..20\"");

    let back: FrameRange = serde_json::from_str(&json).expect("deserialize range");
    assert_eq!(back, range);

    let err = serde_json::from_str::<FrameRange>("\"walk=eleven..20\"");
    assert!(err.is_err());
}

use super::*;

#[test]
fn default_bounds_match_constants() {
    let bounds = TargetBounds::default();
    assert_eq!(bounds.min(), MIN_TASKS);
    assert_eq!(bounds.max(), MAX_TASKS);
}

#[test]
fn rejects_zero_minimum() {
    assert_eq!(TargetBounds::new(0, 3), Err(ConfigError::ZeroMinimum));
}

#[test]
fn rejects_inverted_bounds() {
    assert_eq!(
        TargetBounds::new(7, 3),
        Err(ConfigError::InvertedBounds { min: 7, max: 3 })
    );
}

#[test]
fn single_value_bounds_are_valid() {
    let bounds = TargetBounds::new(4, 4).expect("bounds");
    assert!(bounds.contains(4));
    assert!(!bounds.contains(3));
    assert!(!bounds.contains(5));
}

#[test]
fn status_renders_as_fraction() {
    let status = Status {
        tasks_completed: 2,
        current_target: 5,
    };
    assert_eq!(status.to_string(), "Tasks Completed: 2 / 5");
}

#[test]
fn parses_digit_only_targets() {
    assert_eq!(parse_target("5"), Ok(5));
    assert_eq!(parse_target(" 12 \n"), Ok(12));
    assert_eq!(parse_target("007"), Ok(7));
    assert_eq!(parse_target("0"), Ok(0));
}

#[test]
fn rejects_non_digit_targets() {
    for raw in ["abc", "", "   ", "-3", "+3", "3.5", "1e3", "4 tasks"] {
        assert!(
            matches!(parse_target(raw), Err(TargetInputError::NotANumber(_))),
            "input {raw:?}"
        );
    }
}

#[test]
fn rejects_non_ascii_decimal_digits() {
    // Arabic-Indic three, fullwidth seven, superscript two.
    for raw in ["\u{0663}", "\u{FF17}", "\u{00B2}", "1\u{0663}"] {
        assert!(
            matches!(parse_target(raw), Err(TargetInputError::NotANumber(_))),
            "input {raw:?}"
        );
    }
}

#[test]
fn rejects_overflowing_targets() {
    assert_eq!(
        parse_target("99999999999999999999"),
        Err(TargetInputError::OutOfRange("99999999999999999999".into()))
    );
}

#[test]
fn flags_default_to_disabled_when_missing_from_toml() {
    let flags: SessionFlags = toml::from_str("show_status = true").expect("flags");
    assert_eq!(
        flags,
        SessionFlags {
            show_status: true,
            target_changeable: false,
        }
    );
}

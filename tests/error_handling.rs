use zipfold::{InvalidInput, ReduceConfig, reduce};

#[test]
fn empty_input_is_rejected() {
    let pairs: Vec<(String, String)> = Vec::new();
    let res = reduce(&pairs, &ReduceConfig::default());
    assert!(matches!(res, Err(InvalidInput::Empty)));
}

#[test]
fn bound_errors_carry_the_original_text() {
    let res = reduce(&[("not a zip code", "94299")], &ReduceConfig::default());
    match res {
        Err(InvalidInput::Bound { raw, width }) => {
            assert_eq!(raw, "not a zip code");
            assert_eq!(width, 5);
        }
        other => panic!("expected bound error, got {other:?}"),
    }
}

#[test]
fn bound_that_sanitizes_to_nothing_is_rejected() {
    let res = reduce(&[("-----", "94299")], &ReduceConfig::default());
    assert!(matches!(res, Err(InvalidInput::Bound { .. })));
}

#[test]
fn bound_with_too_many_digits_is_rejected() {
    // Sanitization never truncates; six digits stay six digits.
    let res = reduce(&[("94000", "941335")], &ReduceConfig::default());
    assert!(matches!(
        res,
        Err(InvalidInput::Bound { raw, .. }) if raw == "941335"
    ));
}

#[test]
fn bound_with_too_few_digits_is_rejected() {
    let res = reduce(&[("9400", "94133")], &ReduceConfig::default());
    assert!(matches!(res, Err(InvalidInput::Bound { .. })));
}

#[test]
fn one_bad_bound_fails_the_whole_input() {
    // No partial output: a single malformed bound rejects the entire set.
    let res = reduce(
        &[("94000", "94133"), ("oops", "94299"), ("94600", "94699")],
        &ReduceConfig::default(),
    );
    assert!(matches!(res, Err(InvalidInput::Bound { .. })));
}

#[test]
fn unsupported_widths_are_rejected() {
    let pairs = [("94000", "94133")];
    assert!(matches!(
        reduce(&pairs, &ReduceConfig::with_width(0)),
        Err(InvalidInput::UnsupportedWidth { width: 0 })
    ));
    assert!(matches!(
        reduce(&pairs, &ReduceConfig::with_width(12)),
        Err(InvalidInput::UnsupportedWidth { width: 12 })
    ));
}

#[test]
fn config_version_zero_is_rejected() {
    let cfg = ReduceConfig {
        version: 0,
        ..Default::default()
    };
    let res = reduce(&[("94000", "94133")], &cfg);
    assert!(matches!(
        res,
        Err(InvalidInput::UnsupportedVersion { version: 0 })
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let err = reduce(&[("12", "94133")], &ReduceConfig::default())
        .err()
        .expect("short bound fails");
    let msg = err.to_string();
    assert!(msg.contains("\"12\""), "message should quote the bound: {msg}");
    assert!(msg.contains('5'), "message should name the width: {msg}");

    assert_eq!(InvalidInput::Empty.to_string(), "no ranges supplied");
}

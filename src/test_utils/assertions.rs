//! Custom assertion helpers for shell transcripts

/// Asserts that every expected fragment appears in the transcript
pub fn assert_output_contains(output: &str, expected: &[&str]) {
    for fragment in expected {
        assert!(
            output.contains(fragment),
            "Expected output to contain '{fragment}', but it was:\n{output}"
        );
    }
}

/// Asserts that `fragment` appears exactly `times` times
pub fn assert_occurrences(output: &str, fragment: &str, times: usize) {
    let found = output.matches(fragment).count();
    assert_eq!(
        found, times,
        "Expected '{fragment}' {times} time(s), found {found} in:\n{output}"
    );
}

/// Asserts that the fragments appear in the given order
pub fn assert_in_order(output: &str, fragments: &[&str]) {
    let mut rest = output;
    for fragment in fragments {
        match rest.find(fragment) {
            Some(pos) => rest = &rest[pos + fragment.len()..],
            None => panic!("Expected '{fragment}' in order within:\n{output}"),
        }
    }
}

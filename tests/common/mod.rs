use person_lookup::{Person, PersonField};

/// Fails with one line per differing field instead of two full `Debug` dumps.
#[track_caller]
pub fn assert_equivalent_on(actual: &Person, expected: &Person, fields: &[PersonField]) {
    let diffs = actual.differences(expected, fields);
    if !diffs.is_empty() {
        let report: Vec<String> = diffs.iter().map(ToString::to_string).collect();
        panic!("person differs from expectation:\n  {}", report.join("\n  "));
    }
}

#[track_caller]
#[allow(dead_code)]
pub fn assert_equivalent(actual: &Person, expected: &Person) {
    assert_equivalent_on(actual, expected, &PersonField::ALL);
}

//! Output parsing and approximate comparisons

/// One `from;to;value` output line
pub type Triple = (String, String, f64);

/// Parse emitted output; panics on a malformed line
pub fn parse_output(text: &str) -> Vec<Triple> {
    text.lines()
        .map(|line| {
            let fields: Vec<&str> = line.split(';').collect();
            assert_eq!(fields.len(), 3, "malformed output line {:?}", line);
            let value = fields[2]
                .parse::<f64>()
                .unwrap_or_else(|_| panic!("bad value in {:?}", line));
            (fields[0].to_string(), fields[1].to_string(), value)
        })
        .collect()
}

/// Same labels in the same order, values within `tolerance`
pub fn assert_triples_close(actual: &[Triple], expected: &[(&str, &str, f64)], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "record count differs: {:?} vs {:?}",
        actual,
        expected
    );
    for (got, want) in actual.iter().zip(expected) {
        assert_eq!((got.0.as_str(), got.1.as_str()), (want.0, want.1));
        assert!(
            (got.2 - want.2).abs() < tolerance,
            "{};{}: {} vs {}",
            want.0,
            want.1,
            got.2,
            want.2
        );
    }
}

//! Edge record decoding
//!
//! One record per line: `from;to;value`. Labels are any non-`;` text and are
//! trimmed; the value is a non-negative decimal using `.` or `,` as the
//! fractional separator. The whole line must match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EDGE_RECORD: Regex =
        Regex::new(r"^\s*([^;]+?)\s*;\s*([^;]+?)\s*;\s*([0-9]+(?:[.,][0-9]*)?)\s*$")
            .expect("edge record pattern is valid");
}

/// Decoded fields of one input line, borrowed from the line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    /// Raw value before unit scaling
    pub value: f64,
}

/// Decode one line; `None` when it is not a valid edge record
pub fn parse_edge_line(line: &str) -> Option<RawEdge<'_>> {
    let caps = EDGE_RECORD.captures(line)?;

    let from = caps.get(1)?.as_str().trim();
    let to = caps.get(2)?.as_str().trim();
    if from.is_empty() || to.is_empty() {
        return None;
    }

    let value = parse_decimal(caps.get(3)?.as_str())?;
    Some(RawEdge { from, to, value })
}

/// `12,5` and `12.5` are the same number
fn parse_decimal(text: &str) -> Option<f64> {
    text.replace(',', ".").parse::<f64>().ok()
}

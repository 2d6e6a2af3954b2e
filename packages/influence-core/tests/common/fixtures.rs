//! Edge-list fixtures

use std::fs;
use std::path::{Path, PathBuf};

/// Two nodes holding half of each other
pub const PAIR: &str = "A;B;0.5\nB;A;0.5\n";

/// Same pair written with decimal commas
pub const PAIR_DECIMAL_COMMA: &str = "A;B;0,5\nB;A;0,5\n";

/// Same pair in percent
pub const PAIR_PERCENT: &str = "A;B;50\nB;A;50\n";

/// A holds half of B, B holds half of C
pub const CHAIN: &str = "A;B;0.5\nB;C;0.5\n";

/// Two pairs with no edge between them
pub const TWO_PAIRS: &str = "A;B;0.5\nB;A;0.5\nC;D;0.25\nD;C;0.25\n";

/// Write `content` as `name` under `dir`
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// `n` nodes in a ring, each holding `weight` of the next
pub fn fixture_ring(n: usize, weight: f64) -> String {
    (0..n)
        .map(|i| format!("N{};N{};{}\n", i, (i + 1) % n, weight))
        .collect()
}

/// `count` disjoint pairs, each pair holding `weight` of each other
pub fn fixture_pairs(count: usize, weight: f64) -> String {
    (0..count)
        .map(|i| format!("P{i}a;P{i}b;{weight}\nP{i}b;P{i}a;{weight}\n"))
        .collect()
}

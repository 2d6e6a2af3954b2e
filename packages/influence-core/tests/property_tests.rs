//! Property-based tests
//!
//! Invariants that should hold for ALL inputs:
//! - Grouping: disjoint, exhaustive, equal to weak connectivity
//! - Inversion: C·(I - A) = I for substochastic A, and C >= 0
//! - Registry: one id per distinct label, stable across repeats
//! - Parsing: `.` and `,` decimals decode to the same weight

use std::collections::{BTreeSet, HashSet};

use influence_core::features::graph_loader::parse_edge_line;
use influence_core::features::grouping::SparsityGrouper;
use influence_core::features::inversion::{leontief_matrix, max_residual, GaussJordanInverter};
use influence_core::{Matrix, NodeRegistry};
use petgraph::unionfind::UnionFind;
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const EPS: f64 = 1e-10;

// ============================================================================
// QuickCheck Tests
// ============================================================================

#[quickcheck]
fn qc_registry_assigns_dense_ids(labels: Vec<u8>) -> bool {
    let mut registry = NodeRegistry::new();
    let ids: Vec<usize> = labels
        .iter()
        .map(|l| registry.register(&format!("n{}", l)).0)
        .collect();

    let distinct: HashSet<u8> = labels.iter().copied().collect();
    registry.len() == distinct.len()
        && ids.iter().all(|&id| id < registry.len())
        && labels
            .iter()
            .zip(&ids)
            .all(|(l, &id)| registry.id_of(&format!("n{}", l)) == Some(id))
}

#[quickcheck]
fn qc_decimal_separator_is_irrelevant(whole: u16, frac: u16, from: u8, to: u8) -> TestResult {
    let dotted = format!("n{};m{};{}.{}", from, to, whole, frac);
    let comma = format!("n{};m{};{},{}", from, to, whole, frac);

    match (parse_edge_line(&dotted), parse_edge_line(&comma)) {
        (Some(a), Some(b)) => TestResult::from_bool(
            a == b && a.value == format!("{}.{}", whole, frac).parse::<f64>().unwrap(),
        ),
        _ => TestResult::failed(),
    }
}

#[quickcheck]
fn qc_negative_values_rejected(value: u16) -> bool {
    parse_edge_line(&format!("A;B;-{}", value)).is_none()
}

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Node count plus a list of (from, to) edges among them
fn arb_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..14).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
}

/// Square matrix with every column summing below 1
fn arb_substochastic() -> impl Strategy<Value = Matrix> {
    (1usize..9).prop_flat_map(|n| {
        let cap = 0.99 / n as f64;
        prop::collection::vec(prop::collection::vec(0.0..cap, n), n)
            .prop_map(|rows| Matrix::from_rows(rows).unwrap())
    })
}

fn weight_matrix(n: usize, edges: &[(usize, usize)]) -> Matrix {
    let mut m = Matrix::new(n, n);
    for &(from, to) in edges {
        m.set(from, to, 0.1);
    }
    m
}

// ============================================================================
// Proptest Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_groups_match_weak_components((n, edges) in arb_edges()) {
        let groups = SparsityGrouper::new(EPS).group(&weight_matrix(n, &edges)).unwrap();

        let mut uf = UnionFind::<usize>::new(n);
        for &(from, to) in &edges {
            uf.union(from, to);
        }
        let labeling = uf.into_labeling();
        let mut expected: Vec<Vec<usize>> = Vec::new();
        for root in labeling.iter().copied().collect::<BTreeSet<_>>() {
            expected.push((0..n).filter(|&i| labeling[i] == root).collect());
        }

        let actual: BTreeSet<Vec<usize>> = groups
            .iter()
            .map(|g| {
                let mut members = g.members().to_vec();
                members.sort_unstable();
                members
            })
            .collect();
        let expected: BTreeSet<Vec<usize>> = expected.into_iter().collect();
        prop_assert_eq!(actual, expected);

        // disjoint + exhaustive
        let total: usize = groups.iter().map(|g| g.len()).sum();
        prop_assert_eq!(total, n);
    }

    #[test]
    fn prop_groups_ordered_by_smallest_member((n, edges) in arb_edges()) {
        let groups = SparsityGrouper::new(EPS).group(&weight_matrix(n, &edges)).unwrap();

        for group in &groups {
            let min = *group.members().iter().min().unwrap();
            prop_assert_eq!(group.members()[0], min);
        }
        for pair in groups.windows(2) {
            prop_assert!(pair[0].members()[0] < pair[1].members()[0]);
        }
    }

    #[test]
    fn prop_leontief_inverse_is_exact(a in arb_substochastic()) {
        let b = leontief_matrix(&a).unwrap();
        let c = GaussJordanInverter::new(EPS).invert(&b).unwrap();

        prop_assert!(max_residual(&c, &b).unwrap() < 1e-9);
        for (i, row) in c.iter_rows().enumerate() {
            // diagonal holds the unit of self-influence
            prop_assert!(row[i] >= 1.0 - 1e-9);
            for &v in row {
                prop_assert!(v >= -1e-9);
            }
        }
    }

    #[test]
    fn prop_inverse_leaves_input_untouched(a in arb_substochastic()) {
        let b = leontief_matrix(&a).unwrap();
        let before = b.clone();
        GaussJordanInverter::new(EPS).invert(&b).unwrap();
        prop_assert_eq!(b, before);
    }
}

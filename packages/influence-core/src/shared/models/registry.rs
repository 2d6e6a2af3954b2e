//! Node registry: label ↔ dense id
//!
//! Ids are assigned in first-seen order and are never reused or removed, so
//! an id is always a valid row/column of the weight matrix built alongside.

use std::collections::HashMap;

/// Ordered set of unique node labels
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label` if unseen.
    ///
    /// Returns the label's id and `true` when it was newly added.
    pub fn register(&mut self, label: &str) -> (usize, bool) {
        if let Some(&id) = self.index.get(label) {
            return (id, false);
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        (id, true)
    }

    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Labels for a list of ids; unknown ids render as `#<id>`
    pub fn labels_for(&self, ids: &[usize]) -> Vec<String> {
        ids.iter()
            .map(|&id| {
                self.label(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut registry = NodeRegistry::new();
        assert_eq!(registry.register("B"), (0, true));
        assert_eq!(registry.register("A"), (1, true));
        assert_eq!(registry.register("C"), (2, true));

        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(registry.id_of("A"), Some(1));
        assert_eq!(registry.label(2), Some("C"));
    }

    #[test]
    fn test_reregistration_is_idempotent() {
        let mut registry = NodeRegistry::new();
        registry.register("A");
        assert_eq!(registry.register("A"), (0, false));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_lookups() {
        let registry = NodeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.id_of("missing"), None);
        assert_eq!(registry.label(0), None);
        assert_eq!(registry.labels_for(&[3]), vec!["#3".to_string()]);
    }
}

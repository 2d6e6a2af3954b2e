//! Run summary

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::graph_loader::LoadStats;

/// Group left out of the output because `I - A` had no inverse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedGroup {
    /// Position in grouper output
    pub index: usize,
    pub members: Vec<String>,
    pub reason: String,
}

/// What one pipeline run read, computed and wrote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub load: LoadStats,
    /// All groups, singletons included
    pub groups: usize,
    pub singleton_groups: usize,
    /// Groups inverted and emitted
    pub analyzed_groups: usize,
    pub records_written: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_groups: Vec<SkippedGroup>,
}

impl RunReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines read:        {}", self.load.lines)?;
        writeln!(f, "Nodes:             {}", self.load.nodes)?;
        writeln!(
            f,
            "Groups:            {} ({} singleton)",
            self.groups, self.singleton_groups
        )?;
        writeln!(f, "Groups analyzed:   {}", self.analyzed_groups)?;
        write!(f, "Records written:   {}", self.records_written)?;
        for skipped in &self.skipped_groups {
            write!(
                f,
                "\nSkipped group #{} [{}]: {}",
                skipped.index,
                skipped.members.join(", "),
                skipped.reason
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summary() {
        let report = RunReport {
            load: LoadStats {
                lines: 4,
                nodes: 5,
                edges: 4,
            },
            groups: 3,
            singleton_groups: 1,
            analyzed_groups: 1,
            records_written: 2,
            skipped_groups: vec![SkippedGroup {
                index: 1,
                members: vec!["C".into(), "D".into()],
                reason: "no usable pivot".into(),
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Groups:            3 (1 singleton)"));
        assert!(text.contains("Skipped group #1 [C, D]: no usable pivot"));
    }

    #[test]
    fn test_json_omits_empty_skips() {
        let json = RunReport::default().to_json().unwrap();
        assert!(json.contains("\"records_written\": 0"));
        assert!(!json.contains("skipped_groups"));

        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RunReport::default());
    }
}

//! Influence pipeline
//!
//! ```text
//! input ─▶ GraphLoader ─▶ validate ─▶ SparsityGrouper ─┐
//!                                                      ▼
//! output ◀─ EdgeWriter ◀─ verify ◀─ GaussJordan ◀─ I - A  (per group)
//! ```
//!
//! Strictly sequential: loading finishes before grouping, grouping before
//! the first inversion, and each group is inverted and written before the
//! next one starts. Records are staged in a `.tmp` sibling of the output
//! that is renamed into place only after the last group; a failed run leaves
//! no output file behind.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use crate::config::{RunConfig, SingularPolicy, Validatable};
use crate::errors::{ErrorKind, InfluenceError, Result};
use crate::features::emission::EdgeWriter;
use crate::features::graph_loader::{validate_loaded, GraphLoader, LoadedGraph};
use crate::features::grouping::{Group, SparsityGrouper};
use crate::features::inversion::{
    leontief_matrix, max_residual, verify_inverse, GaussJordanInverter,
};
use crate::pipeline::report::{RunReport, SkippedGroup};
use crate::shared::models::Matrix;

/// Loaded, validated and grouped input
#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: LoadedGraph,
    pub groups: Vec<Group>,
}

/// End-to-end run over one edge list
pub struct InfluencePipeline {
    config: RunConfig,
    epsilon: f64,
}

impl InfluencePipeline {
    /// Validates `config` up front
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        let epsilon = config.epsilon();
        Ok(Self { config, epsilon })
    }

    /// Read `config.input`, write `config.output`
    pub fn run(&self) -> Result<RunReport> {
        let analysis = {
            let file = open_input(&self.config.input)?;
            self.analyze(BufReader::new(file))?
        };

        let output = &self.config.output;
        let staging = staging_path(output);
        let file = File::create(&staging).map_err(|err| {
            InfluenceError::new(
                ErrorKind::IO,
                format!("cannot create output '{}': {}", staging.display(), err),
            )
            .with_source(err)
        })?;

        let report = match self.emit(&analysis, file) {
            Ok(report) => report,
            Err(err) => {
                fs::remove_file(&staging).ok();
                return Err(err);
            }
        };

        // Atomic rename
        fs::rename(&staging, output).map_err(|err| {
            InfluenceError::new(
                ErrorKind::IO,
                format!("cannot move output into '{}': {}", output.display(), err),
            )
            .with_source(err)
        })?;
        Ok(report)
    }

    /// Same as [`run`](Self::run) over caller-provided streams
    pub fn run_streams<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<RunReport> {
        let analysis = self.analyze(reader)?;
        self.emit(&analysis, writer)
    }

    /// Load, validate and group
    pub fn analyze<R: BufRead>(&self, reader: R) -> Result<Analysis> {
        let graph = GraphLoader::new(self.config.unit).load(reader)?;
        validate_loaded(&graph, self.epsilon, self.config.check_column_sums)?;

        let groups = SparsityGrouper::new(self.epsilon).group(&graph.matrix)?;
        for (index, group) in groups.iter().enumerate() {
            trace!(
                "Group #{}: {}",
                index,
                graph.registry.labels_for(group.members()).join(", ")
            );
        }

        Ok(Analysis { graph, groups })
    }

    /// Invert every non-singleton group and write its records
    pub fn emit<W: Write>(&self, analysis: &Analysis, writer: W) -> Result<RunReport> {
        let Analysis { graph, groups } = analysis;
        let mut writer = EdgeWriter::new(writer);
        let mut report = RunReport {
            load: graph.stats,
            groups: groups.len(),
            ..RunReport::default()
        };

        for (index, group) in groups.iter().enumerate() {
            if group.is_singleton() {
                report.singleton_groups += 1;
                continue;
            }

            info!("Analyzing group #{} of {} members", index, group.len());
            match self.invert_group(&graph.matrix, group) {
                Ok(inverse) => {
                    writer.emit_group(group, &inverse, &graph.registry, self.epsilon)?;
                    report.analyzed_groups += 1;
                }
                Err(err) if self.skippable(&err) => {
                    let members = graph.registry.labels_for(group.members());
                    warn!(
                        "Skipping group #{} ({}): {}",
                        index,
                        members.join(", "),
                        err.message
                    );
                    report.skipped_groups.push(SkippedGroup {
                        index,
                        members,
                        reason: err.message,
                    });
                }
                Err(err) => return Err(err),
            }
        }

        report.records_written = writer.written();
        writer.finish()?;
        info!(
            "Wrote {} records for {} groups",
            report.records_written, report.analyzed_groups
        );
        Ok(report)
    }

    /// Under `skip`, a group with no inverse or one failing the self-check is
    /// left out; everything else aborts
    fn skippable(&self, err: &InfluenceError) -> bool {
        self.config.singular_policy == SingularPolicy::Skip
            && (err.is_singular() || err.kind == ErrorKind::Verification)
    }

    /// (I - A)^-1 for one group's submatrix
    pub fn invert_group(&self, matrix: &Matrix, group: &Group) -> Result<Matrix> {
        let a = matrix.submatrix(group.members(), group.members());
        let b = leontief_matrix(&a)?;
        let inverse = GaussJordanInverter::new(self.epsilon).invert(&b)?;

        if self.config.verify_inverse {
            verify_inverse(&inverse, &b, self.epsilon)?;
            debug!(
                "Inverse verified, max residual {:e}",
                max_residual(&inverse, &b)?
            );
        }
        Ok(inverse)
    }
}

/// `<output>.tmp`, next to the output so the final rename stays on one filesystem
fn staging_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| {
        InfluenceError::new(
            ErrorKind::IO,
            format!("cannot open input '{}': {}", path.display(), err),
        )
        .with_source(err)
    })
}

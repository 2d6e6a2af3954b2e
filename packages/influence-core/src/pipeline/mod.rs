//! Pipeline orchestration: load → group → invert → emit

pub mod orchestrator;
pub mod report;

pub use orchestrator::{Analysis, InfluencePipeline};
pub use report::{RunReport, SkippedGroup};

//! Build pipeline — Configure, Compile, Test, Coverage, Boundary, Package.
//!
//! Strictly sequential and fail-fast: a failed stage halts the run and the
//! remaining stages are reported skipped. These are build-time checks, so
//! there are no retries.

pub mod hooks;
pub mod runner;
pub mod stage;

pub use runner::PipelineRunner;
pub use stage::{PipelineReport, Stage, StageOutcome, StageStatus};

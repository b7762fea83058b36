//! Dataset assembly pipeline: seeds → citing works → references, each
//! enriched with first/last author names and gender guesses.

pub mod pipeline;

pub use pipeline::{ProgressReporter, RunConfig, RunSummary, SilentProgress, run};

//! Generation pipeline and its result

pub mod pipeline;
pub mod report;

pub use pipeline::{generate, Pipeline};
pub use report::{GenerationReport, Notice};

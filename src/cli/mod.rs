pub mod args;
pub mod pipeline;

pub use args::{Args, Combine, OverflowArg};
pub use pipeline::{Pipeline, PipelineOptions, expand_inputs, is_batch_pattern, is_directory};

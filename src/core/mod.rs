pub mod info;
pub mod sample;

pub use info::{FORMAT_PCM, PCM_FMT_CHUNK_SIZE, SamplingInfo};
pub use sample::{BitDepth, Overflow, Sample};

/// Per-channel sample sequences, all the same length.
pub type Channels = Vec<Vec<Sample>>;

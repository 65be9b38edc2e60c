pub mod wav;

pub use wav::{WavFile, WavReader, WavWriter};

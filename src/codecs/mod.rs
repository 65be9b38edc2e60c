pub mod pcm;

pub use pcm::{PcmDecoder, PcmEncoder, TrailingBytes};

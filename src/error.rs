use thiserror::Error;

pub type WavResult<T> = Result<T, WavError>;

#[derive(Debug, Error)]
pub enum WavError {
	#[error("unsupported bit depth: {0} (expected 16, 24 or 32)")]
	UnsupportedBitDepth(u16),

	#[error("channel count must be at least 1")]
	InvalidChannelCount,

	#[error("expected {expected} channels, found {found}")]
	ChannelCountMismatch { expected: usize, found: usize },

	#[error("channel {channel} has {found} samples, expected {expected}")]
	ChannelLengthMismatch { channel: usize, expected: usize, found: usize },

	#[error("buffer of {len} bytes is not a whole number of {block_align}-byte frames")]
	TruncatedBuffer { len: usize, block_align: usize },

	#[error("sample value {0} is outside [-1.0, 1.0)")]
	ValueOutOfRange(f64),

	#[error("sample needs {expected} bytes, got {found}")]
	SampleWidth { expected: usize, found: usize },

	#[error("sample sets use different bit depths")]
	MixedBitDepth,

	#[error("incompatible formats: {0}")]
	FormatMismatch(String),

	#[error("invalid data: {0}")]
	InvalidData(&'static str),

	#[error("missing '{0}' chunk")]
	MissingChunk(&'static str),

	#[error("unsupported format code {0} (only PCM = 1)")]
	UnsupportedFormat(u16),

	#[error("{0} does not fit in its header field")]
	HeaderOverflow(&'static str),

	#[error("data payload of {0} bytes does not fit in a RIFF header")]
	DataTooLarge(usize),

	#[error("invalid glob pattern: {0}")]
	Pattern(#[from] glob::PatternError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl WavError {
	pub fn invalid_data(msg: &'static str) -> Self {
		Self::InvalidData(msg)
	}
}

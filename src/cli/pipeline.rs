use super::args::{Args, Combine};
use crate::codecs::TrailingBytes;
use crate::container::WavFile;
use crate::core::{BitDepth, Overflow};
use crate::error::WavResult;
use crate::show::Show;
use std::io::{Error, ErrorKind};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
	pub depth: Option<BitDepth>,
	pub combine: Option<Combine>,
	pub overflow: Overflow,
	pub trailing: TrailingBytes,
}

pub struct Pipeline {
	inputs: Vec<String>,
	output: Option<String>,
	show_mode: bool,
	options: PipelineOptions,
}

impl Pipeline {
	pub fn new(
		inputs: Vec<String>,
		output: Option<String>,
		show_mode: bool,
		options: PipelineOptions,
	) -> Self {
		Self { inputs, output, show_mode, options }
	}

	pub fn from_args(args: &Args) -> WavResult<Self> {
		let depth = args.bits.map(BitDepth::from_bits).transpose()?;
		let trailing = if args.lenient { TrailingBytes::Drop } else { TrailingBytes::Reject };
		let options =
			PipelineOptions { depth, combine: args.combine, overflow: args.overflow.into(), trailing };
		Ok(Self::new(args.input.clone(), args.output.clone(), args.show, options))
	}

	pub fn run(&self) -> WavResult<()> {
		let files = expand_inputs(&self.inputs)?;

		if files.is_empty() {
			return Err(Error::new(
				ErrorKind::NotFound,
				format!("no files matching: {}", self.inputs.join(" ")),
			)
			.into());
		}

		if self.show_mode {
			for path in &files {
				Show::new(path.clone(), self.options.trailing).run()?;
			}
			return Ok(());
		}

		if let Some(combine) = self.options.combine {
			return self.run_combine(&files, combine);
		}

		match self.output.as_deref() {
			Some(output) if files.len() == 1 && !is_directory(output) => {
				self.convert_one(&files[0], output)
			}
			_ => self.run_batch(&files),
		}
	}

	fn run_combine(&self, files: &[String], combine: Combine) -> WavResult<()> {
		let output = self.require_output()?;

		let clips =
			files.iter().map(|path| self.load(path)).collect::<WavResult<Vec<WavFile>>>()?;

		let combined = match combine {
			Combine::Concat => WavFile::concatenate(&clips)?,
			Combine::Mix => WavFile::superimpose(&clips, self.options.overflow)?,
		};

		self.finish(&combined, output)
	}

	fn run_batch(&self, files: &[String]) -> WavResult<()> {
		let output_dir = self.output.clone().unwrap_or_else(|| "out".to_string());
		if Path::new(&output_dir).exists() && !is_directory(&output_dir) {
			return Err(Error::new(
				ErrorKind::InvalidInput,
				format!("output for several inputs must be a directory: {}", output_dir),
			)
			.into());
		}
		std::fs::create_dir_all(&output_dir)?;

		for input_path in files {
			let file_name =
				Path::new(input_path).file_name().and_then(|n| n.to_str()).unwrap_or("output.wav");
			let output_path = format!("{}/{}", output_dir, file_name);

			println!("Processing: {}", input_path);
			self.convert_one(input_path, &output_path)?;
			println!("  -> {}", output_path);
		}

		Ok(())
	}

	fn convert_one(&self, input: &str, output: &str) -> WavResult<()> {
		let file = self.load(input)?;
		self.finish(&file, output)
	}

	fn finish(&self, file: &WavFile, output: &str) -> WavResult<()> {
		match self.options.depth {
			Some(depth) if depth != file.info().bit_depth() => {
				file.convert(depth, self.options.overflow)?.save(output)
			}
			_ => file.save(output),
		}
	}

	fn load(&self, path: &str) -> WavResult<WavFile> {
		WavFile::open(path, self.options.trailing)
	}

	fn require_output(&self) -> WavResult<&str> {
		self.output.as_deref().ok_or_else(|| {
			Error::new(ErrorKind::InvalidInput, "output path required for combining").into()
		})
	}
}

/// Expands glob patterns; plain paths pass through untouched.
pub fn expand_inputs(inputs: &[String]) -> WavResult<Vec<String>> {
	let mut files = Vec::new();

	for input in inputs {
		if !is_batch_pattern(input) {
			files.push(input.clone());
			continue;
		}

		for entry in glob::glob(input)? {
			match entry {
				Ok(path) if path.is_file() => files.push(path.to_string_lossy().to_string()),
				Ok(_) => {}
				Err(e) => log::warn!("failed to read entry: {}", e),
			}
		}
	}

	Ok(files)
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*') || input.contains('?') || input.contains('[')
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}

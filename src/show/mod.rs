use crate::codecs::TrailingBytes;
use crate::container::WavFile;
use crate::error::WavResult;
use prettytable::{Table, row};

pub struct Show {
	input_path: String,
	trailing: TrailingBytes,
}

impl Show {
	pub fn new(input_path: String, trailing: TrailingBytes) -> Self {
		Self { input_path, trailing }
	}

	pub fn run(&self) -> WavResult<()> {
		let file = WavFile::open(&self.input_path, self.trailing)?;
		summary_table(&self.input_path, &file).printstd();
		Ok(())
	}
}

pub fn summary_table(path: &str, file: &WavFile) -> Table {
	let info = file.info();
	let mut table = Table::new();

	table.set_titles(row!["field", "value"]);
	table.add_row(row!["file", path]);
	table.add_row(row!["format code", info.format_code()]);
	table.add_row(row!["channels", info.channel_count()]);
	table.add_row(row!["sample rate", format!("{} Hz", info.sample_rate())]);
	table.add_row(row!["bit depth", info.bits_per_sample()]);
	let byte_rate = info.bytes_per_second().map_or_else(|e| e.to_string(), |rate| rate.to_string());
	table.add_row(row!["byte rate", byte_rate]);
	table.add_row(row!["block align", info.block_align()]);
	table.add_row(row!["samples/channel", file.samples_per_channel()]);
	table.add_row(row!["duration", format!("{:.3} s", file.duration_secs())]);

	table
}

use crate::core::Overflow;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pcmwav")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(
		short,
		long,
		value_name = "FILE",
		num_args = 1..,
		required = true,
		help = "Input file(s) or glob pattern"
	)]
	pub input: Vec<String>,

	#[arg(short, long, value_name = "FILE", help = "Output file or directory")]
	pub output: Option<String>,

	#[arg(long, help = "Print a summary of each input")]
	pub show: bool,

	#[arg(long, value_name = "BITS", help = "Output bit depth (16, 24, 32)")]
	pub bits: Option<u16>,

	#[arg(long, value_enum, value_name = "MODE", help = "Join all inputs into one output")]
	pub combine: Option<Combine>,

	#[arg(long, value_enum, default_value_t = OverflowArg::Wrap, help = "Out-of-range sample handling")]
	pub overflow: OverflowArg,

	#[arg(long, help = "Drop bytes after the last whole frame instead of failing")]
	pub lenient: bool,

	#[arg(short, long, help = "Debug logging")]
	pub verbose: bool,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Combine {
	/// Play inputs one after another
	Concat,
	/// Add inputs sample by sample
	Mix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
	Wrap,
	Clamp,
	Reject,
}

impl From<OverflowArg> for Overflow {
	fn from(arg: OverflowArg) -> Self {
		match arg {
			OverflowArg::Wrap => Overflow::Wrap,
			OverflowArg::Clamp => Overflow::Clamp,
			OverflowArg::Reject => Overflow::Reject,
		}
	}
}

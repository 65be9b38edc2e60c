use pcmwav::cli::{Args, Pipeline};

fn main() {
	let args = Args::parse();

	let level = if args.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

	let result = Pipeline::from_args(&args).and_then(|pipeline| pipeline.run());

	match result {
		Ok(()) => {
			if !args.show {
				if let Some(output) = &args.output {
					println!("ok: {} -> {}", args.input.join(" "), output);
				}
			}
		}
		Err(e) => {
			log::debug!("{:?}", e);
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use bs_gen_core::io::default_input_file;
use bs_gen_core::{PhraseGenerator, WordStore};

const DESCRIPTION: &str = "Generate one or more nonsense phrases by randomly
combining words and phrases from a predefined data file.
The phrases are constructed using categories such as starting words,
suffixes, protocols, and endings, producing jargon-filled or humorous output.";

/// Command line of the `bullshit` binary.
#[derive(Parser, Debug)]
#[command(name = "bullshit", version, about = DESCRIPTION)]
struct Cli {
	/// Number of phrases to generate
	#[arg(value_name = "COUNT", conflicts_with = "count")]
	times: Option<usize>,

	/// Number of phrases to generate (same as COUNT)
	#[arg(short = 'n', long, value_name = "N")]
	count: Option<usize>,

	/// Word file [default: $BULLSHIT_FILE, then the config directories, then /usr/share/bullshit.txt]
	#[arg(short, long, value_name = "PATH")]
	file: Option<PathBuf>,

	/// Print the sorted word file instead of phrases
	#[arg(short, long)]
	sort: bool,

	/// Seed for reproducible output
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,
}

impl Cli {
	fn count(&self) -> usize {
		self.times.or(self.count).unwrap_or(1)
	}
}

/// Writes either the sorted store or `count` phrases to `out`.
fn write_output<W: Write>(cli: &Cli, store: &WordStore, out: &mut W) -> io::Result<()> {
	if cli.sort {
		for line in store.sorted_dump() {
			writeln!(out, "{line}")?;
		}
		return out.flush();
	}

	let mut rng = match cli.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_rng(&mut rand::rng()),
	};
	let generator = PhraseGenerator::new(store);
	for phrase in generator.generate_many(cli.count(), &mut rng) {
		writeln!(out, "{phrase}")?;
	}
	out.flush()
}

fn main() -> ExitCode {
	env_logger::init();

	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			// --help and --version land here too
			let _ = e.print();
			return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};

	let path = cli.file.clone().unwrap_or_else(default_input_file);
	debug!("reading words from {}", path.display());

	let store = match WordStore::load(&path) {
		Ok(store) => store,
		Err(e) if e.is_io() => {
			eprintln!("error: {e}");
			return ExitCode::FAILURE;
		}
		Err(e) => {
			eprintln!("error: {}: {e}", path.display());
			return ExitCode::FAILURE;
		}
	};

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	match write_output(&cli, &store, &mut out) {
		Ok(()) => ExitCode::SUCCESS,
		// Output piped into `head` and the like
		Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e}");
			ExitCode::FAILURE
		}
	}
}

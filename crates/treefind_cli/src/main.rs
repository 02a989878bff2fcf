#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "treefind", about = "Path queries over JSON documents")]
struct Cli {
	/// Emit debug logs on stderr. `RUST_LOG` takes precedence.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Evaluate a path against a JSON document (`-` reads stdin).
	Find {
		input: PathBuf,
		path: String,
		/// Require the located value to have this shape.
		#[arg(long = "as", value_enum)]
		shape: Option<cmd::find::ShapeArg>,
		#[arg(long)]
		json: bool,
	},
	/// Print the steps a path expression parses into.
	Steps {
		path: String,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> cmd::Result<()> {
	match command {
		Commands::Find { input, path, shape, json } => cmd::find::run(input, path, shape, json),
		Commands::Steps { path, json } => cmd::steps::run(path, json),
	}
}

// SPDX-License-Identifier: Apache-2.0

//! Data structures for the `bench` CLI.

use crate::invocation::{Invocation, Mode};
use crate::policy::Policy;
use crate::DEFAULT_SCRIPT;
use std::path::PathBuf;

/// Run the benchmark script through a fixed sequence of tests.
#[derive(Debug, clap::Parser)]
#[command(name = "bench", about, version, long_about = None)]
pub struct Args {
	#[clap(flatten)]
	pub verbose: clap_verbosity_flag::Verbosity,

	/// Path to the benchmark script.
	#[arg(long, global = true, default_value = DEFAULT_SCRIPT)]
	pub script: PathBuf,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
	/// Run tests 1 through 7 once each on the GPU.
	GpuSweep,
	/// Run tests 6 and 7 on the CPU, ten times over.
	CpuRepeat,
	/// Run a single test.
	Run {
		/// The test identifier to pass to the script.
		test: String,
		/// Where to run the test.
		#[arg(value_enum)]
		mode: Mode,
	},
}

impl Commands {
	pub fn policy(&self) -> Policy {
		match self {
			Commands::GpuSweep => Policy::GpuSweep,
			Commands::CpuRepeat => Policy::CpuRepeat,
			Commands::Run { test, mode } => Policy::Single(Invocation::new(test, *mode)),
		}
	}
}

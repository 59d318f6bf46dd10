// SPDX-License-Identifier: Apache-2.0

use anyhow::Context as _;
use bench_runner::cli::Args;
use bench_runner::{Driver, Error, ScriptRunner, Summary};
use clap::Parser as _;
use std::io;
use std::process::ExitCode;

/// Entry point for `bench`.
///
/// Sets up logging and makes sure the exit code reflects the first failure.
fn main() -> ExitCode {
	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(args.verbose.log_level_filter())
		.init();

	match run(&args) {
		Ok(summary) => {
			log::debug!("run complete [invocations={}]", summary.invocations);
			ExitCode::SUCCESS
		}
		Err(e) => {
			print_error(&e);
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> anyhow::Result<Summary> {
	let policy = args.command.policy();
	log::debug!(
		"starting benchmark run [script='{}', policy={:?}]",
		args.script.display(),
		policy
	);

	let runner = ScriptRunner::new(&args.script);
	let mut driver = Driver::new(runner, io::stdout().lock());

	driver.run(&policy).context("benchmark run aborted")
}

/// Print the error chain, plus anything the script wrote to stderr.
///
/// This goes to stdout, alongside the benchmark output it interrupts.
fn print_error(e: &anyhow::Error) {
	println!("Error running benchmark: {:#}", e);

	if let Some(stderr) = e.downcast_ref::<Error>().and_then(Error::stderr) {
		println!("Error output: {}", stderr);
	}
}

// SPDX-License-Identifier: Apache-2.0

//! Walks a [`Policy`] one invocation at a time, stopping at the first failure.

use crate::command::Invoke;
use crate::error::{Error, Result};
use crate::policy::{Policy, Step};
use std::io::Write;

/// What a completed run accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	/// Number of invocations which ran to a successful exit.
	pub invocations: usize,
}

/// Runs invocations through `R`, relaying their output to `W`.
pub struct Driver<R, W> {
	runner: R,
	out: W,
}

impl<R: Invoke, W: Write> Driver<R, W> {
	pub fn new(runner: R, out: W) -> Self {
		Driver { runner, out }
	}

	/// Run every step of `policy` in order.
	///
	/// The first failing invocation ends the run; nothing after it is
	/// attempted.
	pub fn run(&mut self, policy: &Policy) -> Result<Summary> {
		let result = self.run_steps(policy);

		// Output from earlier invocations must reach `W` even when a later one fails.
		let flushed = self.out.flush().map_err(Error::Write);
		let summary = result?;
		flushed?;

		log::info!("all benchmarks finished [count={}]", summary.invocations);
		Ok(summary)
	}

	fn run_steps(&mut self, policy: &Policy) -> Result<Summary> {
		let mut summary = Summary { invocations: 0 };

		for step in policy.steps() {
			match step {
				Step::Progress { n, total } => {
					writeln!(self.out, "Running benchmark {} of {}", n, total)
						.map_err(Error::Write)?;
				}
				Step::Invoke(invocation) => {
					log::info!("running benchmark [{}]", invocation);
					let output = self.runner.invoke(&invocation)?;
					writeln!(self.out, "{}", output.stdout).map_err(Error::Write)?;
					summary.invocations += 1;
				}
			}
		}

		Ok(summary)
	}

	pub fn into_parts(self) -> (R, W) {
		(self.runner, self.out)
	}
}

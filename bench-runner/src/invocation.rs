// SPDX-License-Identifier: Apache-2.0

//! The values passed into and out of a single benchmark run.

use std::fmt::{self, Display, Formatter};
use std::process::{ExitStatus, Output};

/// Which hardware a benchmark run targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
	Gpu,
	Cpu,
}

impl Mode {
	/// The token the benchmark script expects for this mode.
	pub fn as_str(&self) -> &'static str {
		match self {
			Mode::Gpu => "gpu",
			Mode::Cpu => "cpu",
		}
	}
}

impl Display for Mode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// The pair of positional arguments for one run of the benchmark script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
	/// Which test to run, as the script sees it.
	pub test_id: String,
	pub mode: Mode,
}

impl Invocation {
	pub fn new(test_id: impl ToString, mode: Mode) -> Self {
		Invocation {
			test_id: test_id.to_string(),
			mode,
		}
	}

	/// The arguments in the order the script takes them.
	pub fn args(&self) -> [&str; 2] {
		[self.test_id.as_str(), self.mode.as_str()]
	}
}

impl Display for Invocation {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "test {} ({})", self.test_id, self.mode)
	}
}

/// Everything a finished child process produced.
#[derive(Debug, Clone)]
pub struct InvocationOutput {
	pub status: ExitStatus,
	pub stdout: String,
	pub stderr: String,
}

impl InvocationOutput {
	pub fn success(&self) -> bool {
		self.status.success()
	}
}

impl From<Output> for InvocationOutput {
	fn from(output: Output) -> Self {
		InvocationOutput {
			status: output.status,
			stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
			stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
		}
	}
}

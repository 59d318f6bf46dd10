// SPDX-License-Identifier: Apache-2.0

//! Running the benchmark script as a child process.

use crate::error::{Error, Result};
use crate::invocation::{Invocation, InvocationOutput};
use itertools::Itertools as _;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A fully-configured child process, waiting to be run.
///
/// Arguments are handed to the program as discrete tokens. No shell is
/// involved, so metacharacters in arguments are passed through untouched.
#[derive(Debug)]
pub struct BenchCommand {
	program: PathBuf,
	command: Command,
	/// Rendered `program arg...`, kept for error messages.
	display: String,
}

impl BenchCommand {
	pub fn new<P, I, S>(program: P, args: I) -> Self
	where
		P: AsRef<Path>,
		I: IntoIterator<Item = S>,
		S: AsRef<OsStr>,
	{
		let program = program.as_ref().to_path_buf();
		let args = args
			.into_iter()
			.map(|arg| arg.as_ref().to_os_string())
			.collect::<Vec<_>>();

		log_args(&program, &args);

		let display = std::iter::once(program.as_os_str())
			.chain(args.iter().map(|arg| arg.as_os_str()))
			.map(|part| part.to_string_lossy())
			.join(" ");

		let mut command = Command::new(&program);
		command.args(&args).stdin(Stdio::null());

		BenchCommand {
			program,
			command,
			display,
		}
	}

	/// Run the command to completion, capturing both output streams.
	///
	/// Blocks until the child exits. There is no timeout.
	pub fn output(&mut self) -> Result<InvocationOutput> {
		let output = self.command.output().map_err(|source| Error::Launch {
			program: self.program.clone(),
			source,
		})?;
		let output = InvocationOutput::from(output);

		log::debug!(
			"child exited [command='{}', status='{}']",
			self.display,
			output.status
		);

		if output.success() {
			return Ok(output);
		}

		Err(Error::Execution {
			command: self.display.clone(),
			status: output.status,
			stdout: output.stdout,
			stderr: output.stderr,
		})
	}
}

/// Log the program and each of its arguments before running it.
fn log_args(program: &Path, args: &[OsString]) {
	log::debug!("benchmark executable location [path='{}']", program.display());

	for (index, arg) in args.iter().enumerate() {
		let arg_val = arg
			.to_str()
			.unwrap_or("argument for command could not be logged.");

		log::debug!("benchmark argument [name='{}', value='{}']", index, arg_val);
	}
}

/// Something that can carry out one benchmark invocation.
pub trait Invoke {
	fn invoke(&mut self, invocation: &Invocation) -> Result<InvocationOutput>;
}

/// Runs `<script> <test_id> <mode>` for each invocation.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
	script: PathBuf,
}

impl ScriptRunner {
	pub fn new(script: impl Into<PathBuf>) -> Self {
		ScriptRunner {
			script: script.into(),
		}
	}
}

impl Invoke for ScriptRunner {
	fn invoke(&mut self, invocation: &Invocation) -> Result<InvocationOutput> {
		BenchCommand::new(&self.script, invocation.args()).output()
	}
}

// SPDX-License-Identifier: Apache-2.0

//! Errors produced while running the benchmark script.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// `Result` which uses [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A failed invocation of the benchmark script.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The program couldn't be started at all, so there is no output.
	#[error("failed to launch '{}'", .program.display())]
	Launch {
		program: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The program ran but did not exit successfully.
	#[error("command `{command}` {}", describe_status(.status))]
	Execution {
		command: String,
		status: ExitStatus,
		stdout: String,
		stderr: String,
	},

	/// Relaying the benchmark's output to our own stdout failed.
	#[error("failed to write benchmark output")]
	Write(#[source] io::Error),
}

impl Error {
	/// The captured standard error, if the child got far enough to produce any.
	pub fn stderr(&self) -> Option<&str> {
		match self {
			Error::Execution { stderr, .. } => Some(stderr),
			Error::Launch { .. } | Error::Write(_) => None,
		}
	}

	/// The exit code of the child, if it exited normally.
	pub fn exit_code(&self) -> Option<i32> {
		match self {
			Error::Execution { status, .. } => status.code(),
			Error::Launch { .. } | Error::Write(_) => None,
		}
	}
}

fn describe_status(status: &ExitStatus) -> String {
	match status.code() {
		Some(code) => format!("returned non-zero exit status {}", code),
		// No exit code means the child was killed by a signal; the platform
		// renders that as e.g. "signal: 9 (SIGKILL)".
		None => format!("was terminated by {}", status),
	}
}

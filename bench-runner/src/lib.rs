// SPDX-License-Identifier: Apache-2.0

//! Run a benchmark script through fixed sequences of test invocations.
//!
//! The script itself is opaque: it takes a test identifier and a mode
//! token as its two positional arguments, writes results to standard
//! output, and signals failure with a non-zero exit status.

pub mod cli;
pub mod command;
pub mod driver;
pub mod error;
pub mod invocation;
pub mod policy;

pub use crate::command::{BenchCommand, Invoke, ScriptRunner};
pub use crate::driver::{Driver, Summary};
pub use crate::error::{Error, Result};
pub use crate::invocation::{Invocation, InvocationOutput, Mode};
pub use crate::policy::{Policy, Step};

/// The script invoked when no other path is given.
pub const DEFAULT_SCRIPT: &str = "./benchmark_single.sh";

// SPDX-License-Identifier: Apache-2.0

//! The fixed sequences of benchmark runs the driver knows how to issue.

use crate::invocation::{Invocation, Mode};

/// Highest test number covered by the GPU sweep, starting from 1.
const GPU_SWEEP_LAST_TEST: u32 = 7;

/// How many times the CPU pair is run.
const CPU_REPEATS: usize = 10;

/// The tests run on each CPU repeat, in order.
const CPU_PAIR: [&str; 2] = ["6", "7"];

/// A sequencing policy for benchmark runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
	/// Tests 1 through 7 once each, on the GPU.
	GpuSweep,
	/// Tests 6 and 7 on the CPU, ten times over.
	CpuRepeat,
	/// A single run of one test.
	Single(Invocation),
}

/// One thing the driver does while walking a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	/// Announce that repeat `n` of `total` is starting.
	Progress { n: usize, total: usize },
	Invoke(Invocation),
}

impl Policy {
	/// Every step of the policy, in the order they run.
	pub fn steps(&self) -> Vec<Step> {
		match self {
			Policy::GpuSweep => (1..=GPU_SWEEP_LAST_TEST)
				.map(|test_id| Step::Invoke(Invocation::new(test_id, Mode::Gpu)))
				.collect(),
			Policy::CpuRepeat => (1..=CPU_REPEATS)
				.flat_map(|n| {
					let progress = Step::Progress {
						n,
						total: CPU_REPEATS,
					};
					let runs = CPU_PAIR
						.iter()
						.map(|test_id| Step::Invoke(Invocation::new(test_id, Mode::Cpu)));
					std::iter::once(progress).chain(runs)
				})
				.collect(),
			Policy::Single(invocation) => vec![Step::Invoke(invocation.clone())],
		}
	}

	/// Just the invocations, without progress markers.
	pub fn invocations(&self) -> Vec<Invocation> {
		self.steps()
			.into_iter()
			.filter_map(|step| match step {
				Step::Invoke(invocation) => Some(invocation),
				Step::Progress { .. } => None,
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use test_log::test;

	#[test]
	fn gpu_sweep_runs_one_through_seven_in_order() {
		let invocations = Policy::GpuSweep.invocations();
		let ids = invocations
			.iter()
			.map(|i| i.test_id.as_str())
			.collect::<Vec<_>>();

		assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);
		assert!(invocations.iter().all(|i| i.mode == Mode::Gpu));
	}

	#[test]
	fn gpu_sweep_has_no_progress_lines() {
		let steps = Policy::GpuSweep.steps();
		assert!(steps.iter().all(|s| matches!(s, Step::Invoke(_))));
	}

	#[test]
	fn cpu_repeat_alternates_six_and_seven_twenty_times() {
		let invocations = Policy::CpuRepeat.invocations();
		assert_eq!(invocations.len(), 20);

		for (index, invocation) in invocations.iter().enumerate() {
			let expected = if index % 2 == 0 { "6" } else { "7" };
			assert_eq!(invocation.test_id, expected);
			assert_eq!(invocation.mode, Mode::Cpu);
		}
	}

	#[test]
	fn cpu_repeat_announces_each_pair() {
		let steps = Policy::CpuRepeat.steps();
		assert_eq!(steps.len(), 30);

		for (chunk, n) in steps.chunks(3).zip(1..) {
			assert_eq!(chunk[0], Step::Progress { n, total: 10 });
			assert_eq!(chunk[1], Step::Invoke(Invocation::new(6, Mode::Cpu)));
			assert_eq!(chunk[2], Step::Invoke(Invocation::new(7, Mode::Cpu)));
		}
	}

	#[test]
	fn single_runs_exactly_what_was_asked() {
		let invocation = Invocation::new("12", Mode::Cpu);
		let steps = Policy::Single(invocation.clone()).steps();
		assert_eq!(steps, vec![Step::Invoke(invocation)]);
	}
}

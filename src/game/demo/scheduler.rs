//! Cooperative periodic scheduler.
//!
//! Every base tick runs the steps whose period divides the tick count, in
//! render, receive, input order. Steps never overlap.

use std::time::Duration;

use crate::config::tasks::{BASE_RATE, INPUT_RATE, RECEIVE_RATE, RENDER_RATE};
use crate::game::types::Step;

/// Step rates in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRates {
    pub base: u32,
    pub render: u32,
    pub receive: u32,
    pub input: u32,
}

impl Default for TaskRates {
    fn default() -> Self {
        Self {
            base: BASE_RATE,
            render: RENDER_RATE,
            receive: RECEIVE_RATE,
            input: INPUT_RATE,
        }
    }
}

impl TaskRates {
    /// Wall-clock time between two base ticks.
    pub fn tick_period(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.base.max(1)))
    }

    fn period_of(&self, rate: u32) -> u64 {
        u64::from((self.base / rate.max(1)).max(1))
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    tasks: Vec<(Step, u64)>,
}

impl Scheduler {
    pub fn new(rates: TaskRates) -> Self {
        let tasks = vec![
            (Step::Render, rates.period_of(rates.render)),
            (Step::Receive, rates.period_of(rates.receive)),
            (Step::Input, rates.period_of(rates.input)),
        ];
        Self { tasks }
    }

    /// Period of `step` in base ticks.
    pub fn period(&self, step: Step) -> Option<u64> {
        self.tasks.iter().find(|(s, _)| *s == step).map(|(_, p)| *p)
    }

    /// Steps due at base tick `tick`.
    pub fn due(&self, tick: u64) -> impl Iterator<Item = Step> + '_ {
        self.tasks
            .iter()
            .filter(move |(_, period)| tick % period == 0)
            .map(|(step, _)| *step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periods() {
        let scheduler = Scheduler::new(TaskRates::default());
        assert_eq!(scheduler.period(Step::Render), Some(2));
        assert_eq!(scheduler.period(Step::Receive), Some(5));
        assert_eq!(scheduler.period(Step::Input), Some(5));
        assert_eq!(TaskRates::default().tick_period(), Duration::from_millis(2));
    }

    #[test]
    fn test_due_order() {
        let scheduler = Scheduler::new(TaskRates::default());
        let at_ten: Vec<_> = scheduler.due(10).collect();
        assert_eq!(at_ten, vec![Step::Render, Step::Receive, Step::Input]);
        let at_five: Vec<_> = scheduler.due(5).collect();
        assert_eq!(at_five, vec![Step::Receive, Step::Input]);
        assert_eq!(scheduler.due(3).count(), 0);
    }

    #[test]
    fn test_rate_above_base_runs_every_tick() {
        let rates = TaskRates { base: 100, render: 0, receive: 1000, input: 100 };
        let scheduler = Scheduler::new(rates);
        assert_eq!(scheduler.period(Step::Receive), Some(1));
        assert_eq!(scheduler.period(Step::Render), Some(100));
    }
}

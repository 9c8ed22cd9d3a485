//! Linear ramp behind the animated statistics.
//!
//! The UI ticks a [`CounterRamp`] every `duration / steps` once the counter
//! first scrolls into view. Each tick adds `target / steps` to a running
//! total and shows its floor; the tick that reaches the target shows the
//! target exactly and finishes the ramp.
//!
//! [`CounterRun`] wraps a ramp with the one-shot visibility latch and tells
//! the UI when to start and stop its timer, so the component only forwards
//! events.

use crate::trigger::OnceLatch;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still ramping; show this value.
    Running(u32),
    /// Reached the target; show it and stop the timer.
    Done(u32),
}

impl Tick {
    /// Value to display after this tick.
    pub fn value(self) -> u32 {
        match self {
            Tick::Running(v) | Tick::Done(v) => v,
        }
    }

    /// Whether the timer should stop.
    pub fn is_done(self) -> bool {
        matches!(self, Tick::Done(_))
    }
}

/// Counting state for one counter instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterRamp {
    target: u32,
    increment: f64,
    running: f64,
    shown: u32,
    done: bool,
}

impl CounterRamp {
    /// Ramp from zero to `target` in `steps` ticks (at least one).
    pub fn new(target: u32, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: f64::from(target) / f64::from(steps),
            running: 0.0,
            shown: 0,
            done: false,
        }
    }

    /// Final value.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Value currently displayed.
    pub fn value(&self) -> u32 {
        self.shown
    }

    /// Whether the ramp has finished.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one step. Ticking a finished ramp is a no-op.
    pub fn tick(&mut self) -> Tick {
        if self.done {
            return Tick::Done(self.shown);
        }
        self.running += self.increment;
        if self.running >= f64::from(self.target) {
            self.shown = self.target;
            self.done = true;
            return Tick::Done(self.shown);
        }
        // running < target here, so the floor never overshoots
        self.shown = (self.running.floor() as u32).max(self.shown);
        Tick::Running(self.shown)
    }
}

/// What the UI should do with its interval after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the timer as it is.
    Keep,
    /// Start ticking every `duration / steps`.
    Start,
    /// Clear the timer.
    Stop,
}

/// Lifecycle of one counter instance: idle until first seen, then ticking
/// until the ramp is done. Starts at most once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterRun {
    latch: OnceLatch,
    ramp: CounterRamp,
    ticking: bool,
}

impl CounterRun {
    /// Idle run towards `target` in `steps` ticks.
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            latch: OnceLatch::new(),
            ramp: CounterRamp::new(target, steps),
            ticking: false,
        }
    }

    /// Value to display.
    pub fn value(&self) -> u32 {
        self.ramp.value()
    }

    /// Whether the timer should currently be running.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Feed a visibility report. Only the first visible report starts the
    /// timer.
    pub fn on_visibility(&mut self, visible: bool) -> TimerCommand {
        if self.latch.observe(visible) && !self.ramp.is_done() {
            self.ticking = true;
            TimerCommand::Start
        } else {
            TimerCommand::Keep
        }
    }

    /// Advance on a timer tick. Returns the value to show and `Stop` once
    /// the target is reached.
    pub fn on_tick(&mut self) -> (u32, TimerCommand) {
        if !self.ticking {
            return (self.value(), TimerCommand::Stop);
        }
        let tick = self.ramp.tick();
        if tick.is_done() {
            self.ticking = false;
            (tick.value(), TimerCommand::Stop)
        } else {
            (tick.value(), TimerCommand::Keep)
        }
    }

    /// Owner is going away.
    pub fn on_teardown(&mut self) -> TimerCommand {
        if std::mem::take(&mut self.ticking) {
            TimerCommand::Stop
        } else {
            TimerCommand::Keep
        }
    }
}

/// Display text: number followed by its suffix.
pub fn format_count(value: u32, suffix: &str) -> String {
    format!("{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: u32, steps: u32) -> Vec<u32> {
        let mut ramp = CounterRamp::new(target, steps);
        let mut values = vec![ramp.value()];
        // float accumulation may need one tick past `steps`
        for _ in 0..steps + 2 {
            let tick = ramp.tick();
            values.push(tick.value());
            if tick.is_done() {
                break;
            }
        }
        assert!(ramp.is_done(), "ramp to {target} did not finish");
        values
    }

    #[test]
    fn ninety_eight_percent_terminal_text() {
        let values = run_to_end(98, 60);
        let last = *values.last().expect("values");
        assert_eq!(format_count(last, "%"), "98%");
    }

    #[test]
    fn starts_at_zero_is_monotonic_and_never_overshoots() {
        for &(target, steps) in &[(500, 60), (200, 60), (15, 60), (98, 60), (7, 3), (1, 60)] {
            let values = run_to_end(target, steps);
            assert_eq!(values[0], 0);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{target}: {values:?}");
            assert!(values.iter().all(|&v| v <= target));
            assert_eq!(*values.last().unwrap(), target);
        }
    }

    #[test]
    fn finishes_within_steps_plus_one() {
        let values = run_to_end(500, 60);
        assert!(values.len() <= 60 + 2);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut ramp = CounterRamp::new(0, 60);
        assert_eq!(ramp.tick(), Tick::Done(0));
    }

    #[test]
    fn ticking_after_done_holds() {
        let mut ramp = CounterRamp::new(3, 1);
        assert_eq!(ramp.tick(), Tick::Done(3));
        assert_eq!(ramp.tick(), Tick::Done(3));
        assert_eq!(ramp.value(), 3);
    }

    #[test]
    fn zero_steps_is_treated_as_one() {
        let mut ramp = CounterRamp::new(15, 0);
        assert_eq!(ramp.tick(), Tick::Done(15));
    }

    #[test]
    fn run_starts_once_across_visibility_toggles() {
        let mut run = CounterRun::new(98, 60);
        let commands: Vec<TimerCommand> = [false, true, false, true, true]
            .into_iter()
            .map(|v| run.on_visibility(v))
            .collect();
        assert_eq!(
            commands,
            [
                TimerCommand::Keep,
                TimerCommand::Start,
                TimerCommand::Keep,
                TimerCommand::Keep,
                TimerCommand::Keep,
            ]
        );
        assert!(run.is_ticking());
    }

    #[test]
    fn run_stops_on_the_tick_that_reaches_the_target() {
        let mut run = CounterRun::new(7, 3);
        assert_eq!(run.on_visibility(true), TimerCommand::Start);
        let mut ticks = Vec::new();
        loop {
            let (value, command) = run.on_tick();
            ticks.push(value);
            if command == TimerCommand::Stop {
                break;
            }
            assert!(ticks.len() <= 4, "{ticks:?}");
        }
        assert_eq!(*ticks.last().unwrap(), 7);
        assert!(!run.is_ticking());

        // scrolling back into view does not restart a finished counter
        run.on_visibility(false);
        assert_eq!(run.on_visibility(true), TimerCommand::Keep);
        assert_eq!(run.value(), 7);
    }

    #[test]
    fn stray_tick_before_reveal_stops_and_shows_zero() {
        let mut run = CounterRun::new(500, 60);
        assert_eq!(run.on_tick(), (0, TimerCommand::Stop));
    }

    #[test]
    fn teardown_stops_only_a_running_timer() {
        let mut idle = CounterRun::new(15, 60);
        assert_eq!(idle.on_teardown(), TimerCommand::Keep);

        let mut running = CounterRun::new(15, 60);
        running.on_visibility(true);
        running.on_tick();
        assert_eq!(running.on_teardown(), TimerCommand::Stop);
        assert!(!running.is_ticking());
        assert_eq!(running.on_teardown(), TimerCommand::Keep);
    }
}

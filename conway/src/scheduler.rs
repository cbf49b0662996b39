// scheduler.rs - "Call me back later" for the animation loop
//
// The controller never sleeps or spawns anything. It asks a scheduler for a
// tick after some delay, and whoever owns the event loop hands the token back
// to `Controller::tick` on the same thread once the delay has passed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Identifies the animation run a scheduled tick belongs to.
///
/// Every `begin_animation` starts a new run, so a tick queued before a
/// stop/start pair can be recognised as stale and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(pub(crate) u64);

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, token: TickToken);
}

/// Ticks are released only when a test asks for them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    queue: VecDeque<(Duration, TickToken)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest pending tick.
    pub fn next_tick(&mut self) -> Option<TickToken> {
        self.queue.pop_front().map(|(_, token)| token)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Delays of the pending ticks, oldest first.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        self.queue.iter().map(|&(delay, _)| delay)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, token: TickToken) {
        self.queue.push_back((delay, token));
    }
}

/// Deadline queue polled once per frame by the window's update loop.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    deadlines: Vec<(Instant, TickToken)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every tick whose deadline is at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TickToken> {
        self.deadlines.sort_by_key(|&(deadline, _)| deadline);
        let split = self.deadlines.partition_point(|&(deadline, _)| deadline <= now);
        self.deadlines.drain(..split).map(|(_, token)| token).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|&(deadline, _)| deadline).min()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule(&mut self, delay: Duration, token: TickToken) {
        self.deadlines.push((Instant::now() + delay, token));
    }
}

//! Timers driven by the UI loop
//!
//! Nothing here spawns or sleeps; the loop calls in with the current instant
//! on every tick and the timers report whether they fired.

use super::state::Trend;
use std::time::{Duration, Instant};

/// Loading animation period
pub const LOADING_FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// How long the price stays colored after a move
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(1);

/// Fixed-period task bound to the UI loop, cancelable for good
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl RepeatingTask {
    /// First firing is one period after `start`
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
            cancelled: false,
        }
    }

    /// Number of periods elapsed since the last poll, rescheduling past them
    ///
    /// A stalled loop catches up by reporting several firings at once rather
    /// than bursting them over the following ticks.
    pub fn poll_due(&mut self, now: Instant) -> u32 {
        if self.cancelled || now < self.next_due {
            return 0;
        }

        let mut fired = 0;
        while self.next_due <= now {
            self.next_due += self.period;
            fired += 1;
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Cycling "Loading..." placeholder
#[derive(Debug, Clone)]
pub struct LoadingAnimation {
    task: RepeatingTask,
    frame: usize,
}

impl LoadingAnimation {
    pub fn new(start: Instant) -> Self {
        Self {
            task: RepeatingTask::new(LOADING_FRAME_INTERVAL, start),
            frame: 0,
        }
    }

    /// Advance by however many frames are due; true if the text changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.task.poll_due(now);
        self.frame = self.frame.wrapping_add(fired as usize);
        fired > 0
    }

    /// Current frame index (0-based, unbounded)
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Stop permanently
    pub fn stop(&mut self) {
        self.task.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_cancelled()
    }
}

/// Transient price color after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub trend: Trend,
    until: Instant,
}

impl Highlight {
    /// Highlight for a move, or `None` when the price did not change
    pub fn for_trend(trend: Trend, now: Instant) -> Option<Self> {
        match trend {
            Trend::Flat => None,
            Trend::Up | Trend::Down => Some(Self {
                trend,
                until: now + HIGHLIGHT_DURATION,
            }),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.until
    }
}

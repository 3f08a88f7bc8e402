//! Repeating timers on the logical tick clock.
//!
//! A timer fires at most once per tick, on the first tick at or after its
//! due tick, and reschedules from the due tick rather than the firing tick
//! so the period never drifts.

use gallery_core::enums::TimerKind;
use gallery_core::types::secs_to_ticks;

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    pub kind: TimerKind,
    period_ticks: u64,
    tolerance_ticks: u64,
    next_due: u64,
    active: bool,
}

impl RepeatingTimer {
    /// Create an idle timer. Periods shorter than one tick round up to one.
    pub fn new(kind: TimerKind, period_secs: f64, tolerance_secs: f64) -> Self {
        Self {
            kind,
            period_ticks: secs_to_ticks(period_secs).max(1),
            tolerance_ticks: secs_to_ticks(tolerance_secs),
            next_due: 0,
            active: false,
        }
    }

    /// Arm the timer; the first fire is one period after `now`.
    pub fn start(&mut self, now: u64) {
        self.next_due = now + self.period_ticks;
        self.active = true;
    }

    /// Permanently stop the timer.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn period_ticks(&self) -> u64 {
        self.period_ticks
    }

    pub fn tolerance_ticks(&self) -> u64 {
        self.tolerance_ticks
    }

    pub fn next_due(&self) -> u64 {
        self.next_due
    }

    /// Returns true if the timer fires on tick `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        if !self.active || now < self.next_due {
            return false;
        }
        let lateness = now - self.next_due;
        if lateness > self.tolerance_ticks {
            log::warn!(
                "{:?} timer fired {} ticks late (tolerance {})",
                self.kind,
                lateness,
                self.tolerance_ticks
            );
        }
        self.next_due += self.period_ticks;
        true
    }
}

use std::time::{Duration, Instant};

pub const DEFAULT_DURATION_SECS: u32 = 30;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What a poll of the countdown observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// Not armed; nothing will ever fire.
    Disarmed,
    /// Armed, deadline not reached yet.
    Pending,
    /// This many seconds elapsed; still running.
    Ticked(u32),
    /// Hit zero during this poll. Reported exactly once.
    Expired,
}

/// Seconds-resolution countdown driven by a single-shot deadline.
///
/// Each tick re-arms the deadline one period later. `cancel` drops the
/// deadline outright, so after a reset no tick from the previous run can
/// ever be observed.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    period: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self::with_period(duration_secs, TICK_PERIOD)
    }

    pub fn with_period(duration_secs: u32, period: Duration) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            period,
            deadline: None,
        }
    }

    /// Restores the full duration and schedules the first tick.
    pub fn arm(&mut self, now: Instant) {
        self.remaining_secs = self.duration_secs;
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancels and restores the full duration.
    pub fn reset(&mut self) {
        self.cancel();
        self.remaining_secs = self.duration_secs;
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Wall time of a run that counts all the way down.
    pub fn run_length(&self) -> Duration {
        self.period * self.duration_secs
    }

    /// How long until the next tick is due, `None` when disarmed.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Applies every tick that is due at `now`, one decrement per elapsed
    /// period, and re-arms for the next one.
    pub fn poll(&mut self, now: Instant) -> CountdownStatus {
        let Some(mut deadline) = self.deadline else {
            return CountdownStatus::Disarmed;
        };

        let mut ticks = 0;
        while deadline <= now && self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            ticks += 1;
            deadline += self.period;
        }

        if self.remaining_secs == 0 {
            self.deadline = None;
            return CountdownStatus::Expired;
        }

        self.deadline = Some(deadline);
        match ticks {
            0 => CountdownStatus::Pending,
            n => CountdownStatus::Ticked(n),
        }
    }
}

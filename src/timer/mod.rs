//! Game clock: elapsed time, pause accounting and the countdown.
//!
//! `GameTimer` is pure bookkeeping over millisecond timestamps supplied by
//! the caller (normally from a `core::Clock`). Paused spans are accumulated
//! and excluded from elapsed time.
//!
//! ```
//! use spider_engine::timer::{GameTimer, TickOutcome};
//!
//! let mut timer = GameTimer::start(0, 900);
//! timer.pause(10_000);
//! assert_eq!(timer.tick(500_000), TickOutcome::Paused);
//! timer.resume(500_000);
//! assert_eq!(timer.elapsed_secs(505_000), 15);
//! ```

use serde::{Deserialize, Serialize};

/// Remaining time at or below which the countdown is shown as a warning.
pub const WARNING_SECS: u64 = 300;

/// Remaining time at or below which the countdown is shown as critical.
pub const CRITICAL_SECS: u64 = 60;

/// How close the countdown is to running out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUrgency {
    Normal,
    Warning,
    Critical,
}

impl TimeUrgency {
    #[must_use]
    pub fn for_remaining(remaining_secs: u64) -> Self {
        if remaining_secs <= CRITICAL_SECS {
            TimeUrgency::Critical
        } else if remaining_secs <= WARNING_SECS {
            TimeUrgency::Warning
        } else {
            TimeUrgency::Normal
        }
    }
}

/// Result of a periodic timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Paused; nothing was read or changed.
    Paused,
    /// The game clock is stopped (the game has ended).
    Stopped,
    /// Countdown still running.
    Running {
        remaining_secs: u64,
        urgency: TimeUrgency,
    },
    /// The countdown has run out.
    Expired,
}

/// Per-game clock state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    started_ms: u64,
    paused_total_ms: u64,
    paused_since_ms: Option<u64>,
    stopped_ms: Option<u64>,
    limit_secs: u64,
}

impl GameTimer {
    /// Start a timer at `now_ms` with a countdown of `limit_secs`.
    #[must_use]
    pub fn start(now_ms: u64, limit_secs: u64) -> Self {
        Self {
            started_ms: now_ms,
            paused_total_ms: 0,
            paused_since_ms: None,
            stopped_ms: None,
            limit_secs,
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_since_ms.is_some()
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped_ms.is_some()
    }

    /// Total paused time so far, including an ongoing pause.
    #[must_use]
    pub fn paused_ms(&self, now_ms: u64) -> u64 {
        let ongoing = self
            .paused_since_ms
            .map_or(0, |since| now_ms.saturating_sub(since));
        self.paused_total_ms + ongoing
    }

    /// Active play time in milliseconds. Frozen once stopped.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        let end = self.stopped_ms.unwrap_or(now_ms);
        end.saturating_sub(self.started_ms)
            .saturating_sub(self.paused_ms(end))
    }

    #[must_use]
    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        self.elapsed_ms(now_ms) / 1_000
    }

    /// Seconds left on the countdown, floored at zero.
    #[must_use]
    pub fn remaining_secs(&self, now_ms: u64) -> u64 {
        self.limit_secs.saturating_sub(self.elapsed_secs(now_ms))
    }

    /// Begin a pause. No-op if already paused or stopped.
    pub fn pause(&mut self, now_ms: u64) {
        if self.paused_since_ms.is_none() && self.stopped_ms.is_none() {
            self.paused_since_ms = Some(now_ms);
        }
    }

    /// End a pause, adding its span to the paused total.
    pub fn resume(&mut self, now_ms: u64) {
        if let Some(since) = self.paused_since_ms.take() {
            self.paused_total_ms += now_ms.saturating_sub(since);
        }
    }

    /// Freeze the clock (game over). Ends any pause first.
    pub fn stop(&mut self, now_ms: u64) {
        self.resume(now_ms);
        if self.stopped_ms.is_none() {
            self.stopped_ms = Some(now_ms);
        }
    }

    /// Periodic check, expected about once per second.
    #[must_use]
    pub fn tick(&self, now_ms: u64) -> TickOutcome {
        if self.is_paused() {
            return TickOutcome::Paused;
        }
        if self.is_stopped() {
            return TickOutcome::Stopped;
        }

        let remaining_secs = self.remaining_secs(now_ms);
        if remaining_secs == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining_secs,
                urgency: TimeUrgency::for_remaining(remaining_secs),
            }
        }
    }
}

/// Format seconds as a zero-padded `MM:SS` countdown.
#[must_use]
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

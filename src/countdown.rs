//! Deal countdown timer.
//!
//! A two-state machine (running/stopped) that recomputes a
//! days/hours/minutes/seconds breakdown from wall-clock time on each
//! tick. Ticks are driven by the event loop; the timer itself never
//! schedules anything, which keeps it testable with a simulated clock.

use chrono::{DateTime, Duration, Utc};

use crate::constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Remaining time decomposed into display components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    /// Whole days remaining
    pub days: i64,
    /// Hours within the current day (0-23)
    pub hours: i64,
    /// Minutes within the current hour (0-59)
    pub minutes: i64,
    /// Seconds within the current minute (0-59)
    pub seconds: i64,
}

impl TimeBreakdown {
    /// Decomposes a non-negative millisecond distance into whole days,
    /// hours-within-day, minutes-within-hour and seconds-within-minute.
    #[must_use]
    pub const fn from_millis(distance_ms: i64) -> Self {
        Self {
            days: distance_ms / MS_PER_DAY,
            hours: (distance_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }
}

/// Timer lifecycle state. There is no resume once stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Running,
    Stopped,
}

/// Countdown toward a fixed deadline.
///
/// Constructed running with a target of "construction time + day
/// offset". Once the deadline passes the timer transitions to stopped
/// and all further ticks are no-ops, so the event loop stops doing
/// per-second work for it.
#[derive(Debug)]
pub struct CountdownTimer {
    target: DateTime<Utc>,
    state: TimerState,
}

impl CountdownTimer {
    /// Creates a running timer with a deadline `days_from_now` days ahead.
    #[must_use]
    pub fn new(days_from_now: i64) -> Self {
        Self::new_at(Utc::now(), days_from_now)
    }

    /// Creates a running timer relative to an explicit construction time.
    #[must_use]
    pub fn new_at(now: DateTime<Utc>, days_from_now: i64) -> Self {
        Self {
            target: now + Duration::days(days_from_now),
            state: TimerState::Running,
        }
    }

    /// The fixed deadline this timer counts toward.
    #[must_use]
    pub const fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Whether the timer is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Recomputes the remaining-time breakdown for the given instant.
    ///
    /// Returns `None` when the timer is stopped or the deadline has
    /// passed (the passing tick performs no display update). At exactly
    /// the deadline the zero breakdown is produced one last time and the
    /// timer transitions to stopped.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<TimeBreakdown> {
        if self.state == TimerState::Stopped {
            return None;
        }

        let distance_ms = (self.target - now).num_milliseconds();
        if distance_ms < 0 {
            self.stop();
            return None;
        }

        if distance_ms == 0 {
            self.stop();
        }

        Some(TimeBreakdown::from_millis(distance_ms))
    }

    /// Stops the timer. Idempotent; there is no resume.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_timer_is_running() {
        let timer = CountdownTimer::new_at(fixed_now(), 2);
        assert!(timer.is_running());
        assert_eq!(timer.target(), fixed_now() + Duration::days(2));
    }

    #[test]
    fn test_tick_full_two_days_out() {
        let now = fixed_now();
        let mut timer = CountdownTimer::new_at(now, 2);

        let breakdown = timer.tick(now).unwrap();
        assert_eq!(
            breakdown,
            TimeBreakdown {
                days: 2,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
        assert!(timer.is_running());
    }

    #[test]
    fn test_tick_at_ninety_thousand_sixty_one_seconds_before_target() {
        let now = fixed_now();
        let mut timer = CountdownTimer::new_at(now, 2);

        // 90,061 s = 1 day + 1 hour + 1 minute + 1 second
        let at = timer.target() - Duration::seconds(90_061);
        let breakdown = timer.tick(at).unwrap();
        assert_eq!(
            breakdown,
            TimeBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_tick_at_exact_deadline_yields_zero_and_stops() {
        let now = fixed_now();
        let mut timer = CountdownTimer::new_at(now, 2);

        let breakdown = timer.tick(timer.target()).unwrap();
        assert_eq!(
            breakdown,
            TimeBreakdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_past_deadline_stops_without_breakdown() {
        let now = fixed_now();
        let mut timer = CountdownTimer::new_at(now, 2);

        let late = timer.target() + Duration::seconds(1);
        assert_eq!(timer.tick(late), None);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_when_stopped_is_noop() {
        let now = fixed_now();
        let mut timer = CountdownTimer::new_at(now, 0);
        timer.stop();

        assert_eq!(timer.tick(now), None);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = CountdownTimer::new_at(fixed_now(), 2);
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_breakdown_from_millis() {
        let breakdown = TimeBreakdown::from_millis(90_061_000);
        assert_eq!(breakdown.days, 1);
        assert_eq!(breakdown.hours, 1);
        assert_eq!(breakdown.minutes, 1);
        assert_eq!(breakdown.seconds, 1);

        // Sub-second remainders truncate to the zero breakdown
        let zero = TimeBreakdown::from_millis(0);
        assert_eq!(TimeBreakdown::from_millis(999), zero);
    }
}

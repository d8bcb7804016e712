use crate::duration_format::format_duration;

/// Recommended display-refresh cadence for hosts driving [`elapsed_ms`]
/// into a visible clock. The tick itself carries no timer state.
///
/// [`elapsed_ms`]: CookingTimer::elapsed_ms
pub const TICK_INTERVAL_MS: i64 = 250;

/// Elapsed-time timer for one cooking session.
///
/// Idle until started, then alternates between running and paused; `reset`
/// returns to idle from any state. Active time accumulates across
/// pause/resume cycles. All transitions take the current wall-clock instant
/// in epoch milliseconds so behaviour is deterministic under test; callers
/// normally pass `chrono::Utc::now().timestamp_millis()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookingTimer {
    running: bool,
    start_epoch_ms: Option<i64>,
    paused_elapsed_ms: i64,
}

impl CookingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start_epoch_ms(&self) -> Option<i64> {
        self.start_epoch_ms
    }

    pub fn paused_elapsed_ms(&self) -> i64 {
        self.paused_elapsed_ms
    }

    /// Begins or resumes the timer. No-op when already running.
    pub fn start(&mut self, now_ms: i64) {
        if self.running {
            return;
        }
        self.start_epoch_ms = Some(now_ms);
        self.running = true;
    }

    /// Folds the current run segment into the accumulated total and stops.
    /// No-op when not running.
    pub fn pause(&mut self, now_ms: i64) {
        if !self.running {
            return;
        }
        if let Some(start) = self.start_epoch_ms.take() {
            self.paused_elapsed_ms += (now_ms - start).max(0);
        }
        self.running = false;
    }

    /// Returns to idle: no run segment, zero accumulated time.
    pub fn reset(&mut self) {
        self.running = false;
        self.start_epoch_ms = None;
        self.paused_elapsed_ms = 0;
    }

    /// Total active time: prior segments plus the in-flight one.
    pub fn elapsed_ms(&self, now_ms: i64) -> i64 {
        let current = match (self.running, self.start_epoch_ms) {
            (true, Some(start)) => (now_ms - start).max(0),
            _ => 0,
        };
        self.paused_elapsed_ms + current
    }

    pub fn display(&self, now_ms: i64) -> String {
        format_duration(self.elapsed_ms(now_ms))
    }

    /// Rebuilds a timer from persisted fields. A running snapshot keeps its
    /// persisted start epoch so time spent while the page was closed still
    /// counts; a snapshot claiming to run without a start epoch comes back
    /// paused.
    pub fn from_snapshot(running: bool, start_epoch_ms: Option<i64>, paused_elapsed_ms: i64) -> Self {
        let running = running && start_epoch_ms.is_some();
        Self {
            running,
            start_epoch_ms: if running { start_epoch_ms } else { None },
            paused_elapsed_ms: paused_elapsed_ms.max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CookingTimer;

    #[test]
    fn idle_timer_reports_zero() {
        let timer = CookingTimer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_ms(1_000), 0);
        assert_eq!(timer.display(1_000), "00:00");
    }

    #[test]
    fn start_is_noop_while_running() {
        let mut timer = CookingTimer::new();
        timer.start(1_000);
        timer.start(5_000);
        assert_eq!(timer.start_epoch_ms(), Some(1_000));
        assert_eq!(timer.elapsed_ms(6_000), 5_000);
    }

    #[test]
    fn pause_is_noop_while_idle() {
        let mut timer = CookingTimer::new();
        timer.pause(1_000);
        assert_eq!(timer.paused_elapsed_ms(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn accumulates_across_two_pause_resume_cycles() {
        let mut timer = CookingTimer::new();
        timer.start(0);
        timer.pause(40); // d1 = 40ms
        assert_eq!(timer.paused_elapsed_ms(), 40);

        timer.start(1_000);
        timer.pause(1_070); // d2 = 70ms
        assert_eq!(timer.paused_elapsed_ms(), 110);
        assert_eq!(timer.elapsed_ms(9_999), 110);
    }

    #[test]
    fn reset_returns_to_idle_from_any_state() {
        let mut timer = CookingTimer::new();
        timer.start(0);
        timer.pause(500);
        timer.start(1_000);
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.paused_elapsed_ms(), 0);
        assert_eq!(timer.start_epoch_ms(), None);
        assert_eq!(timer.display(2_000), "00:00");
    }

    #[test]
    fn restored_running_snapshot_keeps_persisted_epoch() {
        let timer = CookingTimer::from_snapshot(true, Some(10_000), 500);
        assert!(timer.is_running());
        // 20s of wall clock since the persisted epoch counts in full.
        assert_eq!(timer.elapsed_ms(30_000), 20_500);
    }

    #[test]
    fn restored_running_snapshot_without_epoch_comes_back_paused() {
        let timer = CookingTimer::from_snapshot(true, None, 500);
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_ms(30_000), 500);
    }

    #[test]
    fn negative_persisted_elapsed_is_clamped() {
        let timer = CookingTimer::from_snapshot(false, None, -200);
        assert_eq!(timer.elapsed_ms(0), 0);
    }
}

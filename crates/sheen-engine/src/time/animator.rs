use std::time::Duration;

/// Linear integer animation that loops forever until cancelled.
///
/// The animator is a pure state machine: it never schedules anything. A host
/// ticker feeds it elapsed time via [`advance`](Self::advance); tests can ask
/// for any point of the cycle via [`value_at`](Self::value_at).
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingAnimator {
    from: i32,
    to: i32,
    duration: Duration,
    elapsed: Duration,
    running: bool,
}

impl RepeatingAnimator {
    /// `duration` of zero is bumped to one millisecond.
    pub fn new(from: i32, to: i32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration: duration.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    #[inline]
    pub fn from(&self) -> i32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> i32 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts (or restarts) the cycle at fraction 0.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stops the animator; later `advance` calls return `None`.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Position inside the current cycle, in `[0, 1)`.
    pub fn fraction(&self) -> f32 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }

    /// Interpolated value at `fraction` of a cycle (clamped to `[0, 1]`),
    /// truncated towards zero.
    pub fn value_at(&self, fraction: f32) -> i32 {
        let f = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        let span = f64::from(self.to) - f64::from(self.from);
        (f64::from(self.from) + span * f64::from(f)) as i32
    }

    /// Advances the cycle by `dt`, wrapping at the end, and returns the new
    /// fraction. Returns `None` once cancelled.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if !self.running {
            return None;
        }

        let period = self.duration.as_nanos();
        let elapsed = (self.elapsed.as_nanos() + dt.as_nanos()) % period;
        self.elapsed = Duration::from_nanos(elapsed as u64);

        Some(self.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn idle_until_started() {
        let mut a = RepeatingAnimator::new(0, 100, ms(1000));
        assert_eq!(a.advance(ms(10)), None);
        a.start();
        assert!(a.advance(ms(10)).is_some());
    }

    #[test]
    fn interpolates_linearly() {
        let a = RepeatingAnimator::new(0, 400, ms(1000));
        assert_eq!(a.value_at(0.0), 0);
        assert_eq!(a.value_at(0.25), 100);
        assert_eq!(a.value_at(1.0), 400);
    }

    #[test]
    fn reversed_range_counts_down() {
        let a = RepeatingAnimator::new(400, 0, ms(1000));
        assert_eq!(a.value_at(0.25), 300);
    }

    #[test]
    fn wraps_after_a_full_cycle() {
        let mut a = RepeatingAnimator::new(0, 100, ms(1000));
        a.start();
        let f = a.advance(ms(1250)).unwrap();
        assert!((f - 0.25).abs() < 1e-6);
    }

    #[test]
    fn cancel_stops_updates() {
        let mut a = RepeatingAnimator::new(0, 100, ms(1000));
        a.start();
        a.cancel();
        assert_eq!(a.advance(ms(16)), None);
        assert!(!a.is_running());
    }

    #[test]
    fn zero_duration_is_bumped() {
        let a = RepeatingAnimator::new(0, 1, Duration::ZERO);
        assert_eq!(a.duration(), ms(1));
    }
}

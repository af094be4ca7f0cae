//=========================================================================
// Device Timer
//=========================================================================
//
// Virtual frame clock advanced once per device poll.
//
// Virtual time only moves while the timer is running and is scaled by
// `speed`. Stops nest: each `stop()` needs a matching `start()` before
// virtual time resumes. Real time is always available for click timing.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== Timer ===============================================================

/// Pausable, speed-scaled frame clock.
#[derive(Debug, Clone)]
pub struct Timer {
    created: Instant,
    last_tick: Instant,
    virtual_time: Duration,
    speed: f32,
    stop_depth: u32,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            created: now,
            last_tick: now,
            virtual_time: Duration::ZERO,
            speed: 1.0,
            stop_depth: 0,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Wall-clock instant, used for input timing.
    pub fn now(&self) -> Instant {
        Instant::now()
    }

    /// Milliseconds of wall-clock time since the timer was created.
    pub fn real_time_ms(&self) -> u64 {
        self.created.elapsed().as_millis() as u64
    }

    /// Milliseconds of virtual time accumulated so far.
    pub fn time_ms(&self) -> u64 {
        self.virtual_time.as_millis() as u64
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_depth > 0
    }

    //--- Control ----------------------------------------------------------

    /// Sets the virtual time scale. Negative values are clamped to zero,
    /// infinite or NaN speeds are ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            return;
        }
        self.tick();
        self.speed = speed.max(0.0);
    }

    /// Advances virtual time by the wall-clock time since the last tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Pauses virtual time. Calls nest.
    pub fn stop(&mut self) {
        if self.stop_depth == 0 {
            self.tick();
        }
        self.stop_depth += 1;
    }

    /// Undoes one `stop()`. Virtual time resumes when every stop is undone.
    pub fn start(&mut self) {
        if self.stop_depth == 0 {
            return;
        }
        self.stop_depth -= 1;
        if self.stop_depth == 0 {
            self.last_tick = Instant::now();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn tick_at(&mut self, now: Instant) {
        if self.stop_depth == 0 {
            let elapsed = now.saturating_duration_since(self.last_tick);
            self.virtual_time = self.virtual_time.saturating_add(scale(elapsed, self.speed));
        }
        self.last_tick = now;
    }
}

/// `elapsed * speed`, rounded to the nanosecond and saturating.
fn scale(elapsed: Duration, speed: f32) -> Duration {
    let nanos = (elapsed.as_nanos() as f64 * f64::from(speed)).round();
    Duration::from_nanos(nanos as u64)
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_at_zero() {
        let timer = Timer::new();
        assert!(!timer.is_stopped());
        assert_eq!(timer.time_ms(), 0);
        assert_eq!(timer.speed(), 1.0);
    }

    #[test]
    fn tick_advances_virtual_time() {
        let mut timer = Timer::new();
        let later = timer.last_tick + Duration::from_millis(40);
        timer.tick_at(later);
        assert_eq!(timer.time_ms(), 40);
    }

    #[test]
    fn stopped_timer_does_not_advance() {
        let mut timer = Timer::new();
        timer.stop();
        let later = timer.last_tick + Duration::from_millis(40);
        timer.tick_at(later);
        assert_eq!(timer.time_ms(), 0);
    }

    #[test]
    fn stops_nest() {
        let mut timer = Timer::new();
        timer.stop();
        timer.stop();
        timer.start();
        assert!(timer.is_stopped());
        timer.start();
        assert!(!timer.is_stopped());
    }

    #[test]
    fn extra_start_is_ignored() {
        let mut timer = Timer::new();
        timer.start();
        assert!(!timer.is_stopped());
    }

    #[test]
    fn speed_scales_virtual_time() {
        let mut timer = Timer::new();
        timer.speed = 2.0;
        let later = timer.last_tick + Duration::from_millis(50);
        timer.tick_at(later);
        assert_eq!(timer.time_ms(), 100);
    }

    #[test]
    fn unit_speed_tracks_wall_time_exactly() {
        let mut timer = Timer::new();
        for _ in 0..100 {
            let later = timer.last_tick + Duration::from_millis(16);
            timer.tick_at(later);
        }
        assert_eq!(timer.virtual_time, Duration::from_millis(1600));
    }

    #[test]
    fn infinite_speed_is_ignored() {
        let mut timer = Timer::new();
        timer.set_speed(f32::INFINITY);
        timer.set_speed(f32::NAN);
        assert_eq!(timer.speed(), 1.0);

        let later = timer.last_tick + Duration::from_millis(16);
        timer.tick_at(later);
        assert_eq!(timer.time_ms(), 16);
    }

    #[test]
    fn huge_speed_saturates_instead_of_panicking() {
        let mut timer = Timer::new();
        timer.speed = f32::MAX;
        let later = timer.last_tick + Duration::from_millis(16);
        timer.tick_at(later);
        timer.tick_at(later + Duration::from_millis(16));
        assert!(timer.time_ms() > 0);
    }

    #[test]
    fn negative_speed_clamps_to_zero() {
        let mut timer = Timer::new();
        timer.set_speed(-3.0);
        assert_eq!(timer.speed(), 0.0);
    }
}

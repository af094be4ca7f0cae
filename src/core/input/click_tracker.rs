//=========================================================================
// Successive Click Detection
//=========================================================================
//
// Counts how many presses of the same button landed close together in
// time and space. Used by the device to synthesize double and triple
// click events after the plain press event.
//
// Rules:
//   same button  AND  within double_click_time  AND  moved ≤ 3px per axis
//   AND count < 3     → count + 1
//   otherwise         → 1
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== Internal Dependencies ===============================================

use super::event::MouseButton;

//=== Constants ===========================================================

/// Default time window between presses.
pub const DEFAULT_DOUBLE_CLICK_TIME: Duration = Duration::from_millis(500);

/// Maximum cursor travel (pixels, per axis) between successive presses.
const MAX_MOUSE_MOVE: i32 = 3;

//=== ClickTracker ========================================================

#[derive(Debug, Clone, Copy)]
struct LastClick {
    time: Instant,
    x: i32,
    y: i32,
    button: MouseButton,
}

/// Tracks successive presses for multi-click detection.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    double_click_time: Duration,
    last: Option<LastClick>,
    count: u32,
}

impl ClickTracker {
    pub fn new(double_click_time: Duration) -> Self {
        Self {
            double_click_time,
            last: None,
            count: 0,
        }
    }

    pub fn double_click_time(&self) -> Duration {
        self.double_click_time
    }

    pub fn set_double_click_time(&mut self, time: Duration) {
        self.double_click_time = time;
    }

    /// Registers a press and returns the successive click count (1..=3).
    pub fn register(&mut self, x: i32, y: i32, button: MouseButton, now: Instant) -> u32 {
        let successive = match self.last {
            Some(last) => {
                now.saturating_duration_since(last.time) < self.double_click_time
                    && (last.x - x).abs() <= MAX_MOUSE_MOVE
                    && (last.y - y).abs() <= MAX_MOUSE_MOVE
                    && self.count < 3
                    && last.button == button
            }
            None => false,
        };

        self.count = if successive { self.count + 1 } else { 1 };
        self.last = Some(LastClick { time: now, x, y, button });
        self.count
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_TIME)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

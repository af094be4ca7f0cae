//=========================================================================
// Cursor Control
//=========================================================================
//
// Read side of the pointer position, shared between the device (writer)
// and scene components such as camera controllers (readers).
//
// Sharing is reference counted: cloning the `Rc` acquires the cursor,
// dropping it releases it. Everything runs on the frame thread, so the
// state sits in a `Cell`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;

use glam::Vec2;

//=== CursorControl =======================================================

/// Pointer position queries.
pub trait CursorControl {
    /// Absolute position in window pixels.
    fn position(&self) -> (i32, i32);

    /// Position as a fraction of the window size, `(0,0)` top-left and
    /// `(1,1)` bottom-right. Zero on an axis whose window extent is zero.
    fn relative_position(&self) -> Vec2;
}

//=== DeviceCursor ========================================================

#[derive(Debug, Clone, Copy, Default)]
struct CursorState {
    position: (i32, i32),
    window_size: (u32, u32),
}

/// Cursor fed by a device's event translation.
#[derive(Debug, Default)]
pub struct DeviceCursor {
    state: Cell<CursorState>,
}

impl DeviceCursor {
    pub fn new(window_size: (u32, u32)) -> Self {
        Self {
            state: Cell::new(CursorState {
                position: (0, 0),
                window_size,
            }),
        }
    }

    pub(crate) fn set_position(&self, x: i32, y: i32) {
        let mut state = self.state.get();
        state.position = (x, y);
        self.state.set(state);
    }

    pub(crate) fn set_window_size(&self, width: u32, height: u32) {
        let mut state = self.state.get();
        state.window_size = (width, height);
        self.state.set(state);
    }
}

impl CursorControl for DeviceCursor {
    fn position(&self) -> (i32, i32) {
        self.state.get().position
    }

    fn relative_position(&self) -> Vec2 {
        let state = self.state.get();
        let axis = |pos: i32, extent: u32| {
            if extent == 0 {
                0.0
            } else {
                pos as f32 / extent as f32
            }
        };
        Vec2::new(
            axis(state.position.0, state.window_size.0),
            axis(state.position.1, state.window_size.1),
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn relative_position_scales_by_window() {
        let cursor = DeviceCursor::new((800, 600));
        cursor.set_position(400, 150);
        assert_eq!(cursor.relative_position(), Vec2::new(0.5, 0.25));
        assert_eq!(cursor.position(), (400, 150));
    }

    #[test]
    fn zero_sized_window_reports_zero() {
        let cursor = DeviceCursor::new((0, 0));
        cursor.set_position(10, 10);
        assert_eq!(cursor.relative_position(), Vec2::ZERO);
    }

    #[test]
    fn resize_changes_relative_position() {
        let cursor = DeviceCursor::new((100, 100));
        cursor.set_position(50, 50);
        cursor.set_window_size(200, 100);
        assert_eq!(cursor.relative_position(), Vec2::new(0.25, 0.5));
    }

    #[test]
    fn shared_handle_sees_updates() {
        let cursor = Rc::new(DeviceCursor::new((10, 10)));
        let reader: Rc<dyn CursorControl> = cursor.clone();
        cursor.set_position(5, 5);
        assert_eq!(reader.relative_position(), Vec2::new(0.5, 0.5));
        assert_eq!(Rc::strong_count(&cursor), 2);
    }
}

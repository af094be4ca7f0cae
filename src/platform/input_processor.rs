//=========================================================================
// Input Processor
//=========================================================================
//
// Translates native events into engine events and hands them to the
// receiver passed to `Device::run`.
//
// Architecture:
//   NativeEvent → InputProcessor → Event (engine type) → EventReceiver
//
// The processor owns the state translation needs between events: the
// pointer position, the held button mask, sticky modifiers, the
// successive-click tracker and the window geometry/flags. Events that
// affect the device itself (quit, genuine resize) are reported back
// through `Outcome`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;
use std::time::Instant;

use log::{debug, trace};
use winit::{
    event::{ElementState, MouseButton as WinitMouseButton, TouchPhase as WinitTouchPhase},
    keyboard::ModifiersState,
};

//=== Internal Dependencies ===============================================

use super::keymap::KeyMap;
use super::native::{NativeEvent, NativeWindowEvent};
use crate::core::cursor::DeviceCursor;
use crate::core::input::{
    ButtonMask, ClickTracker, Event, EventReceiver, KeyEvent, Modifiers, MouseButton,
    MouseEvent, MouseEventKind, TouchEvent, TouchPhase, UserEvent, WindowEvent,
};

//=== Constants ===========================================================

/// Logical touch space that normalized finger coordinates are scaled to.
pub(crate) const TOUCH_SPACE: (f32, f32) = (1280.0, 720.0);

//=== Outcome =============================================================

/// What a translated event means for the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Dispatched,
    Ignored,
    Quit,

    /// Drawable size changed; the renderer must be told.
    Resized { width: u32, height: u32 },
}

//=== WindowState =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowState {
    pub width: u32,
    pub height: u32,
    pub minimized: bool,
    pub focused: bool,
}

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    key_map: KeyMap,
    modifiers: Modifiers,
    mouse: (i32, i32),
    buttons: ButtonMask,
    clicks: ClickTracker,
    window: WindowState,
    native_scale: (f32, f32),
    cursor: Rc<DeviceCursor>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(window_size: (u32, u32), native_scale: (f32, f32), cursor: Rc<DeviceCursor>) -> Self {
        Self {
            key_map: KeyMap::new(),
            modifiers: Modifiers::NONE,
            mouse: (0, 0),
            buttons: ButtonMask::NONE,
            clicks: ClickTracker::default(),
            window: WindowState {
                width: window_size.0,
                height: window_size.1,
                minimized: false,
                focused: false,
            },
            native_scale,
            cursor,
        }
    }

    //--- State Queries ----------------------------------------------------

    pub(crate) fn window(&self) -> WindowState {
        self.window
    }

    pub(crate) fn buttons(&self) -> ButtonMask {
        self.buttons
    }

    pub(crate) fn mouse_position(&self) -> (i32, i32) {
        self.mouse
    }

    pub(crate) fn click_tracker_mut(&mut self) -> &mut ClickTracker {
        &mut self.clicks
    }

    //--- Translation ------------------------------------------------------

    /// Translates one native event, dispatching zero or more engine events.
    pub(crate) fn translate(
        &mut self,
        event: NativeEvent,
        now: Instant,
        receiver: &mut dyn EventReceiver,
    ) -> Outcome {
        trace!(target: "platform::input", "Native event {:?}", event);

        match event {
            NativeEvent::MouseMotion { x, y, xrel, yrel } => {
                self.set_mouse(x, y);
                let mut mouse = self.mouse_event(MouseEventKind::Moved);
                mouse.delta = (xrel, yrel);
                receiver.on_event(&Event::Mouse(mouse));
                Outcome::Dispatched
            }

            NativeEvent::MouseWheel { y } => {
                let mut mouse = self.mouse_event(MouseEventKind::Wheel);
                mouse.wheel = if y > 0.0 { 1.0 } else { -1.0 };
                receiver.on_event(&Event::Mouse(mouse));
                Outcome::Dispatched
            }

            NativeEvent::MouseButton { button, state, x, y } => {
                self.mouse_button(MouseButton::from(button), state, x, y, now, receiver)
            }

            NativeEvent::Key {
                sym,
                physical,
                state,
                modifiers,
            } => {
                self.modifiers = Modifiers::from(modifiers);
                let key = self.key_map.lookup(sym, physical);
                receiver.on_event(&Event::Key(KeyEvent {
                    key,
                    pressed: state == ElementState::Pressed,
                    modifiers: self.modifiers,
                }));
                Outcome::Dispatched
            }

            NativeEvent::ModifiersChanged(state) => {
                self.modifiers = Modifiers::from(state);
                Outcome::Ignored
            }

            NativeEvent::Quit => {
                debug!(target: "platform::input", "Quit requested");
                Outcome::Quit
            }

            NativeEvent::Window(window) => self.window_event(window, receiver),

            NativeEvent::Finger { phase, id, x, y } => {
                receiver.on_event(&Event::Touch(TouchEvent {
                    phase: TouchPhase::from(phase),
                    id,
                    x: (x * TOUCH_SPACE.0) as i32,
                    y: (y * TOUCH_SPACE.1) as i32,
                    touched_count: 1,
                }));
                Outcome::Dispatched
            }

            NativeEvent::User { data1, data2 } => {
                receiver.on_event(&Event::User(UserEvent { data1, data2 }));
                Outcome::Dispatched
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn set_mouse(&mut self, x: i32, y: i32) {
        self.mouse = (x, y);
        self.cursor.set_position(x, y);
    }

    fn mouse_event(&self, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            x: self.mouse.0,
            y: self.mouse.1,
            delta: (0, 0),
            wheel: 0.0,
            buttons: self.buttons,
            modifiers: self.modifiers,
        }
    }

    fn mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        x: i32,
        y: i32,
        now: Instant,
        receiver: &mut dyn EventReceiver,
    ) -> Outcome {
        if button == MouseButton::Other {
            return Outcome::Ignored;
        }

        self.set_mouse(x, y);

        let kind = match state {
            ElementState::Pressed => {
                self.buttons.press(button);
                MouseEventKind::Pressed(button)
            }
            ElementState::Released => {
                self.buttons.release(button);
                MouseEventKind::Released(button)
            }
        };
        receiver.on_event(&Event::Mouse(self.mouse_event(kind)));

        if state == ElementState::Pressed {
            let follow_up = match self.clicks.register(x, y, button, now) {
                2 => Some(MouseEventKind::DoubleClick(button)),
                3 => Some(MouseEventKind::TripleClick(button)),
                _ => None,
            };
            if let Some(kind) = follow_up {
                receiver.on_event(&Event::Mouse(self.mouse_event(kind)));
            }
        }

        Outcome::Dispatched
    }

    fn window_event(&mut self, event: NativeWindowEvent, receiver: &mut dyn EventReceiver) -> Outcome {
        let dispatched = match event {
            NativeWindowEvent::SizeChanged { width, height } => {
                let width = (width as f32 * self.native_scale.0) as u32;
                let height = (height as f32 * self.native_scale.1) as u32;
                if (width, height) == (self.window.width, self.window.height) {
                    return Outcome::Ignored;
                }
                debug!(target: "platform::input", "Window resized to {}x{}", width, height);
                self.window.width = width;
                self.window.height = height;
                self.cursor.set_window_size(width, height);
                receiver.on_event(&Event::Window(WindowEvent::Resized { width, height }));
                return Outcome::Resized { width, height };
            }
            NativeWindowEvent::Minimized => {
                self.window.minimized = true;
                WindowEvent::Minimized
            }
            NativeWindowEvent::Maximized => {
                self.window.minimized = false;
                WindowEvent::Maximized
            }
            NativeWindowEvent::Restored => {
                self.window.minimized = false;
                WindowEvent::Restored
            }
            NativeWindowEvent::FocusGained => {
                self.window.focused = true;
                WindowEvent::FocusGained
            }
            NativeWindowEvent::FocusLost => {
                self.window.focused = false;
                WindowEvent::FocusLost
            }
            NativeWindowEvent::Moved { x, y } => WindowEvent::Moved { x, y },
        };

        receiver.on_event(&Event::Window(dispatched));
        Outcome::Dispatched
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Option → Alt, Command → Logo).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            logo: state.super_key(),
        }
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

impl From<WinitTouchPhase> for TouchPhase {
    fn from(phase: WinitTouchPhase) -> Self {
        match phase {
            WinitTouchPhase::Started => TouchPhase::Pressed,
            WinitTouchPhase::Moved => TouchPhase::Moved,
            WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => TouchPhase::Released,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

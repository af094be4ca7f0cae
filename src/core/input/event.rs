//=========================================================================
// Engine Event Types
//
// Defines the single tagged event type every native input is normalized
// into before it reaches engine receivers.
//
// This module abstracts away platform-specific input (e.g. Winit, gilrs)
// into a unified, engine-friendly format.
//
// Responsibilities:
// - Represent mouse, keyboard, touch, joystick, window and user events
// - Track pressed mouse buttons as a compact bitmask
// - Carry modifier key state (Shift, Ctrl, Alt, Logo)
//
// Event Flow:
// ```text
// Native Library (Winit / gilrs)
//         ↓
//    NativeEvent (platform vocabulary)
//         ↓
//    InputProcessor (translation)
//         ↓
//    Event (this module)
//         ↓
//    EventReceiver (camera controllers, GUI, game code)
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::key_code::KeyCode;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts platform-specific button representations into a stable,
/// portable enum. The `Other` variant covers side buttons, macro buttons,
/// and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== ButtonMask ==========================================================

/// Bitmask of currently held mouse buttons.
///
/// Bit layout: left = `0x01`, right = `0x02`, middle = `0x04`. Buttons
/// outside the three standard ones never occupy a bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons held.
    pub const NONE: Self = Self(0);

    /// Left button bit.
    pub const LEFT: Self = Self(0x01);

    /// Right button bit.
    pub const RIGHT: Self = Self(0x02);

    /// Middle button bit.
    pub const MIDDLE: Self = Self(0x04);

    /// Returns the bit for `button`, or an empty mask for `Other`.
    pub const fn of(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
            MouseButton::Other => Self::NONE,
        }
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Sets the bit for `button`.
    pub fn press(&mut self, button: MouseButton) {
        self.0 |= Self::of(button).0;
    }

    /// Clears only the bit for `button`.
    pub fn release(&mut self, button: MouseButton) {
        self.0 &= !Self::of(button).0;
    }

    /// Returns `true` if `button` is held. Always `false` for `Other`.
    pub fn is_pressed(self, button: MouseButton) -> bool {
        let bit = Self::of(button).0;
        bit != 0 && self.0 & bit == bit
    }

    pub fn is_left_pressed(self) -> bool {
        self.is_pressed(MouseButton::Left)
    }

    pub fn is_right_pressed(self) -> bool {
        self.is_pressed(MouseButton::Right)
    }

    pub fn is_middle_pressed(self) -> bool {
        self.is_pressed(MouseButton::Middle)
    }
}

//=== Modifiers ===========================================================

/// Modifier key state at the time an event was produced.
///
/// # Platform Mapping
///
/// - **Shift**: Left Shift OR Right Shift
/// - **Ctrl**: Left Ctrl OR Right Ctrl
/// - **Alt**: Left Alt OR Right Alt (Option on macOS)
/// - **Logo**: Windows key / Command key / Super
///
/// The system does not distinguish between left/right variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,

    /// Logo key held (Windows / Command / Super).
    pub logo: bool,
}

//--- Modifier Constants --------------------------------------------------

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        logo: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Alt only.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Logo only.
    pub const LOGO: Self = Self {
        logo: true,
        ..Self::NONE
    };
}

//=== Mouse Events ========================================================

/// What happened in a [`MouseEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button went down.
    Pressed(MouseButton),

    /// Button went up.
    Released(MouseButton),

    /// Second press of the same button within the click threshold.
    DoubleClick(MouseButton),

    /// Third press of the same button within the click threshold.
    TripleClick(MouseButton),

    /// Cursor moved; `delta` carries the relative motion.
    Moved,

    /// Vertical wheel scroll; `wheel` carries the direction (+1 / -1).
    Wheel,
}

/// Mouse input with the cursor position and held buttons at that moment.
///
/// Coordinates are window pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: i32,
    pub y: i32,

    /// Relative motion reported with a `Moved` event, `(0, 0)` otherwise.
    pub delta: (i32, i32),

    /// Scroll direction for `Wheel` events, `0.0` otherwise.
    pub wheel: f32,

    pub buttons: ButtonMask,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn is_left_pressed(&self) -> bool {
        self.buttons.is_left_pressed()
    }

    pub fn is_right_pressed(&self) -> bool {
        self.buttons.is_right_pressed()
    }

    pub fn is_middle_pressed(&self) -> bool {
        self.buttons.is_middle_pressed()
    }
}

//=== Keyboard Events =====================================================

/// Key press or release.
///
/// `key` is [`KeyCode::Unidentified`] (code zero) when neither the key
/// symbol nor the scan code had a mapping; such events are still delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub pressed: bool,
    pub modifiers: Modifiers,
}

//=== Touch Events ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Pressed,
    Moved,
    Released,
}

/// A single contact, in the fixed logical touch space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,

    /// Per-contact identifier, stable from press to release.
    pub id: u64,

    pub x: i32,
    pub y: i32,

    /// Number of contacts reported with this event. Always `1`.
    pub touched_count: u32,
}

//=== Joystick Events =====================================================

/// Snapshot of one opened joystick, emitted once per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoystickEvent {
    /// Index of the joystick as returned by activation.
    pub joystick: u8,

    /// One bit per button, first 32 buttons only.
    pub buttons: u32,

    /// Axis values in `i16` range, unused axes are zero.
    pub axes: [i16; JoystickEvent::AXIS_COUNT],

    /// Hat direction in hundredths of a degree clockwise from up, or
    /// [`JoystickEvent::POV_CENTERED`].
    pub pov: u16,
}

impl JoystickEvent {
    /// Number of axes carried per event (X, Y, Z, R, U, V).
    pub const AXIS_COUNT: usize = 6;

    /// Maximum number of buttons that fit in the bitmask.
    pub const MAX_BUTTONS: usize = 32;

    /// Hat centered, absent, or reporting an unknown direction.
    pub const POV_CENTERED: u16 = 65535;

    /// Returns `true` if `button` is held.
    pub fn is_button_pressed(&self, button: u32) -> bool {
        button < 32 && (self.buttons >> button) & 1 == 1
    }
}

//=== Window Events =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    /// Drawable size changed (only dispatched on a genuine change).
    Resized { width: u32, height: u32 },
    Minimized,
    Maximized,

    /// Window left the minimized state without being maximized.
    Restored,
    FocusGained,
    FocusLost,
    Moved { x: i32, y: i32 },
}

//=== User Events =========================================================

/// Application-posted event forwarded opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserEvent {
    pub data1: usize,
    pub data2: usize,
}

//=== Event ===============================================================

/// Engine event delivered to receivers in native queue order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Mouse(MouseEvent),
    Key(KeyEvent),
    Touch(TouchEvent),
    Joystick(JoystickEvent),
    Window(WindowEvent),
    User(UserEvent),
}

impl Event {
    /// Returns the mouse payload, if this is a mouse event.
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }

    /// Returns the key payload, if this is a keyboard event.
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // ButtonMask Tests
    //=====================================================================

    #[test]
    fn mask_starts_empty() {
        let mask = ButtonMask::default();
        assert_eq!(mask, ButtonMask::NONE);
        assert!(!mask.is_left_pressed());
        assert!(!mask.is_right_pressed());
        assert!(!mask.is_middle_pressed());
    }

    #[test]
    fn mask_release_clears_only_that_button() {
        let mut mask = ButtonMask::NONE;
        mask.press(MouseButton::Left);
        mask.press(MouseButton::Right);
        mask.press(MouseButton::Middle);

        mask.release(MouseButton::Right);

        assert!(mask.is_left_pressed());
        assert!(!mask.is_right_pressed());
        assert!(mask.is_middle_pressed());
        assert_eq!(mask.bits(), 0x05);
    }

    #[test]
    fn mask_ignores_other_buttons() {
        let mut mask = ButtonMask::NONE;
        mask.press(MouseButton::Other);
        assert_eq!(mask, ButtonMask::NONE);
        assert!(!mask.is_pressed(MouseButton::Other));
    }

    #[test]
    fn mask_press_is_idempotent() {
        let mut mask = ButtonMask::NONE;
        mask.press(MouseButton::Left);
        mask.press(MouseButton::Left);
        assert_eq!(mask, ButtonMask::LEFT);
    }

    //=====================================================================
    // Modifiers Tests
    //=====================================================================

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn modifier_constants_set_single_flag() {
        assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl);
        assert!(Modifiers::CTRL.ctrl && !Modifiers::CTRL.alt);
        assert!(Modifiers::ALT.alt && !Modifiers::ALT.logo);
        assert!(Modifiers::LOGO.logo && !Modifiers::LOGO.shift);
    }

    //=====================================================================
    // Joystick Tests
    //=====================================================================

    #[test]
    fn joystick_button_query() {
        let event = JoystickEvent {
            joystick: 0,
            buttons: 0b1010,
            axes: [0; JoystickEvent::AXIS_COUNT],
            pov: JoystickEvent::POV_CENTERED,
        };
        assert!(!event.is_button_pressed(0));
        assert!(event.is_button_pressed(1));
        assert!(event.is_button_pressed(3));
        assert!(!event.is_button_pressed(40));
    }

    //=====================================================================
    // Accessor Tests
    //=====================================================================

    #[test]
    fn as_mouse_only_matches_mouse() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            x: 1,
            y: 2,
            delta: (0, 0),
            wheel: 0.0,
            buttons: ButtonMask::NONE,
            modifiers: Modifiers::NONE,
        });
        let user = Event::User(UserEvent { data1: 1, data2: 2 });

        assert!(mouse.as_mouse().is_some());
        assert!(mouse.as_key().is_none());
        assert!(user.as_mouse().is_none());
    }
}

//=========================================================================
// Native Event Vocabulary
//=========================================================================
//
// Events as a windowing backend reports them, before translation into
// engine events.
//
// Backends queue these in OS order; the device drains the queue once per
// `run()` call and hands each one to the InputProcessor.
//
// Key symbols follow the usual windowing-library layout: printable keys
// use their (lowercase) character code, everything else is the key's
// scan code with bit 30 set.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, MouseButton, TouchPhase},
    keyboard::{ModifiersState, PhysicalKey},
};

//=== Keysym ==============================================================

/// Layout-dependent key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Keysym(pub u32);

const SCANCODE_MASK: u32 = 1 << 30;

impl Keysym {
    pub const UNKNOWN: Self = Self(0);

    //--- Character Keys ---------------------------------------------------
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const RETURN: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const PLUS: Self = Self(43);
    pub const COMMA: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const PERIOD: Self = Self(46);
    pub const DELETE: Self = Self(127);

    //--- Scan Code Keys ---------------------------------------------------
    pub const CAPSLOCK: Self = Self::from_scancode(57);
    pub const F1: Self = Self::from_scancode(58);
    pub const F2: Self = Self::from_scancode(59);
    pub const F3: Self = Self::from_scancode(60);
    pub const F4: Self = Self::from_scancode(61);
    pub const F5: Self = Self::from_scancode(62);
    pub const F6: Self = Self::from_scancode(63);
    pub const F7: Self = Self::from_scancode(64);
    pub const F8: Self = Self::from_scancode(65);
    pub const F9: Self = Self::from_scancode(66);
    pub const F10: Self = Self::from_scancode(67);
    pub const F11: Self = Self::from_scancode(68);
    pub const F12: Self = Self::from_scancode(69);
    pub const PRINTSCREEN: Self = Self::from_scancode(70);
    pub const SCROLLLOCK: Self = Self::from_scancode(71);
    pub const PAUSE: Self = Self::from_scancode(72);
    pub const INSERT: Self = Self::from_scancode(73);
    pub const HOME: Self = Self::from_scancode(74);
    pub const PAGEUP: Self = Self::from_scancode(75);
    pub const END: Self = Self::from_scancode(77);
    pub const PAGEDOWN: Self = Self::from_scancode(78);
    pub const RIGHT: Self = Self::from_scancode(79);
    pub const LEFT: Self = Self::from_scancode(80);
    pub const DOWN: Self = Self::from_scancode(81);
    pub const UP: Self = Self::from_scancode(82);
    pub const NUMLOCKCLEAR: Self = Self::from_scancode(83);
    pub const KP_DIVIDE: Self = Self::from_scancode(84);
    pub const KP_MULTIPLY: Self = Self::from_scancode(85);
    pub const KP_MINUS: Self = Self::from_scancode(86);
    pub const KP_PLUS: Self = Self::from_scancode(87);
    pub const KP_ENTER: Self = Self::from_scancode(88);
    pub const KP_1: Self = Self::from_scancode(89);
    pub const KP_2: Self = Self::from_scancode(90);
    pub const KP_3: Self = Self::from_scancode(91);
    pub const KP_4: Self = Self::from_scancode(92);
    pub const KP_5: Self = Self::from_scancode(93);
    pub const KP_6: Self = Self::from_scancode(94);
    pub const KP_7: Self = Self::from_scancode(95);
    pub const KP_8: Self = Self::from_scancode(96);
    pub const KP_9: Self = Self::from_scancode(97);
    pub const KP_0: Self = Self::from_scancode(98);
    pub const KP_PERIOD: Self = Self::from_scancode(99);
    pub const POWER: Self = Self::from_scancode(102);
    pub const F13: Self = Self::from_scancode(104);
    pub const F14: Self = Self::from_scancode(105);
    pub const F15: Self = Self::from_scancode(106);
    pub const HELP: Self = Self::from_scancode(117);
    pub const CLEAR: Self = Self::from_scancode(156);
    pub const LCTRL: Self = Self::from_scancode(224);
    pub const LSHIFT: Self = Self::from_scancode(225);
    pub const LALT: Self = Self::from_scancode(226);
    pub const LGUI: Self = Self::from_scancode(227);
    pub const RCTRL: Self = Self::from_scancode(228);
    pub const RSHIFT: Self = Self::from_scancode(229);
    pub const RALT: Self = Self::from_scancode(230);
    pub const RGUI: Self = Self::from_scancode(231);

    /// Symbol for a key without a printable character.
    pub const fn from_scancode(scancode: u32) -> Self {
        Self(scancode | SCANCODE_MASK)
    }

    /// Symbol for a printable key. Letters are folded to lowercase.
    pub fn from_char(c: char) -> Self {
        Self(c.to_ascii_lowercase() as u32)
    }
}

//=== NativeEvent =========================================================

/// Window notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeWindowEvent {
    /// New size in native (unscaled) units.
    SizeChanged { width: u32, height: u32 },
    Minimized,
    Maximized,
    Restored,
    FocusGained,
    FocusLost,
    Moved { x: i32, y: i32 },
}

/// One event from the native queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeEvent {
    /// Pointer moved to `(x, y)`; `xrel`/`yrel` is the motion since the
    /// previous report.
    MouseMotion { x: i32, y: i32, xrel: i32, yrel: i32 },

    /// Vertical scroll. Only the sign is used.
    MouseWheel { y: f32 },

    MouseButton {
        button: MouseButton,
        state: ElementState,
        x: i32,
        y: i32,
    },

    Key {
        sym: Keysym,
        physical: PhysicalKey,
        state: ElementState,
        modifiers: ModifiersState,
    },

    /// Modifier state changed without a key event.
    ModifiersChanged(ModifiersState),

    /// Application close requested.
    Quit,

    Window(NativeWindowEvent),

    /// Touch contact; `x`/`y` are fractions of the window size.
    Finger {
        phase: TouchPhase,
        id: u64,
        x: f32,
        y: f32,
    },

    /// Application-posted payload.
    User { data1: usize, data2: usize },
}

//=========================================================================
// Unit Tests
//=========================================================================

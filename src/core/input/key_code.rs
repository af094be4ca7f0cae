//=========================================================================
// Engine Key Codes
//=========================================================================
//
// Layout-independent key identifiers used by every keyboard event.
//
// Discriminants follow the classic virtual-key numbering, so a key code
// can be stored or compared as a plain byte. Code zero is reserved for
// keys that had no mapping.
//
//=========================================================================

/// Engine keyboard key identifier.
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow and navigation keys
/// - Function keys F1-F15
/// - Numeric keypad
/// - Modifier keys (left/right variants)
/// - Common punctuation (plus, comma, minus, period)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KeyCode {
    /// Fallback for keys that neither the symbol table nor the scan code
    /// table could map.
    Unidentified = 0x00,

    //--- Editing / Control ------------------------------------------------
    Backspace = 0x08,
    Tab = 0x09,
    Clear = 0x0C,
    Enter = 0x0D,
    Pause = 0x13,
    CapsLock = 0x14,
    Escape = 0x1B,
    Space = 0x20,

    //--- Navigation -------------------------------------------------------
    PageUp = 0x21,
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    ArrowLeft = 0x25,
    ArrowUp = 0x26,
    ArrowRight = 0x27,
    ArrowDown = 0x28,
    Print = 0x2A,
    Snapshot = 0x2C,
    Insert = 0x2D,
    Delete = 0x2E,
    Help = 0x2F,

    //--- Digits -----------------------------------------------------------
    Digit0 = 0x30,
    Digit1 = 0x31,
    Digit2 = 0x32,
    Digit3 = 0x33,
    Digit4 = 0x34,
    Digit5 = 0x35,
    Digit6 = 0x36,
    Digit7 = 0x37,
    Digit8 = 0x38,
    Digit9 = 0x39,

    //--- Letters ----------------------------------------------------------
    KeyA = 0x41,
    KeyB = 0x42,
    KeyC = 0x43,
    KeyD = 0x44,
    KeyE = 0x45,
    KeyF = 0x46,
    KeyG = 0x47,
    KeyH = 0x48,
    KeyI = 0x49,
    KeyJ = 0x4A,
    KeyK = 0x4B,
    KeyL = 0x4C,
    KeyM = 0x4D,
    KeyN = 0x4E,
    KeyO = 0x4F,
    KeyP = 0x50,
    KeyQ = 0x51,
    KeyR = 0x52,
    KeyS = 0x53,
    KeyT = 0x54,
    KeyU = 0x55,
    KeyV = 0x56,
    KeyW = 0x57,
    KeyX = 0x58,
    KeyY = 0x59,
    KeyZ = 0x5A,

    //--- System -----------------------------------------------------------
    LeftLogo = 0x5B,
    RightLogo = 0x5C,
    Sleep = 0x5F,

    //--- Numeric Keypad ---------------------------------------------------
    Numpad0 = 0x60,
    Numpad1 = 0x61,
    Numpad2 = 0x62,
    Numpad3 = 0x63,
    Numpad4 = 0x64,
    Numpad5 = 0x65,
    Numpad6 = 0x66,
    Numpad7 = 0x67,
    Numpad8 = 0x68,
    Numpad9 = 0x69,
    NumpadMultiply = 0x6A,
    NumpadAdd = 0x6B,
    NumpadSubtract = 0x6D,
    NumpadDecimal = 0x6E,
    NumpadDivide = 0x6F,

    //--- Function Keys ----------------------------------------------------
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    F13 = 0x7C,
    F14 = 0x7D,
    F15 = 0x7E,

    //--- Locks ------------------------------------------------------------
    NumLock = 0x90,
    ScrollLock = 0x91,

    //--- Modifiers --------------------------------------------------------
    LeftShift = 0xA0,
    RightShift = 0xA1,
    LeftControl = 0xA2,
    RightControl = 0xA3,
    LeftAlt = 0xA4,
    RightAlt = 0xA5,

    //--- Punctuation ------------------------------------------------------
    Plus = 0xBB,
    Comma = 0xBC,
    Minus = 0xBD,
    Period = 0xBE,
}

impl KeyCode {
    /// Numeric key code (zero for [`KeyCode::Unidentified`]).
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::Unidentified
    }
}

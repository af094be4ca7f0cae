//=========================================================================
// Key Translation Tables
//=========================================================================
//
// Two immutable lookup tables built once per device:
//
//   symbol table    Keysym → KeyCode, sorted, binary searched
//   scan code table physical key → KeyCode, consulted on a symbol miss
//
// The scan code table covers layouts whose symbols have no mapping (a
// Cyrillic layout reports Cyrillic characters for the letter keys).
// A miss in both tables yields `KeyCode::Unidentified`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use super::native::Keysym;
use crate::core::input::KeyCode;

//=== KeyMap ==============================================================

/// Immutable key translation tables.
#[derive(Debug, Clone)]
pub struct KeyMap {
    symbols: Vec<(Keysym, KeyCode)>,
    scan_codes: HashMap<WinitKeyCode, KeyCode>,
}

impl KeyMap {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        let mut symbols = symbol_entries();

        // Stable sort + dedup keeps the first entry of a duplicated symbol.
        symbols.sort_by_key(|(sym, _)| *sym);
        symbols.dedup_by_key(|(sym, _)| *sym);

        Self {
            symbols,
            scan_codes: scan_code_entries().into_iter().collect(),
        }
    }

    //--- Lookup -----------------------------------------------------------

    /// Translates a key, falling back to the physical key when the symbol
    /// is unmapped.
    pub fn lookup(&self, sym: Keysym, physical: PhysicalKey) -> KeyCode {
        self.lookup_symbol(sym)
            .or_else(|| self.lookup_scan_code(physical))
            .unwrap_or(KeyCode::Unidentified)
    }

    pub fn lookup_symbol(&self, sym: Keysym) -> Option<KeyCode> {
        self.symbols
            .binary_search_by_key(&sym, |(s, _)| *s)
            .ok()
            .map(|index| self.symbols[index].1)
    }

    pub fn lookup_scan_code(&self, physical: PhysicalKey) -> Option<KeyCode> {
        match physical {
            PhysicalKey::Code(code) => self.scan_codes.get(&code).copied(),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Table Contents
//=========================================================================

fn symbol_entries() -> Vec<(Keysym, KeyCode)> {
    let mut entries = vec![
        //--- Editing / Control -------------------------------------------
        (Keysym::BACKSPACE, KeyCode::Backspace),
        (Keysym::TAB, KeyCode::Tab),
        (Keysym::CLEAR, KeyCode::Clear),
        (Keysym::RETURN, KeyCode::Enter),
        (Keysym::PAUSE, KeyCode::Pause),
        (Keysym::CAPSLOCK, KeyCode::CapsLock),
        (Keysym::ESCAPE, KeyCode::Escape),
        (Keysym::SPACE, KeyCode::Space),

        //--- Navigation --------------------------------------------------
        (Keysym::PAGEUP, KeyCode::PageUp),
        (Keysym::PAGEDOWN, KeyCode::PageDown),
        (Keysym::END, KeyCode::End),
        (Keysym::HOME, KeyCode::Home),
        (Keysym::LEFT, KeyCode::ArrowLeft),
        (Keysym::UP, KeyCode::ArrowUp),
        (Keysym::RIGHT, KeyCode::ArrowRight),
        (Keysym::DOWN, KeyCode::ArrowDown),
        (Keysym::PRINTSCREEN, KeyCode::Print),
        (Keysym::PRINTSCREEN, KeyCode::Snapshot),
        (Keysym::INSERT, KeyCode::Insert),
        (Keysym::DELETE, KeyCode::Delete),
        (Keysym::HELP, KeyCode::Help),

        //--- System ------------------------------------------------------
        (Keysym::LGUI, KeyCode::LeftLogo),
        (Keysym::RGUI, KeyCode::RightLogo),
        (Keysym::POWER, KeyCode::Sleep),

        //--- Numeric Keypad ----------------------------------------------
        (Keysym::KP_0, KeyCode::Numpad0),
        (Keysym::KP_1, KeyCode::Numpad1),
        (Keysym::KP_2, KeyCode::Numpad2),
        (Keysym::KP_3, KeyCode::Numpad3),
        (Keysym::KP_4, KeyCode::Numpad4),
        (Keysym::KP_5, KeyCode::Numpad5),
        (Keysym::KP_6, KeyCode::Numpad6),
        (Keysym::KP_7, KeyCode::Numpad7),
        (Keysym::KP_8, KeyCode::Numpad8),
        (Keysym::KP_9, KeyCode::Numpad9),
        (Keysym::KP_MULTIPLY, KeyCode::NumpadMultiply),
        (Keysym::KP_PLUS, KeyCode::NumpadAdd),
        (Keysym::KP_MINUS, KeyCode::NumpadSubtract),
        (Keysym::KP_PERIOD, KeyCode::NumpadDecimal),
        (Keysym::KP_DIVIDE, KeyCode::NumpadDivide),

        //--- Function Keys -----------------------------------------------
        (Keysym::F1, KeyCode::F1),
        (Keysym::F2, KeyCode::F2),
        (Keysym::F3, KeyCode::F3),
        (Keysym::F4, KeyCode::F4),
        (Keysym::F5, KeyCode::F5),
        (Keysym::F6, KeyCode::F6),
        (Keysym::F7, KeyCode::F7),
        (Keysym::F8, KeyCode::F8),
        (Keysym::F9, KeyCode::F9),
        (Keysym::F10, KeyCode::F10),
        (Keysym::F11, KeyCode::F11),
        (Keysym::F12, KeyCode::F12),
        (Keysym::F13, KeyCode::F13),
        (Keysym::F14, KeyCode::F14),
        (Keysym::F15, KeyCode::F15),

        //--- Locks / Modifiers -------------------------------------------
        (Keysym::NUMLOCKCLEAR, KeyCode::NumLock),
        (Keysym::SCROLLLOCK, KeyCode::ScrollLock),
        (Keysym::LSHIFT, KeyCode::LeftShift),
        (Keysym::RSHIFT, KeyCode::RightShift),
        (Keysym::LCTRL, KeyCode::LeftControl),
        (Keysym::RCTRL, KeyCode::RightControl),
        (Keysym::LALT, KeyCode::LeftAlt),
        (Keysym::RALT, KeyCode::RightAlt),

        //--- Punctuation -------------------------------------------------
        (Keysym::PLUS, KeyCode::Plus),
        (Keysym::COMMA, KeyCode::Comma),
        (Keysym::MINUS, KeyCode::Minus),
        (Keysym::PERIOD, KeyCode::Period),
    ];

    entries.extend(DIGITS.iter().map(|&(c, key)| (Keysym::from_char(c), key)));
    entries.extend(LETTERS.iter().map(|&(c, key)| (Keysym::from_char(c), key)));
    entries
}

const DIGITS: [(char, KeyCode); 10] = [
    ('0', KeyCode::Digit0),
    ('1', KeyCode::Digit1),
    ('2', KeyCode::Digit2),
    ('3', KeyCode::Digit3),
    ('4', KeyCode::Digit4),
    ('5', KeyCode::Digit5),
    ('6', KeyCode::Digit6),
    ('7', KeyCode::Digit7),
    ('8', KeyCode::Digit8),
    ('9', KeyCode::Digit9),
];

const LETTERS: [(char, KeyCode); 26] = [
    ('a', KeyCode::KeyA),
    ('b', KeyCode::KeyB),
    ('c', KeyCode::KeyC),
    ('d', KeyCode::KeyD),
    ('e', KeyCode::KeyE),
    ('f', KeyCode::KeyF),
    ('g', KeyCode::KeyG),
    ('h', KeyCode::KeyH),
    ('i', KeyCode::KeyI),
    ('j', KeyCode::KeyJ),
    ('k', KeyCode::KeyK),
    ('l', KeyCode::KeyL),
    ('m', KeyCode::KeyM),
    ('n', KeyCode::KeyN),
    ('o', KeyCode::KeyO),
    ('p', KeyCode::KeyP),
    ('q', KeyCode::KeyQ),
    ('r', KeyCode::KeyR),
    ('s', KeyCode::KeyS),
    ('t', KeyCode::KeyT),
    ('u', KeyCode::KeyU),
    ('v', KeyCode::KeyV),
    ('w', KeyCode::KeyW),
    ('x', KeyCode::KeyX),
    ('y', KeyCode::KeyY),
    ('z', KeyCode::KeyZ),
];

fn scan_code_entries() -> Vec<(WinitKeyCode, KeyCode)> {
    use WinitKeyCode as W;

    vec![
        //--- Letters -----------------------------------------------------
        (W::KeyA, KeyCode::KeyA),
        (W::KeyB, KeyCode::KeyB),
        (W::KeyC, KeyCode::KeyC),
        (W::KeyD, KeyCode::KeyD),
        (W::KeyE, KeyCode::KeyE),
        (W::KeyF, KeyCode::KeyF),
        (W::KeyG, KeyCode::KeyG),
        (W::KeyH, KeyCode::KeyH),
        (W::KeyI, KeyCode::KeyI),
        (W::KeyJ, KeyCode::KeyJ),
        (W::KeyK, KeyCode::KeyK),
        (W::KeyL, KeyCode::KeyL),
        (W::KeyM, KeyCode::KeyM),
        (W::KeyN, KeyCode::KeyN),
        (W::KeyO, KeyCode::KeyO),
        (W::KeyP, KeyCode::KeyP),
        (W::KeyQ, KeyCode::KeyQ),
        (W::KeyR, KeyCode::KeyR),
        (W::KeyS, KeyCode::KeyS),
        (W::KeyT, KeyCode::KeyT),
        (W::KeyU, KeyCode::KeyU),
        (W::KeyV, KeyCode::KeyV),
        (W::KeyW, KeyCode::KeyW),
        (W::KeyX, KeyCode::KeyX),
        (W::KeyY, KeyCode::KeyY),
        (W::KeyZ, KeyCode::KeyZ),

        //--- Digits ------------------------------------------------------
        (W::Digit0, KeyCode::Digit0),
        (W::Digit1, KeyCode::Digit1),
        (W::Digit2, KeyCode::Digit2),
        (W::Digit3, KeyCode::Digit3),
        (W::Digit4, KeyCode::Digit4),
        (W::Digit5, KeyCode::Digit5),
        (W::Digit6, KeyCode::Digit6),
        (W::Digit7, KeyCode::Digit7),
        (W::Digit8, KeyCode::Digit8),
        (W::Digit9, KeyCode::Digit9),

        //--- Numeric Keypad ----------------------------------------------
        (W::Numpad0, KeyCode::Numpad0),
        (W::Numpad1, KeyCode::Numpad1),
        (W::Numpad2, KeyCode::Numpad2),
        (W::Numpad3, KeyCode::Numpad3),
        (W::Numpad4, KeyCode::Numpad4),
        (W::Numpad5, KeyCode::Numpad5),
        (W::Numpad6, KeyCode::Numpad6),
        (W::Numpad7, KeyCode::Numpad7),
        (W::Numpad8, KeyCode::Numpad8),
        (W::Numpad9, KeyCode::Numpad9),
        (W::NumpadMultiply, KeyCode::NumpadMultiply),
        (W::NumpadAdd, KeyCode::NumpadAdd),
        (W::NumpadSubtract, KeyCode::NumpadSubtract),
        (W::NumpadDecimal, KeyCode::NumpadDecimal),
        (W::NumpadDivide, KeyCode::NumpadDivide),

        //--- Punctuation -------------------------------------------------
        (W::Equal, KeyCode::Plus),
        (W::Comma, KeyCode::Comma),
        (W::Minus, KeyCode::Minus),
        (W::Period, KeyCode::Period),

        //--- Editing / Navigation ----------------------------------------
        (W::Backspace, KeyCode::Backspace),
        (W::Tab, KeyCode::Tab),
        (W::Enter, KeyCode::Enter),
        (W::Escape, KeyCode::Escape),
        (W::Space, KeyCode::Space),
        (W::Insert, KeyCode::Insert),
        (W::Delete, KeyCode::Delete),
        (W::Home, KeyCode::Home),
        (W::End, KeyCode::End),
        (W::PageUp, KeyCode::PageUp),
        (W::PageDown, KeyCode::PageDown),
        (W::ArrowLeft, KeyCode::ArrowLeft),
        (W::ArrowUp, KeyCode::ArrowUp),
        (W::ArrowRight, KeyCode::ArrowRight),
        (W::ArrowDown, KeyCode::ArrowDown),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================

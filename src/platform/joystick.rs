//=========================================================================
// Joysticks
//=========================================================================
//
// Joystick state is polled, not evented: after draining the native queue
// the device asks its driver for a fresh snapshot of every opened
// joystick and emits one `JoystickEvent` per joystick.
//
// Snapshot → event:
//   buttons  first 32 only, one bit each
//   axes     first 6 only, unused axes zero
//   hat      first hat only, 8 directions in 1/100°, else 65535
//
// The `joystick` cargo feature provides a gilrs-backed driver.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::JoystickEvent;

//=== Constants ===========================================================

/// Most joysticks a device will open.
pub const MAX_JOYSTICKS: usize = 256;

//=== Joystick Types ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PovHat {
    Present,
    Absent,
}

/// Capabilities of an opened joystick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoystickInfo {
    /// Index used in [`JoystickEvent::joystick`].
    pub joystick: u8,
    pub name: String,
    pub axes: u32,
    pub buttons: u32,
    pub pov_hat: PovHat,
}

/// Hat switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatDirection {
    #[default]
    Centered,
    Up,
    RightUp,
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    LeftUp,
}

impl HatDirection {
    /// Angle in hundredths of a degree, clockwise from up.
    pub fn pov(self) -> u16 {
        match self {
            Self::Up => 0,
            Self::RightUp => 4500,
            Self::Right => 9000,
            Self::RightDown => 13500,
            Self::Down => 18000,
            Self::LeftDown => 22500,
            Self::Left => 27000,
            Self::LeftUp => 31500,
            Self::Centered => JoystickEvent::POV_CENTERED,
        }
    }

    /// Combines four directional switches into a hat position.
    pub fn from_switches(up: bool, down: bool, left: bool, right: bool) -> Self {
        match (up && !down, down && !up, left && !right, right && !left) {
            (true, _, false, false) => Self::Up,
            (true, _, false, true) => Self::RightUp,
            (true, _, true, _) => Self::LeftUp,
            (false, true, false, false) => Self::Down,
            (false, true, false, true) => Self::RightDown,
            (false, true, true, _) => Self::LeftDown,
            (false, false, true, _) => Self::Left,
            (false, false, false, true) => Self::Right,
            (false, false, false, false) => Self::Centered,
        }
    }
}

/// Raw state of one joystick at poll time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoystickSnapshot {
    pub buttons: Vec<bool>,
    pub axes: Vec<i16>,

    /// `None` when the joystick has no hat.
    pub hat: Option<HatDirection>,
}

impl JoystickSnapshot {
    /// Builds the engine event for joystick `index`.
    pub fn to_event(&self, index: u8) -> JoystickEvent {
        let buttons = self
            .buttons
            .iter()
            .take(JoystickEvent::MAX_BUTTONS)
            .enumerate()
            .filter(|(_, &pressed)| pressed)
            .fold(0u32, |mask, (bit, _)| mask | (1 << bit));

        let mut axes = [0i16; JoystickEvent::AXIS_COUNT];
        for (slot, value) in axes.iter_mut().zip(&self.axes) {
            *slot = *value;
        }

        JoystickEvent {
            joystick: index,
            buttons,
            axes,
            pov: self.hat.map_or(JoystickEvent::POV_CENTERED, HatDirection::pov),
        }
    }
}

//=== JoystickDriver ======================================================

/// Source of joystick state.
pub trait JoystickDriver {
    /// Opens up to `limit` joysticks and describes them.
    fn open_all(&mut self, limit: usize) -> Vec<JoystickInfo>;

    /// Pumps the driver so the next snapshots are current.
    fn update(&mut self);

    /// State of every opened joystick, in `open_all` order.
    fn snapshots(&self) -> Vec<JoystickSnapshot>;

    fn close_all(&mut self);
}

//=========================================================================
// Gilrs Driver
//=========================================================================

#[cfg(feature = "joystick")]
pub use gilrs_driver::GilrsJoysticks;

#[cfg(feature = "joystick")]
mod gilrs_driver {
    use gilrs::{Axis, Button, GamepadId, Gilrs};
    use log::{info, warn};

    use super::{HatDirection, JoystickDriver, JoystickInfo, JoystickSnapshot, PovHat};

    /// Button order used for the event bitmask.
    const BUTTONS: [Button; 17] = [
        Button::South,
        Button::East,
        Button::North,
        Button::West,
        Button::LeftTrigger,
        Button::RightTrigger,
        Button::LeftTrigger2,
        Button::RightTrigger2,
        Button::Select,
        Button::Start,
        Button::Mode,
        Button::LeftThumb,
        Button::RightThumb,
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
    ];

    /// Axis order: X, Y, Z, R, U, V.
    const AXES: [Axis; 6] = [
        Axis::LeftStickX,
        Axis::LeftStickY,
        Axis::LeftZ,
        Axis::RightStickX,
        Axis::RightStickY,
        Axis::RightZ,
    ];

    /// Joystick driver backed by gilrs.
    pub struct GilrsJoysticks {
        gilrs: Option<Gilrs>,
        opened: Vec<GamepadId>,
    }

    impl GilrsJoysticks {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    warn!(target: "platform::joystick", "Joystick support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                opened: Vec::new(),
            }
        }
    }

    impl Default for GilrsJoysticks {
        fn default() -> Self {
            Self::new()
        }
    }

    impl JoystickDriver for GilrsJoysticks {
        fn open_all(&mut self, limit: usize) -> Vec<JoystickInfo> {
            self.opened.clear();
            let Some(gilrs) = &self.gilrs else {
                return Vec::new();
            };

            gilrs
                .gamepads()
                .take(limit)
                .enumerate()
                .map(|(index, (id, gamepad))| {
                    self.opened.push(id);
                    JoystickInfo {
                        joystick: index as u8,
                        name: gamepad.name().to_string(),
                        axes: AXES.len() as u32,
                        buttons: BUTTONS.len() as u32,
                        pov_hat: PovHat::Present,
                    }
                })
                .collect()
        }

        fn update(&mut self) {
            if let Some(gilrs) = &mut self.gilrs {
                while gilrs.next_event().is_some() {}
            }
        }

        fn snapshots(&self) -> Vec<JoystickSnapshot> {
            let Some(gilrs) = &self.gilrs else {
                return Vec::new();
            };

            self.opened
                .iter()
                .map(|&id| {
                    let pad = gilrs.gamepad(id);
                    if !pad.is_connected() {
                        return JoystickSnapshot::default();
                    }
                    JoystickSnapshot {
                        buttons: BUTTONS.iter().map(|&b| pad.is_pressed(b)).collect(),
                        axes: AXES
                            .iter()
                            .map(|&a| (pad.value(a).clamp(-1.0, 1.0) * 32767.0) as i16)
                            .collect(),
                        hat: Some(HatDirection::from_switches(
                            pad.is_pressed(Button::DPadUp),
                            pad.is_pressed(Button::DPadDown),
                            pad.is_pressed(Button::DPadLeft),
                            pad.is_pressed(Button::DPadRight),
                        )),
                    }
                })
                .collect()
        }

        fn close_all(&mut self) {
            if !self.opened.is_empty() {
                info!(target: "platform::joystick", "Closing {} joysticks", self.opened.len());
            }
            self.opened.clear();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

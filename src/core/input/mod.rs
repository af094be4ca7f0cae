//=========================================================================
// Input
//
// Engine-side input vocabulary shared by the device and its receivers.
//
// Responsibilities:
// - Define the normalized event type (`Event`) and its payloads
// - Define layout-independent key codes
// - Define the receiver contract events are dispatched through
// - Detect double and triple clicks
//
// Notes:
// Nothing in this module talks to the OS. Native events are translated
// into these types by the platform layer.
//
//=========================================================================

//=== Submodules ==========================================================

mod click_tracker;
mod event;
mod key_code;
mod receiver;

//=== Public API ==========================================================

pub use click_tracker::{ClickTracker, DEFAULT_DOUBLE_CLICK_TIME};
pub use event::{
    ButtonMask, Event, JoystickEvent, KeyEvent, Modifiers, MouseButton, MouseEvent,
    MouseEventKind, TouchEvent, TouchPhase, UserEvent, WindowEvent,
};
pub use key_code::KeyCode;
pub use receiver::EventReceiver;

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_platform::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Device layer
pub use crate::platform::{CreationParams, Device, DeviceBuilder, DeviceError, Library};

#[cfg(not(any(target_arch = "wasm32", target_os = "ios")))]
pub use crate::platform::WinitBackend;

// Input
pub use crate::core::input::{
    Event, EventReceiver, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};

// Scene
pub use crate::core::scene::{Camera, CameraNode, OrbitController, SceneNodeAnimator};

// Cursor, timer and video
pub use crate::core::cursor::{CursorControl, DeviceCursor};
pub use crate::core::timer::Timer;
pub use crate::core::video::{ColorFormat, DriverType, Renderer};

//=========================================================================
// Platform Subsystem
//
// Windowing device layer: one `Device` per window, created from a shared
// `Library` that initializes the windowing backend once.
//
// Architecture:
// ```text
//  Host Loop                         Device
//  ┌──────────────────────────┐    ┌──────────────────────────────┐
//  │ while device.run(rx) {   │    │ Backend (winit / scripted)   │
//  │   animate scene          │    │   ↓ NativeEvent              │
//  │   render                 │←───│ InputProcessor               │
//  │ }                        │    │   ├─ KeyMap (symbol → code)  │
//  └──────────────────────────┘    │   ├─ ButtonMask / clicks     │
//                                  │   └─ window state            │
//                                  │   ↓ Event                    │
//                                  │ EventReceiver                │
//                                  │ JoystickDriver (per poll)    │
//                                  └──────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Backend trait**: native primitives only; policy (context fallback,
//   teardown order, translation) lives in the device
// - **Explicit library handle**: init on first device, quit after the
//   last one, no process-wide counter
// - **No failure escapes**: degraded devices keep running, closed devices
//   return `false` from `run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod backend;
mod context;
mod device;
mod input_processor;
mod joystick;
mod keymap;
mod library;
mod native;
mod params;

#[cfg(not(any(target_arch = "wasm32", target_os = "ios")))]
mod winit_backend;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use backend::{
    Backend, BackendError, DisplayMode, GlAttributes, GlConfig, GlProfile, GlRequest, PixelFormat,
    WindowSpec,
};
pub use device::{Device, DeviceError};
pub use joystick::{
    HatDirection, JoystickDriver, JoystickInfo, JoystickSnapshot, PovHat, MAX_JOYSTICKS,
};
pub use keymap::KeyMap;
pub use library::Library;
pub use native::{Keysym, NativeEvent, NativeWindowEvent};
pub use params::{CreationParams, DeviceBuilder};

#[cfg(feature = "joystick")]
pub use joystick::GilrsJoysticks;

#[cfg(not(any(target_arch = "wasm32", target_os = "ios")))]
pub use winit_backend::{UserPayload, WinitBackend, WinitContext, WinitWindow};

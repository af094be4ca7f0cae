//=========================================================================
// Aetheric Platform: Library Root
//
// Device layer and camera animators for the Aetheric engine.
//
// Responsibilities:
// - Open a window with a negotiated GL context (`platform`)
// - Translate native input into engine events, once per frame
// - Drive cameras from those events (`core::scene`)
//
// Typical usage:
// ```no_run
// use aetheric_platform::prelude::*;
//
// let library = Library::new(WinitBackend::new());
// let mut device = DeviceBuilder::new().with_resizable(true).build(&library);
// let mut events: Vec<Event> = Vec::new();
//
// while device.run(&mut events) {
//     events.clear();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent vocabulary: events, receivers,
// cursor, timer, video types, attributes and the scene animators.
//
pub mod core;

//--- Platform Modules ----------------------------------------------------
//
// `platform` holds the device, the library handle and the backends.
//
pub mod platform;

pub mod prelude;

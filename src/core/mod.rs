//=========================================================================
// Core
//
// Platform-independent building blocks consumed by the device layer and
// by application code.
//
// Responsibilities:
// - Input vocabulary and receiver contract (`input`)
// - Camera nodes and animators (`scene`)
// - Cursor sharing, frame timer and video types
// - Named attribute storage for persisting component settings
//
// Notes:
// Everything here is single-threaded and owned by whoever drives the
// frame loop. Cross-thread delivery goes through a channel receiver.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod attributes;
pub mod cursor;
pub mod input;
pub mod scene;
pub mod timer;
pub mod video;

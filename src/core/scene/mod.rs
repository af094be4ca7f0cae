//=========================================================================
// Scene System
//=========================================================================
//
// Camera nodes and the animators that drive them.
//
// Architecture:
//   EventReceiver ──on_event()──> Animator (input state)
//   scene update  ──animate_node()──> Animator ──> &mut dyn CameraNode
//
// Flow per frame:
//   Device::run() dispatches input → animators cache button/cursor state
//   scene update → animate_node() computes and writes the camera pose
//
//=========================================================================

//=== Module Declarations =================================================

mod camera;
mod orbit_controller;

//=== Public API ==========================================================

pub use camera::{Camera, CameraNode, NodeId, ViewFrustum};
pub use orbit_controller::OrbitController;

//=== Internal Dependencies ===============================================

use crate::core::attributes::Attributes;
use crate::core::input::EventReceiver;

//=== SceneNodeAnimator ===================================================

/// Per-frame behavior attached to a camera node.
///
/// Animators receive input through [`EventReceiver`] and apply it when the
/// scene update calls [`animate_node`](Self::animate_node).
///
/// # Minimal Implementation
///
/// Only `animate_node()` and `create_clone()` are required:
///
/// ```rust
/// # use aetheric_platform::core::scene::{CameraNode, SceneNodeAnimator};
/// # use aetheric_platform::core::input::{Event, EventReceiver};
/// struct Spin;
///
/// impl EventReceiver for Spin {
///     fn on_event(&mut self, _event: &Event) -> bool { false }
/// }
///
/// impl SceneNodeAnimator for Spin {
///     fn animate_node(&mut self, camera: &mut dyn CameraNode, time_ms: u32) {
///         let angle = time_ms as f32 * 0.001;
///         camera.set_position(glam::Vec3::new(angle.cos(), 0.0, angle.sin()) * 10.0);
///     }
///
///     fn create_clone(&self) -> Box<dyn SceneNodeAnimator> {
///         Box::new(Spin)
///     }
/// }
/// ```
pub trait SceneNodeAnimator: EventReceiver {
    /// Applies the animator to `camera` for the frame at `time_ms`.
    fn animate_node(&mut self, camera: &mut dyn CameraNode, time_ms: u32);

    /// Whether the animator wants input events routed to it.
    fn is_event_receiver_enabled(&self) -> bool {
        false
    }

    /// Writes persistent settings.
    fn serialize_attributes(&self, _out: &mut Attributes) {}

    /// Reads persistent settings; missing names keep current values.
    fn deserialize_attributes(&mut self, _input: &Attributes) {}

    /// Creates an independent copy with the same settings.
    fn create_clone(&self) -> Box<dyn SceneNodeAnimator>;
}

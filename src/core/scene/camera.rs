//=========================================================================
// Camera Nodes
//=========================================================================
//
// The camera surface consumed by camera animators, plus a concrete
// perspective camera that implements it.
//
// Animators never own a camera: they receive `&mut dyn CameraNode` for
// the duration of one animation step and remember it only by `NodeId`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;

//=== NodeId ==============================================================

/// Identity of a scene node, stable for the node's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

//=== ViewFrustum =========================================================

/// Far-plane corners of a camera's view volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrustum {
    pub far_left_up: Vec3,
    pub far_left_down: Vec3,
    pub far_right_up: Vec3,
    pub far_right_down: Vec3,
}

impl ViewFrustum {
    /// Builds the far plane of a perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians.
    pub fn perspective(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        far: f32,
    ) -> Self {
        let forward = (target - position).normalize_or_zero();
        let right = forward.cross(up).normalize_or_zero();
        let true_up = right.cross(forward);

        let far_center = position + forward * far;
        let half_height = far * (fov_y * 0.5).tan();
        let half_width = half_height * aspect;

        let r = right * half_width;
        let u = true_up * half_height;

        Self {
            far_left_up: far_center - r + u,
            far_left_down: far_center - r - u,
            far_right_up: far_center + r + u,
            far_right_down: far_center + r - u,
        }
    }
}

//=== CameraNode ==========================================================

/// Query/mutation surface of a camera scene node.
pub trait CameraNode {
    fn id(&self) -> NodeId;

    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn target(&self) -> Vec3;
    fn set_target(&mut self, target: Vec3);

    fn up_vector(&self) -> Vec3;
    fn set_up_vector(&mut self, up: Vec3);

    fn view_frustum(&self) -> ViewFrustum;

    /// Whether the camera currently accepts input-driven animation.
    fn is_input_receiver_enabled(&self) -> bool;

    /// Whether this is the active camera of its scene.
    fn is_active(&self) -> bool;
}

//=== Camera ==============================================================

/// Perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    id: NodeId,
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    input_receiver_enabled: bool,
    active: bool,
}

impl Camera {
    /// Creates an active camera at `position` looking at `target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            id: NodeId::next(),
            position,
            target,
            up: Vec3::Y,
            fov_y: std::f32::consts::PI / 2.5,
            aspect: 4.0 / 3.0,
            near: 1.0,
            far: 3000.0,
            input_receiver_enabled: true,
            active: true,
        }
    }

    pub fn set_fov(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
    }

    pub fn fov(&self) -> f32 {
        self.fov_y
    }

    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    pub fn set_near_value(&mut self, near: f32) {
        self.near = near;
    }

    pub fn near_value(&self) -> f32 {
        self.near
    }

    pub fn set_far_value(&mut self, far: f32) {
        self.far = far;
    }

    pub fn far_value(&self) -> f32 {
        self.far
    }

    pub fn set_input_receiver_enabled(&mut self, enabled: bool) {
        self.input_receiver_enabled = enabled;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl CameraNode for Camera {
    fn id(&self) -> NodeId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn up_vector(&self) -> Vec3 {
        self.up
    }

    fn set_up_vector(&mut self, up: Vec3) {
        self.up = up;
    }

    fn view_frustum(&self) -> ViewFrustum {
        ViewFrustum::perspective(self.position, self.target, self.up, self.fov_y, self.aspect, self.far)
    }

    fn is_input_receiver_enabled(&self) -> bool {
        self.input_receiver_enabled
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Orbit Camera Controller
//=========================================================================
//
// Maps mouse-drag gestures onto an orbit around a pivot point.
//
// Gestures (checked every frame, in this order):
//   zoom       middle, or left + right   → orbit distance
//   translate  right, while not zooming  → pivot moves on the view plane
//   rotate     left, while not zooming   → yaw / pitch around the pivot
//
// Each gesture is Idle or Active{start}. While active, the delta between
// `start` and the current cursor is applied on top of the committed value
// without changing it. When the buttons stop matching, the delta is folded
// into the committed value and the gesture returns to Idle.
//
// Angles are in degrees; cursor positions are window-relative (0..1).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use glam::{Vec2, Vec3};
use log::debug;

//=== Internal Dependencies ===============================================

use super::camera::{CameraNode, NodeId};
use super::SceneNodeAnimator;
use crate::core::attributes::Attributes;
use crate::core::cursor::CursorControl;
use crate::core::input::{Event, EventReceiver, MouseButton, MouseEventKind};

//=== Constants ===========================================================

/// Margin kept between the camera and the minimum target distance while
/// a zoom gesture is in progress.
const ZOOM_MARGIN: f32 = 0.1;

//=== Gesture =============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Active { start: Vec2 },
}

impl Gesture {
    fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MouseKeys {
    left: bool,
    middle: bool,
    right: bool,
}

//=== OrbitController =====================================================

/// Orbit/pan/zoom camera animator driven by mouse drags.
pub struct OrbitController {
    cursor: Option<Rc<dyn CursorControl>>,
    last_camera: Option<NodeId>,
    mouse_pos: Vec2,
    keys: MouseKeys,

    //--- Tunables --------------------------------------------------------
    target_min_distance: f32,
    zoom_speed: f32,
    rotate_speed: f32,
    translate_speed: f32,

    //--- Committed State -------------------------------------------------
    current_zoom: f32,
    rot_x: f32,
    rot_y: f32,

    //--- Gestures --------------------------------------------------------
    zooming: Gesture,
    translating: Gesture,
    rotating: Gesture,

    //--- Pivot Tracking --------------------------------------------------
    old_target: Vec3,
    last_camera_target: Vec3,
}

impl OrbitController {
    pub const DEFAULT_ROTATE_SPEED: f32 = -1500.0;
    pub const DEFAULT_ZOOM_SPEED: f32 = 200.0;
    pub const DEFAULT_TRANSLATE_SPEED: f32 = 1500.0;
    pub const DEFAULT_DISTANCE: f32 = 70.0;

    //--- Construction -----------------------------------------------------

    /// Creates a controller reading the pointer from `cursor`.
    pub fn new(
        cursor: Option<Rc<dyn CursorControl>>,
        rotate_speed: f32,
        zoom_speed: f32,
        translate_speed: f32,
        distance: f32,
    ) -> Self {
        let mouse_pos = cursor
            .as_ref()
            .map(|c| c.relative_position())
            .unwrap_or(Vec2::splat(0.5));

        Self {
            cursor,
            last_camera: None,
            mouse_pos,
            keys: MouseKeys::default(),
            target_min_distance: 0.0,
            zoom_speed,
            rotate_speed,
            translate_speed,
            current_zoom: distance,
            rot_x: 0.0,
            rot_y: 0.0,
            zooming: Gesture::Idle,
            translating: Gesture::Idle,
            rotating: Gesture::Idle,
            old_target: Vec3::ZERO,
            last_camera_target: Vec3::ZERO,
        }
    }

    /// Creates a controller with the default speeds and distance.
    pub fn with_cursor(cursor: Rc<dyn CursorControl>) -> Self {
        Self::new(
            Some(cursor),
            Self::DEFAULT_ROTATE_SPEED,
            Self::DEFAULT_ZOOM_SPEED,
            Self::DEFAULT_TRANSLATE_SPEED,
            Self::DEFAULT_DISTANCE,
        )
    }

    //--- Tunables ---------------------------------------------------------

    pub fn set_rotate_speed(&mut self, speed: f32) {
        self.rotate_speed = speed;
    }

    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }

    /// Sets the translation (pan) speed.
    pub fn set_move_speed(&mut self, speed: f32) {
        self.translate_speed = speed;
    }

    pub fn move_speed(&self) -> f32 {
        self.translate_speed
    }

    pub fn set_zoom_speed(&mut self, speed: f32) {
        self.zoom_speed = speed;
    }

    pub fn zoom_speed(&self) -> f32 {
        self.zoom_speed
    }

    /// Sets the committed orbit radius.
    pub fn set_distance(&mut self, distance: f32) {
        self.current_zoom = distance;
    }

    /// Committed orbit radius.
    pub fn distance(&self) -> f32 {
        self.current_zoom
    }

    /// Sets the closest allowed distance to the pivot. Raises the current
    /// distance if it is below the new minimum.
    pub fn set_target_min_distance(&mut self, min_distance: f32) {
        self.target_min_distance = min_distance;
        if self.current_zoom < min_distance {
            self.current_zoom = min_distance;
        }
    }

    pub fn target_min_distance(&self) -> f32 {
        self.target_min_distance
    }

    /// Committed `(horizontal, vertical)` rotation in degrees.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rot_x, self.rot_y)
    }

    //--- Internal Helpers -------------------------------------------------

    fn update_mouse_pos(&mut self) {
        if let Some(cursor) = &self.cursor {
            self.mouse_pos = cursor.relative_position();
        }
    }

    fn all_keys_up(&mut self) {
        self.keys = MouseKeys::default();
    }

    fn zoom_buttons_held(&self) -> bool {
        (self.keys.left && self.keys.right) || self.keys.middle
    }

    /// Applies the zoom gesture, returning the distance for this frame.
    fn step_zoom(&mut self) -> f32 {
        let floor = self.target_min_distance + ZOOM_MARGIN;
        let mut zoom = self.current_zoom;

        if self.zoom_buttons_held() {
            match self.zooming {
                Gesture::Idle => self.zooming = Gesture::Active { start: self.mouse_pos },
                Gesture::Active { start } => {
                    zoom += (start.x - self.mouse_pos.x) * self.zoom_speed;
                    zoom = zoom.max(floor);
                }
            }
        } else if let Gesture::Active { start } = self.zooming {
            let committed = self.current_zoom + (start.x - self.mouse_pos.x) * self.zoom_speed;
            if committed >= self.target_min_distance {
                self.current_zoom = committed.max(floor);
            } else {
                debug!(target: "scene::camera", "Zoom commit {} below minimum, keeping {}", committed, self.current_zoom);
            }
            zoom = self.current_zoom;
            self.zooming = Gesture::Idle;
        }

        zoom
    }

    /// Applies the pan gesture to the working pivot.
    fn step_translate(&mut self, pivot: &mut Vec3, basis_x: Vec3, basis_y: Vec3) {
        let offset = |start: Vec2, mouse: Vec2, speed: f32| {
            basis_x * (start.x - mouse.x) * speed + basis_y * (start.y - mouse.y) * speed
        };

        if self.keys.right && !self.zooming.is_active() {
            match self.translating {
                Gesture::Idle => self.translating = Gesture::Active { start: self.mouse_pos },
                Gesture::Active { start } => {
                    *pivot += offset(start, self.mouse_pos, self.translate_speed);
                }
            }
        } else if let Gesture::Active { start } = self.translating {
            *pivot += offset(start, self.mouse_pos, self.translate_speed);
            self.old_target = *pivot;
            self.translating = Gesture::Idle;
        }
    }

    /// Applies the rotate gesture, returning the angles for this frame.
    fn step_rotate(&mut self) -> (f32, f32) {
        let mut rot = (self.rot_x, self.rot_y);

        if self.keys.left && !self.zooming.is_active() {
            match self.rotating {
                Gesture::Idle => self.rotating = Gesture::Active { start: self.mouse_pos },
                Gesture::Active { start } => {
                    rot.0 += (start.x - self.mouse_pos.x) * self.rotate_speed;
                    rot.1 += (start.y - self.mouse_pos.y) * self.rotate_speed;
                }
            }
        } else if let Gesture::Active { start } = self.rotating {
            self.rot_x += (start.x - self.mouse_pos.x) * self.rotate_speed;
            self.rot_y += (start.y - self.mouse_pos.y) * self.rotate_speed;
            rot = (self.rot_x, self.rot_y);
            self.rotating = Gesture::Idle;
        }

        rot
    }
}

//=== Event Handling ======================================================

impl EventReceiver for OrbitController {
    /// Tracks mouse buttons and the cursor. Non-mouse events are ignored.
    fn on_event(&mut self, event: &Event) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };

        match mouse.kind {
            MouseEventKind::Pressed(button) | MouseEventKind::Released(button) => {
                let down = matches!(mouse.kind, MouseEventKind::Pressed(_));
                match button {
                    MouseButton::Left => self.keys.left = down,
                    MouseButton::Middle => self.keys.middle = down,
                    MouseButton::Right => self.keys.right = down,
                    MouseButton::Other => return false,
                }
            }
            MouseEventKind::Moved => {
                // Re-read from the mask: a GUI may have swallowed press/release events.
                self.keys.left = mouse.is_left_pressed();
                self.keys.right = mouse.is_right_pressed();
                self.keys.middle = mouse.is_middle_pressed();
            }
            _ => return false,
        }

        self.update_mouse_pos();
        true
    }
}

//=== Animation ===========================================================

impl SceneNodeAnimator for OrbitController {
    fn animate_node(&mut self, camera: &mut dyn CameraNode, _time_ms: u32) {
        if !camera.is_input_receiver_enabled() || !camera.is_active() {
            return;
        }

        //--- Camera switch / pivot drift --------------------------------
        if self.last_camera != Some(camera.id()) {
            debug!(target: "scene::camera", "Orbit controller now driving camera {:?}", camera.id());
            self.old_target = camera.target();
            self.last_camera_target = self.old_target;
            self.last_camera = Some(camera.id());
        } else {
            self.old_target += camera.target() - self.last_camera_target;
        }

        //--- Zoom --------------------------------------------------------
        let zoom = self.step_zoom();

        //--- Translation ------------------------------------------------
        let mut pivot = self.old_target;
        let up = camera.up_vector();
        let target = camera.target();
        let position = camera.position();

        let basis_x = (position - target).cross(up).normalize_or_zero();

        let frustum = camera.view_frustum();
        let view_axis = if up.y > 0.0 { position - target } else { target - position };
        let basis_y = (frustum.far_left_down - frustum.far_right_down)
            .cross(view_axis)
            .normalize_or_zero();

        self.step_translate(&mut pivot, basis_x, basis_y);

        //--- Rotation ---------------------------------------------------
        let (rot_x, rot_y) = self.step_rotate();

        //--- Pose -------------------------------------------------------
        let mut position = pivot + Vec3::new(zoom, 0.0, 0.0);
        position = rotate_xy(position, rot_y, pivot);
        position = rotate_xz(position, -rot_x, pivot);

        camera.set_position(position);
        camera.set_target(pivot);

        // Up vector from the angles, not from cross products: stays stable at the poles.
        let mut up = rotate_xy(Vec3::Y, -rot_y, Vec3::ZERO);
        up = rotate_xz(up, -rot_x + 180.0, Vec3::ZERO);
        camera.set_up_vector(up);

        self.last_camera_target = camera.target();
    }

    fn is_event_receiver_enabled(&self) -> bool {
        true
    }

    fn serialize_attributes(&self, out: &mut Attributes) {
        out.add_float("TargetMinDistance", self.target_min_distance);
        out.add_float("ZoomSpeed", self.zoom_speed);
        out.add_float("RotateSpeed", self.rotate_speed);
        out.add_float("TranslateSpeed", self.translate_speed);
        out.add_float("CurrentZoom", self.current_zoom);
    }

    fn deserialize_attributes(&mut self, input: &Attributes) {
        self.target_min_distance = input.float_or("TargetMinDistance", self.target_min_distance);
        self.zoom_speed = input.float_or("ZoomSpeed", self.zoom_speed);
        self.rotate_speed = input.float_or("RotateSpeed", self.rotate_speed);
        self.translate_speed = input.float_or("TranslateSpeed", self.translate_speed);
        self.current_zoom = input.float_or("CurrentZoom", self.current_zoom);
    }

    fn create_clone(&self) -> Box<dyn SceneNodeAnimator> {
        let mut clone = OrbitController::new(
            self.cursor.clone(),
            self.rotate_speed,
            self.zoom_speed,
            self.translate_speed,
            self.current_zoom,
        );
        clone.target_min_distance = self.target_min_distance;
        clone.all_keys_up();
        Box::new(clone)
    }
}

//=== Rotation Helpers ====================================================

/// Rotates `v` around the Z axis through `center`.
fn rotate_xy(v: Vec3, degrees: f32, center: Vec3) -> Vec3 {
    let (sn, cs) = degrees.to_radians().sin_cos();
    let x = v.x - center.x;
    let y = v.y - center.y;
    Vec3::new(x * cs - y * sn + center.x, x * sn + y * cs + center.y, v.z)
}

/// Rotates `v` around the Y axis through `center`.
fn rotate_xz(v: Vec3, degrees: f32, center: Vec3) -> Vec3 {
    let (sn, cs) = degrees.to_radians().sin_cos();
    let x = v.x - center.x;
    let z = v.z - center.z;
    Vec3::new(x * cs - z * sn + center.x, v.y, x * sn + z * cs + center.z)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{ButtonMask, Modifiers, MouseEvent, UserEvent};
    use crate::core::scene::Camera;
    use std::cell::Cell;

    //--- Test Helpers -----------------------------------------------------

    struct FixedCursor(Cell<Vec2>);

    impl CursorControl for FixedCursor {
        fn position(&self) -> (i32, i32) {
            (0, 0)
        }

        fn relative_position(&self) -> Vec2 {
            self.0.get()
        }
    }

    fn cursor_at(x: f32, y: f32) -> Rc<FixedCursor> {
        Rc::new(FixedCursor(Cell::new(Vec2::new(x, y))))
    }

    fn controller(cursor: &Rc<FixedCursor>, rotate: f32, zoom: f32, translate: f32, distance: f32) -> OrbitController {
        let shared: Rc<dyn CursorControl> = cursor.clone();
        OrbitController::new(Some(shared), rotate, zoom, translate, distance)
    }

    fn mouse(kind: MouseEventKind, buttons: ButtonMask) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            x: 0,
            y: 0,
            delta: (0, 0),
            wheel: 0.0,
            buttons,
            modifiers: Modifiers::NONE,
        })
    }

    fn press(c: &mut OrbitController, button: MouseButton) {
        c.on_event(&mouse(MouseEventKind::Pressed(button), ButtonMask::NONE));
    }

    fn release(c: &mut OrbitController, button: MouseButton) {
        c.on_event(&mouse(MouseEventKind::Released(button), ButtonMask::NONE));
    }

    fn move_to(c: &mut OrbitController, cursor: &FixedCursor, x: f32, y: f32, buttons: ButtonMask) {
        cursor.0.set(Vec2::new(x, y));
        c.on_event(&mouse(MouseEventKind::Moved, buttons));
    }

    fn origin_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO)
    }

    //=====================================================================
    // Event Handling Tests
    //=====================================================================

    #[test]
    fn ignores_non_mouse_events() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 10.0);
        assert!(!c.on_event(&Event::User(UserEvent { data1: 0, data2: 0 })));
    }

    #[test]
    fn consumes_button_and_move_events() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 10.0);

        assert!(c.on_event(&mouse(MouseEventKind::Pressed(MouseButton::Left), ButtonMask::LEFT)));
        assert!(c.keys.left);
        assert!(c.on_event(&mouse(MouseEventKind::Moved, ButtonMask::NONE)));
        assert!(!c.keys.left, "move events re-read the button mask");
        assert!(!c.on_event(&mouse(MouseEventKind::Wheel, ButtonMask::NONE)));
    }

    #[test]
    fn events_refresh_cursor_position() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 10.0);

        move_to(&mut c, &cursor, 0.25, 0.75, ButtonMask::NONE);
        assert_eq!(c.mouse_pos, Vec2::new(0.25, 0.75));
    }

    //=====================================================================
    // Pose Tests
    //=====================================================================

    #[test]
    fn idle_pose_is_pivot_plus_zoom_offset() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 50.0);
        let mut camera = origin_camera();

        c.animate_node(&mut camera, 0);

        assert!(camera.position().abs_diff_eq(Vec3::new(50.0, 0.0, 0.0), 1e-4));
        assert!(camera.target().abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(camera.up_vector().abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn pose_follows_existing_target() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 20.0);
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(1.0, 2.0, 3.0));

        c.animate_node(&mut camera, 0);

        assert!(camera.position().abs_diff_eq(Vec3::new(21.0, 2.0, 3.0), 1e-4));
        assert!(camera.target().abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }

    #[test]
    fn inactive_camera_is_untouched() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 50.0);
        let mut camera = origin_camera();
        camera.set_active(false);

        c.animate_node(&mut camera, 0);
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 100.0));

        camera.set_active(true);
        camera.set_input_receiver_enabled(false);
        c.animate_node(&mut camera, 0);
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 100.0));
    }

    //=====================================================================
    // Rotation Tests
    //=====================================================================

    #[test]
    fn rotate_drag_commits_on_release() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 50.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Left);
        c.animate_node(&mut camera, 0);
        assert_eq!(c.rotation(), (0.0, 0.0));

        move_to(&mut c, &cursor, 0.6, 0.5, ButtonMask::LEFT);
        c.animate_node(&mut camera, 16);
        assert_eq!(c.rotation(), (0.0, 0.0), "active gesture does not commit");

        release(&mut c, MouseButton::Left);
        c.animate_node(&mut camera, 32);

        let (rot_x, rot_y) = c.rotation();
        assert!((rot_x - -0.1).abs() < 1e-6);
        assert!(rot_y.abs() < 1e-6);
    }

    #[test]
    fn rotation_moves_camera_around_pivot() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, -900.0, 1.0, 1.0, 10.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Left);
        c.animate_node(&mut camera, 0);

        // (0.5 - 0.6) * -900 = 90 degrees of yaw.
        move_to(&mut c, &cursor, 0.6, 0.5, ButtonMask::LEFT);
        c.animate_node(&mut camera, 16);

        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-3));
        assert!(((camera.position() - camera.target()).length() - 10.0).abs() < 1e-3);
    }

    //=====================================================================
    // Zoom Tests
    //=====================================================================

    #[test]
    fn middle_drag_zooms() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 100.0, 1.0, 50.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 0);
        move_to(&mut c, &cursor, 0.4, 0.5, ButtonMask::MIDDLE);
        c.animate_node(&mut camera, 16);

        // (0.5 - 0.4) * 100 = +10 while active, not yet committed.
        assert!(camera.position().abs_diff_eq(Vec3::new(60.0, 0.0, 0.0), 1e-3));
        assert_eq!(c.distance(), 50.0);

        release(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 32);
        assert!((c.distance() - 60.0).abs() < 1e-3);
    }

    #[test]
    fn left_and_right_together_zoom_instead_of_rotate() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 100.0, 1.0, 50.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Left);
        press(&mut c, MouseButton::Right);
        c.animate_node(&mut camera, 0);

        assert!(c.zooming.is_active());
        assert!(!c.rotating.is_active());
        assert!(!c.translating.is_active());
    }

    #[test]
    fn all_three_buttons_zoom_only() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 100.0, 1.0, 50.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Left);
        press(&mut c, MouseButton::Middle);
        press(&mut c, MouseButton::Right);
        c.animate_node(&mut camera, 0);

        assert!(c.zooming.is_active());
        assert!(!c.rotating.is_active());
        assert!(!c.translating.is_active());

        let mut all = ButtonMask::NONE;
        all.press(MouseButton::Left);
        all.press(MouseButton::Middle);
        all.press(MouseButton::Right);
        move_to(&mut c, &cursor, 0.4, 0.6, all);
        c.animate_node(&mut camera, 16);

        assert!(c.zooming.is_active());
        assert!(!c.rotating.is_active());
        assert!(!c.translating.is_active());
        assert_eq!(c.rotation(), (0.0, 0.0));
    }

    #[test]
    fn active_zoom_clamps_to_floor() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 100.0, 1.0, 10.5);
        c.set_target_min_distance(10.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 0);
        move_to(&mut c, &cursor, 0.6, 0.5, ButtonMask::MIDDLE);
        c.animate_node(&mut camera, 16);

        let radius = (camera.position() - camera.target()).length();
        assert!((radius - 10.1).abs() < 1e-3);
    }

    #[test]
    fn zoom_commit_below_minimum_is_rejected() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 100.0, 1.0, 10.5);
        c.set_target_min_distance(10.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 0);
        move_to(&mut c, &cursor, 0.6, 0.5, ButtonMask::MIDDLE);
        release(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 16);

        assert_eq!(c.distance(), 10.5);
    }

    #[test]
    fn zoom_commit_near_minimum_lands_on_floor() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 100.0, 1.0, 12.0);
        c.set_target_min_distance(10.0);
        let mut camera = origin_camera();

        press(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 0);
        // (0.5 - 0.5195) * 100 = -1.95 → 10.05, between min and floor.
        move_to(&mut c, &cursor, 0.5195, 0.5, ButtonMask::MIDDLE);
        release(&mut c, MouseButton::Middle);
        c.animate_node(&mut camera, 16);

        assert!(c.distance() >= 10.1 - 1e-5);
    }

    #[test]
    fn repeated_zoom_never_drops_below_floor() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 50.0, 1.0, 30.0);
        c.set_target_min_distance(5.0);
        let mut camera = origin_camera();

        for step in 0..8 {
            cursor.0.set(Vec2::new(0.5, 0.5));
            press(&mut c, MouseButton::Middle);
            c.animate_node(&mut camera, step * 3);

            move_to(&mut c, &cursor, 0.5 + 0.05 * (step as f32 + 1.0), 0.5, ButtonMask::MIDDLE);
            c.animate_node(&mut camera, step * 3 + 1);
            assert!((camera.position() - camera.target()).length() >= 5.1 - 1e-3);

            release(&mut c, MouseButton::Middle);
            c.animate_node(&mut camera, step * 3 + 2);
            assert!(c.distance() >= 5.1 - 1e-5);
        }
    }

    #[test]
    fn raising_min_distance_bumps_zoom() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 5.0);
        c.set_target_min_distance(8.0);
        assert_eq!(c.distance(), 8.0);
        assert_eq!(c.target_min_distance(), 8.0);
    }

    //=====================================================================
    // Translation Tests
    //=====================================================================

    #[test]
    fn right_drag_pans_pivot() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 10.0, 50.0);
        let mut camera = origin_camera();

        c.animate_node(&mut camera, 0);

        press(&mut c, MouseButton::Right);
        c.animate_node(&mut camera, 16);
        move_to(&mut c, &cursor, 0.6, 0.5, ButtonMask::RIGHT);
        release(&mut c, MouseButton::Right);
        c.animate_node(&mut camera, 32);

        // basis_x = (50,0,0) × Y = +Z, scaled by (0.5 - 0.6) * 10.
        assert!(camera.target().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-3));
        assert!(camera.position().abs_diff_eq(Vec3::new(50.0, 0.0, -1.0), 1e-3));
    }

    //=====================================================================
    // Pivot Tracking Tests
    //=====================================================================

    #[test]
    fn external_target_drift_moves_pivot() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 10.0);
        let mut camera = origin_camera();

        c.animate_node(&mut camera, 0);
        camera.set_target(Vec3::new(5.0, 0.0, 0.0));
        c.animate_node(&mut camera, 16);

        assert!(camera.target().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        assert!(camera.position().abs_diff_eq(Vec3::new(15.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn camera_switch_resets_pivot() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 1.0, 1.0, 1.0, 10.0);
        let mut first = origin_camera();
        let mut second = Camera::new(Vec3::ZERO, Vec3::new(0.0, 7.0, 0.0));

        c.animate_node(&mut first, 0);
        c.animate_node(&mut second, 16);

        assert!(second.target().abs_diff_eq(Vec3::new(0.0, 7.0, 0.0), 1e-5));
        assert!(second.position().abs_diff_eq(Vec3::new(10.0, 7.0, 0.0), 1e-4));
    }

    //=====================================================================
    // Attribute Tests
    //=====================================================================

    #[test]
    fn attributes_round_trip_into_fresh_controller() {
        let cursor = cursor_at(0.5, 0.5);
        let mut source = controller(&cursor, -1500.0, 200.0, 1500.0, 70.0);
        source.set_zoom_speed(2.0);
        source.set_target_min_distance(3.0);

        let mut attrs = Attributes::new();
        source.serialize_attributes(&mut attrs);
        let text = attrs.to_json().expect("serialize");

        let restored = Attributes::from_json(&text).expect("deserialize");
        let mut fresh = controller(&cursor, 1.0, 1.0, 1.0, 1.0);
        fresh.deserialize_attributes(&restored);

        assert_eq!(fresh.zoom_speed(), 2.0);
        assert_eq!(fresh.rotate_speed(), -1500.0);
        assert_eq!(fresh.move_speed(), 1500.0);
        assert_eq!(fresh.distance(), 70.0);
        assert_eq!(fresh.target_min_distance(), 3.0);
    }

    #[test]
    fn missing_attributes_keep_current_values() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 4.0, 5.0, 6.0, 7.0);
        c.deserialize_attributes(&Attributes::new());
        assert_eq!((c.rotate_speed(), c.zoom_speed(), c.move_speed(), c.distance()), (4.0, 5.0, 6.0, 7.0));
    }

    //=====================================================================
    // Clone Tests
    //=====================================================================

    #[test]
    fn clone_copies_settings_and_shares_cursor() {
        let cursor = cursor_at(0.5, 0.5);
        let mut c = controller(&cursor, 4.0, 5.0, 6.0, 7.0);
        c.set_target_min_distance(2.0);

        let clone = c.create_clone();
        let mut attrs = Attributes::new();
        clone.serialize_attributes(&mut attrs);

        assert_eq!(attrs.get_float("RotateSpeed"), Some(4.0));
        assert_eq!(attrs.get_float("CurrentZoom"), Some(7.0));
        assert_eq!(attrs.get_float("TargetMinDistance"), Some(2.0));
        assert!(clone.is_event_receiver_enabled());
        assert_eq!(Rc::strong_count(&cursor), 3);
    }
}

//=========================================================================
// Orbit Viewer
//=========================================================================
//
// Opens a device window and orbits a camera around the origin:
//   left drag    rotate
//   middle drag  zoom (or left + right)
//   right drag   pan
//   Esc          quit
//
// Each frame clears the window to a colour derived from the camera
// heading and presents it. Drawing geometry is left to a renderer.
//
// Usage:
//   orbit-viewer [params.json]
//
// Logging is controlled through RUST_LOG, e.g. RUST_LOG=debug.
//
//=========================================================================

use std::error::Error;
use std::ffi::c_void;
use std::rc::Rc;

use glam::Vec3;
use log::{debug, info, warn};

use aetheric_platform::core::input::WindowEvent;
use aetheric_platform::platform::WinitContext;
use aetheric_platform::prelude::*;

//=== Frame ===============================================================

const GL_COLOR_BUFFER_BIT: u32 = 0x4000;

type ClearColor = unsafe extern "system" fn(f32, f32, f32, f32);
type Clear = unsafe extern "system" fn(u32);

/// The two GL entry points the viewer needs to present a frame.
struct Frame {
    clear_color: ClearColor,
    clear: Clear,
}

impl Frame {
    fn load(context: &WinitContext) -> Option<Self> {
        let clear_color = context.proc_address(c"glClearColor");
        let clear = context.proc_address(c"glClear");
        if clear_color.is_null() || clear.is_null() {
            return None;
        }
        // SAFETY: both addresses are non-null GL entry points of the current context.
        unsafe {
            Some(Self {
                clear_color: std::mem::transmute::<*const c_void, ClearColor>(clear_color),
                clear: std::mem::transmute::<*const c_void, Clear>(clear),
            })
        }
    }

    fn present(&self, context: &WinitContext, camera: &Camera) {
        let heading = (camera.position() - camera.target()).normalize_or_zero();
        let tint = heading * 0.25 + Vec3::splat(0.25);

        // SAFETY: the context is current on this thread for the device lifetime.
        unsafe {
            (self.clear_color)(tint.x, tint.y, tint.z, 1.0);
            (self.clear)(GL_COLOR_BUFFER_BIT);
        }
        if let Err(e) = context.swap_buffers() {
            warn!("Present failed: {}", e);
        }
    }
}

//=== Viewer ==============================================================

/// Routes device events to the camera controller.
struct Viewer {
    controller: OrbitController,
    camera: Camera,
    quit: bool,
}

impl EventReceiver for Viewer {
    fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.pressed && key.key == KeyCode::Escape => {
                self.quit = true;
                true
            }
            Event::Window(WindowEvent::Resized { width, height }) if *height > 0 => {
                self.camera.set_aspect_ratio(*width as f32 / *height as f32);
                true
            }
            _ => self.controller.on_event(event),
        }
    }
}

//=== Entry Point =========================================================

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => CreationParams::from_json(&std::fs::read_to_string(path)?)?,
        None => CreationParams::default(),
    };

    let library = Library::new(WinitBackend::new());
    let mut device = DeviceBuilder::from_params(params)
        .with_title("Orbit Viewer")
        .with_resizable(true)
        .build(&library);
    device.check_ready()?;

    let (width, height) = device.window_size();
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, -70.0), Vec3::ZERO);
    camera.set_aspect_ratio(width as f32 / height.max(1) as f32);

    let cursor: Rc<dyn CursorControl> = device.cursor_control();
    let mut viewer = Viewer {
        controller: OrbitController::with_cursor(cursor),
        camera,
        quit: false,
    };

    let frame = device.context().and_then(Frame::load);
    if frame.is_none() {
        warn!("No GL context, frames will not be presented");
    }

    let modes = device.video_mode_list();
    info!("{} video modes, desktop {:?}", modes.len(), modes.desktop());

    while device.run(&mut viewer) && !viewer.quit {
        let time = device.timer().time_ms() as u32;
        viewer.controller.animate_node(&mut viewer.camera, time);
        debug!("camera at {:?}", viewer.camera.position());

        if let (Some(frame), Some(context)) = (&frame, device.context()) {
            frame.present(context, &viewer.camera);
        }

        if device.is_window_active() {
            device.yield_now();
        } else {
            device.sleep(20, true);
        }
    }

    info!("Viewer closed");
    Ok(())
}

//=========================================================================
// Platform Device
//=========================================================================
//
// Owns one window, its GL context, the input translation state and the
// joystick driver. The host drives it with `run()` once per frame:
//
// ```text
// loop:
//   timer tick
//   drain native queue → InputProcessor → EventReceiver
//     Quit    → close flag, stop draining
//     Resized → renderer.on_resize
//   joysticks → one JoystickEvent per opened joystick
//   return !close
// ```
//
// Teardown order on drop:
//   joysticks → renderer → context → window → library release
//
// Failures never escape: a device whose library failed to initialize
// starts closed, a device whose window or context could not be created
// keeps running without them. `check_ready()` reports which case applies.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use super::backend::{Backend, BackendError, DisplayMode};
use super::context;
use super::input_processor::{InputProcessor, Outcome};
use super::joystick::{JoystickDriver, JoystickInfo, MAX_JOYSTICKS};
use super::library::Library;
use super::params::CreationParams;
use crate::core::cursor::DeviceCursor;
use crate::core::input::{Event, EventReceiver};
use crate::core::timer::Timer;
use crate::core::video::{ColorFormat, Renderer, VideoMode, VideoModeList};

//=== DeviceError =========================================================

/// Why a device cannot render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The windowing library failed to initialize.
    Library(BackendError),

    /// No window could be created.
    NoWindow,

    /// The driver needs a GL context and none could be created.
    NoContext,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(e) => write!(f, "Windowing library unavailable: {}", e),
            Self::NoWindow => write!(f, "Device has no window"),
            Self::NoContext => write!(f, "Device has no GL context"),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(e) => Some(e),
            _ => None,
        }
    }
}

//=== Device ==============================================================

pub struct Device<B: Backend> {
    library: Library<B>,
    params: CreationParams,
    init_error: Option<BackendError>,

    window: Option<B::Window>,
    context: Option<B::Context>,
    renderer: Option<Box<dyn Renderer>>,

    input: InputProcessor,
    cursor: Rc<DeviceCursor>,
    timer: Timer,
    video_modes: VideoModeList,
    joysticks: Option<Box<dyn JoystickDriver>>,

    resizable: bool,
    close: bool,
}

impl<B: Backend> Device<B> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(library: Library<B>, params: CreationParams) -> Self {
        let cursor = Rc::new(DeviceCursor::new(params.window_size));
        let input = InputProcessor::new(params.window_size, params.native_scale, Rc::clone(&cursor));

        let mut device = Self {
            library,
            resizable: params.resizable,
            params,
            init_error: None,
            window: None,
            context: None,
            renderer: None,
            input,
            cursor,
            timer: Timer::new(),
            video_modes: VideoModeList::new(),
            joysticks: default_joystick_driver(),
            close: false,
        };

        match device.library.acquire() {
            Ok(()) => device.create_window(),
            Err(e) => {
                device.init_error = Some(e);
                device.close = true;
            }
        }

        device
    }

    fn create_window(&mut self) {
        let spec = self.params.window_spec();
        let surface = {
            let mut backend = self.library.backend();
            if spec.gl.is_some() {
                context::create_gl_window(&mut *backend, &spec, self.params.swap_interval)
            } else {
                context::create_plain_window(&mut *backend, &spec)
            }
        };

        if let Some(surface) = surface {
            self.window = Some(surface.window);
            self.context = surface.context;
        }
    }

    /// `Ok` when the device has everything its driver needs to render.
    pub fn check_ready(&self) -> Result<(), DeviceError> {
        if let Some(e) = &self.init_error {
            return Err(DeviceError::Library(e.clone()));
        }
        if self.window.is_none() {
            return Err(DeviceError::NoWindow);
        }
        if self.params.driver_type.needs_gl_context() && self.context.is_none() {
            return Err(DeviceError::NoContext);
        }
        Ok(())
    }

    //--- Event Loop -------------------------------------------------------

    /// Drains pending native events into `receiver`, then polls joysticks.
    ///
    /// Returns `false` once the device should close; the host must leave
    /// its main loop.
    pub fn run(&mut self, receiver: &mut dyn EventReceiver) -> bool {
        self.timer.tick();

        while !self.close {
            let Some(event) = self.library.backend().poll_event() else {
                break;
            };

            match self.input.translate(event, self.timer.now(), receiver) {
                Outcome::Quit => self.close = true,
                Outcome::Resized { width, height } => {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.on_resize(width, height);
                    }
                }
                Outcome::Dispatched | Outcome::Ignored => {}
            }
        }

        self.poll_joysticks(receiver);

        !self.close
    }

    fn poll_joysticks(&mut self, receiver: &mut dyn EventReceiver) {
        let Some(driver) = &mut self.joysticks else {
            return;
        };

        driver.update();
        for (index, snapshot) in driver.snapshots().iter().enumerate() {
            receiver.on_event(&Event::Joystick(snapshot.to_event(index as u8)));
        }
    }

    /// Requests the device to close; the next `run()` returns `false`.
    pub fn close_device(&mut self) {
        self.close = true;
    }

    pub fn is_closed(&self) -> bool {
        self.close
    }

    //--- Timing -----------------------------------------------------------

    /// Blocks for `ms` milliseconds, optionally pausing the device timer.
    pub fn sleep(&mut self, ms: u32, pause_timer: bool) {
        let pause = pause_timer && !self.timer.is_stopped();
        if pause {
            self.timer.stop();
        }

        self.library.backend().delay(ms);

        if pause {
            self.timer.start();
        }
    }

    /// Gives up the rest of the time slice.
    pub fn yield_now(&mut self) {
        self.library.backend().delay(0);
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }

    /// Maximum time between presses that still counts as a multi-click.
    pub fn set_double_click_time(&mut self, time: Duration) {
        self.input.click_tracker_mut().set_double_click_time(time);
    }

    //--- Window -----------------------------------------------------------

    pub fn set_window_caption(&mut self, text: &str) {
        if let Some(window) = &self.window {
            self.library.backend().set_window_title(window, text);
        }
    }

    /// Fullscreen windows ignore this.
    pub fn set_resizable(&mut self, resizable: bool) {
        if self.params.fullscreen {
            return;
        }
        if let Some(window) = &self.window {
            self.library.backend().set_window_resizable(window, resizable);
        }
        self.resizable = resizable;
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn is_fullscreen(&self) -> bool {
        self.params.fullscreen
    }

    /// Focused and not minimized.
    pub fn is_window_active(&self) -> bool {
        let window = self.input.window();
        window.focused && !window.minimized
    }

    pub fn is_window_focused(&self) -> bool {
        self.input.window().focused
    }

    pub fn is_window_minimized(&self) -> bool {
        self.input.window().minimized
    }

    /// Drawable size in engine pixels.
    pub fn window_size(&self) -> (u32, u32) {
        let window = self.input.window();
        (window.width, window.height)
    }

    pub fn color_format(&self) -> ColorFormat {
        match &self.window {
            Some(window) => {
                let format = self.library.backend().window_pixel_format(window);
                ColorFormat::from_pixel_format(format.bits_per_pixel, format.has_alpha)
            }
            None => ColorFormat::R5G6B5,
        }
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Native GL context, for hosts that render and present themselves.
    pub fn context(&self) -> Option<&B::Context> {
        self.context.as_ref()
    }

    pub fn params(&self) -> &CreationParams {
        &self.params
    }

    /// Shared pointer position, e.g. for camera controllers.
    pub fn cursor_control(&self) -> Rc<DeviceCursor> {
        Rc::clone(&self.cursor)
    }

    //--- Video Modes ------------------------------------------------------

    /// Display modes of the primary display, enumerated on first use.
    ///
    /// An empty list is enumerated again on the next call.
    pub fn video_mode_list(&mut self) -> &VideoModeList {
        if self.video_modes.is_empty() && self.init_error.is_none() {
            let scale = self.params.native_scale;
            let mut backend = self.library.backend();
            if let Some(list) = enumerate_video_modes(&mut *backend, scale) {
                self.video_modes = list;
            }
        }
        &self.video_modes
    }

    //--- Renderer ---------------------------------------------------------

    /// Installs the renderer that receives resize notifications.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    //--- Joysticks --------------------------------------------------------

    /// Replaces the joystick driver, closing the previous one.
    pub fn set_joystick_driver(&mut self, driver: Box<dyn JoystickDriver>) {
        if let Some(mut old) = self.joysticks.replace(driver) {
            old.close_all();
        }
    }

    /// Opens every available joystick. Their state is reported by each
    /// following `run()`.
    pub fn activate_joysticks(&mut self) -> Vec<JoystickInfo> {
        let Some(driver) = &mut self.joysticks else {
            warn!(target: "platform::joystick", "Joystick support is not available");
            return Vec::new();
        };

        let joysticks = driver.open_all(MAX_JOYSTICKS);
        for info in &joysticks {
            info!(
                target: "platform::joystick",
                "Found joystick {}, {} axes, {} buttons '{}'",
                info.joystick, info.axes, info.buttons, info.name
            );
        }
        info!(target: "platform::joystick", "{} joystick(s) present", joysticks.len());
        joysticks
    }
}

//=== Teardown ============================================================

impl<B: Backend> Drop for Device<B> {
    fn drop(&mut self) {
        if let Some(joysticks) = &mut self.joysticks {
            joysticks.close_all();
        }
        self.renderer = None;

        {
            let mut backend = self.library.backend();
            if let Some(context) = self.context.take() {
                backend.destroy_context(context);
            }
            if let Some(window) = self.window.take() {
                backend.destroy_window(window);
            }
        }

        self.library.release();
    }
}

//=== Helpers =============================================================

fn enumerate_video_modes<B: Backend>(backend: &mut B, scale: (f32, f32)) -> Option<VideoModeList> {
    if backend.display_count() == 0 {
        error!(target: "platform", "No display created");
        return None;
    }

    let modes = backend.display_modes(0);
    if modes.is_empty() {
        error!(target: "platform", "No display modes available");
        return None;
    }

    let to_engine = |mode: DisplayMode| VideoMode {
        width: (mode.width as f32 * scale.0) as u32,
        height: (mode.height as f32 * scale.1) as u32,
        depth: mode.bits_per_pixel,
    };

    let mut list = VideoModeList::new();
    if let Some(desktop) = backend.desktop_mode(0) {
        list.set_desktop(to_engine(desktop));
    }
    for mode in modes {
        list.add_mode(to_engine(mode));
    }
    Some(list)
}

#[cfg(feature = "joystick")]
fn default_joystick_driver() -> Option<Box<dyn JoystickDriver>> {
    Some(Box::new(super::joystick::GilrsJoysticks::new()))
}

#[cfg(not(feature = "joystick"))]
fn default_joystick_driver() -> Option<Box<dyn JoystickDriver>> {
    None
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Winit Backend
//=========================================================================
//
// Desktop backend: winit windows and events, glutin GL contexts.
//
// Event pumping:
// ```text
//  Device::run
//    ↓ poll_event (queue empty)
//  pump_app_events(timeout 0)
//    ↓ ApplicationHandler callbacks
//  PumpState → NativeEvent queue
//    ↓
//  poll_event returns queued events one by one
// ```
//
// winit allows one event loop per process, so `quit()` keeps the loop
// alive and only resets the per-session state. A later `init()` reuses it.
//
// User events are posted from anywhere through an `EventLoopProxy`
// obtained with `proxy()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, VecDeque};
use std::ffi::c_void;
use std::num::NonZeroU32;
use std::rc::{Rc, Weak};
use std::time::Duration;

use glutin::{
    config::{ColorBufferType, Config, ConfigTemplateBuilder, GlConfig as _},
    context::{
        ContextApi, ContextAttributesBuilder, GlProfile as GlutinProfile,
        PossiblyCurrentContext, Version,
    },
    display::{Display, DisplayApiPreference, GetGlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::GlWindow;
use log::{debug, info, trace};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    keyboard::{Key, KeyLocation, ModifiersState, NamedKey},
    monitor::MonitorHandle,
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use super::backend::{
    Backend, BackendError, DisplayMode, GlAttributes, GlConfig, GlProfile, GlRequest, PixelFormat,
    WindowSpec,
};
use super::native::{Keysym, NativeEvent, NativeWindowEvent};

//=== Constants ===========================================================

const GL_MAJOR_VERSION: u32 = 0x821B;
const GL_MINOR_VERSION: u32 = 0x821C;

/// Pixel format reported for windows without a GL config.
const PLAIN_PIXEL_FORMAT: PixelFormat = PixelFormat {
    bits_per_pixel: 32,
    has_alpha: false,
};

type GetIntegerv = unsafe extern "system" fn(u32, *mut i32);

//=== Handles =============================================================

/// Payload of an application-posted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPayload {
    pub data1: usize,
    pub data2: usize,
}

/// Window created by [`WinitBackend`].
pub struct WinitWindow {
    window: Rc<Window>,

    /// Framebuffer config the window was created with, for GL windows.
    config: Option<Config>,
    double_buffer: bool,
}

impl WinitWindow {
    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// Current GL context plus the surface it renders to.
pub struct WinitContext {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    display: Display,
    config: Config,
    double_buffer: bool,
    get_integerv: Option<GetIntegerv>,
}

impl WinitContext {
    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), BackendError> {
        self.surface.swap_buffers(&self.context).map_err(context_error)
    }

    /// Resolves a GL function for a renderer.
    pub fn proc_address(&self, name: &std::ffi::CStr) -> *const c_void {
        self.display.get_proc_address(name)
    }
}

//=== PumpState ===========================================================

#[derive(Debug)]
struct TrackedWindow {
    window: Weak<Window>,
    size: PhysicalSize<u32>,
    minimized: bool,
    maximized: bool,
}

/// Receives winit callbacks while events are pumped.
#[derive(Default)]
struct PumpState {
    queue: VecDeque<NativeEvent>,
    cursor: Option<(i32, i32)>,
    modifiers: ModifiersState,
    windows: HashMap<WindowId, TrackedWindow>,

    /// Primary monitor first.
    monitors: Vec<MonitorHandle>,
    monitors_stale: bool,
}

impl PumpState {
    fn push(&mut self, event: NativeEvent) {
        trace!(target: "platform::input", "Queued {:?}", event);
        self.queue.push_back(event);
    }

    fn push_window(&mut self, event: NativeWindowEvent) {
        self.push(NativeEvent::Window(event));
    }

    fn refresh_monitors(&mut self, event_loop: &ActiveEventLoop) {
        let primary = event_loop.primary_monitor();
        let mut monitors: Vec<MonitorHandle> = primary.iter().cloned().collect();
        monitors.extend(event_loop.available_monitors().filter(|m| Some(m) != primary.as_ref()));

        debug!(target: "platform", "{} display(s) found", monitors.len());
        self.monitors = monitors;
        self.monitors_stale = false;
    }

    fn resized(&mut self, id: WindowId, size: PhysicalSize<u32>) {
        self.push_window(NativeWindowEvent::SizeChanged {
            width: size.width,
            height: size.height,
        });

        let Some(tracked) = self.windows.get_mut(&id) else {
            return;
        };
        tracked.size = size;

        let maximized = tracked.window.upgrade().is_some_and(|w| w.is_maximized());
        let newly_maximized = maximized && !tracked.maximized;
        tracked.maximized = maximized;
        if newly_maximized {
            tracked.minimized = false;
            self.push_window(NativeWindowEvent::Maximized);
        }
    }

    fn occluded(&mut self, id: WindowId, occluded: bool) {
        let Some(tracked) = self.windows.get_mut(&id) else {
            return;
        };
        if tracked.minimized == occluded {
            return;
        }
        tracked.minimized = occluded;
        self.push_window(if occluded {
            NativeWindowEvent::Minimized
        } else {
            NativeWindowEvent::Restored
        });
    }

    fn touch_position(&self, id: WindowId, location: PhysicalPosition<f64>) -> (f32, f32) {
        match self.windows.get(&id) {
            Some(tracked) if tracked.size.width > 0 && tracked.size.height > 0 => (
                (location.x / tracked.size.width as f64) as f32,
                (location.y / tracked.size.height as f64) as f32,
            ),
            _ => (0.0, 0.0),
        }
    }
}

impl ApplicationHandler<UserPayload> for PumpState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.refresh_monitors(event_loop);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserPayload) {
        self.push(NativeEvent::User {
            data1: event.data1,
            data2: event.data2,
        });
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.push(NativeEvent::Quit),

            WindowEvent::Resized(size) => self.resized(id, size),
            WindowEvent::Occluded(occluded) => self.occluded(id, occluded),
            WindowEvent::Focused(true) => self.push_window(NativeWindowEvent::FocusGained),
            WindowEvent::Focused(false) => self.push_window(NativeWindowEvent::FocusLost),
            WindowEvent::Moved(position) => self.push_window(NativeWindowEvent::Moved {
                x: position.x,
                y: position.y,
            }),

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as i32, position.y as i32);
                let (xrel, yrel) = self.cursor.map_or((0, 0), |(px, py)| (x - px, y - py));
                self.cursor = Some((x, y));
                self.push(NativeEvent::MouseMotion { x, y, xrel, yrel });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32,
                };
                if y != 0.0 {
                    self.push(NativeEvent::MouseWheel { y });
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.cursor.unwrap_or((0, 0));
                self.push(NativeEvent::MouseButton { button, state, x, y });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                self.push(NativeEvent::ModifiersChanged(self.modifiers));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.push(NativeEvent::Key {
                    sym: keysym_for(&event.logical_key, event.location),
                    physical: event.physical_key,
                    state: event.state,
                    modifiers: self.modifiers,
                });
            }

            WindowEvent::Touch(touch) => {
                let (x, y) = self.touch_position(id, touch.location);
                self.push(NativeEvent::Finger {
                    phase: touch.phase,
                    id: touch.id,
                    x,
                    y,
                });
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.monitors_stale {
            self.refresh_monitors(event_loop);
        }
    }
}

//=== WinitBackend ========================================================

/// winit + glutin implementation of [`Backend`].
pub struct WinitBackend {
    event_loop: Option<EventLoop<UserPayload>>,
    state: PumpState,
    initialized: bool,
}

impl WinitBackend {
    pub fn new() -> Self {
        Self {
            event_loop: None,
            state: PumpState::default(),
            initialized: false,
        }
    }

    /// Handle for posting user events, available after `init()`.
    pub fn proxy(&self) -> Option<EventLoopProxy<UserPayload>> {
        self.event_loop.as_ref().map(EventLoop::create_proxy)
    }

    fn event_loop(&self) -> Result<&EventLoop<UserPayload>, BackendError> {
        match (&self.event_loop, self.initialized) {
            (Some(event_loop), true) => Ok(event_loop),
            _ => Err(BackendError::NotInitialized),
        }
    }

    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut().filter(|_| self.initialized) else {
            return;
        };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state) {
            debug!(target: "platform", "Event loop exited with code {}", code);
            self.state.push(NativeEvent::Quit);
        }
    }

    fn monitors(&mut self) -> &[MonitorHandle] {
        if self.state.monitors.is_empty() {
            self.state.monitors_stale = true;
            self.pump();
        }
        &self.state.monitors
    }
}

impl Default for WinitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for WinitBackend {
    type Window = WinitWindow;
    type Context = WinitContext;

    //--- Library ----------------------------------------------------------

    fn init(&mut self) -> Result<(), BackendError> {
        if self.event_loop.is_none() {
            let event_loop = EventLoop::<UserPayload>::with_user_event()
                .build()
                .map_err(|e| BackendError::Init(e.to_string()))?;
            self.event_loop = Some(event_loop);
        }
        self.initialized = true;
        Ok(())
    }

    fn quit(&mut self) {
        self.initialized = false;
        self.state = PumpState::default();
    }

    fn version(&self) -> String {
        String::from("winit 0.30 / glutin 0.32")
    }

    //--- Windows ----------------------------------------------------------

    fn create_window(&mut self, spec: &WindowSpec) -> Result<WinitWindow, BackendError> {
        let event_loop = self.event_loop()?;
        let attributes = window_attributes(spec);

        let (window, config) = match spec.gl {
            None => {
                #[allow(deprecated)]
                let window = event_loop
                    .create_window(attributes)
                    .map_err(window_error)?;
                (window, None)
            }
            Some(gl) => {
                let (window, config) = create_gl_window(event_loop, attributes, &gl)?;
                (window, Some(config))
            }
        };

        let window = Rc::new(window);
        self.state.windows.insert(
            window.id(),
            TrackedWindow {
                window: Rc::downgrade(&window),
                size: window.inner_size(),
                minimized: false,
                maximized: window.is_maximized(),
            },
        );
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        Ok(WinitWindow {
            window,
            config,
            double_buffer: spec.gl.is_some_and(|gl| gl.double_buffer),
        })
    }

    fn destroy_window(&mut self, window: WinitWindow) {
        self.state.windows.remove(&window.window.id());
        debug!(target: "platform", "Window {:?} destroyed", window.window.id());
    }

    fn set_window_title(&mut self, window: &WinitWindow, title: &str) {
        window.window.set_title(title);
    }

    fn set_window_resizable(&mut self, window: &WinitWindow, resizable: bool) {
        window.window.set_resizable(resizable);
    }

    fn window_pixel_format(&self, window: &WinitWindow) -> PixelFormat {
        let Some(config) = &window.config else {
            return PLAIN_PIXEL_FORMAT;
        };
        let (r, g, b) = rgb_sizes(config);
        PixelFormat {
            bits_per_pixel: r + g + b + config.alpha_size(),
            has_alpha: config.alpha_size() > 0,
        }
    }

    //--- GL Contexts ------------------------------------------------------

    fn create_context(&mut self, window: &WinitWindow, request: GlRequest) -> Result<WinitContext, BackendError> {
        let config = window
            .config
            .clone()
            .ok_or_else(|| BackendError::Context("window has no GL config".into()))?;
        let handle = window.window.window_handle().map_err(context_error)?.as_raw();

        let profile = match request.profile {
            GlProfile::Core => GlutinProfile::Core,
            GlProfile::Compatibility => GlutinProfile::Compatibility,
        };
        let attributes = ContextAttributesBuilder::new()
            .with_profile(profile)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(request.major, request.minor))))
            .build(Some(handle));

        let display = config.display();
        // SAFETY: the raw handle belongs to `window`, which outlives the
        // context (the device destroys the context first).
        let not_current = unsafe { display.create_context(&config, &attributes) }.map_err(context_error)?;

        let surface_attributes = window
            .window
            .build_surface_attributes(Default::default())
            .map_err(context_error)?;
        // SAFETY: as above, the surface is destroyed with the context.
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(context_error)?;

        let context = not_current.make_current(&surface).map_err(context_error)?;

        Ok(WinitContext {
            context,
            surface,
            display,
            config,
            double_buffer: window.double_buffer,
            get_integerv: None,
        })
    }

    fn destroy_context(&mut self, context: WinitContext) {
        drop(context);
        debug!(target: "platform::context", "Context destroyed");
    }

    fn load_gl(&mut self, context: &mut WinitContext) -> Result<(), BackendError> {
        let address = context.display.get_proc_address(c"glGetIntegerv");
        if address.is_null() {
            return Err(BackendError::LoadGl("glGetIntegerv not found".into()));
        }
        // SAFETY: non-null address of glGetIntegerv for the current context.
        context.get_integerv = Some(unsafe { std::mem::transmute::<*const c_void, GetIntegerv>(address) });
        Ok(())
    }

    fn gl_version(&self, context: &WinitContext) -> (u32, u32) {
        let Some(get_integerv) = context.get_integerv else {
            return (0, 0);
        };

        // Pre-3.0 contexts reject these enums and leave the defaults.
        let (mut major, mut minor) = (2i32, 0i32);
        // SAFETY: the context is current and the pointers are valid i32s.
        unsafe {
            get_integerv(GL_MAJOR_VERSION, &mut major);
            get_integerv(GL_MINOR_VERSION, &mut minor);
        }
        (major.max(0) as u32, minor.max(0) as u32)
    }

    fn make_current(&mut self, _window: &WinitWindow, context: &WinitContext) -> Result<(), BackendError> {
        context.context.make_current(&context.surface).map_err(context_error)
    }

    fn set_swap_interval(&mut self, context: &WinitContext, interval: i32) -> Result<(), BackendError> {
        let interval = match interval {
            i if i < 0 => return Err(BackendError::Unsupported("adaptive vsync")),
            0 => SwapInterval::DontWait,
            n => SwapInterval::Wait(NonZeroU32::new(n as u32).unwrap_or(NonZeroU32::MIN)),
        };
        context
            .surface
            .set_swap_interval(&context.context, interval)
            .map_err(context_error)
    }

    fn gl_attributes(&self, context: &WinitContext) -> GlAttributes {
        let config = &context.config;
        let (red, green, blue) = rgb_sizes(config);
        let samples = config.num_samples();
        GlAttributes {
            red,
            green,
            blue,
            alpha: config.alpha_size(),
            depth: config.depth_size(),
            stencil: config.stencil_size(),
            double_buffer: context.double_buffer,
            multisample_buffers: u8::from(samples > 0),
            samples,
        }
    }

    //--- Events -----------------------------------------------------------

    fn poll_event(&mut self) -> Option<NativeEvent> {
        if self.state.queue.is_empty() {
            self.pump();
        }
        self.state.queue.pop_front()
    }

    //--- Displays ---------------------------------------------------------

    fn display_count(&mut self) -> usize {
        self.monitors().len()
    }

    fn display_modes(&mut self, display: usize) -> Vec<DisplayMode> {
        let Some(monitor) = self.monitors().get(display) else {
            return Vec::new();
        };
        monitor
            .video_modes()
            .map(|mode| DisplayMode {
                width: mode.size().width,
                height: mode.size().height,
                bits_per_pixel: mode.bit_depth().min(u8::MAX as u16) as u8,
            })
            .collect()
    }

    fn desktop_mode(&mut self, display: usize) -> Option<DisplayMode> {
        let monitor = self.monitors().get(display)?;
        let size = monitor.size();
        let bits_per_pixel = monitor
            .video_modes()
            .filter(|mode| mode.size() == size)
            .map(|mode| mode.bit_depth())
            .max()
            .unwrap_or(32);
        Some(DisplayMode {
            width: size.width,
            height: size.height,
            bits_per_pixel: bits_per_pixel.min(u8::MAX as u16) as u8,
        })
    }

    //--- Timing -----------------------------------------------------------

    fn delay(&mut self, ms: u32) {
        if ms == 0 {
            std::thread::yield_now();
        } else {
            std::thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }
}

//=== Helpers =============================================================

fn context_error(e: impl std::fmt::Display) -> BackendError {
    BackendError::Context(e.to_string())
}

fn window_error(e: impl std::fmt::Display) -> BackendError {
    BackendError::Window(e.to_string())
}

fn window_attributes(spec: &WindowSpec) -> WindowAttributes {
    let mut attributes = WindowAttributes::default()
        .with_title(spec.title.clone())
        .with_inner_size(PhysicalSize::new(spec.size.0, spec.size.1))
        .with_resizable(spec.resizable);

    if let Some((x, y)) = spec.position {
        attributes = attributes.with_position(PhysicalPosition::new(x, y));
    }
    if spec.fullscreen {
        attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    attributes
}

fn config_template(gl: &GlConfig) -> ConfigTemplateBuilder {
    let template = ConfigTemplateBuilder::new()
        .with_buffer_type(ColorBufferType::Rgb {
            r_size: gl.red,
            g_size: gl.green,
            b_size: gl.blue,
        })
        .with_depth_size(gl.depth)
        .with_stencil_size(gl.stencil)
        .with_single_buffering(!gl.double_buffer);

    if gl.samples > 0 {
        template.with_multisampling(gl.samples)
    } else {
        template
    }
}

/// Opens a window together with a GL config matching `gl`.
///
/// WGL needs the native window before the display exists; every other
/// API picks the config first so the window gets a compatible visual.
fn create_gl_window(
    event_loop: &EventLoop<UserPayload>,
    attributes: WindowAttributes,
    gl: &GlConfig,
) -> Result<(Window, Config), BackendError> {
    #[cfg(windows)]
    #[allow(deprecated)]
    let window = event_loop.create_window(attributes).map_err(window_error)?;
    #[cfg(windows)]
    let native = Some(window.window_handle().map_err(window_error)?.as_raw());
    #[cfg(not(windows))]
    let native: Option<RawWindowHandle> = None;

    let display = open_display(event_loop, native)?;
    let mut template = config_template(gl);
    if let Some(native) = native {
        template = template.compatible_with_native_window(native);
    }

    // SAFETY: the display outlives the iterator, configs keep their own handle.
    let configs = unsafe { display.find_configs(template.build()) }.map_err(window_error)?;
    let config = pick_best(configs, |config| config.num_samples(), gl.samples)
        .ok_or_else(|| BackendError::Window("no GL config matches the requested format".into()))?;

    #[cfg(not(windows))]
    let window = glutin_winit::finalize_window(event_loop, attributes, &config).map_err(window_error)?;

    Ok((window, config))
}

/// GL display for the platform's native API, with EGL as the fallback.
fn open_display(
    event_loop: &EventLoop<UserPayload>,
    native: Option<RawWindowHandle>,
) -> Result<Display, BackendError> {
    let handle = event_loop.display_handle().map_err(window_error)?.as_raw();

    #[cfg(windows)]
    let preference = DisplayApiPreference::WglThenEgl(native);
    #[cfg(target_os = "macos")]
    let preference = {
        let _ = native;
        DisplayApiPreference::Cgl
    };
    #[cfg(target_os = "android")]
    let preference = {
        let _ = native;
        DisplayApiPreference::Egl
    };
    #[cfg(all(unix, not(target_os = "macos"), not(target_os = "android")))]
    let preference = {
        let _ = native;
        DisplayApiPreference::GlxThenEgl(Box::new(winit::platform::x11::register_xlib_error_hook))
    };

    // SAFETY: the handle comes from the live event loop, which outlives every display.
    unsafe { Display::new(handle, preference) }.map_err(window_error)
}

/// Prefers the exact sample count, otherwise the most samples available.
/// `None` when there is nothing to pick from.
fn pick_best<T>(items: impl Iterator<Item = T>, samples_of: impl Fn(&T) -> u8, wanted: u8) -> Option<T> {
    items.reduce(|best, item| {
        let (samples, best_samples) = (samples_of(&item), samples_of(&best));
        let exact = samples == wanted;
        let best_exact = best_samples == wanted;
        if (exact && !best_exact) || (exact == best_exact && samples > best_samples) {
            item
        } else {
            best
        }
    })
}

fn rgb_sizes(config: &Config) -> (u8, u8, u8) {
    match config.color_buffer_type() {
        Some(ColorBufferType::Rgb { r_size, g_size, b_size }) => (r_size, g_size, b_size),
        _ => (0, 0, 0),
    }
}

//=== Key Symbols =========================================================

/// Key symbol for a winit logical key.
pub(crate) fn keysym_for(key: &Key, location: KeyLocation) -> Keysym {
    match key {
        Key::Character(text) => {
            let Some(c) = text.chars().next() else {
                return Keysym::UNKNOWN;
            };
            if location == KeyLocation::Numpad {
                numpad_keysym(c).unwrap_or_else(|| Keysym::from_char(c))
            } else {
                Keysym::from_char(c)
            }
        }
        Key::Named(named) => named_keysym(*named, location),
        _ => Keysym::UNKNOWN,
    }
}

fn numpad_keysym(c: char) -> Option<Keysym> {
    Some(match c {
        '0' => Keysym::KP_0,
        '1' => Keysym::KP_1,
        '2' => Keysym::KP_2,
        '3' => Keysym::KP_3,
        '4' => Keysym::KP_4,
        '5' => Keysym::KP_5,
        '6' => Keysym::KP_6,
        '7' => Keysym::KP_7,
        '8' => Keysym::KP_8,
        '9' => Keysym::KP_9,
        '.' | ',' => Keysym::KP_PERIOD,
        '/' => Keysym::KP_DIVIDE,
        '*' => Keysym::KP_MULTIPLY,
        '-' => Keysym::KP_MINUS,
        '+' => Keysym::KP_PLUS,
        _ => return None,
    })
}

fn named_keysym(key: NamedKey, location: KeyLocation) -> Keysym {
    let right = location == KeyLocation::Right;
    match key {
        NamedKey::Backspace => Keysym::BACKSPACE,
        NamedKey::Tab => Keysym::TAB,
        NamedKey::Enter if location == KeyLocation::Numpad => Keysym::KP_ENTER,
        NamedKey::Enter => Keysym::RETURN,
        NamedKey::Escape => Keysym::ESCAPE,
        NamedKey::Space => Keysym::SPACE,
        NamedKey::Delete => Keysym::DELETE,
        NamedKey::Clear => Keysym::CLEAR,
        NamedKey::Pause => Keysym::PAUSE,
        NamedKey::CapsLock => Keysym::CAPSLOCK,
        NamedKey::PageUp => Keysym::PAGEUP,
        NamedKey::PageDown => Keysym::PAGEDOWN,
        NamedKey::End => Keysym::END,
        NamedKey::Home => Keysym::HOME,
        NamedKey::ArrowLeft => Keysym::LEFT,
        NamedKey::ArrowUp => Keysym::UP,
        NamedKey::ArrowRight => Keysym::RIGHT,
        NamedKey::ArrowDown => Keysym::DOWN,
        NamedKey::PrintScreen => Keysym::PRINTSCREEN,
        NamedKey::Insert => Keysym::INSERT,
        NamedKey::Help => Keysym::HELP,
        NamedKey::Power => Keysym::POWER,
        NamedKey::NumLock => Keysym::NUMLOCKCLEAR,
        NamedKey::ScrollLock => Keysym::SCROLLLOCK,
        NamedKey::Shift if right => Keysym::RSHIFT,
        NamedKey::Shift => Keysym::LSHIFT,
        NamedKey::Control if right => Keysym::RCTRL,
        NamedKey::Control => Keysym::LCTRL,
        NamedKey::Alt | NamedKey::AltGraph if right => Keysym::RALT,
        NamedKey::Alt => Keysym::LALT,
        NamedKey::Super if right => Keysym::RGUI,
        NamedKey::Super => Keysym::LGUI,
        NamedKey::F1 => Keysym::F1,
        NamedKey::F2 => Keysym::F2,
        NamedKey::F3 => Keysym::F3,
        NamedKey::F4 => Keysym::F4,
        NamedKey::F5 => Keysym::F5,
        NamedKey::F6 => Keysym::F6,
        NamedKey::F7 => Keysym::F7,
        NamedKey::F8 => Keysym::F8,
        NamedKey::F9 => Keysym::F9,
        NamedKey::F10 => Keysym::F10,
        NamedKey::F11 => Keysym::F11,
        NamedKey::F12 => Keysym::F12,
        NamedKey::F13 => Keysym::F13,
        NamedKey::F14 => Keysym::F14,
        NamedKey::F15 => Keysym::F15,
        _ => Keysym::UNKNOWN,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::platform::keymap::KeyMap;
    use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

    fn character(text: &str) -> Key {
        Key::Character(text.into())
    }

    #[test]
    fn picker_has_nothing_to_pick_from_empty_configs() {
        assert_eq!(pick_best(std::iter::empty::<u8>(), |s| *s, 4), None);
    }

    #[test]
    fn picker_prefers_exact_sample_count() {
        assert_eq!(pick_best([0u8, 8, 4, 2].into_iter(), |s| *s, 4), Some(4));
        assert_eq!(pick_best([0u8, 2, 8].into_iter(), |s| *s, 4), Some(8));
        assert_eq!(pick_best([0u8].into_iter(), |s| *s, 4), Some(0));
    }

    #[test]
    fn characters_fold_to_lowercase() {
        assert_eq!(keysym_for(&character("Q"), KeyLocation::Standard), Keysym::from_char('q'));
        assert_eq!(keysym_for(&character("+"), KeyLocation::Standard), Keysym::PLUS);
    }

    #[test]
    fn numpad_characters_use_keypad_symbols() {
        assert_eq!(keysym_for(&character("7"), KeyLocation::Numpad), Keysym::KP_7);
        assert_eq!(keysym_for(&character("*"), KeyLocation::Numpad), Keysym::KP_MULTIPLY);
        assert_eq!(keysym_for(&character("7"), KeyLocation::Standard), Keysym::from_char('7'));
    }

    #[test]
    fn named_keys_respect_location() {
        let shift = Key::Named(NamedKey::Shift);
        assert_eq!(keysym_for(&shift, KeyLocation::Left), Keysym::LSHIFT);
        assert_eq!(keysym_for(&shift, KeyLocation::Right), Keysym::RSHIFT);

        let enter = Key::Named(NamedKey::Enter);
        assert_eq!(keysym_for(&enter, KeyLocation::Numpad), Keysym::KP_ENTER);
        assert_eq!(keysym_for(&enter, KeyLocation::Standard), Keysym::RETURN);
    }

    #[test]
    fn unknown_keys_fall_back_to_scan_code() {
        let sym = keysym_for(&Key::Named(NamedKey::F24), KeyLocation::Standard);
        assert_eq!(sym, Keysym::UNKNOWN);

        let map = KeyMap::new();
        let key = map.lookup(keysym_for(&character("щ"), KeyLocation::Standard), PhysicalKey::Code(WinitKeyCode::KeyO));
        assert_eq!(key, KeyCode::KeyO);
    }

    #[test]
    fn symbols_resolve_through_key_map() {
        let map = KeyMap::new();
        let escape = keysym_for(&Key::Named(NamedKey::Escape), KeyLocation::Standard);
        assert_eq!(map.lookup_symbol(escape), Some(KeyCode::Escape));

        let up = keysym_for(&Key::Named(NamedKey::ArrowUp), KeyLocation::Standard);
        assert_eq!(map.lookup_symbol(up), Some(KeyCode::ArrowUp));
    }

    #[test]
    fn window_attributes_follow_window_spec() {
        let spec = WindowSpec {
            title: "viewer".into(),
            position: Some((10, 20)),
            size: (640, 480),
            fullscreen: true,
            resizable: true,
            gl: None,
        };
        let attributes = window_attributes(&spec);
        assert_eq!(attributes.title, "viewer");
        assert!(attributes.resizable);
        assert!(attributes.position.is_some());
        assert!(attributes.inner_size.is_some());
    }

    #[test]
    fn uninitialized_backend_refuses_windows() {
        let mut backend = WinitBackend::new();
        let spec = WindowSpec {
            title: String::new(),
            position: None,
            size: (1, 1),
            fullscreen: false,
            resizable: false,
            gl: None,
        };
        assert!(matches!(backend.create_window(&spec), Err(BackendError::NotInitialized)));
        assert!(backend.poll_event().is_none());
        assert!(backend.proxy().is_none());
    }
}

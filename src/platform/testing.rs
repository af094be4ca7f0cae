//=========================================================================
// Scripted Backend (tests only)
//=========================================================================
//
// In-memory stand-ins for a windowing library and a joystick driver.
//
// Every call is appended to a shared log as a short string, so tests can
// assert on call order ("create_window 1", "destroy_context 1", "quit").
// Failure switches let a test make individual operations fail.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use super::backend::{
    Backend, BackendError, DisplayMode, GlAttributes, GlRequest, PixelFormat, WindowSpec,
};
use super::joystick::{JoystickDriver, JoystickInfo, JoystickSnapshot, PovHat};
use super::native::NativeEvent;

pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

//=== ScriptedBackend =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScriptedWindow(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScriptedContext {
    pub id: u32,
    pub request: GlRequest,
}

pub(crate) struct ScriptedBackend {
    log: CallLog,
    events: VecDeque<NativeEvent>,
    next_window: u32,
    next_context: u32,
    windows: HashSet<u32>,
    contexts: HashSet<u32>,

    pub fail_init: bool,
    pub fail_window: bool,

    /// Context versions whose creation fails.
    pub fail_context: Vec<(u8, u8)>,
    pub fail_load_gl: bool,

    /// Version every created context reports.
    pub gl_version: (u32, u32),
    pub adaptive_vsync: bool,

    pub displays: usize,
    pub modes: Vec<DisplayMode>,
    pub desktop: Option<DisplayMode>,
    pub pixel_format: PixelFormat,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        let desktop = DisplayMode {
            width: 1920,
            height: 1080,
            bits_per_pixel: 32,
        };
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            events: VecDeque::new(),
            next_window: 0,
            next_context: 0,
            windows: HashSet::new(),
            contexts: HashSet::new(),
            fail_init: false,
            fail_window: false,
            fail_context: Vec::new(),
            fail_load_gl: false,
            gl_version: (4, 6),
            adaptive_vsync: true,
            displays: 1,
            modes: vec![
                desktop,
                DisplayMode {
                    width: 1280,
                    height: 720,
                    bits_per_pixel: 32,
                },
            ],
            desktop: Some(desktop),
            pixel_format: PixelFormat {
                bits_per_pixel: 32,
                has_alpha: false,
            },
        }
    }

    /// Shared call log; stays readable after the backend moves into a
    /// library.
    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    pub fn push_event(&mut self, event: NativeEvent) {
        self.events.push_back(event);
    }

    pub fn push_user(&mut self, data1: usize, data2: usize) {
        self.push_event(NativeEvent::User { data1, data2 });
    }

    pub fn queued(&self) -> usize {
        self.events.len()
    }

    pub fn live_windows(&self) -> usize {
        self.windows.len()
    }

    pub fn live_contexts(&self) -> usize {
        self.contexts.len()
    }

    fn record(&self, call: String) {
        self.log.borrow_mut().push(call);
    }
}

impl Backend for ScriptedBackend {
    type Window = ScriptedWindow;
    type Context = ScriptedContext;

    fn init(&mut self) -> Result<(), BackendError> {
        self.record("init".into());
        if self.fail_init {
            return Err(BackendError::Init("scripted failure".into()));
        }
        Ok(())
    }

    fn quit(&mut self) {
        self.record("quit".into());
    }

    fn version(&self) -> String {
        String::from("Scripted 1.0")
    }

    fn create_window(&mut self, spec: &WindowSpec) -> Result<ScriptedWindow, BackendError> {
        if self.fail_window {
            self.record("create_window failed".into());
            return Err(BackendError::Window(format!("cannot open '{}'", spec.title)));
        }
        self.next_window += 1;
        self.windows.insert(self.next_window);
        self.record(format!("create_window {}", self.next_window));
        Ok(ScriptedWindow(self.next_window))
    }

    fn destroy_window(&mut self, window: ScriptedWindow) {
        self.windows.remove(&window.0);
        self.record(format!("destroy_window {}", window.0));
    }

    fn set_window_title(&mut self, window: &ScriptedWindow, title: &str) {
        self.record(format!("set_title {} {}", window.0, title));
    }

    fn set_window_resizable(&mut self, window: &ScriptedWindow, resizable: bool) {
        self.record(format!("set_resizable {} {}", window.0, resizable));
    }

    fn window_pixel_format(&self, _window: &ScriptedWindow) -> PixelFormat {
        self.pixel_format
    }

    fn create_context(
        &mut self,
        _window: &ScriptedWindow,
        request: GlRequest,
    ) -> Result<ScriptedContext, BackendError> {
        self.record(format!("create_context {}.{}", request.major, request.minor));
        if self.fail_context.contains(&(request.major, request.minor)) {
            return Err(BackendError::Context(format!("{} rejected", request)));
        }
        self.next_context += 1;
        self.contexts.insert(self.next_context);
        Ok(ScriptedContext {
            id: self.next_context,
            request,
        })
    }

    fn destroy_context(&mut self, context: ScriptedContext) {
        self.contexts.remove(&context.id);
        self.record(format!("destroy_context {}", context.id));
    }

    fn load_gl(&mut self, context: &mut ScriptedContext) -> Result<(), BackendError> {
        self.record(format!("load_gl {}", context.id));
        if self.fail_load_gl {
            return Err(BackendError::LoadGl("glGetIntegerv missing".into()));
        }
        Ok(())
    }

    fn gl_version(&self, _context: &ScriptedContext) -> (u32, u32) {
        self.gl_version
    }

    fn make_current(&mut self, _window: &ScriptedWindow, context: &ScriptedContext) -> Result<(), BackendError> {
        self.record(format!("make_current {}", context.id));
        Ok(())
    }

    fn set_swap_interval(&mut self, _context: &ScriptedContext, interval: i32) -> Result<(), BackendError> {
        self.record(format!("swap_interval {}", interval));
        if interval < 0 && !self.adaptive_vsync {
            return Err(BackendError::Unsupported("adaptive vsync"));
        }
        Ok(())
    }

    fn gl_attributes(&self, _context: &ScriptedContext) -> GlAttributes {
        self.record("gl_attributes".into());
        GlAttributes {
            red: 8,
            green: 8,
            blue: 8,
            depth: 24,
            double_buffer: true,
            ..GlAttributes::default()
        }
    }

    fn poll_event(&mut self) -> Option<NativeEvent> {
        self.events.pop_front()
    }

    fn display_count(&mut self) -> usize {
        self.record("display_count".into());
        self.displays
    }

    fn display_modes(&mut self, display: usize) -> Vec<DisplayMode> {
        self.record(format!("display_modes {}", display));
        self.modes.clone()
    }

    fn desktop_mode(&mut self, _display: usize) -> Option<DisplayMode> {
        self.desktop
    }

    fn delay(&mut self, ms: u32) {
        self.record(format!("delay {}", ms));
    }
}

//=== ScriptedJoysticks ===================================================

/// Joystick driver with fixed pads. Snapshots are only reported after
/// `open_all`.
pub(crate) struct ScriptedJoysticks {
    log: CallLog,
    pads: Vec<(String, JoystickSnapshot)>,
    opened: usize,
}

impl ScriptedJoysticks {
    pub fn new(log: CallLog, pads: Vec<(String, JoystickSnapshot)>) -> Self {
        Self { log, pads, opened: 0 }
    }
}

impl JoystickDriver for ScriptedJoysticks {
    fn open_all(&mut self, limit: usize) -> Vec<JoystickInfo> {
        self.opened = self.pads.len().min(limit);
        self.pads[..self.opened]
            .iter()
            .enumerate()
            .map(|(index, (name, pad))| JoystickInfo {
                joystick: index as u8,
                name: name.clone(),
                axes: pad.axes.len() as u32,
                buttons: pad.buttons.len() as u32,
                pov_hat: if pad.hat.is_some() { PovHat::Present } else { PovHat::Absent },
            })
            .collect()
    }

    fn update(&mut self) {
        self.log.borrow_mut().push("joystick_update".into());
    }

    fn snapshots(&self) -> Vec<JoystickSnapshot> {
        self.pads[..self.opened].iter().map(|(_, pad)| pad.clone()).collect()
    }

    fn close_all(&mut self) {
        self.log.borrow_mut().push("joystick_close".into());
        self.opened = 0;
    }
}

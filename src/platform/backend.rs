//=========================================================================
// Windowing Backend
//=========================================================================
//
// The primitives a device needs from a windowing library. The device
// owns the policy (context fallback order, teardown order, translation);
// a backend only performs single native operations.
//
// Backends:
//   WinitBackend     → winit windows, glutin GL contexts (desktop)
//   ScriptedBackend  → in-memory script (unit tests)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::native::NativeEvent;

//=== BackendError ========================================================

/// Failure of a single backend operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Library initialization failed.
    Init(String),

    /// An operation ran before `init()` succeeded.
    NotInitialized,

    Window(String),
    Context(String),

    /// GL entry points could not be resolved.
    LoadGl(String),

    /// The created context reports a version below the required minimum.
    Version {
        required: (u32, u32),
        actual: (u32, u32),
    },

    /// The backend cannot perform the request (e.g. adaptive vsync).
    Unsupported(&'static str),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "Library initialization failed: {}", e),
            Self::NotInitialized => write!(f, "Library is not initialized"),
            Self::Window(e) => write!(f, "Window creation failed: {}", e),
            Self::Context(e) => write!(f, "GL context error: {}", e),
            Self::LoadGl(e) => write!(f, "Loading GL functions failed: {}", e),
            Self::Version { required, actual } => write!(
                f,
                "GL {}.{} is below the required {}.{}",
                actual.0, actual.1, required.0, required.1
            ),
            Self::Unsupported(what) => write!(f, "Unsupported: {}", what),
        }
    }
}

impl std::error::Error for BackendError {}

//=== Window / Context Requests ===========================================

/// Framebuffer request for a GL-capable window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlConfig {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub depth: u8,
    pub stencil: u8,
    pub double_buffer: bool,

    /// Multisample count, `0` for none.
    pub samples: u8,
}

/// Everything needed to open one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,

    /// Position in native units, `None` lets the OS decide.
    pub position: Option<(i32, i32)>,

    /// Size in native units.
    pub size: (u32, u32),
    pub fullscreen: bool,
    pub resizable: bool,

    /// `Some` when the window must be able to host a GL context.
    pub gl: Option<GlConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlProfile {
    Core,
    Compatibility,
}

/// Context version and profile to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlRequest {
    pub major: u8,
    pub minor: u8,
    pub profile: GlProfile,
}

impl fmt::Display for GlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {:?}", self.major, self.minor, self.profile)
    }
}

/// Framebuffer attributes of a created context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlAttributes {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub depth: u8,
    pub stencil: u8,
    pub double_buffer: bool,
    pub multisample_buffers: u8,
    pub samples: u8,
}

impl fmt::Display for GlAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r:{} g:{} b:{} a:{} depth:{} stencil:{} doublebuf:{} aa:{} aa-samples:{}",
            self.red,
            self.green,
            self.blue,
            self.alpha,
            self.depth,
            self.stencil,
            u8::from(self.double_buffer),
            self.multisample_buffers,
            self.samples
        )
    }
}

//=== Display Queries =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub bits_per_pixel: u8,
    pub has_alpha: bool,
}

/// One display mode in native units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u8,
}

//=== Backend =============================================================

/// Native windowing primitives.
///
/// Destroy operations take ownership of the handle, so a handle can never
/// be destroyed twice.
pub trait Backend {
    type Window;
    type Context;

    //--- Library ----------------------------------------------------------

    fn init(&mut self) -> Result<(), BackendError>;
    fn quit(&mut self);

    /// Human-readable library name and version.
    fn version(&self) -> String;

    //--- Windows ----------------------------------------------------------

    fn create_window(&mut self, spec: &WindowSpec) -> Result<Self::Window, BackendError>;
    fn destroy_window(&mut self, window: Self::Window);
    fn set_window_title(&mut self, window: &Self::Window, title: &str);
    fn set_window_resizable(&mut self, window: &Self::Window, resizable: bool);
    fn window_pixel_format(&self, window: &Self::Window) -> PixelFormat;

    //--- GL Contexts ------------------------------------------------------

    /// Creates a context for `window` and makes it current.
    fn create_context(
        &mut self,
        window: &Self::Window,
        request: GlRequest,
    ) -> Result<Self::Context, BackendError>;

    fn destroy_context(&mut self, context: Self::Context);

    /// Resolves the GL entry points the device needs.
    fn load_gl(&mut self, context: &mut Self::Context) -> Result<(), BackendError>;

    /// Version reported by the current context.
    fn gl_version(&self, context: &Self::Context) -> (u32, u32);

    fn make_current(
        &mut self,
        window: &Self::Window,
        context: &Self::Context,
    ) -> Result<(), BackendError>;

    /// Sets the swap interval; `-1` requests adaptive vsync.
    fn set_swap_interval(&mut self, context: &Self::Context, interval: i32) -> Result<(), BackendError>;

    fn gl_attributes(&self, context: &Self::Context) -> GlAttributes;

    //--- Events -----------------------------------------------------------

    /// Next queued native event, pumping the OS queue when empty.
    fn poll_event(&mut self) -> Option<NativeEvent>;

    //--- Displays ---------------------------------------------------------

    fn display_count(&mut self) -> usize;
    fn display_modes(&mut self, display: usize) -> Vec<DisplayMode>;
    fn desktop_mode(&mut self, display: usize) -> Option<DisplayMode>;

    //--- Timing -----------------------------------------------------------

    /// Blocks the calling thread for `ms` milliseconds.
    fn delay(&mut self, ms: u32);
}

//=========================================================================
// Unit Tests
//=========================================================================

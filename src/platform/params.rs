//=========================================================================
// Device Creation Parameters
//=========================================================================
//
// Plain configuration for one device, plus a fluent builder.
//
// Parameters deserialize with defaults for every missing field, so a host
// can keep them in a JSON config file:
//
//   { "window_size": [1280, 720], "swap_interval": 1 }
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::backend::{Backend, GlConfig, WindowSpec};
use super::device::Device;
use super::library::Library;
use crate::core::video::DriverType;

//=== CreationParams ======================================================

/// Settings a device is created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreationParams {
    pub window_title: String,

    /// Client size in engine pixels.
    pub window_size: (u32, u32),

    /// Top-left position in engine pixels, `None` lets the OS decide.
    pub window_position: Option<(i32, i32)>,

    /// Color depth; selects the framebuffer channel sizes.
    pub bits: u8,
    pub double_buffer: bool,
    pub stencil_buffer: bool,

    /// Multisample count, `0` for none.
    pub anti_alias: u8,
    pub fullscreen: bool,
    pub resizable: bool,

    /// Requested swap interval. Values above 1 are treated as 1.
    pub swap_interval: u32,
    pub driver_type: DriverType,

    /// Engine pixels per native unit, per axis.
    pub native_scale: (f32, f32),
}

impl Default for CreationParams {
    fn default() -> Self {
        Self {
            window_title: String::from("Aetheric"),
            window_size: (800, 600),
            window_position: None,
            bits: 32,
            double_buffer: true,
            stencil_buffer: false,
            anti_alias: 0,
            fullscreen: false,
            resizable: false,
            swap_interval: 0,
            driver_type: DriverType::OpenGl,
            native_scale: (1.0, 1.0),
        }
    }
}

impl CreationParams {
    /// Parses parameters from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Framebuffer channel and depth sizes for `bits`.
    pub(crate) fn gl_config(&self) -> GlConfig {
        let (red, green, blue, depth) = match self.bits {
            32 => (8, 8, 8, 24),
            24 => (5, 5, 5, 16),
            _ => (3, 3, 2, 16),
        };

        GlConfig {
            red,
            green,
            blue,
            depth,
            stencil: if self.stencil_buffer { 8 } else { 0 },
            double_buffer: self.double_buffer,
            samples: self.anti_alias,
        }
    }

    /// Window request in native units.
    pub(crate) fn window_spec(&self) -> WindowSpec {
        let (sx, sy) = self.native_scale;
        WindowSpec {
            title: self.window_title.clone(),
            position: self
                .window_position
                .map(|(x, y)| ((x as f32 / sx) as i32, (y as f32 / sy) as i32)),
            size: (
                (self.window_size.0 as f32 / sx) as u32,
                (self.window_size.1 as f32 / sy) as u32,
            ),
            fullscreen: self.fullscreen,
            resizable: self.resizable,
            gl: self.driver_type.needs_gl_context().then(|| self.gl_config()),
        }
    }
}

//=== DeviceBuilder =======================================================

/// Builder for configuring and constructing a [`Device`].
///
/// # Examples
///
/// ```no_run
/// # use aetheric_platform::platform::{DeviceBuilder, Library, WinitBackend};
/// let library = Library::new(WinitBackend::new());
/// let device = DeviceBuilder::new()
///     .with_window_size(1280, 720)
///     .with_resizable(true)
///     .with_swap_interval(1)
///     .build(&library);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviceBuilder {
    params: CreationParams,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing parameters (e.g. loaded from a config file).
    pub fn from_params(params: CreationParams) -> Self {
        Self { params }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.params.window_title = title.into();
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.params.window_size = (width, height);
        self
    }

    pub fn with_window_position(mut self, x: i32, y: i32) -> Self {
        self.params.window_position = Some((x, y));
        self
    }

    pub fn with_bits(mut self, bits: u8) -> Self {
        self.params.bits = bits;
        self
    }

    pub fn with_double_buffer(mut self, enabled: bool) -> Self {
        self.params.double_buffer = enabled;
        self
    }

    pub fn with_stencil_buffer(mut self, enabled: bool) -> Self {
        self.params.stencil_buffer = enabled;
        self
    }

    pub fn with_anti_alias(mut self, samples: u8) -> Self {
        self.params.anti_alias = samples;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.params.fullscreen = fullscreen;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.params.resizable = resizable;
        self
    }

    pub fn with_swap_interval(mut self, interval: u32) -> Self {
        self.params.swap_interval = interval;
        self
    }

    pub fn with_driver(mut self, driver: DriverType) -> Self {
        self.params.driver_type = driver;
        self
    }

    /// # Panics
    ///
    /// Panics unless both factors are positive.
    pub fn with_native_scale(mut self, x: f32, y: f32) -> Self {
        assert!(x > 0.0 && y > 0.0, "Native scale must be positive, got {}x{}", x, y);
        self.params.native_scale = (x, y);
        self
    }

    pub fn params(&self) -> &CreationParams {
        &self.params
    }

    /// Creates the device on `library`.
    pub fn build<B: Backend>(self, library: &Library<B>) -> Device<B> {
        info!(
            target: "platform",
            "Building device ({}x{}, {:?}, {} bits)",
            self.params.window_size.0,
            self.params.window_size.1,
            self.params.driver_type,
            self.params.bits
        );
        library.create_device(self.params)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // CreationParams Tests
    //=====================================================================

    #[test]
    fn defaults() {
        let params = CreationParams::default();
        assert_eq!(params.window_size, (800, 600));
        assert_eq!(params.bits, 32);
        assert_eq!(params.driver_type, DriverType::OpenGl);
        assert_eq!(params.native_scale, (1.0, 1.0));
    }

    #[test]
    fn gl_config_follows_bits() {
        let mut params = CreationParams::default();
        let c = params.gl_config();
        assert_eq!((c.red, c.green, c.blue, c.depth), (8, 8, 8, 24));

        params.bits = 24;
        let c = params.gl_config();
        assert_eq!((c.red, c.green, c.blue, c.depth), (5, 5, 5, 16));

        params.bits = 16;
        let c = params.gl_config();
        assert_eq!((c.red, c.green, c.blue, c.depth), (3, 3, 2, 16));
    }

    #[test]
    fn window_spec_divides_by_native_scale() {
        let params = DeviceBuilder::new()
            .with_window_size(1600, 1200)
            .with_window_position(100, 50)
            .with_native_scale(2.0, 2.0)
            .params()
            .clone();

        let spec = params.window_spec();
        assert_eq!(spec.size, (800, 600));
        assert_eq!(spec.position, Some((50, 25)));
    }

    #[test]
    fn null_driver_requests_plain_window() {
        let params = DeviceBuilder::new().with_driver(DriverType::Null).params().clone();
        assert!(params.window_spec().gl.is_none());
    }

    #[test]
    fn json_fills_missing_fields() {
        let params = CreationParams::from_json(r#"{ "window_size": [1280, 720], "swap_interval": 1 }"#)
            .expect("valid json");
        assert_eq!(params.window_size, (1280, 720));
        assert_eq!(params.swap_interval, 1);
        assert_eq!(params.bits, 32);
        assert!(params.double_buffer);
    }

    #[test]
    fn json_driver_names() {
        let params = CreationParams::from_json(r#"{ "driver_type": "null" }"#).expect("valid json");
        assert_eq!(params.driver_type, DriverType::Null);
    }

    //=====================================================================
    // DeviceBuilder Tests
    //=====================================================================

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = DeviceBuilder::new()
            .with_title("viewer")
            .with_bits(24)
            .with_stencil_buffer(true)
            .with_anti_alias(4)
            .with_fullscreen(true)
            .with_resizable(true)
            .with_double_buffer(false);

        let params = builder.params();
        assert_eq!(params.window_title, "viewer");
        assert_eq!(params.bits, 24);
        assert!(params.stencil_buffer && params.fullscreen && params.resizable);
        assert!(!params.double_buffer);
        assert_eq!(params.gl_config().stencil, 8);
        assert_eq!(params.gl_config().samples, 4);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_rejects_zero_size() {
        DeviceBuilder::new().with_window_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Native scale must be positive")]
    fn builder_rejects_non_positive_scale() {
        DeviceBuilder::new().with_native_scale(0.0, 1.0);
    }
}

//=========================================================================
// Video Types
//=========================================================================
//
// Renderer-facing types shared by the device and its backends:
// the resize hook, color formats and the video mode list.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== DriverType ==========================================================

/// Which renderer the device prepares a window for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverType {
    /// No rendering: a plain window, no GL context negotiation.
    Null,

    /// Desktop OpenGL.
    #[default]
    OpenGl,

    /// OpenGL ES 2 (context negotiation identical to desktop GL).
    OpenGlEs2,
}

impl DriverType {
    /// `true` for drivers that need a GL context on the window.
    pub fn needs_gl_context(self) -> bool {
        matches!(self, Self::OpenGl | Self::OpenGlEs2)
    }
}

//=== Renderer ============================================================

/// Renderer hook owned by the device.
pub trait Renderer {
    /// Called with the new drawable size, only when it actually changed.
    fn on_resize(&mut self, width: u32, height: u32);
}

//=== ColorFormat =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    A1R5G5B5,
    R5G6B5,
    R8G8B8,
    A8R8G8B8,
}

impl ColorFormat {
    /// Picks the format for a window pixel format.
    pub fn from_pixel_format(bits_per_pixel: u8, has_alpha: bool) -> Self {
        match (bits_per_pixel == 16, has_alpha) {
            (true, true) => Self::A1R5G5B5,
            (true, false) => Self::R5G6B5,
            (false, true) => Self::A8R8G8B8,
            (false, false) => Self::R8G8B8,
        }
    }
}

//=== VideoMode ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    pub depth: u8,
}

/// Display modes enumerated once and cached by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoModeList {
    desktop: Option<VideoMode>,
    modes: Vec<VideoMode>,
}

impl VideoModeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_desktop(&mut self, mode: VideoMode) {
        self.desktop = Some(mode);
    }

    pub fn desktop(&self) -> Option<VideoMode> {
        self.desktop
    }

    /// Adds a mode; duplicates are ignored and the list stays sorted.
    pub fn add_mode(&mut self, mode: VideoMode) {
        if let Err(index) = self.modes.binary_search(&mode) {
            self.modes.insert(index, mode);
        }
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn modes(&self) -> &[VideoMode] {
        &self.modes
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_format_from_pixels() {
        assert_eq!(ColorFormat::from_pixel_format(16, true), ColorFormat::A1R5G5B5);
        assert_eq!(ColorFormat::from_pixel_format(16, false), ColorFormat::R5G6B5);
        assert_eq!(ColorFormat::from_pixel_format(32, true), ColorFormat::A8R8G8B8);
        assert_eq!(ColorFormat::from_pixel_format(24, false), ColorFormat::R8G8B8);
    }

    #[test]
    fn mode_list_sorts_and_dedups() {
        let mut list = VideoModeList::new();
        let big = VideoMode { width: 1920, height: 1080, depth: 32 };
        let small = VideoMode { width: 800, height: 600, depth: 32 };

        list.add_mode(big);
        list.add_mode(small);
        list.add_mode(big);

        assert_eq!(list.modes(), &[small, big]);
    }

    #[test]
    fn null_driver_needs_no_context() {
        assert!(!DriverType::Null.needs_gl_context());
        assert!(DriverType::OpenGl.needs_gl_context());
        assert!(DriverType::OpenGlEs2.needs_gl_context());
    }
}

//! Screen-space projection for 2D drawing

use bytemuck::{Pod, Zeroable};

/// Screen uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniform {
    /// Render target size in pixels
    pub size: [f32; 2],
    /// Non-zero when the target stores sRGB, so shader colors must be linear
    pub srgb_target: u32,
    pub _padding: u32,
}

impl ScreenUniform {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            srgb_target: 1,
            _padding: 0,
        }
    }

    pub fn with_srgb_target(mut self, srgb_target: bool) -> Self {
        self.srgb_target = srgb_target as u32;
        self
    }

    /// Pixel coordinates (y down) to normalized device coordinates (y up).
    /// Mirrors the vertex shader, used to check it.
    pub fn to_ndc(&self, pixel: [f32; 2]) -> [f32; 2] {
        [
            pixel[0] / self.size[0] * 2.0 - 1.0,
            1.0 - pixel[1] / self.size[1] * 2.0,
        ]
    }
}

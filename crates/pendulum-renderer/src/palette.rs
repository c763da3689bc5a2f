//! Catppuccin Mocha colors used by the pendulum renderer

use catppuccin::PALETTE;

/// sRGB color with alpha, as uploaded to the GPU (Unorm8x4)
pub type Rgba8 = [u8; 4];

fn rgba8(color: &catppuccin::Color) -> Rgba8 {
    [color.rgb.r, color.rgb.g, color.rgb.b, 255]
}

pub fn background() -> Rgba8 {
    rgba8(&PALETTE.mocha.colors.base)
}

pub fn arm() -> Rgba8 {
    rgba8(&PALETTE.mocha.colors.text)
}

pub fn pendants() -> [Rgba8; 2] {
    [
        rgba8(&PALETTE.mocha.colors.mauve),
        rgba8(&PALETTE.mocha.colors.peach),
    ]
}

/// Standard sRGB to linear conversion
pub fn srgb_to_linear(c: u8) -> f64 {
    let x = c as f64 / 255.0;
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Background clear color. An sRGB target takes linear values and encodes
/// them on store, any other target takes the sRGB values as they are.
pub fn clear_color(srgb_target: bool) -> wgpu::Color {
    let [r, g, b, _] = background();
    let channel = |c: u8| {
        if srgb_target {
            srgb_to_linear(c)
        } else {
            c as f64 / 255.0
        }
    };
    wgpu::Color {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a: 1.0,
    }
}

/// Instance data for SDF shape rendering.
///
/// Every shape is a capsule: the set of points within `radius` of the segment
/// `start..end`. A circle is a capsule whose endpoints coincide, a stroked
/// line is a capsule with half the stroke width as radius.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    /// Segment start in screen-space pixels
    pub start: [f32; 2],
    /// Segment end in screen-space pixels
    pub end: [f32; 2],
    /// Distance from the segment covered by the shape, in pixels
    pub radius: f32,
    /// sRGB color (RGBA, 0-255)
    pub color: [u8; 4],
    /// Padding for 16-byte alignment
    pub _padding: [u32; 2],
}

impl ShapeInstance {
    pub fn segment(start: [f32; 2], end: [f32; 2], radius: f32, color: [u8; 4]) -> Self {
        Self {
            start,
            end,
            radius,
            color,
            _padding: [0, 0],
        }
    }

    pub fn disc(center: [f32; 2], radius: f32, color: [u8; 4]) -> Self {
        Self::segment(center, center, radius, color)
    }

    /// Vertex buffer layout for instance attributes
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // start: vec2<f32> at location 1
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            // end: vec2<f32> at location 2
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
            // radius: f32 at location 3
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() * 2) as wgpu::BufferAddress,
                shader_location: 3,
                format: wgpu::VertexFormat::Float32,
            },
            // color: vec4<f32> at location 4 (Unorm8x4)
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() * 2 + std::mem::size_of::<f32>())
                    as wgpu::BufferAddress,
                shader_location: 4,
                format: wgpu::VertexFormat::Unorm8x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 32);
        assert_eq!(ShapeInstance::desc().array_stride, 32);
    }

    #[test]
    fn test_disc_is_degenerate_segment() {
        let disc = ShapeInstance::disc([3.0, 4.0], 5.0, [1, 2, 3, 4]);
        assert_eq!(disc.start, disc.end);
        assert_eq!(disc.radius, 5.0);
    }
}

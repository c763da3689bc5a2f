//! CPU-side frame: a [`DrawSurface`] that records GPU shape instances

use glam::Vec2;
use pendulum_simulation::DrawSurface;

use crate::instance::ShapeInstance;
use crate::palette::{self, Rgba8};

/// Stroke width of the arms, in pixels
pub const STROKE_WIDTH: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub stroke_width: f32,
    pub arm_color: Rgba8,
    /// Colors of successive circles within a frame, cycled
    pub pendant_colors: [Rgba8; 2],
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            arm_color: palette::arm(),
            pendant_colors: palette::pendants(),
        }
    }
}

/// Shapes to draw this frame, in painter's order.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    style: FrameStyle,
    instances: Vec<ShapeInstance>,
    circle_count: usize,
}

impl Frame {
    pub fn new(style: FrameStyle) -> Self {
        Self {
            style,
            instances: Vec::new(),
            circle_count: 0,
        }
    }

    /// Forget last frame's shapes, keeping the allocation.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.circle_count = 0;
    }

    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl DrawSurface for Frame {
    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.instances.push(ShapeInstance::segment(
            from.to_array(),
            to.to_array(),
            self.style.stroke_width * 0.5,
            self.style.arm_color,
        ));
    }

    fn draw_circle(&mut self, center: Vec2, diameter: f32) {
        let colors = &self.style.pendant_colors;
        let color = colors[self.circle_count % colors.len()];
        self.circle_count += 1;
        self.instances
            .push(ShapeInstance::disc(center.to_array(), diameter * 0.5, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARM: Rgba8 = [1, 1, 1, 255];
    const FIRST: Rgba8 = [2, 2, 2, 255];
    const SECOND: Rgba8 = [3, 3, 3, 255];

    fn frame() -> Frame {
        Frame::new(FrameStyle {
            stroke_width: 4.0,
            arm_color: ARM,
            pendant_colors: [FIRST, SECOND],
        })
    }

    #[test]
    fn test_line_becomes_stroked_segment() {
        let mut frame = frame();
        frame.draw_line(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));

        let shape = frame.instances()[0];
        assert_eq!(shape.start, [1.0, 2.0]);
        assert_eq!(shape.end, [3.0, 4.0]);
        assert_eq!(shape.radius, 2.0);
        assert_eq!(shape.color, ARM);
    }

    #[test]
    fn test_circles_cycle_pendant_colors() {
        let mut frame = frame();
        frame.draw_circle(Vec2::new(10.0, 10.0), 20.0);
        frame.draw_line(Vec2::ZERO, Vec2::ONE);
        frame.draw_circle(Vec2::new(30.0, 30.0), 50.0);

        let shapes = frame.instances();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].radius, 10.0);
        assert_eq!(shapes[0].color, FIRST);
        assert_eq!(shapes[0].start, shapes[0].end);
        assert_eq!(shapes[2].radius, 25.0);
        assert_eq!(shapes[2].color, SECOND);
    }

    #[test]
    fn test_clear_restarts_color_cycle() {
        let mut frame = frame();
        frame.draw_circle(Vec2::ZERO, 10.0);
        frame.clear();
        assert!(frame.is_empty());

        frame.draw_circle(Vec2::ZERO, 10.0);
        assert_eq!(frame.instances()[0].color, FIRST);
    }
}

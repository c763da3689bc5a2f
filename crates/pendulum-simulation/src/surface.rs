//! Rendering surface contract
//!
//! The simulation only ever emits lines and circles in pixel space. Anything
//! that can draw those can host the pendulum.

use glam::Vec2;

pub trait DrawSurface {
    fn draw_line(&mut self, from: Vec2, to: Vec2);

    /// Filled circle; pendants are drawn with a diameter equal to their mass.
    fn draw_circle(&mut self, center: Vec2, diameter: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Vec2, to: Vec2 },
    Circle { center: Vec2, diameter: f32 },
}

/// Records draw commands instead of drawing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded commands onto another surface.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match *command {
                DrawCommand::Line { from, to } => surface.draw_line(from, to),
                DrawCommand::Circle { center, diameter } => surface.draw_circle(center, diameter),
            }
        }
    }
}

impl DrawSurface for DrawList {
    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn draw_circle(&mut self, center: Vec2, diameter: f32) {
        self.commands.push(DrawCommand::Circle { center, diameter });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_preserves_order() {
        let mut list = DrawList::new();
        list.draw_line(Vec2::ZERO, Vec2::X);
        list.draw_circle(Vec2::X, 12.0);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);

        list.clear();
        assert!(list.commands.is_empty());
    }
}

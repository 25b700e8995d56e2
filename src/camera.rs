use crate::constants::*;
use glam::Vec2;

/// Fixed-zoom camera that smoothly follows the player.
pub struct Camera {
    pub center: Vec2,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            viewport_width,
            viewport_height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Snap directly to a world position (level start, teleports).
    pub fn jump_to(&mut self, target: Vec2) {
        self.center = target;
    }

    /// Move toward `target`, closing a fixed fraction of the gap per frame.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let t = (CAMERA_FOLLOW_SPEED * dt).min(1.0);
        self.center += (target - self.center) * t;
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.center) * CAMERA_ZOOM
            + Vec2::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }
}

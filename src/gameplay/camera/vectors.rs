use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// Orthogonal view basis derived from the two camera angles.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraVectors {
    pub direction: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CameraVectors {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        let mut vectors = Self {
            direction: Vec3::ZERO,
            right: Vec3::ZERO,
            up: Vec3::ZERO,
        };
        vectors.update(horizontal, vertical);
        vectors
    }

    /// Spherical to cartesian: the right vector stays in the xz plane, up is
    /// `right x direction`.
    pub fn update(&mut self, horizontal: f32, vertical: f32) {
        self.direction = Vec3::new(
            vertical.cos() * horizontal.sin(),
            vertical.sin(),
            vertical.cos() * horizontal.cos(),
        );
        self.right = Vec3::new(
            (horizontal - FRAC_PI_2).sin(),
            0.0,
            (horizontal - FRAC_PI_2).cos(),
        );
        self.up = self.right.cross(self.direction);
    }
}

use glam::{Mat4, Vec3};

use crate::gameplay::{LabKey, PressedKeys};
use crate::geom::{generate_rectangle, generate_rope, Mesh};

/// Degrees per frame an arrow key turns an arm.
const ARM_STEP_DEG: f32 = 1.0;
const ROPE_SCALE_STEP: f32 = 0.01;

/// Part dimensions of the 2D crane.
#[derive(Debug, Clone)]
pub struct CraneDesc {
    pub base_width: f32,
    pub base_height: f32,
    pub arm1_width: f32,
    pub arm1_height: f32,
    pub arm2_width: f32,
    pub arm2_height: f32,
    pub load_width: f32,
    pub load_height: f32,
    pub rope_length: f32,
}

impl Default for CraneDesc {
    fn default() -> Self {
        Self {
            base_width: 70.0,
            base_height: 35.0,
            arm1_width: 17.5,
            arm1_height: 120.0,
            arm2_width: 80.0,
            arm2_height: 17.5,
            load_width: 35.0,
            load_height: 35.0,
            rope_length: 80.0,
        }
    }
}

impl CraneDesc {
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            self.base_width,
            self.base_height,
            self.arm1_width,
            self.arm1_height,
            self.arm2_width,
            self.arm2_height,
            self.load_width,
            self.load_height,
            self.rope_length,
        ];
        if sizes.iter().any(|s| *s <= 0.0) {
            return Err("crane part sizes must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Meshes in their local frames, matching the transforms returned by
    /// [`crane_transforms`].
    pub fn meshes(&self) -> CraneMeshes {
        CraneMeshes {
            base: generate_rectangle(0.0, 0.0, self.base_width, self.base_height),
            arm1: generate_rectangle(-self.arm1_width / 2.0, 0.0, self.arm1_width, self.arm1_height),
            arm2: generate_rectangle(0.0, -self.arm2_height / 2.0, self.arm2_width, self.arm2_height),
            rope: generate_rope(self.rope_length),
            load: generate_rectangle(-self.load_width / 2.0, 0.0, self.load_width, self.load_height),
        }
    }
}

pub struct CraneMeshes {
    pub base: Mesh,
    pub arm1: Mesh,
    pub arm2: Mesh,
    pub rope: Mesh,
    pub load: Mesh,
}

/// User controlled joint state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraneState {
    /// Degrees, counter-clockwise.
    pub arm1_angle: f32,
    /// Degrees relative to arm1.
    pub arm2_angle: f32,
    pub rope_scale: f32,
}

impl Default for CraneState {
    fn default() -> Self {
        Self {
            arm1_angle: -30.0,
            arm2_angle: 40.0,
            rope_scale: 1.0,
        }
    }
}

impl CraneState {
    /// One frame of input, steps are per frame and not time scaled.
    pub fn apply_input(&mut self, keys: &PressedKeys) {
        if keys.contains(LabKey::ArrowUp) {
            self.arm2_angle += ARM_STEP_DEG;
        }
        if keys.contains(LabKey::ArrowDown) {
            self.arm2_angle -= ARM_STEP_DEG;
        }
        if keys.contains(LabKey::ArrowLeft) {
            self.arm1_angle += ARM_STEP_DEG;
        }
        if keys.contains(LabKey::ArrowRight) {
            self.arm1_angle -= ARM_STEP_DEG;
        }
        if keys.contains(LabKey::Plus) {
            self.rope_scale += ROPE_SCALE_STEP;
        }
        if keys.contains(LabKey::Minus) {
            self.rope_scale = (self.rope_scale - ROPE_SCALE_STEP).max(0.0);
        }
    }
}

/// Model matrices for every crane part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraneTransforms {
    pub base: Mat4,
    pub arm1: Mat4,
    pub arm2: Mat4,
    pub rope: Mat4,
    pub load: Mat4,
}

impl CraneTransforms {
    /// World position of the rope's attachment point.
    pub fn hook_position(&self) -> Vec3 {
        self.rope.transform_point3(Vec3::ZERO)
    }
}

pub fn crane_transforms(desc: &CraneDesc, state: &CraneState) -> CraneTransforms {
    let base = Mat4::IDENTITY;

    let arm1 = Mat4::from_translation(Vec3::new(desc.base_width / 2.0, desc.base_height, 0.0))
        * Mat4::from_rotation_z(state.arm1_angle.to_radians());

    let arm2 = arm1
        * Mat4::from_translation(Vec3::new(0.0, desc.arm1_height, 0.0))
        * Mat4::from_rotation_z(state.arm2_angle.to_radians());

    // undo both joint rotations so everything below hangs straight down
    let hook = arm2
        * Mat4::from_translation(Vec3::new(desc.arm2_width, -desc.arm2_height / 2.0, 0.0))
        * Mat4::from_rotation_z(-state.arm1_angle.to_radians())
        * Mat4::from_rotation_z(-state.arm2_angle.to_radians());

    let scaled_length = desc.rope_length * state.rope_scale;
    let rope = hook
        * Mat4::from_translation(Vec3::new(0.0, -scaled_length / 2.0, 0.0))
        * Mat4::from_scale(Vec3::new(1.0, state.rope_scale, 1.0))
        * Mat4::from_translation(Vec3::new(0.0, desc.rope_length / 2.0, 0.0));

    let load =
        hook * Mat4::from_translation(Vec3::new(0.0, -scaled_length - desc.load_height, 0.0));

    CraneTransforms {
        base,
        arm1,
        arm2,
        rope,
        load,
    }
}

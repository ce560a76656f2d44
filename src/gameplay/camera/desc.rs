use glam::Vec3;

#[derive(Debug, Clone)]
pub struct CameraMovementDesc {
    /// World units per second.
    pub speed: f32,
    /// Radians per pixel of cursor displacement.
    pub mouse_speed: f32,
    /// Multiplier while the slow modifier is held.
    pub slow_multiplier: f32,
    /// Multiplier while the fast modifier is held.
    pub fast_multiplier: f32,
}

impl Default for CameraMovementDesc {
    fn default() -> Self {
        Self {
            speed: 30.0,
            mouse_speed: 0.0025,
            slow_multiplier: 0.15,
            fast_multiplier: 3.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CameraProjectionDesc {
    /// Vertical field of view in degrees.
    pub v_fov: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraProjectionDesc {
    fn default() -> Self {
        Self {
            v_fov: 45.0,
            z_near: 0.1,
            z_far: 100000.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CameraDesc {
    pub movement: CameraMovementDesc,
    pub projection: CameraProjectionDesc,
}

impl CameraDesc {
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.movement.speed = speed;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.movement.speed < 0.0 {
            return Err("speed must not be negative".to_string());
        }
        if self.movement.mouse_speed < 0.0 {
            return Err("mouse_speed must not be negative".to_string());
        }
        if self.projection.v_fov <= 0.0 || self.projection.v_fov >= 180.0 {
            return Err("v_fov must be in the range (0, 180)".to_string());
        }
        if self.projection.z_near <= 0.0 || self.projection.z_far <= self.projection.z_near {
            return Err("z_near must be positive and smaller than z_far".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CameraCreateInfo {
    pub position: Vec3,
    /// Rotation around +Y in radians, 0 looks toward +Z.
    pub horizontal_angle: f32,
    /// Elevation in radians, positive looks up.
    pub vertical_angle: f32,
    pub desc: CameraDesc,
}

impl Default for CameraCreateInfo {
    fn default() -> Self {
        Self {
            // on +Z, looking toward -Z
            position: Vec3::new(0.0, 0.0, 5.0),
            horizontal_angle: std::f32::consts::PI,
            vertical_angle: 0.0,
            desc: CameraDesc::default(),
        }
    }
}

use glam::{Mat4, Vec3};

use super::{
    movement::{movement_axes, speed_multiplier},
    vectors::CameraVectors,
    CameraCreateInfo, CameraDesc,
};
use crate::gameplay::FrameInput;
use crate::scene::perspective_projection;

/// Where the camera is and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Radians around +Y.
    pub horizontal_angle: f32,
    /// Radians above the horizon.
    pub vertical_angle: f32,
}

/// Mouse-look and WASD camera integrated once per frame.
///
/// Angles are neither wrapped nor clamped, looking past straight up flips
/// the view like the lab camera always did.
pub struct FirstPersonCamera {
    pose: CameraPose,
    vectors: CameraVectors,
    desc: CameraDesc,
    view_mat: Mat4,
    proj_mat: Mat4,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        FirstPersonCamera::new(CameraCreateInfo::default())
    }
}

impl FirstPersonCamera {
    /// Panics on an invalid [`CameraDesc`], camera constants are fixed at
    /// startup.
    pub fn new(create_info: CameraCreateInfo) -> Self {
        if let Err(msg) = create_info.desc.validate() {
            panic!("Failed to create camera: {}", msg);
        }

        let pose = CameraPose {
            position: create_info.position,
            horizontal_angle: create_info.horizontal_angle,
            vertical_angle: create_info.vertical_angle,
        };
        let vectors = CameraVectors::new(pose.horizontal_angle, pose.vertical_angle);
        let mut camera = Self {
            pose,
            vectors,
            desc: create_info.desc,
            view_mat: Mat4::IDENTITY,
            proj_mat: Mat4::IDENTITY,
        };
        camera.view_mat = camera.calculate_view_mat();
        camera
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn direction(&self) -> Vec3 {
        self.vectors.direction
    }

    pub fn right(&self) -> Vec3 {
        self.vectors.right
    }

    /// View matrix as of the last [`FirstPersonCamera::update`].
    pub fn view_mat(&self) -> Mat4 {
        self.view_mat
    }

    /// Projection matrix as of the last [`FirstPersonCamera::update`].
    pub fn proj_mat(&self) -> Mat4 {
        self.proj_mat
    }

    pub fn calculate_proj_mat(v_fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
        perspective_projection(v_fov, aspect_ratio, z_near, z_far)
    }

    fn calculate_view_mat(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.pose.position,
            self.pose.position + self.vectors.direction,
            self.vectors.up,
        )
    }

    /// Advances the camera by one frame.
    ///
    /// Orientation first takes the cursor delta, then every held movement key
    /// moves the camera along the fresh basis by `dt * speed * multiplier`.
    /// Both matrices are recomputed, the projection from the frame's aspect
    /// ratio.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> CameraPose {
        let mouse_speed = self.desc.movement.mouse_speed;
        self.pose.horizontal_angle += mouse_speed * input.cursor_delta.x;
        self.pose.vertical_angle += mouse_speed * input.cursor_delta.y;
        self.vectors
            .update(self.pose.horizontal_angle, self.pose.vertical_angle);

        let mult = speed_multiplier(&input.keys, &self.desc.movement);
        let axes = movement_axes(&input.keys, self.vectors.direction, self.vectors.right);
        self.pose.position += axes * dt * self.desc.movement.speed * mult;

        let projection = &self.desc.projection;
        self.proj_mat = Self::calculate_proj_mat(
            projection.v_fov,
            input.aspect_ratio(),
            projection.z_near,
            projection.z_far,
        );
        self.view_mat = self.calculate_view_mat();

        log::trace!(
            "camera at {:?}, h {:.3}, v {:.3}",
            self.pose.position,
            self.pose.horizontal_angle,
            self.pose.vertical_angle
        );
        self.pose
    }
}

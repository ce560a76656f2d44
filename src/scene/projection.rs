use glam::{Mat4, Vec3};

/// Perspective projection with a vertical field of view in degrees.
pub fn perspective_projection(v_fov_deg: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(v_fov_deg.to_radians(), aspect_ratio, z_near, z_far)
}

/// Orthographic box centred on the origin spanning `size / divisor` in each
/// direction, so world units stay tied to framebuffer pixels.
pub fn centered_ortho(framebuffer_size: [u32; 2], divisor: f32, z_near: f32, z_far: f32) -> Mat4 {
    let half_w = framebuffer_size[0] as f32 / divisor;
    let half_h = framebuffer_size[1].max(1) as f32 / divisor;
    Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, z_near, z_far)
}

/// Y-up view from `eye` toward the world origin.
pub fn look_at_origin(eye: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
}

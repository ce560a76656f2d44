use glam::{Mat4, Vec3};

use crate::geom::{generate_filled_circle, generate_rectangle, generate_triangle, Mesh, VertexAttributes};

pub const ORBIT_EYE: Vec3 = Vec3::new(90.0, 80.0, 90.0);
pub const ORBIT_V_FOV_DEG: f32 = 90.0;
pub const ORBIT_Z_NEAR: f32 = 0.1;
pub const ORBIT_Z_FAR: f32 = 250.0;

const CIRCLE_SEGMENTS: u32 = 200;

/// Model matrices of the orbiting bodies at a given frame number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTransforms {
    pub triangle: Mat4,
    pub square: Mat4,
    pub circle: Mat4,
    pub small_triangle: Mat4,
}

/// The triangle swings along X, the square circles it in the XY plane, the
/// disc circles the square around Y and the small triangle spins around the
/// triangle's X axis.
pub fn orbit_transforms(frame: f32) -> OrbitTransforms {
    let triangle = Mat4::from_translation(Vec3::new((frame / 100.0).sin() * 80.0, 0.0, 0.0));
    let square = triangle
        * Mat4::from_rotation_z(frame.to_radians())
        * Mat4::from_translation(Vec3::new(30.0, 0.0, 0.0));
    let circle = square
        * Mat4::from_rotation_y((3.0 * frame).to_radians())
        * Mat4::from_translation(Vec3::new(20.0, 0.0, 0.0));
    let small_triangle = triangle
        * Mat4::from_rotation_x((5.0 * frame).to_radians())
        * Mat4::from_translation(Vec3::new(0.0, 30.0, 0.0));
    OrbitTransforms {
        triangle,
        square,
        circle,
        small_triangle,
    }
}

pub struct OrbitMeshes {
    pub triangle: Mesh,
    pub square: Mesh,
    pub circle: Mesh,
    pub small_triangle: Mesh,
}

pub fn orbit_meshes() -> OrbitMeshes {
    let mut triangle = generate_triangle(
        Vec3::new(-17.3, -10.0, 0.0),
        Vec3::new(17.3, -10.0, 0.0),
        Vec3::new(0.0, 20.0, 0.0),
    );
    paint(&mut triangle, &[Vec3::X, Vec3::Y, Vec3::Z]);

    let mut square = generate_rectangle(-5.0, -5.0, 10.0, 10.0);
    paint(&mut square, &[Vec3::new(0.9, 0.5, 0.0)]);

    let mut circle = generate_filled_circle(Vec3::ZERO, 8.0, CIRCLE_SEGMENTS);
    paint(&mut circle, &[Vec3::new(0.667, 0.224, 0.224), Vec3::new(0.949, 0.949, 0.0)]);

    let mut small_triangle = generate_triangle(
        Vec3::new(-8.3, -5.0, 0.0),
        Vec3::new(8.3, -5.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
    );
    paint(&mut small_triangle, &[Vec3::new(0.43, 0.22, 0.627)]);

    OrbitMeshes {
        triangle,
        square,
        circle,
        small_triangle,
    }
}

/// Colors vertices in order, the last color fills the rest.
fn paint(mesh: &mut Mesh, colors: &[Vec3]) {
    let Some(&last) = colors.last() else {
        return;
    };
    for (i, v) in mesh.vertices.iter_mut().enumerate() {
        v.color = colors.get(i).copied().unwrap_or(last);
    }
    mesh.attributes = mesh.attributes.union(VertexAttributes {
        color: true,
        ..VertexAttributes::POSITION_ONLY
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn frame_zero_layout() {
        let t = orbit_transforms(0.0);
        assert_eq!(t.triangle, Mat4::IDENTITY);
        assert!(approx_eq_vec(t.square.transform_point3(Vec3::ZERO), Vec3::new(30.0, 0.0, 0.0)));
        assert!(approx_eq_vec(t.circle.transform_point3(Vec3::ZERO), Vec3::new(50.0, 0.0, 0.0)));
        assert!(approx_eq_vec(
            t.small_triangle.transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 30.0, 0.0)
        ));
    }

    #[test]
    fn bodies_keep_their_orbit_radius() {
        for frame in [1.0, 37.0, 90.0, 400.0, 1234.0] {
            let t = orbit_transforms(frame);
            let tri = t.triangle.transform_point3(Vec3::ZERO);
            let sq = t.square.transform_point3(Vec3::ZERO);
            let circ = t.circle.transform_point3(Vec3::ZERO);
            let small = t.small_triangle.transform_point3(Vec3::ZERO);
            assert!((tri.x - (frame / 100.0).sin() * 80.0).abs() < 1e-3);
            assert!((sq.distance(tri) - 30.0).abs() < 1e-3);
            assert!((circ.distance(sq) - 20.0).abs() < 1e-3);
            assert!((small.distance(tri) - 30.0).abs() < 1e-3);
        }
    }

    #[test]
    fn square_quarter_turn() {
        let t = orbit_transforms(90.0);
        let tri = t.triangle.transform_point3(Vec3::ZERO);
        let sq = t.square.transform_point3(Vec3::ZERO);
        assert!(approx_eq_vec(sq - tri, Vec3::new(0.0, 30.0, 0.0)));
    }

    #[test]
    fn meshes_are_colored() {
        let meshes = orbit_meshes();
        assert!(meshes.triangle.attributes.color);
        assert_eq!(meshes.triangle.vertices[1].color, Vec3::Y);
        assert_eq!(meshes.circle.vertex_count(), CIRCLE_SEGMENTS as usize + 2);
        assert_eq!(meshes.circle.vertices[5].color, Vec3::new(0.949, 0.949, 0.0));
    }
}

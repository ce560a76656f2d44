use glam::{Vec2, Vec3};

use super::{DrawMode, Mesh, Vertex, VertexAttributes};

/// Repetitions of the wall/roof textures across a face.
const FACE_TEX_REPEAT: f32 = 8.0;

/// Collects quads and triangles into one indexed, lit, textured mesh.
#[derive(Default)]
struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn push(&mut self, position: Vec3, normal: Vec3, tex_coord: Vec2) -> u32 {
        self.vertices.push(
            Vertex::from_position(position)
                .with_normal(normal)
                .with_tex_coord(tex_coord),
        );
        self.vertices.len() as u32 - 1
    }

    /// Corners in drawing order, split along the 0-2 diagonal.
    fn quad(&mut self, normal: Vec3, corners: [(Vec3, Vec2); 4]) {
        let [a, b, c, d] = corners.map(|(p, uv)| self.push(p, normal, uv));
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    fn triangle(&mut self, normal: Vec3, corners: [(Vec3, Vec2); 3]) {
        let [a, b, c] = corners.map(|(p, uv)| self.push(p, normal, uv));
        self.indices.extend_from_slice(&[a, b, c]);
    }

    fn build(self) -> Mesh {
        Mesh::new(self.vertices, DrawMode::Triangles)
            .with_indices(self.indices)
            .with_attributes(VertexAttributes {
                normal: true,
                tex_coord: true,
                color: false,
            })
    }
}

/// A single `width` x `depth` quad on y = 0 centred at the origin.
///
/// Texture coordinates are the xz position scaled by `tex_scale`, so the
/// texture tiles with the floor size.
pub fn generate_floor(width: f32, depth: f32, tex_scale: f32) -> Mesh {
    let left = -width / 2.0;
    let back = -depth / 2.0;
    let corner = |x: f32, z: f32| (Vec3::new(x, 0.0, z), Vec2::new(x, z) * tex_scale);

    let mut builder = MeshBuilder::default();
    builder.quad(
        Vec3::Y,
        [
            corner(left, back),
            corner(left, back + depth),
            corner(left + width, back + depth),
            corner(left + width, back),
        ],
    );
    builder.build()
}

/// A box of walls with a gabled roof on top.
///
/// `origin` is the minimum corner, width runs along X, length along Z. The
/// ridge sits at half width, `roof_height` above the walls.
pub fn generate_house(
    origin: Vec3,
    width: f32,
    wall_height: f32,
    roof_height: f32,
    length: f32,
) -> Mesh {
    let mut builder = MeshBuilder::default();
    push_walls(&mut builder, origin, width, wall_height, length);
    push_roof(
        &mut builder,
        origin + Vec3::new(0.0, wall_height, 0.0),
        width,
        roof_height,
        length,
    );
    builder.build()
}

fn push_walls(builder: &mut MeshBuilder, o: Vec3, width: f32, height: f32, length: f32) {
    let r = FACE_TEX_REPEAT;
    let p = |x: f32, y: f32, z: f32| o + Vec3::new(x, y, z);

    builder.quad(
        Vec3::NEG_Z,
        [
            (p(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            (p(0.0, height, 0.0), Vec2::new(0.0, r)),
            (p(width, height, 0.0), Vec2::new(r, r)),
            (p(width, 0.0, 0.0), Vec2::new(r, 0.0)),
        ],
    );
    builder.quad(
        Vec3::Z,
        [
            (p(0.0, 0.0, length), Vec2::new(0.0, 0.0)),
            (p(width, 0.0, length), Vec2::new(r, 0.0)),
            (p(width, height, length), Vec2::new(r, r)),
            (p(0.0, height, length), Vec2::new(0.0, r)),
        ],
    );
    builder.quad(
        Vec3::NEG_X,
        [
            (p(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            (p(0.0, 0.0, length), Vec2::new(r, 0.0)),
            (p(0.0, height, length), Vec2::new(r, r)),
            (p(0.0, height, 0.0), Vec2::new(0.0, r)),
        ],
    );
    builder.quad(
        Vec3::X,
        [
            (p(width, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            (p(width, height, 0.0), Vec2::new(0.0, r)),
            (p(width, height, length), Vec2::new(r, r)),
            (p(width, 0.0, length), Vec2::new(r, 0.0)),
        ],
    );
}

fn push_roof(builder: &mut MeshBuilder, o: Vec3, width: f32, height: f32, length: f32) {
    let r = FACE_TEX_REPEAT;
    let p = |x: f32, y: f32, z: f32| o + Vec3::new(x, y, z);
    let ridge_x = width / 2.0;

    // gables
    builder.triangle(
        Vec3::NEG_Z,
        [
            (p(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            (p(ridge_x, height, 0.0), Vec2::new(3.0, 6.0)),
            (p(width, 0.0, 0.0), Vec2::new(6.0, 0.0)),
        ],
    );
    builder.triangle(
        Vec3::Z,
        [
            (p(0.0, 0.0, length), Vec2::new(0.0, 0.0)),
            (p(width, 0.0, length), Vec2::new(6.0, 0.0)),
            (p(ridge_x, height, length), Vec2::new(3.0, 6.0)),
        ],
    );

    // slopes
    let along = Vec3::new(0.0, 0.0, length);
    let left_normal = Vec3::new(ridge_x, height, 0.0).cross(-along).normalize_or_zero();
    builder.quad(
        left_normal,
        [
            (p(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            (p(0.0, 0.0, length), Vec2::new(0.0, r)),
            (p(ridge_x, height, length), Vec2::new(r, r)),
            (p(ridge_x, height, 0.0), Vec2::new(r, 0.0)),
        ],
    );
    let right_normal = along.cross(Vec3::new(ridge_x, -height, 0.0)).normalize_or_zero();
    builder.quad(
        right_normal,
        [
            (p(width, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            (p(ridge_x, height, 0.0), Vec2::new(r, 0.0)),
            (p(ridge_x, height, length), Vec2::new(r, r)),
            (p(width, 0.0, length), Vec2::new(0.0, r)),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_one_upward_quad() {
        let mesh = generate_floor(40.0, 40.0, 0.15);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices.iter().all(|v| v.normal == Vec3::Y));
        assert_eq!(mesh.vertices[0].position, Vec3::new(-20.0, 0.0, -20.0));
        assert!((mesh.vertices[0].tex_coord - Vec2::splat(-3.0)).length() < 1e-5);
    }

    #[test]
    fn house_faces_and_bounds() {
        let origin = Vec3::new(-10.0, 0.0, -7.5);
        let mesh = generate_house(origin, 10.0, 10.0, 5.0, 15.0);
        // 4 walls + 2 slopes as quads, 2 gables as triangles
        assert_eq!(mesh.vertex_count(), 6 * 4 + 2 * 3);
        assert_eq!(mesh.triangle_count(), 6 * 2 + 2);
        assert!(mesh.check_indices().is_ok());

        let max = mesh.positions().fold(Vec3::MIN, Vec3::max);
        let min = mesh.positions().fold(Vec3::MAX, Vec3::min);
        assert_eq!(min, origin);
        assert_eq!(max, Vec3::new(0.0, 15.0, 7.5));
    }

    #[test]
    fn roof_slopes_face_outward_and_up() {
        let mesh = generate_house(Vec3::ZERO, 10.0, 10.0, 5.0, 15.0);
        let ridge_x = 5.0;
        for v in mesh.vertices.iter().filter(|v| v.position.y > 10.0) {
            // ridge vertices belong to gables or slopes
            assert!((v.position.x - ridge_x).abs() < 1e-5);
        }
        let slopes: Vec<&Vertex> = mesh.vertices[mesh.vertex_count() - 8..].iter().collect();
        assert!(slopes[0].normal.x < 0.0 && slopes[0].normal.y > 0.0);
        assert!(slopes[4].normal.x > 0.0 && slopes[4].normal.y > 0.0);
        assert!((slopes[0].normal.length() - 1.0).abs() < 1e-5);
    }
}

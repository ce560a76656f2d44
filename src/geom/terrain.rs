use glam::{Vec2, Vec3};

use super::{DrawMode, Mesh, Vertex, VertexAttributes};
use crate::heightfield::HeightField;

/// Builds an indexed, lit and textured triangle mesh from a height field.
///
/// Vertices are laid out row-major with `x = col * x_step`, `z = row * z_step`.
/// Each cell becomes two triangles wound so that a flat field with positive
/// steps gets `+Y` normals.
pub fn generate_terrain_mesh(height_field: &HeightField) -> Mesh {
    let positions = grid_positions(height_field);
    let indices = grid_indices(height_field.rows(), height_field.cols());
    let normals = vertex_normals(&positions, &indices);
    let tex_coords = grid_tex_coords(height_field.rows(), height_field.cols());

    let vertices = positions
        .into_iter()
        .zip(normals)
        .zip(tex_coords)
        .map(|((p, n), uv)| Vertex::from_position(p).with_normal(n).with_tex_coord(uv))
        .collect();

    Mesh::new(vertices, DrawMode::Triangles)
        .with_indices(indices)
        .with_attributes(VertexAttributes {
            normal: true,
            tex_coord: true,
            color: false,
        })
}

fn grid_positions(height_field: &HeightField) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(height_field.rows() * height_field.cols());
    for (row, heights) in height_field.iter_rows().enumerate() {
        let z = row as f32 * height_field.z_step();
        for (col, &y) in heights.iter().enumerate() {
            positions.push(Vec3::new(col as f32 * height_field.x_step(), y, z));
        }
    }
    positions
}

/// Two triangles per grid cell, `2 * (rows - 1) * (cols - 1)` in total.
///
/// With `a` the cell's corner on `row` and `b` the one on `row + 1`, the cell
/// is split into `(a, b, b + 1)` and `(a, b + 1, a + 1)`.
pub fn grid_indices(rows: usize, cols: usize) -> Vec<u32> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }
    let mut indices = Vec::with_capacity(6 * (rows - 1) * (cols - 1));
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            let a = (row * cols + col) as u32;
            let b = ((row + 1) * cols + col) as u32;
            indices.extend_from_slice(&[a, b, b + 1, a, b + 1, a + 1]);
        }
    }
    indices
}

/// Per-vertex normals as the plain mean of adjacent face normals.
///
/// Vertices no triangle refers to get a zero normal, degenerate faces
/// contribute a zero vector.
pub fn vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; positions.len()];
    let mut counts = vec![0u32; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let v0 = positions[i0];
        let face = (positions[i1] - v0)
            .cross(positions[i2] - v0)
            .normalize_or_zero();
        for i in [i0, i1, i2] {
            sums[i] += face;
            counts[i] += 1;
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            if count == 0 {
                Vec3::ZERO
            } else {
                sum / count as f32
            }
        })
        .collect()
}

/// `s = col / (cols - 1)`, `t = row / (rows - 1)`, a single row or column
/// maps to 0.
fn grid_tex_coords(rows: usize, cols: usize) -> Vec<Vec2> {
    let norm = |i: usize, n: usize| if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Vec2::new(norm(col, cols), norm(row, rows))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn approx_eq_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    fn flat(rows: usize, cols: usize, height: f32) -> HeightField {
        HeightField::from_fn(rows, cols, 2.0, 3.0, |_, _| height).unwrap()
    }

    #[test]
    fn triangle_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let rows = rng.random_range(2..20);
            let cols = rng.random_range(2..20);
            let field = HeightField::from_fn(rows, cols, 1.0, 1.0, |_, _| {
                rng.random_range(-10.0..10.0)
            })
            .unwrap();
            let mesh = generate_terrain_mesh(&field);
            assert_eq!(mesh.vertex_count(), rows * cols);
            assert_eq!(mesh.triangle_count(), 2 * (rows - 1) * (cols - 1));
            assert!(mesh.check_indices().is_ok());
        }
    }

    #[test]
    fn positions_are_row_major() {
        let field = HeightField::from_fn(3, 4, 2.0, 3.0, |r, c| (r * 10 + c) as f32).unwrap();
        let mesh = generate_terrain_mesh(&field);
        assert_eq!(mesh.vertices[0].position, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.vertices[3].position, Vec3::new(6.0, 3.0, 0.0));
        assert_eq!(mesh.vertices[4].position, Vec3::new(0.0, 10.0, 3.0));
        assert_eq!(mesh.vertices[11].position, Vec3::new(6.0, 23.0, 6.0));
    }

    #[test]
    fn flat_field_points_up() {
        let mesh = generate_terrain_mesh(&flat(5, 7, 4.5));
        for v in &mesh.vertices {
            assert!(approx_eq_vec(v.normal, Vec3::Y), "{:?}", v.normal);
        }
    }

    #[test]
    fn winding_is_consistent() {
        let mesh = generate_terrain_mesh(&flat(4, 4, 0.0));
        let p: Vec<Vec3> = mesh.positions().collect();
        for tri in mesh.indices.chunks_exact(3) {
            let n = (p[tri[1] as usize] - p[tri[0] as usize])
                .cross(p[tri[2] as usize] - p[tri[0] as usize]);
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn normals_are_plain_averages() {
        // a single cell with one raised corner: the corner only touches one face
        let field = HeightField::from_fn(2, 2, 1.0, 1.0, |r, c| {
            if r == 1 && c == 1 {
                1.0
            } else {
                0.0
            }
        })
        .unwrap();
        let positions = grid_positions(&field);
        let indices = grid_indices(2, 2);
        let normals = vertex_normals(&positions, &indices);

        let face = |a: usize, b: usize, c: usize| {
            (positions[b] - positions[a])
                .cross(positions[c] - positions[a])
                .normalize()
        };
        let f0 = face(0, 2, 3);
        let f1 = face(0, 3, 1);
        assert!(approx_eq_vec(normals[0], (f0 + f1) / 2.0));
        assert!(approx_eq_vec(normals[2], f0));
        assert!(approx_eq_vec(normals[1], f1));
        assert!(approx_eq_vec(normals[3], (f0 + f1) / 2.0));
    }

    #[test]
    fn unreferenced_vertices_get_zero_normals() {
        let mesh = generate_terrain_mesh(&flat(1, 5, 1.0));
        assert!(!mesh.is_indexed());
        assert!(mesh.vertices.iter().all(|v| v.normal == Vec3::ZERO));

        let normals = vertex_normals(&[Vec3::ZERO; 3], &[0, 1, 2]);
        assert!(normals.iter().all(|n| n.is_finite()));
    }

    #[test]
    fn tex_coords_span_unit_square() {
        let mesh = generate_terrain_mesh(&flat(3, 5, 0.0));
        assert_eq!(mesh.vertices[0].tex_coord, Vec2::ZERO);
        assert_eq!(mesh.vertices[4].tex_coord, Vec2::new(1.0, 0.0));
        assert_eq!(mesh.vertices[7].tex_coord, Vec2::new(0.5, 0.5));
        assert_eq!(mesh.vertices[14].tex_coord, Vec2::ONE);
    }
}

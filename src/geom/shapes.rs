use glam::{Vec2, Vec3};

use super::{DrawMode, Mesh, Vertex, VertexAttributes};

/// Square outline around `center`, starting at the bottom-left corner and
/// going clockwise.
pub fn generate_square_outline(center: Vec2, edge: f32) -> Mesh {
    let bl = center - Vec2::splat(edge / 2.0);
    let corners = [
        bl,
        bl + Vec2::new(0.0, edge),
        bl + Vec2::splat(edge),
        bl + Vec2::new(edge, 0.0),
    ];
    Mesh::new(
        corners
            .into_iter()
            .map(|c| Vertex::from_position(c.extend(0.0)))
            .collect(),
        DrawMode::LineLoop,
    )
}

/// Axis-aligned rectangle in the z = 0 plane as two triangles.
pub fn generate_rectangle(left: f32, bottom: f32, width: f32, height: f32) -> Mesh {
    let bl = Vec3::new(left, bottom, 0.0);
    let br = Vec3::new(left + width, bottom, 0.0);
    let tr = Vec3::new(left + width, bottom + height, 0.0);
    let tl = Vec3::new(left, bottom + height, 0.0);
    Mesh::new(
        [bl, br, tr, bl, tr, tl]
            .into_iter()
            .map(Vertex::from_position)
            .collect(),
        DrawMode::Triangles,
    )
}

pub fn generate_triangle(a: Vec3, b: Vec3, c: Vec3) -> Mesh {
    Mesh::new(
        vec![
            Vertex::from_position(a),
            Vertex::from_position(b),
            Vertex::from_position(c),
        ],
        DrawMode::Triangles,
    )
}

/// A vertical line segment from `(0, -length, 0)` up to the origin.
pub fn generate_rope(length: f32) -> Mesh {
    Mesh::new(
        vec![
            Vertex::from_position(Vec3::new(0.0, -length, 0.0)),
            Vertex::from_position(Vec3::ZERO),
        ],
        DrawMode::Lines,
    )
}

/// Red, green and blue segments along +X, +Y and +Z.
pub fn generate_axis_gizmo(length: f32) -> Mesh {
    let axes = [
        (Vec3::X, Vec3::new(1.0, 0.0, 0.0)),
        (Vec3::Y, Vec3::new(0.0, 1.0, 0.0)),
        (Vec3::Z, Vec3::new(0.0, 0.0, 1.0)),
    ];
    let vertices = axes
        .into_iter()
        .flat_map(|(axis, color)| {
            [
                Vertex::from_position(Vec3::ZERO).with_color(color),
                Vertex::from_position(axis * length).with_color(color),
            ]
        })
        .collect();
    Mesh::new(vertices, DrawMode::Lines).with_attributes(VertexAttributes {
        color: true,
        ..VertexAttributes::POSITION_ONLY
    })
}

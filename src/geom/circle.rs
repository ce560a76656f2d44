use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::{DrawMode, Mesh, Vertex};

/// Perimeter points of a regular `segment_count`-gon approximating a circle.
///
/// Point `i` sits at angle `(i + 1) * 2π / segment_count`, so the first point
/// is one step past the +X axis and the last one lands on it. Counts below 3
/// give degenerate output and are left to the caller.
fn perimeter(center: Vec2, radius: f32, segment_count: u32) -> impl Iterator<Item = Vertex> {
    let step = TAU / segment_count as f32;
    (0..segment_count).map(move |i| {
        let theta = (i + 1) as f32 * step;
        Vertex::from_position(Vec3::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
            0.0,
        ))
    })
}

/// Outline variant, drawn as a closed line loop.
pub fn generate_circle(center: Vec2, radius: f32, segment_count: u32) -> Mesh {
    Mesh::new(
        perimeter(center, radius, segment_count).collect(),
        DrawMode::LineLoop,
    )
}

/// Filled variant for a triangle fan: the center first, then the perimeter,
/// then the first perimeter point again to close the fan.
///
/// The center keeps its z, perimeter points always lie on z = 0.
pub fn generate_filled_circle(center: Vec3, radius: f32, segment_count: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(segment_count as usize + 2);
    vertices.push(Vertex::from_position(center));
    vertices.extend(perimeter(center.truncate(), radius, segment_count));
    if let Some(first) = vertices.get(1).copied() {
        vertices.push(first);
    }
    Mesh::new(vertices, DrawMode::TriangleFan)
}

/// How successive circles are placed relative to the first one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleLayout {
    Single,
    /// Shrinking circles sharing the left edge of the first one.
    NestedInside { reduction: f32, amount: u32 },
    /// Shrinking circles along +X, each tangent to the previous one.
    ChainedInline { reduction: f32, amount: u32 },
    /// Like [`CircleLayout::ChainedInline`] but along a direction inclined by
    /// `angle_deg` degrees.
    ChainedInclined {
        angle_deg: f32,
        reduction: f32,
        amount: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLayoutParams {
    pub center: Vec2,
    pub radius: f32,
    pub segment_count: u32,
    pub layout: CircleLayout,
}

/// Generates every circle of a layout as an independent outline mesh.
///
/// Radii follow `radius * reduction^i`; `reduction` is expected in (0, 1) but
/// not enforced.
pub fn generate_circle_layout(params: &CircleLayoutParams) -> Vec<Mesh> {
    let CircleLayoutParams {
        center,
        radius,
        segment_count,
        layout,
    } = *params;

    match layout {
        CircleLayout::Single => vec![generate_circle(center, radius, segment_count)],
        CircleLayout::NestedInside { reduction, amount } => {
            let left_edge = center.x - radius;
            radii(radius, reduction, amount)
                .enumerate()
                .map(|(i, r)| {
                    let c = if i == 0 {
                        center
                    } else {
                        Vec2::new(left_edge + r, center.y)
                    };
                    generate_circle(c, r, segment_count)
                })
                .collect()
        }
        CircleLayout::ChainedInline { reduction, amount } => {
            let mut last_right_edge = center.x + radius;
            radii(radius, reduction, amount)
                .enumerate()
                .map(|(i, r)| {
                    if i == 0 {
                        return generate_circle(center, r, segment_count);
                    }
                    let cx = last_right_edge + r;
                    last_right_edge = cx + r;
                    generate_circle(Vec2::new(cx, center.y), r, segment_count)
                })
                .collect()
        }
        CircleLayout::ChainedInclined {
            angle_deg,
            reduction,
            amount,
        } => {
            let dir = Vec2::from_angle(angle_deg.to_radians());
            // distance from the first center, grows by r_{i-1} + r_i per step
            let mut hypotenuse = radius;
            radii(radius, reduction, amount)
                .enumerate()
                .map(|(i, r)| {
                    if i == 0 {
                        return generate_circle(center, r, segment_count);
                    }
                    hypotenuse += r;
                    let mesh = generate_circle(center + dir * hypotenuse, r, segment_count);
                    hypotenuse += r;
                    mesh
                })
                .collect()
        }
    }
}

fn radii(radius: f32, reduction: f32, amount: u32) -> impl Iterator<Item = f32> {
    (0..amount).scan(radius, move |r, i| {
        if i > 0 {
            *r *= reduction;
        }
        Some(*r)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::concat_meshes;

    const EPS: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    /// Recovers the center and radius of an outline mesh from two opposite
    /// perimeter points.
    fn center_and_radius(mesh: &Mesh) -> (Vec2, f32) {
        let n = mesh.vertex_count();
        let a = mesh.vertices[n - 1].position.truncate();
        let b = mesh.vertices[n / 2 - 1].position.truncate();
        ((a + b) * 0.5, (a - b).length() * 0.5)
    }

    #[test]
    fn perimeter_points_are_on_the_circle() {
        for segments in [3, 4, 7, 64, 200] {
            let center = Vec2::new(12.5, -3.0);
            let mesh = generate_circle(center, 40.0, segments);
            assert_eq!(mesh.vertex_count(), segments as usize);
            assert!(!mesh.is_indexed());
            for v in &mesh.vertices {
                assert!(approx_eq(v.position.truncate().distance(center), 40.0));
                assert_eq!(v.position.z, 0.0);
            }
        }
    }

    #[test]
    fn perimeter_spacing_is_uniform() {
        let center = Vec2::new(1.0, 2.0);
        let segments = 12;
        let mesh = generate_circle(center, 5.0, segments);
        let step = TAU / segments as f32;
        let angle = |v: &Vertex| {
            let d = v.position.truncate() - center;
            d.y.atan2(d.x)
        };
        for pair in mesh.vertices.windows(2) {
            let mut delta = angle(&pair[1]) - angle(&pair[0]);
            if delta < 0.0 {
                delta += TAU;
            }
            assert!(approx_eq(delta, step));
        }
        // the last point closes onto +X
        let last = mesh.vertices.last().unwrap().position;
        assert!(approx_eq(last.x, 6.0));
        assert!(approx_eq(last.y, 2.0));
    }

    #[test]
    fn filled_circle_wraps_around() {
        let mesh = generate_filled_circle(Vec3::new(0.0, 0.0, 3.0), 8.0, 200);
        assert_eq!(mesh.vertex_count(), 202);
        assert_eq!(mesh.draw_mode, DrawMode::TriangleFan);
        assert_eq!(mesh.vertices[0].position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(mesh.vertices[1], mesh.vertices[201]);
        assert_eq!(mesh.vertices[1].position.z, 0.0);
    }

    #[test]
    fn degenerate_segment_counts_do_not_panic() {
        assert_eq!(generate_circle(Vec2::ZERO, 1.0, 0).vertex_count(), 0);
        assert_eq!(generate_circle(Vec2::ZERO, 1.0, 1).vertex_count(), 1);
        assert_eq!(generate_filled_circle(Vec3::ZERO, 1.0, 0).vertex_count(), 1);
    }

    #[test]
    fn chained_layouts_have_geometric_radii() {
        let layouts = [
            CircleLayout::NestedInside {
                reduction: 0.8,
                amount: 6,
            },
            CircleLayout::ChainedInline {
                reduction: 0.8,
                amount: 6,
            },
            CircleLayout::ChainedInclined {
                angle_deg: 25.0,
                reduction: 0.8,
                amount: 6,
            },
        ];
        for layout in layouts {
            let params = CircleLayoutParams {
                center: Vec2::new(-500.0, 0.0),
                radius: 150.0,
                segment_count: 200,
                layout,
            };
            let circles = generate_circle_layout(&params);
            assert_eq!(circles.len(), 6);
            assert_eq!(concat_meshes(&circles).vertex_count(), 6 * 200);
            for (i, circle) in circles.iter().enumerate() {
                let (_, r) = center_and_radius(circle);
                assert!(approx_eq(r, 150.0 * 0.8f32.powi(i as i32)), "{layout:?} #{i}");
            }
        }
    }

    #[test]
    fn nested_circles_share_the_left_edge() {
        let params = CircleLayoutParams {
            center: Vec2::new(0.0, 100.0),
            radius: 400.0,
            segment_count: 64,
            layout: CircleLayout::NestedInside {
                reduction: 0.8,
                amount: 6,
            },
        };
        for circle in generate_circle_layout(&params) {
            let (c, r) = center_and_radius(&circle);
            assert!(approx_eq(c.x - r, -400.0));
            assert!(approx_eq(c.y, 100.0));
        }
    }

    #[test]
    fn inline_circles_are_tangent() {
        let params = CircleLayoutParams {
            center: Vec2::new(-500.0, 0.0),
            radius: 200.0,
            segment_count: 64,
            layout: CircleLayout::ChainedInline {
                reduction: 0.8,
                amount: 6,
            },
        };
        let circles = generate_circle_layout(&params);
        for pair in circles.windows(2) {
            let (c0, r0) = center_and_radius(&pair[0]);
            let (c1, r1) = center_and_radius(&pair[1]);
            assert!(approx_eq(c0.distance(c1), r0 + r1));
            assert!(approx_eq(c1.y, 0.0));
        }
    }

    #[test]
    fn inclined_circles_follow_the_direction() {
        let angle_deg = 25.0f32;
        let params = CircleLayoutParams {
            center: Vec2::new(-500.0, 0.0),
            radius: 150.0,
            segment_count: 64,
            layout: CircleLayout::ChainedInclined {
                angle_deg,
                reduction: 0.8,
                amount: 6,
            },
        };
        let circles = generate_circle_layout(&params);
        let dir = Vec2::from_angle(angle_deg.to_radians());
        let mut expected = 150.0;
        for circle in circles.iter().skip(1) {
            let (c, r) = center_and_radius(circle);
            expected += r;
            let offset = c - params.center;
            assert!(approx_eq(offset.length(), expected));
            assert!(approx_eq(offset.normalize().dot(dir), 1.0));
            expected += r;
        }
    }

    #[test]
    fn zero_amount_yields_nothing() {
        let params = CircleLayoutParams {
            center: Vec2::ZERO,
            radius: 1.0,
            segment_count: 16,
            layout: CircleLayout::ChainedInline {
                reduction: 0.5,
                amount: 0,
            },
        };
        assert!(generate_circle_layout(&params).is_empty());
    }
}

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Interleaved vertex as handed to a renderer surface.
///
/// Only `position` is always meaningful, the owning [`Mesh`] records which of
/// the remaining attributes were filled in by its generator.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
    pub color: Vec3,
}

impl Vertex {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_tex_coord(mut self, tex_coord: Vec2) -> Self {
        self.tex_coord = tex_coord;
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}

/// Which optional vertex attributes carry data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexAttributes {
    pub normal: bool,
    pub tex_coord: bool,
    pub color: bool,
}

impl VertexAttributes {
    pub const POSITION_ONLY: Self = Self {
        normal: false,
        tex_coord: false,
        color: false,
    };

    /// The OR of both attribute sets, used when meshes get concatenated.
    pub fn union(self, other: Self) -> Self {
        Self {
            normal: self.normal || other.normal,
            tex_coord: self.tex_coord || other.tex_coord,
            color: self.color || other.color,
        }
    }
}

/// Primitive assembly the consumer should use for a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    TriangleFan,
    LineLoop,
    Lines,
}

/// Ordered vertices plus optional triangle indices.
///
/// When `indices` is non-empty every index is `< vertices.len()` and the count
/// is a multiple of 3.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub attributes: VertexAttributes,
    pub draw_mode: DrawMode,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, draw_mode: DrawMode) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
            attributes: VertexAttributes::POSITION_ONLY,
            draw_mode,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = indices;
        self
    }

    pub fn with_attributes(mut self, attributes: VertexAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of filled triangles, line meshes have none.
    pub fn triangle_count(&self) -> usize {
        let n = if self.is_indexed() {
            self.indices.len()
        } else {
            self.vertices.len()
        };
        match self.draw_mode {
            DrawMode::Triangles => n / 3,
            DrawMode::TriangleFan => n.saturating_sub(2),
            DrawMode::LineLoop | DrawMode::Lines => 0,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Checks the index invariants, returns the first offending index position.
    pub fn check_indices(&self) -> Result<(), usize> {
        if self.indices.len() % 3 != 0 {
            return Err(self.indices.len());
        }
        let count = self.vertices.len() as u32;
        match self.indices.iter().position(|&i| i >= count) {
            Some(pos) => Err(pos),
            None => Ok(()),
        }
    }
}

/// Appends meshes one after another, rebasing indices of the later ones.
///
/// The draw mode of the first mesh wins, an empty input yields an empty
/// line-loop mesh.
pub fn concat_meshes(meshes: &[Mesh]) -> Mesh {
    let draw_mode = meshes
        .first()
        .map(|m| m.draw_mode)
        .unwrap_or(DrawMode::LineLoop);

    let vertex_total = meshes.iter().map(Mesh::vertex_count).sum();
    let index_total = meshes.iter().map(|m| m.indices.len()).sum();
    let mut vertices = Vec::with_capacity(vertex_total);
    let mut indices = Vec::with_capacity(index_total);
    let mut attributes = VertexAttributes::POSITION_ONLY;

    for mesh in meshes {
        let base = vertices.len() as u32;
        indices.extend(mesh.indices.iter().map(|i| i + base));
        vertices.extend_from_slice(&mesh.vertices);
        attributes = attributes.union(mesh.attributes);
    }

    Mesh {
        vertices,
        indices,
        attributes,
        draw_mode,
    }
}

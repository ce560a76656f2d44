use glam::{Mat4, Vec3, Vec4};

use crate::error::LabResult;
use crate::geom::Mesh;

/// Opaque reference to a mesh uploaded to a [`RendererSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) usize);

/// Per-draw uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Projection * view * model.
    pub mvp: Mat4,
    /// Flat color override, `None` uses the vertex colors.
    pub color: Option<Vec3>,
}

impl DrawParams {
    pub fn new(mvp: Mat4) -> Self {
        Self { mvp, color: None }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = Some(color);
        self
    }
}

/// Something meshes can be drawn on.
///
/// The surface owns buffer lifetimes: meshes are uploaded once and drawn by
/// handle every frame between [`begin_frame`](Self::begin_frame) and
/// [`end_frame`](Self::end_frame).
pub trait RendererSurface {
    fn upload(&mut self, name: &str, mesh: &Mesh) -> LabResult<MeshHandle>;

    fn begin_frame(&mut self, clear_color: Vec4);

    /// Drawing an unknown handle or outside a frame is a programmer error and
    /// panics.
    fn draw(&mut self, handle: MeshHandle, params: &DrawParams);

    fn end_frame(&mut self);
}

use glam::Vec4;

use super::{DrawParams, MeshHandle, RendererSurface};
use crate::error::LabResult;
use crate::geom::{DrawMode, Mesh, Vertex};

/// What the surface kept of an uploaded mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMesh {
    pub name: String,
    pub draw_mode: DrawMode,
    pub vertex_count: usize,
    pub index_count: usize,
    pub vertex_bytes: usize,
    pub index_bytes: usize,
}

/// A [`RendererSurface`] without a GPU.
///
/// Uploads are reduced to their buffer sizes and draws are only counted, which
/// is enough to drive the labs in tests and on machines without a display.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    meshes: Vec<UploadedMesh>,
    in_frame: bool,
    clear_color: Vec4,
    frame_draws: usize,
    last_frame_draws: usize,
    frames: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&UploadedMesh> {
        self.meshes.get(handle.0)
    }

    pub fn meshes(&self) -> &[UploadedMesh] {
        &self.meshes
    }

    /// Bytes held by all uploaded vertex and index buffers.
    pub fn uploaded_bytes(&self) -> usize {
        self.meshes
            .iter()
            .map(|m| m.vertex_bytes + m.index_bytes)
            .sum()
    }

    /// Draws issued by the last finished frame.
    pub fn last_frame_draws(&self) -> usize {
        self.last_frame_draws
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }
}

impl RendererSurface for HeadlessSurface {
    fn upload(&mut self, name: &str, mesh: &Mesh) -> LabResult<MeshHandle> {
        if let Err(at) = mesh.check_indices() {
            panic!(
                "mesh {:?} has a bad index list at position {} ({} vertices)",
                name,
                at,
                mesh.vertex_count()
            );
        }
        let vertex_bytes = bytemuck::cast_slice::<Vertex, u8>(&mesh.vertices).len();
        let index_bytes = bytemuck::cast_slice::<u32, u8>(&mesh.indices).len();

        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(UploadedMesh {
            name: name.to_string(),
            draw_mode: mesh.draw_mode,
            vertex_count: mesh.vertex_count(),
            index_count: mesh.indices.len(),
            vertex_bytes,
            index_bytes,
        });
        log::trace!(
            "Uploaded mesh {:?} as {:?}: {} + {} bytes",
            name,
            handle,
            vertex_bytes,
            index_bytes
        );
        Ok(handle)
    }

    fn begin_frame(&mut self, clear_color: Vec4) {
        assert!(!self.in_frame, "begin_frame called twice without end_frame");
        self.in_frame = true;
        self.clear_color = clear_color;
        self.frame_draws = 0;
    }

    fn draw(&mut self, handle: MeshHandle, params: &DrawParams) {
        assert!(self.in_frame, "draw called outside of a frame");
        assert!(
            handle.0 < self.meshes.len(),
            "unknown mesh handle {:?}",
            handle
        );
        debug_assert!(
            params.mvp.is_finite(),
            "non-finite mvp for mesh {:?}",
            self.meshes[handle.0].name
        );
        self.frame_draws += 1;
    }

    fn end_frame(&mut self) {
        assert!(self.in_frame, "end_frame called without begin_frame");
        self.in_frame = false;
        self.last_frame_draws = self.frame_draws;
        self.frames += 1;
        log::trace!("Frame {} issued {} draws", self.frames, self.last_frame_draws);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{generate_circle, generate_terrain_mesh};
    use crate::heightfield::HeightField;
    use glam::{Mat4, Vec2};
    use std::mem::size_of;

    #[test]
    fn upload_records_buffer_sizes() {
        let mut surface = HeadlessSurface::new();
        let circle = generate_circle(Vec2::ZERO, 1.0, 12);
        let field = HeightField::from_fn(3, 4, 1.0, 1.0, |_, _| 0.0).unwrap();
        let terrain = generate_terrain_mesh(&field);

        let a = surface.upload("circle", &circle).unwrap();
        let b = surface.upload("terrain", &terrain).unwrap();
        assert_ne!(a, b);

        let circle_info = surface.mesh(a).unwrap();
        assert_eq!(circle_info.vertex_bytes, 12 * size_of::<Vertex>());
        assert_eq!(circle_info.index_bytes, 0);
        assert_eq!(circle_info.draw_mode, DrawMode::LineLoop);

        let terrain_info = surface.mesh(b).unwrap();
        assert_eq!(terrain_info.index_count, 2 * 2 * 3 * 3);
        assert_eq!(terrain_info.index_bytes, terrain_info.index_count * 4);
        assert_eq!(
            surface.uploaded_bytes(),
            circle_info.vertex_bytes + terrain_info.vertex_bytes + terrain_info.index_bytes
        );
    }

    #[test]
    fn counts_draws_per_frame() {
        let mut surface = HeadlessSurface::new();
        let handle = surface
            .upload("circle", &generate_circle(Vec2::ZERO, 1.0, 8))
            .unwrap();
        let params = DrawParams::new(Mat4::IDENTITY);

        for draws in [3, 1] {
            surface.begin_frame(Vec4::ONE);
            for _ in 0..draws {
                surface.draw(handle, &params);
            }
            surface.end_frame();
            assert_eq!(surface.last_frame_draws(), draws);
        }
        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.clear_color(), Vec4::ONE);
    }

    #[test]
    #[should_panic(expected = "unknown mesh handle")]
    fn unknown_handle_panics() {
        let mut surface = HeadlessSurface::new();
        surface.begin_frame(Vec4::ZERO);
        surface.draw(MeshHandle(7), &DrawParams::new(Mat4::IDENTITY));
    }

    #[test]
    #[should_panic(expected = "outside of a frame")]
    fn draw_outside_frame_panics() {
        let mut surface = HeadlessSurface::new();
        let handle = surface
            .upload("circle", &generate_circle(Vec2::ZERO, 1.0, 8))
            .unwrap();
        surface.draw(handle, &DrawParams::new(Mat4::IDENTITY));
    }
}

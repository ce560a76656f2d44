use comfy_table::{Cell, Table};

use crate::geom::Mesh;

#[derive(Debug)]
struct Row {
    name: String,
    vertices: usize,
    indices: usize,
    triangles: usize,
}

/// Collects generated meshes and prints them as one table.
#[derive(Debug, Default)]
pub struct MeshStats {
    rows: Vec<Row>,
}

impl MeshStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one mesh under `name`, in call order.
    pub fn record(&mut self, name: &str, mesh: &Mesh) {
        self.rows.push(Row {
            name: name.to_string(),
            vertices: mesh.vertex_count(),
            indices: mesh.indices.len(),
            triangles: mesh.triangle_count(),
        });
    }

    pub fn total_vertices(&self) -> usize {
        self.rows.iter().map(|r| r.vertices).sum()
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Mesh"),
            Cell::new("Vertices"),
            Cell::new("Indices"),
            Cell::new("Triangles"),
        ]);
        for row in &self.rows {
            table.add_row(vec![
                Cell::new(&row.name),
                Cell::new(row.vertices),
                Cell::new(row.indices),
                Cell::new(row.triangles),
            ]);
        }
        table
    }

    /// Emits a debug-level table of every recorded mesh.
    pub fn summary(&self) {
        log::debug!("\n{}", self.table());
    }
}

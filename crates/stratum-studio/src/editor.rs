//! Interactive polygon editor: click or drag to place vertices, then triangulate.

use stratum_engine::geometry::Result;
use stratum_engine::render::Drawable;
use stratum_engine::{distance, Color, Point, VertexObject};

/// Minimum spacing between vertices placed while dragging, in logical px.
pub const DRAG_SPACING: f32 = 5.0;

const POLYGON_COLOR: Color = Color::new(1.0, 0.0, 0.0, 0.5);
const WIRE_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const POINT_RADIUS: f32 = 2.0;

#[derive(Debug, Default)]
pub struct Editor {
    pub polygon: VertexObject,
    pub wireframe: bool,
    held: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self { polygon: VertexObject::default(), wireframe: true, held: false }
    }

    /// Mouse button down: place a vertex and start dragging.
    pub fn press(&mut self, at: Point) {
        self.polygon.push_vertex(at);
        self.held = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Places a vertex at `at` while dragging, once it is far enough from the last one.
    pub fn drag_to(&mut self, at: Point) -> bool {
        let Some(&last) = self.polygon.vertices.last() else { return false };
        if !self.held || distance(last, at) <= DRAG_SPACING {
            return false;
        }
        self.polygon.push_vertex(at);
        true
    }

    /// Triangulates the outline, or drops an existing triangulation.
    ///
    /// Returns the triangle count when a triangulation was produced.
    pub fn toggle_triangulation(&mut self) -> Result<Option<usize>> {
        if !self.polygon.indices.is_empty() {
            self.polygon.indices.clear();
            return Ok(None);
        }
        self.polygon.triangulate()?;
        Ok(Some(self.polygon.triangle_count()))
    }

    #[inline]
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.polygon.clear();
    }

    #[inline]
    pub fn undo(&mut self) {
        self.polygon.pop_vertex();
    }

    /// Filled polygon once triangulated, otherwise the vertices and a closed preview outline.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out = Vec::new();

        if self.polygon.indices.len() >= 3 {
            out.push(Drawable::polygon(self.polygon.clone(), POLYGON_COLOR));
        } else if !self.polygon.is_empty() {
            out.extend(
                self.polygon
                    .vertices
                    .iter()
                    .map(|&p| Drawable::circle(p, POINT_RADIUS, WIRE_COLOR)),
            );
            out.push(Drawable::outline(self.polygon.vertices.clone(), WIRE_COLOR));
        }

        if self.wireframe {
            out.extend(Drawable::wireframe(&self.polygon, WIRE_COLOR));
        }
        out
    }
}

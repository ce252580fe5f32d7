use crate::coords::{Point, Rect};
use crate::geometry::{Result, VertexObject};
use crate::paint::Color;

use super::texture::TextureId;

/// Discriminant of [`Drawable`], used to index the renderer's dispatch table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Texture,
    Polygon,
    Circle,
    Lines,
}

impl DrawKind {
    pub const COUNT: usize = 4;

    pub const ALL: [DrawKind; Self::COUNT] =
        [DrawKind::Texture, DrawKind::Polygon, DrawKind::Circle, DrawKind::Lines];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How the index list of a [`DrawGeometry`] is assembled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Topology {
    TriangleList,
    LineStrip,
}

impl Topology {
    pub(crate) fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        }
    }
}

/// CPU payload of one draw call: interleaved vertex floats plus indices.
///
/// Each vertex is `x, y`, followed by `u, v` for textured draws.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawGeometry {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub topology: Topology,
    pub floats_per_vertex: usize,
}

impl DrawGeometry {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn from_object(object: &VertexObject, topology: Topology) -> Self {
        let (vertices, indices) = object.vertex_array();
        Self { vertices, indices, topology, floats_per_vertex: 2 }
    }

    fn empty(topology: Topology) -> Self {
        Self { vertices: Vec::new(), indices: Vec::new(), topology, floats_per_vertex: 2 }
    }
}

/// Texture coordinates for the corners of a quad, in the order the rectangle
/// constructors emit them. Rows are stored top first, so `v = 1` is the bottom.
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [0.0, 0.0], [1.0, 1.0], [1.0, 0.0]];

/// Textured shape.
///
/// A four-vertex `object` is taken as a quad from the rectangle constructors
/// (possibly moved, rotated or scaled since) and gets the whole image. Any
/// other shape samples the image stretched over its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDraw {
    pub texture: TextureId,
    pub object: VertexObject,
    /// Multiplied with the sampled texel; white leaves the image unchanged.
    pub tint: Color,
}

/// Filled, already triangulated shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonDraw {
    pub object: VertexObject,
    pub color: Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleDraw {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// Connected line segments through `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDraw {
    pub points: Vec<Point>,
    pub color: Color,
    /// Adds a segment from the last point back to the first.
    pub closed: bool,
}

/// Everything the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Texture(TextureDraw),
    Polygon(PolygonDraw),
    Circle(CircleDraw),
    Lines(LineDraw),
}

impl Drawable {
    #[inline]
    pub fn texture(texture: TextureId, object: VertexObject) -> Self {
        Drawable::Texture(TextureDraw { texture, object, tint: Color::white() })
    }

    #[inline]
    pub fn polygon(object: VertexObject, color: Color) -> Self {
        Drawable::Polygon(PolygonDraw { object, color })
    }

    #[inline]
    pub fn circle(center: Point, radius: f32, color: Color) -> Self {
        Drawable::Circle(CircleDraw { center, radius, color })
    }

    #[inline]
    pub fn lines(points: impl Into<Vec<Point>>, color: Color) -> Self {
        Drawable::Lines(LineDraw { points: points.into(), color, closed: false })
    }

    #[inline]
    pub fn outline(points: impl Into<Vec<Point>>, color: Color) -> Self {
        Drawable::Lines(LineDraw { points: points.into(), color, closed: true })
    }

    /// One closed outline per triangle of `object`'s index list.
    ///
    /// Trailing indices that do not form a whole triangle, and triangles
    /// referring to missing vertices, are skipped.
    pub fn wireframe(object: &VertexObject, color: Color) -> impl Iterator<Item = Drawable> + '_ {
        object.indices.chunks_exact(3).filter_map(move |t| {
            let points = t
                .iter()
                .map(|&i| object.vertices.get(i as usize).copied())
                .collect::<Option<Vec<Point>>>()?;
            Some(Drawable::outline(points, color))
        })
    }

    #[inline]
    pub fn kind(&self) -> DrawKind {
        match self {
            Drawable::Texture(_) => DrawKind::Texture,
            Drawable::Polygon(_) => DrawKind::Polygon,
            Drawable::Circle(_) => DrawKind::Circle,
            Drawable::Lines(_) => DrawKind::Lines,
        }
    }

    /// Flat color (or tint) the drawable is painted with.
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Drawable::Texture(t) => t.tint,
            Drawable::Polygon(p) => p.color,
            Drawable::Circle(c) => c.color,
            Drawable::Lines(l) => l.color,
        }
    }

    /// Lowers the drawable to its vertex/index payload.
    ///
    /// Fails with `IndexOutOfBounds` when a texture or polygon object breaks
    /// its index invariant. An empty result means there is nothing to draw.
    pub fn geometry(&self) -> Result<DrawGeometry> {
        match self {
            Drawable::Texture(t) => {
                t.object.check_indices()?;
                Ok(texture_geometry(&t.object))
            }
            Drawable::Polygon(p) => {
                p.object.check_indices()?;
                Ok(DrawGeometry::from_object(&p.object, Topology::TriangleList))
            }
            Drawable::Circle(c) => Ok(circle_geometry(c)),
            Drawable::Lines(l) => Ok(line_geometry(l)),
        }
    }

    /// Per-draw shape parameters passed to the shaders: `(cx, cy, r, 0)` for
    /// circles, zero otherwise.
    pub fn shape_params(&self) -> [f32; 4] {
        match self {
            Drawable::Circle(c) => [c.center.x, c.center.y, c.radius.abs(), 0.0],
            _ => [0.0; 4],
        }
    }
}

impl From<PolygonDraw> for Drawable {
    fn from(d: PolygonDraw) -> Self {
        Drawable::Polygon(d)
    }
}

impl From<CircleDraw> for Drawable {
    fn from(d: CircleDraw) -> Self {
        Drawable::Circle(d)
    }
}

impl From<LineDraw> for Drawable {
    fn from(d: LineDraw) -> Self {
        Drawable::Lines(d)
    }
}

impl From<TextureDraw> for Drawable {
    fn from(d: TextureDraw) -> Self {
        Drawable::Texture(d)
    }
}

/// Square of side `2r` around the center; the fragment stage cuts the disc.
fn circle_geometry(c: &CircleDraw) -> DrawGeometry {
    let r = c.radius.abs();
    if r == 0.0 || !r.is_finite() {
        return DrawGeometry::empty(Topology::TriangleList);
    }

    let quad = VertexObject::square(c.center, 2.0 * r);
    DrawGeometry::from_object(&quad, Topology::TriangleList)
}

fn line_geometry(l: &LineDraw) -> DrawGeometry {
    let mut vertices = Vec::with_capacity((l.points.len() + 1) * 2);
    for p in &l.points {
        vertices.push(p.x);
        vertices.push(p.y);
    }

    // A strip needs two points.
    let mut count = if l.points.len() >= 2 { l.points.len() as u32 } else { 0 };
    if l.closed && count > 0 {
        vertices.push(l.points[0].x);
        vertices.push(l.points[0].y);
        count += 1;
    }

    DrawGeometry {
        vertices,
        indices: (0..count).collect(),
        topology: Topology::LineStrip,
        floats_per_vertex: 2,
    }
}

fn texture_geometry(object: &VertexObject) -> DrawGeometry {
    let Rect { x1, y1, x2, y2 } = object.bounds();
    let w = (x2 - x1).max(f32::EPSILON);
    let h = (y2 - y1).max(f32::EPSILON);
    let quad = object.len() == QUAD_UVS.len();

    let mut vertices = Vec::with_capacity(object.len() * 4);
    for (i, p) in object.vertices.iter().enumerate() {
        let [u, v] = if quad { QUAD_UVS[i] } else { [(p.x - x1) / w, (y2 - p.y) / h] };
        vertices.extend_from_slice(&[p.x, p.y, u, v]);
    }

    DrawGeometry {
        vertices,
        indices: object.indices.clone(),
        topology: Topology::TriangleList,
        floats_per_vertex: 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryError;

    fn p(x: f32, y: f32) -> Point { Point::new(x, y) }

    // ── kind ──────────────────────────────────────────────────────────────

    #[test]
    fn kind_indexes_are_dense_and_ordered() {
        for (i, kind) in DrawKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        let d = Drawable::circle(p(0.0, 0.0), 1.0, Color::black());
        assert_eq!(d.kind(), DrawKind::Circle);
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_lowers_to_bounding_quad() {
        let g = Drawable::circle(p(10.0, 20.0), 5.0, Color::white()).geometry().unwrap();
        assert_eq!(g.topology, Topology::TriangleList);
        assert_eq!(g.vertices, vec![5.0, 15.0, 5.0, 25.0, 15.0, 15.0, 15.0, 25.0]);
        assert_eq!(g.indices, vec![0, 1, 2, 1, 2, 3]);
    }

    #[test]
    fn zero_radius_circle_is_empty() {
        let g = Drawable::circle(p(1.0, 1.0), 0.0, Color::white()).geometry().unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn circle_shape_params() {
        let d = Drawable::circle(p(3.0, 4.0), -2.0, Color::white());
        assert_eq!(d.shape_params(), [3.0, 4.0, 2.0, 0.0]);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn open_lines_index_every_point() {
        let g = Drawable::lines(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], Color::black())
            .geometry()
            .unwrap();
        assert_eq!(g.topology, Topology::LineStrip);
        assert_eq!(g.indices, vec![0, 1, 2]);
        assert_eq!(g.vertices.len(), 6);
    }

    #[test]
    fn closed_lines_repeat_first_point() {
        let g = Drawable::outline(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], Color::black())
            .geometry()
            .unwrap();
        assert_eq!(g.indices, vec![0, 1, 2, 3]);
        assert_eq!(&g.vertices[6..], &[0.0, 0.0]);
    }

    #[test]
    fn single_point_line_is_empty() {
        let g = Drawable::outline(vec![p(0.0, 0.0)], Color::black()).geometry().unwrap();
        assert!(g.is_empty());
    }

    // ── polygon / texture ─────────────────────────────────────────────────

    #[test]
    fn untriangulated_polygon_has_nothing_to_draw() {
        let outline = VertexObject::from_points(vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)]);
        let g = Drawable::polygon(outline, Color::black()).geometry().unwrap();
        assert!(g.is_empty());
        assert_eq!(g.vertices.len(), 6);
    }

    #[test]
    fn polygon_with_bad_index_is_rejected() {
        let bad = VertexObject::new(vec![p(0.0, 0.0), p(1.0, 1.0)], vec![0, 1, 5]);
        assert_eq!(
            Drawable::polygon(bad, Color::black()).geometry(),
            Err(GeometryError::IndexOutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn texture_quad_interleaves_corner_uvs() {
        let quad = VertexObject::rectangle(Rect::new(10.0, 20.0, 110.0, 70.0));
        let d = Drawable::texture(TextureId(0), quad.rotated_deg(30.0).unwrap());
        assert_eq!(d.color(), Color::white());

        let g = d.geometry().unwrap();
        assert_eq!(g.floats_per_vertex, 4);
        assert_eq!(g.indices, vec![0, 1, 2, 1, 2, 3]);
        let uvs: Vec<[f32; 2]> = g.vertices.chunks_exact(4).map(|v| [v[2], v[3]]).collect();
        assert_eq!(uvs, QUAD_UVS.to_vec());
    }

    #[test]
    fn textured_polygon_projects_bounds() {
        let tri = VertexObject::new(vec![p(0.0, 0.0), p(0.0, 10.0), p(20.0, 0.0)], vec![0, 1, 2]);
        let g = Drawable::texture(TextureId(1), tri).geometry().unwrap();
        assert_eq!(
            g.vertices,
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 10.0, 0.0, 0.0, 20.0, 0.0, 1.0, 1.0]
        );
    }

    // ── wireframe ─────────────────────────────────────────────────────────

    #[test]
    fn wireframe_emits_one_outline_per_triangle() {
        let v = VertexObject::new(
            vec![p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)],
            vec![0, 1, 2, 0, 2, 3, 9],
        );
        let frames: Vec<Drawable> = Drawable::wireframe(&v, Color::black()).collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(
            frames[1],
            Drawable::outline(vec![p(0.0, 0.0), p(10.0, 10.0), p(10.0, 0.0)], Color::black())
        );
    }
}

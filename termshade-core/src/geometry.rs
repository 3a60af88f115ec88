/// Shape primitives for the render pipeline
use nalgebra::{Point3, Vector3};

/// A straight segment between two points in 3D space.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub vertices: [Point3<f64>; 2],
    /// Point the segment rotates about. Constant for the shape's lifetime.
    pub origin: Point3<f64>,
}

impl Line {
    /// Create a segment rotating about its midpoint.
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            vertices: [a, b],
            origin: centroid(&[a, b]),
        }
    }

    /// Create a segment rotating about an explicit origin.
    pub fn new_about(a: Point3<f64>, b: Point3<f64>, origin: Point3<f64>) -> Self {
        Self {
            vertices: [a, b],
            origin,
        }
    }
}

/// A triangle face defined by three vertices.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Point3<f64>; 3],
    /// Point the face rotates about. Constant for the shape's lifetime.
    pub origin: Point3<f64>,
}

impl Triangle {
    /// Create a triangle rotating about its centroid.
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self {
            vertices: [v0, v1, v2],
            origin: centroid(&[v0, v1, v2]),
        }
    }

    /// Create a triangle rotating about an explicit origin.
    pub fn new_about(
        v0: Point3<f64>,
        v1: Point3<f64>,
        v2: Point3<f64>,
        origin: Point3<f64>,
    ) -> Self {
        Self {
            vertices: [v0, v1, v2],
            origin,
        }
    }
}

/// A quad face defined by four vertices in perimeter order.
#[derive(Debug, Clone, Copy)]
pub struct Quad {
    pub vertices: [Point3<f64>; 4],
    /// Point the face rotates about. Constant for the shape's lifetime.
    pub origin: Point3<f64>,
}

impl Quad {
    /// Create a quad rotating about its centroid.
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>, v3: Point3<f64>) -> Self {
        Self {
            vertices: [v0, v1, v2, v3],
            origin: centroid(&[v0, v1, v2, v3]),
        }
    }

    /// Create a quad rotating about an explicit origin.
    pub fn new_about(
        v0: Point3<f64>,
        v1: Point3<f64>,
        v2: Point3<f64>,
        v3: Point3<f64>,
        origin: Point3<f64>,
    ) -> Self {
        Self {
            vertices: [v0, v1, v2, v3],
            origin,
        }
    }
}

/// A renderable shape: a fixed vertex set plus its rotation origin.
///
/// Vertex count is fixed per variant and never changes at runtime.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Line(Line),
    Triangle(Triangle),
    Quad(Quad),
}

impl Shape {
    /// Vertices in perimeter order.
    pub fn vertices(&self) -> &[Point3<f64>] {
        match self {
            Shape::Line(line) => &line.vertices,
            Shape::Triangle(triangle) => &triangle.vertices,
            Shape::Quad(quad) => &quad.vertices,
        }
    }

    /// Rotation origin.
    pub fn origin(&self) -> Point3<f64> {
        match self {
            Shape::Line(line) => line.origin,
            Shape::Triangle(triangle) => triangle.origin,
            Shape::Quad(quad) => quad.origin,
        }
    }
}

/// An ordered collection of shapes. Scene order is composite order.
#[derive(Debug, Clone)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

fn centroid(points: &[Point3<f64>]) -> Point3<f64> {
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

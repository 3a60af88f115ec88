/// Point interpolation: expands sparse vertex sets into renderable clouds
use nalgebra::Point3;

use crate::geometry::Shape;

/// Interpolation steps along each perimeter edge.
pub const EDGE_STEPS: usize = 64;

/// Grid resolution for face interior fill.
pub const FACE_STEPS: usize = 32;

/// Sample counts for edge and face interpolation.
///
/// Configuration constants, fixed at startup; never derived at runtime.
#[derive(Debug, Clone, Copy)]
pub struct SampleDensity {
    pub edge_steps: usize,
    pub face_steps: usize,
}

impl Default for SampleDensity {
    fn default() -> Self {
        Self {
            edge_steps: EDGE_STEPS,
            face_steps: FACE_STEPS,
        }
    }
}

/// Linearly interpolate between `a` and `b` at parameter `t`.
pub fn lerp(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords.lerp(&b.coords, t))
}

/// Sample `steps + 1` evenly spaced points from `a` to `b`, both endpoints
/// included.
pub fn edge_points(a: &Point3<f64>, b: &Point3<f64>, steps: usize) -> Vec<Point3<f64>> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| lerp(a, b, i as f64 / steps as f64))
        .collect()
}

/// Expand a shape into the point cloud rendered for one frame.
///
/// Perimeter edges are sampled at `density.edge_steps`; triangle interiors
/// are filled with a barycentric grid and quad interiors with a bilinear
/// grid at `density.face_steps`. Output ordering is unspecified, and the
/// cloud is recomputed fresh every frame.
pub fn sample_shape(shape: &Shape, density: &SampleDensity) -> Vec<Point3<f64>> {
    let mut points = Vec::new();

    let vertices = shape.vertices();
    // A two-vertex shape has a single edge, not one per direction.
    let edge_count = if vertices.len() == 2 {
        1
    } else {
        vertices.len()
    };
    for i in 0..edge_count {
        let j = (i + 1) % vertices.len();
        points.extend(edge_points(&vertices[i], &vertices[j], density.edge_steps));
    }

    match shape {
        Shape::Line(_) => {}
        Shape::Triangle(triangle) => {
            fill_triangle(&triangle.vertices, density.face_steps, &mut points)
        }
        Shape::Quad(quad) => fill_quad(&quad.vertices, density.face_steps, &mut points),
    }

    points
}

/// Barycentric grid over the triangle: w0 + w1 + w2 = 1, each on an even
/// lattice of `steps` subdivisions.
fn fill_triangle(vertices: &[Point3<f64>; 3], steps: usize, out: &mut Vec<Point3<f64>>) {
    let steps = steps.max(1);
    for i in 0..=steps {
        for j in 0..=(steps - i) {
            let w0 = i as f64 / steps as f64;
            let w1 = j as f64 / steps as f64;
            let w2 = 1.0 - w0 - w1;
            out.push(Point3::from(
                vertices[0].coords * w0 + vertices[1].coords * w1 + vertices[2].coords * w2,
            ));
        }
    }
}

/// Bilinear (u, v) grid over the quad, blending opposite perimeter edges.
fn fill_quad(vertices: &[Point3<f64>; 4], steps: usize, out: &mut Vec<Point3<f64>>) {
    let steps = steps.max(1);
    for i in 0..=steps {
        let u = i as f64 / steps as f64;
        let near_edge = lerp(&vertices[0], &vertices[1], u);
        let far_edge = lerp(&vertices[3], &vertices[2], u);
        for j in 0..=steps {
            out.push(lerp(&near_edge, &far_edge, j as f64 / steps as f64));
        }
    }
}

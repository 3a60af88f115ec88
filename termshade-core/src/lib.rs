/// Termshade Core Library - Shape-to-character-grid render pipeline
///
/// This library provides the stateless core for rendering small 3D shapes
/// as animated ASCII art: vertex interpolation, rotation about a per-shape
/// origin, perspective projection, and depth-to-character shading, composed
/// into one character grid per frame.

pub mod frame;
pub mod geometry;
pub mod interpolate;
pub mod projection;
pub mod shade;
pub mod transform;

// Re-export commonly used types
pub use frame::{Compositor, FrameGrid};
pub use geometry::{Line, Quad, Scene, Shape, Triangle};
pub use interpolate::{edge_points, lerp, sample_shape, SampleDensity};
pub use projection::{Camera, ScreenPoint, PROJECTION_EPSILON};
pub use shade::{DepthShader, ILLUM_RAMP};
pub use transform::{RotationState, Transform};

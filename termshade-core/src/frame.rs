/// Frame grid and per-frame composition
use std::fmt;

use crate::geometry::Scene;
use crate::interpolate::{sample_shape, SampleDensity};
use crate::projection::Camera;
use crate::shade::{DepthShader, ILLUM_RAMP};
use crate::transform::{RotationState, Transform};

/// One rendered frame: a rectangular character buffer, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl FrameGrid {
    /// Create a grid with every cell set to `background`.
    pub fn new(width: usize, height: usize, background: char) -> Self {
        Self {
            width,
            height,
            cells: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Write `ch` at `(col, row)`, overwriting any previous character.
    /// Coordinates outside the grid are silently dropped.
    pub fn put(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row * self.width + col] = ch;
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1))
    }
}

impl fmt::Display for FrameGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &ch in row {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Composites scenes into frame grids.
///
/// Bundles the frame-invariant configuration; `compose` keeps no state
/// across calls and each returned grid is handed off by value.
#[derive(Debug, Clone)]
pub struct Compositor {
    pub width: usize,
    pub height: usize,
    pub camera: Camera,
    pub shader: DepthShader,
    pub density: SampleDensity,
    pub background: char,
}

impl Compositor {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            camera: Camera::default(),
            shader: DepthShader::default(),
            density: SampleDensity::default(),
            background: ILLUM_RAMP[0],
        }
    }

    /// Render one frame: interpolate, rotate, project, shade, write.
    ///
    /// Shapes composite in scene order and points in sample order; when two
    /// points land on the same cell the last write wins. There is no depth
    /// buffering, so draw order determines visibility where footprints
    /// overlap.
    pub fn compose(&self, scene: &Scene, rotation: &RotationState) -> FrameGrid {
        let mut grid = FrameGrid::new(self.width, self.height, self.background);

        for shape in &scene.shapes {
            let origin = shape.origin();
            for point in sample_shape(shape, &self.density) {
                let rotated = Transform::rotate_about(&point, &origin, rotation);
                if let Some(screen) = self.camera.project(&rotated, self.width, self.height) {
                    grid.put(screen.col, screen.row, self.shader.shade(screen.depth));
                }
            }
        }

        grid
    }
}

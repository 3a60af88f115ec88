/// Perspective projection onto the character grid
use nalgebra::Point3;

/// Floor for the perspective divisor `z + view_distance`. Points at or
/// below it are dropped for the frame instead of projected.
pub const PROJECTION_EPSILON: f64 = 1e-6;

/// A projected grid position with its depth term.
///
/// Transient: produced per frame and discarded after compositing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub col: i32,
    pub row: i32,
    /// Perspective depth `z + view_distance`; smaller is closer.
    pub depth: f64,
}

/// Camera configuration for perspective projection.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Distance from the viewer to the screen plane.
    pub view_distance: f64,
    /// Screen-space magnification applied after the perspective divide.
    pub scale: f64,
}

impl Camera {
    pub fn new(view_distance: f64, scale: f64) -> Self {
        Self {
            view_distance,
            scale,
        }
    }

    /// Project a rotated point onto a `width` x `height` character grid.
    ///
    /// Returns `None` when the depth divisor `z + view_distance` falls at
    /// or below `PROJECTION_EPSILON`. Coordinates outside the grid are not
    /// clipped here; the compositor drops them on write.
    pub fn project(&self, point: &Point3<f64>, width: usize, height: usize) -> Option<ScreenPoint> {
        let depth = point.z + self.view_distance;
        if depth <= PROJECTION_EPSILON {
            return None;
        }

        let ratio = self.view_distance / depth;
        let col = (point.x * self.scale * ratio + width as f64 / 2.0).round() as i32;
        // The row axis grows downward.
        let row = (height as f64 / 2.0 - point.y * self.scale * ratio).round() as i32;

        Some(ScreenPoint { col, row, depth })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(20.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projects_grid_center() {
        let camera = Camera::default();
        let screen = camera
            .project(&Point3::new(0.0, 0.0, 0.0), 20, 10)
            .unwrap();
        assert_eq!(screen.col, 10);
        assert_eq!(screen.row, 5);
        assert_relative_eq!(screen.depth, 20.0);
    }

    #[test]
    fn test_perspective_shrinks_with_depth() {
        let camera = Camera::default();
        // At z = view_distance the ratio halves.
        let screen = camera
            .project(&Point3::new(4.0, 2.0, 20.0), 20, 10)
            .unwrap();
        assert_eq!(screen.col, 12);
        assert_eq!(screen.row, 4);
        assert_relative_eq!(screen.depth, 40.0);
    }

    #[test]
    fn test_row_axis_grows_downward() {
        let camera = Camera::default();
        let above = camera
            .project(&Point3::new(0.0, 3.0, 0.0), 20, 10)
            .unwrap();
        let below = camera
            .project(&Point3::new(0.0, -3.0, 0.0), 20, 10)
            .unwrap();
        assert!(above.row < below.row);
    }

    #[test]
    fn test_drops_points_behind_camera() {
        let camera = Camera::default();
        assert!(camera.project(&Point3::new(0.0, 0.0, -20.0), 20, 10).is_none());
        assert!(camera.project(&Point3::new(5.0, 5.0, -25.0), 20, 10).is_none());
    }

    #[test]
    fn test_closer_points_have_smaller_depth() {
        let camera = Camera::default();
        let near = camera.project(&Point3::new(0.0, 0.0, 0.0), 20, 10).unwrap();
        let far = camera.project(&Point3::new(0.0, 0.0, 10.0), 20, 10).unwrap();
        assert!(near.depth < far.depth);
    }
}

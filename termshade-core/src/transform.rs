/// 3D rotation angles and their application to points
use nalgebra::{Matrix4, Point3, Vector3};

/// Rotation angles around the three axes (in radians).
///
/// Owned and advanced by the render driver; the core only ever reads it.
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Advance by delta amounts (in radians).
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D rotations.
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state.
    ///
    /// Elementary right-handed rotations composed so that the X rotation
    /// applies first, then Y, then Z. The order is part of the contract:
    /// rotation composition is non-commutative.
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f64> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        rz * ry * rx
    }

    /// Rotate `point` about `origin`.
    ///
    /// Translates by -origin, applies the rotation matrix, translates back.
    /// Pure and total over all real inputs.
    pub fn rotate_about(
        point: &Point3<f64>,
        origin: &Point3<f64>,
        rotation: &RotationState,
    ) -> Point3<f64> {
        let local = point - origin;
        let rotated = Self::rotation_matrix(rotation).transform_vector(&local);
        origin + rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert_relative_eq!(state.x, 0.1);
        assert_relative_eq!(state.y, 0.2);
        assert_relative_eq!(state.z, 0.3);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert_relative_eq!(matrix, Matrix4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn_about_x() {
        let rotation = RotationState::new(FRAC_PI_2, 0.0, 0.0);
        let rotated = Transform::rotate_about(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::origin(),
            &rotation,
        );
        assert_relative_eq!(rotated, Point3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_x_applies_before_z() {
        // X then Z: (0, 1, 0) -> (0, 0, 1) -> (0, 0, 1).
        // The reverse order would land on (-1, 0, 0).
        let rotation = RotationState::new(FRAC_PI_2, 0.0, FRAC_PI_2);
        let rotated = Transform::rotate_about(
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::origin(),
            &rotation,
        );
        assert_relative_eq!(rotated, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_per_axis() {
        let point = Point3::new(4.0, -2.0, 5.0);
        let origin = Point3::new(2.0, 1.0, -3.0);
        let angles = [
            RotationState::new(0.7, 0.0, 0.0),
            RotationState::new(0.0, 0.7, 0.0),
            RotationState::new(0.0, 0.0, 0.7),
        ];
        for forward in angles {
            let back = RotationState::new(-forward.x, -forward.y, -forward.z);
            let there = Transform::rotate_about(&point, &origin, &forward);
            let back_again = Transform::rotate_about(&there, &origin, &back);
            assert_relative_eq!(back_again, point, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_full_turn_is_periodic() {
        let rotation = RotationState::new(TAU, TAU, TAU);
        let origin = Point3::new(1.0, -1.0, 2.0);
        for vertex in [
            Point3::new(-10.0, 0.0, 3.0),
            Point3::new(10.0, -10.0, 20.0),
            Point3::new(10.0, 10.0, 20.0),
        ] {
            let rotated = Transform::rotate_about(&vertex, &origin, &rotation);
            assert_relative_eq!(rotated, vertex, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let origin = Point3::new(3.0, -4.0, 5.0);
        let rotation = RotationState::new(1.1, -0.4, 2.3);
        let rotated = Transform::rotate_about(&origin, &origin, &rotation);
        assert_relative_eq!(rotated, origin, epsilon = 1e-12);
    }
}

// Vector utilities for DVec3
//
// glam's own normalize() divides by zero on a zero vector. The renderer
// needs axis-aligned and degenerate directions to pass through untouched.

use crate::{Matrix4, Vector3};

/// Extension trait for Vector3 with the renderer's vector semantics.
pub trait Vector3Ext {
    /// Unit-length copy of this vector.
    ///
    /// A zero-length vector is returned unchanged rather than becoming NaN.
    fn normalized(&self) -> Vector3;

    /// Normalize in place; no-op on a zero-length vector.
    fn normalize_in_place(&mut self);

    /// Rotate this direction by the upper-left 3x3 block of `matrix`.
    /// Translation is ignored, so this must never be used for positions.
    fn rotated_by(&self, matrix: &Matrix4) -> Vector3;
}

impl Vector3Ext for Vector3 {
    fn normalized(&self) -> Vector3 {
        let magnitude = self.length();
        if magnitude == 0.0 {
            return *self;
        }
        *self / magnitude
    }

    fn normalize_in_place(&mut self) {
        *self = self.normalized();
    }

    fn rotated_by(&self, matrix: &Matrix4) -> Vector3 {
        matrix.transform_vector3(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix4Ext;
    use std::f64::consts::PI;

    #[test]
    fn test_normalized_has_unit_length() {
        let samples = [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1.0, 2.0, -7.5),
            Vector3::new(0.0, 0.0, 1e-4),
            Vector3::new(1e6, -2e6, 3e6),
        ];

        for v in samples {
            assert!((v.normalized().length() - 1.0).abs() < 1e-9, "{:?}", v);
        }
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let zero = Vector3::ZERO;
        assert_eq!(zero.normalized(), Vector3::ZERO);

        let mut v = Vector3::ZERO;
        v.normalize_in_place();
        assert_eq!(v, Vector3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_normalize_axis_aligned() {
        let v = Vector3::new(0.0, 0.0, -5.0);
        assert_eq!(v.normalized(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_rotate_ignores_translation() {
        let m = Matrix4::translation(10.0, 20.0, 30.0);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.rotated_by(&m), v);
    }

    #[test]
    fn test_rotate_uses_upper_block() {
        // Column-major layout: element (row i, col j) lives at i + 4j.
        let m = Matrix4::from_cols_array(&[
            1.0, 2.0, 3.0, 0.0, //
            4.0, 5.0, 6.0, 0.0, //
            7.0, 8.0, 9.0, 0.0, //
            100.0, 100.0, 100.0, 1.0,
        ]);
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v.rotated_by(&m), Vector3::new(12.0, 15.0, 18.0));
    }

    #[test]
    fn test_rotate_by_rotation_matrix() {
        let m = Matrix4::rotation(0.0, PI / 2.0, 0.0);
        let v = Vector3::new(1.0, 0.0, 0.0).rotated_by(&m);

        // The Y rotation block carries X toward -Z.
        assert!((v.x - 0.0).abs() < 1e-9);
        assert!((v.y - 0.0).abs() < 1e-9);
        assert!((v.z + 1.0).abs() < 1e-9);
    }
}

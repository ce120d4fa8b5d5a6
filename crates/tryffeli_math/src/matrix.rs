// Transform constructors for DMat4
//
// Element layout follows the column-major convention used throughout the
// renderer: the value at row i, column j is stored at index i + 4j.
// glam::DMat4 already provides multiplication, transform_point3() and
// transform_vector3().

use crate::Matrix4;

/// Extension trait adding the renderer's transform constructors to Matrix4.
pub trait Matrix4Ext {
    /// The identity matrix.
    fn identity() -> Matrix4;

    /// Axis scaling by (x, y, z).
    fn scaling(x: f64, y: f64, z: f64) -> Matrix4;

    /// Translation by (x, y, z), stored in the fourth column.
    fn translation(x: f64, y: f64, z: f64) -> Matrix4;

    /// Per-axis rotation in radians, composed as `Ry * Rz * Rx`.
    ///
    /// The order is fixed; other orderings produce different orientations.
    fn rotation(x: f64, y: f64, z: f64) -> Matrix4;

    /// Perspective projection. `fov` is the full field of view in radians.
    fn perspective(fov: f64, aspect_ratio: f64, z_near: f64, z_far: f64) -> Matrix4;

    /// Map normalized device coordinates onto a `width` x `height` raster,
    /// with +Y flipped to point down.
    fn screenspace(width: f64, height: f64) -> Matrix4;
}

impl Matrix4Ext for Matrix4 {
    fn identity() -> Matrix4 {
        Matrix4::IDENTITY
    }

    fn scaling(x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::from_cols_array(&[
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::from_cols_array(&[
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, z, 1.0,
        ])
    }

    fn rotation(x: f64, y: f64, z: f64) -> Matrix4 {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();

        let rx = Matrix4::from_cols_array(&[
            1.0, 0.0, 0.0, 0.0, //
            0.0, cx, -sx, 0.0, //
            0.0, sx, cx, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);

        let ry = Matrix4::from_cols_array(&[
            cy, 0.0, -sy, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            sy, 0.0, cy, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);

        let rz = Matrix4::from_cols_array(&[
            cz, -sz, 0.0, 0.0, //
            sz, cz, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);

        (ry * rz) * rx
    }

    fn perspective(fov: f64, aspect_ratio: f64, z_near: f64, z_far: f64) -> Matrix4 {
        let fov_half = (fov / 2.0).tan();
        let z_range = z_near - z_far;

        Matrix4::from_cols_array(&[
            1.0 / (fov_half * aspect_ratio), 0.0, 0.0, 0.0, //
            0.0, 1.0 / fov_half, 0.0, 0.0, //
            0.0, 0.0, (-z_near - z_far) / z_range, 1.0, //
            0.0, 0.0, 2.0 * z_far * (z_near / z_range), 0.0,
        ])
    }

    fn screenspace(width: f64, height: f64) -> Matrix4 {
        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Matrix4::from_cols_array(&[
            half_width, 0.0, 0.0, 0.0, //
            0.0, -half_height, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            half_width - 0.5, half_height - 0.5, 0.0, 1.0,
        ])
    }
}

//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix given in row-major order, as it is
/// usually written down (`out = M * in`). euclid multiplies row vectors, so
/// the matrix is stored transposed.
#[rustfmt::skip]
pub fn transform_3x3(rows: [[Component; 3]; 3]) -> Transform {
    let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = rows;
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Clamp a value into `0..=1`. NaN maps to 0.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value.is_nan() {
        return T::zero();
    }
    value.max(T::zero()).min(T::one())
}

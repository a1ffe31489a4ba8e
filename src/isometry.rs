use std::fmt;
use std::ops::Mul;

use crate::matrix3::Matrix3;
use crate::vector3::Vector3;

/// A rigid-body transform `p' = R * p + t` built from a rotation matrix
/// and a translation vector.
///
/// The rotation is caller-maintained: nothing here validates that it is
/// orthogonal with determinant one, and a non-orthogonal matrix simply
/// produces a general affine map without the distance-preserving
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isometry {
    translation: Vector3,
    rotation: Matrix3,
}

impl Isometry {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vector3::ZERO,
        rotation: Matrix3::IDENTITY,
    };

    /// Creates a transform from a translation and a rotation.
    #[must_use]
    pub const fn new(translation: Vector3, rotation: Matrix3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a pure rotation with zero translation.
    #[must_use]
    pub const fn from_rotation(rotation: Matrix3) -> Self {
        Self::new(Vector3::ZERO, rotation)
    }

    /// Creates a pure translation with identity rotation.
    #[must_use]
    pub const fn from_translation(translation: Vector3) -> Self {
        Self::new(translation, Matrix3::IDENTITY)
    }

    /// Creates a pure rotation of `angle` radians around an arbitrary
    /// axis, via the closed-form Rodrigues formula.
    ///
    /// The axis is normalized first when its norm is not exactly one.
    /// A zero-length axis divides by zero during normalization and
    /// fills the rotation with NaNs instead of faulting; callers must
    /// guard against it themselves.
    #[must_use]
    #[allow(clippy::suspicious_operation_groupings)]
    pub fn rotate_around(axis: &Vector3, angle: f64) -> Self {
        let norm = axis.norm();
        let axis = if norm == 1.0 { *axis } else { *axis / norm };

        let cos = angle.cos();
        let sin = angle.sin();
        let compl = 1.0 - cos;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());

        let rotation = Matrix3::new(
            Vector3::new(
                x * x * compl + cos,
                x * y * compl - z * sin,
                x * z * compl + y * sin,
            ),
            Vector3::new(
                y * x * compl + z * sin,
                y * y * compl + cos,
                y * z * compl - x * sin,
            ),
            Vector3::new(
                z * x * compl - y * sin,
                z * y * compl + x * sin,
                z * z * compl + cos,
            ),
        );
        Self::from_rotation(rotation)
    }

    /// Creates a pure rotation from Euler angles in the x-y-z
    /// (pitch-roll-yaw) convention, composed as
    /// `Rx(psi) * Ry(theta) * Rz(phi)`.
    ///
    /// The composition order matches chaining [`Isometry::rotate_around`]
    /// over the unit axes left to right, bit for bit.
    #[must_use]
    pub fn from_euler_angles(psi: f64, theta: f64, phi: f64) -> Self {
        let psi_rotation = Self::rotate_around(&Vector3::UNIT_X, psi);
        let theta_rotation = Self::rotate_around(&Vector3::UNIT_Y, theta);
        let phi_rotation = Self::rotate_around(&Vector3::UNIT_Z, phi);
        psi_rotation * theta_rotation * phi_rotation
    }

    /// Returns the rotation matrix.
    #[must_use]
    pub const fn rotation(&self) -> &Matrix3 {
        &self.rotation
    }

    /// Returns the translation vector.
    #[must_use]
    pub const fn translation(&self) -> &Vector3 {
        &self.translation
    }

    /// Composes two transforms so that `self` applies after `rhs`:
    /// `(self.compose(rhs))(p) = self(rhs(p))`.
    #[must_use]
    pub fn compose(&self, rhs: &Self) -> Self {
        Self::new(
            self.rotation.transform(&rhs.translation) + self.translation,
            self.rotation.product(&rhs.rotation),
        )
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn transform(&self, point: &Vector3) -> Vector3 {
        self.rotation.transform(point) + self.translation
    }

    /// Returns the inverse transform `(R⁻¹, -(R⁻¹ * t))`.
    ///
    /// Uses the general matrix inverse, which for an orthogonal
    /// rotation equals its transpose. A singular rotation propagates
    /// IEEE-754 non-finite values, as with [`Matrix3::inverse`].
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inverse_rotation = self.rotation.inverse();
        Self::new(
            -inverse_rotation.transform(&self.translation),
            inverse_rotation,
        )
    }

    /// Compares two transforms for approximate equality within `ulps`
    /// units in the last place per element.
    ///
    /// Exact `==` is the primary contract; this predicate is for
    /// results produced through different computation paths, where
    /// trigonometric rounding makes exact equality too strict.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, ulps: u32) -> bool {
        self.translation.approx_eq(&other.translation, ulps)
            && self.rotation.approx_eq(&other.rotation, ulps)
    }
}

impl Default for Isometry {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Isometry {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Vector3> for Isometry {
    type Output = Vector3;

    fn mul(self, point: Vector3) -> Vector3 {
        self.transform(&point)
    }
}

impl fmt::Display for Isometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[T: {}, R:{}]", self.translation, self.rotation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

    use approx::assert_relative_eq;

    use super::*;

    fn assert_isometry_close(a: &Isometry, b: &Isometry, epsilon: f64) {
        for i in 0..3 {
            assert_relative_eq!(
                a.translation().get(i).unwrap(),
                b.translation().get(i).unwrap(),
                epsilon = epsilon
            );
            for j in 0..3 {
                assert_relative_eq!(
                    a.rotation().get(i, j).unwrap(),
                    b.rotation().get(i, j).unwrap(),
                    epsilon = epsilon
                );
            }
        }
    }

    #[test]
    fn translation_factory_matches_direct_construction() {
        let t1 = Isometry::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let t2 = Isometry::new(Vector3::new(1.0, 2.0, 3.0), Matrix3::IDENTITY);
        assert_eq!(t1, t2);
        assert_eq!(*t1.rotation(), Matrix3::IDENTITY);
        assert_eq!(*t1.translation(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn translation_moves_points() {
        let t = Isometry::from_translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t * Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(
            t.transform(&Vector3::new(1.0, 1.0, 1.0)),
            Vector3::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn translation_inverse_moves_points_back() {
        let t = Isometry::from_translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(
            t.inverse() * Vector3::new(2.0, 3.0, 4.0),
            Vector3::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn composed_translations_accumulate() {
        let t1 = Isometry::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let t2 = Isometry::new(Vector3::new(1.0, 2.0, 3.0), Matrix3::IDENTITY);
        assert_eq!(
            t1 * t2 * Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(3.0, 5.0, 7.0)
        );
        assert_eq!(
            t1.compose(&t2) * Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(3.0, 5.0, 7.0)
        );
    }

    #[test]
    fn identity_is_neutral_for_composition() {
        let t = Isometry::rotate_around(&Vector3::new(1.0, 2.0, -1.0), 0.8);
        assert_eq!(t * Isometry::IDENTITY, t);
        assert_eq!(Isometry::IDENTITY * t, t);
        assert_eq!(Isometry::default(), Isometry::IDENTITY);
    }

    #[test]
    fn euler_angles_match_chained_axis_rotations_exactly() {
        let t3 = Isometry::rotate_around(&Vector3::UNIT_X, FRAC_PI_2);
        let t4 = Isometry::rotate_around(&Vector3::UNIT_Y, FRAC_PI_4);
        let t5 = Isometry::rotate_around(&Vector3::UNIT_Z, FRAC_PI_8);
        let t6 = Isometry::from_euler_angles(FRAC_PI_2, FRAC_PI_4, FRAC_PI_8);
        assert_eq!(t6, t3 * t4 * t5);
        assert!(t6.approx_eq(&(t3 * t4 * t5), 0));
    }

    #[test]
    fn principal_axis_rotation_has_the_closed_form_entries() {
        let t = Isometry::rotate_around(&Vector3::UNIT_Z, FRAC_PI_8);
        let cos = FRAC_PI_8.cos();
        let sin = FRAC_PI_8.sin();
        let expected = Matrix3::new(
            Vector3::new(cos, -sin, 0.0),
            Vector3::new(sin, cos, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(*t.translation(), Vector3::ZERO);
        assert!(t.rotation().approx_eq(&expected, 4));
    }

    #[test]
    fn non_unit_axes_are_normalized() {
        let from_scaled = Isometry::rotate_around(&Vector3::new(0.0, 0.0, 2.0), 0.6);
        let from_unit = Isometry::rotate_around(&Vector3::UNIT_Z, 0.6);
        assert_eq!(from_scaled, from_unit);
    }

    #[test]
    fn zero_axis_propagates_nan() {
        let t = Isometry::rotate_around(&Vector3::ZERO, 1.0);
        assert!(t.rotation().get(0, 0).unwrap().is_nan());
    }

    #[test]
    fn rotations_are_orthogonal_with_unit_determinant() {
        let axes = [
            Vector3::UNIT_X,
            Vector3::UNIT_Y,
            Vector3::UNIT_Z,
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-2.0, 0.5, 3.0),
        ];
        for axis in &axes {
            for angle in [0.0, FRAC_PI_8, FRAC_PI_2, 1.0, PI, -2.5] {
                let r = *Isometry::rotate_around(axis, angle).rotation();
                let gram = r.transpose().product(&r);
                for i in 0..3 {
                    for j in 0..3 {
                        let expected = f64::from(u8::from(i == j));
                        assert_relative_eq!(
                            gram.get(i, j).unwrap(),
                            expected,
                            epsilon = 1e-12
                        );
                    }
                }
                assert_relative_eq!(r.det(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn composition_is_associative_within_tolerance() {
        let a = Isometry::new(
            Vector3::new(1.0, -2.0, 0.5),
            *Isometry::rotate_around(&Vector3::new(1.0, 2.0, 3.0), 0.7).rotation(),
        );
        let b = Isometry::new(
            Vector3::new(-4.0, 0.25, 2.0),
            *Isometry::rotate_around(&Vector3::UNIT_Y, 1.3).rotation(),
        );
        let c = Isometry::new(
            Vector3::new(0.0, 3.0, -1.0),
            *Isometry::rotate_around(&Vector3::new(-1.0, 0.0, 1.0), -0.4).rotation(),
        );
        assert_isometry_close(&((a * b) * c), &(a * (b * c)), 1e-12);
    }

    #[test]
    fn inverse_undoes_the_transform() {
        let t = Isometry::new(
            Vector3::new(1.0, -2.0, 3.0),
            *Isometry::rotate_around(&Vector3::new(1.0, 1.0, 1.0), 0.9).rotation(),
        );
        let p = Vector3::new(0.5, -1.5, 2.5);
        let roundtrip = t.inverse() * (t * p);
        for i in 0..3 {
            assert_relative_eq!(roundtrip.get(i).unwrap(), p.get(i).unwrap(), epsilon = 1e-12);
        }
        assert_isometry_close(&(t * t.inverse()), &Isometry::IDENTITY, 1e-12);
    }

    #[test]
    fn rotation_matches_nalgebra_axis_angle() {
        let axis = Vector3::new(1.0, -2.0, 0.5);
        let angle = 0.9;
        let ours = *Isometry::rotate_around(&axis, angle).rotation();
        let theirs = nalgebra::Rotation3::from_axis_angle(
            &nalgebra::Unit::new_normalize(nalgebra::Vector3::new(
                axis.x(),
                axis.y(),
                axis.z(),
            )),
            angle,
        );
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(
                    ours.get(i, j).unwrap(),
                    theirs.matrix()[(i, j)],
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn display_format() {
        let t = Isometry::rotate_around(&Vector3::UNIT_Z, FRAC_PI_8);
        assert_eq!(
            t.to_string(),
            "[T: (x: 0, y: 0, z: 0), R:[[0.923879533, -0.382683432, 0], \
             [0.382683432, 0.923879533, 0], [0, 0, 1]]]"
        );
    }
}

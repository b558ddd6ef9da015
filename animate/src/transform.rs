use nalgebra as na;

/// Translation, rotation and scale of a single bone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoneTransform {
    pub translation: na::Vector3<f32>,
    pub rotation: na::UnitQuaternion<f32>,
    pub scale: na::Vector3<f32>,
}

impl Default for BoneTransform {
    fn default() -> Self {
        BoneTransform::identity()
    }
}

impl BoneTransform {
    pub fn identity() -> Self {
        BoneTransform {
            translation: na::Vector3::zeros(),
            rotation: na::UnitQuaternion::identity(),
            scale: na::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_translation(translation: na::Vector3<f32>) -> Self {
        BoneTransform {
            translation,
            ..BoneTransform::identity()
        }
    }

    pub fn from_parts(
        translation: na::Vector3<f32>,
        rotation: na::UnitQuaternion<f32>,
        scale: na::Vector3<f32>,
    ) -> Self {
        BoneTransform {
            translation,
            rotation,
            scale,
        }
    }

    /// Column-major `T * R * S` matrix.
    pub fn to_homogeneous(&self) -> na::Matrix4<f32> {
        na::Isometry3::from_parts(
            na::Translation3::from(self.translation),
            self.rotation,
        )
        .to_homogeneous()
            * na::Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Splits affine matrix back into translation, rotation and scale.
    /// Skew, if any, is dropped.
    pub fn from_homogeneous(m: &na::Matrix4<f32>) -> Self {
        let (iso, scale) = decompose_transform3(m);
        BoneTransform {
            translation: iso.translation.vector,
            rotation: iso.rotation,
            scale,
        }
    }

    /// Transform that applies `self` after `other`.
    pub fn compose(&self, other: &BoneTransform) -> Self {
        BoneTransform::from_homogeneous(
            &(self.to_homogeneous() * other.to_homogeneous()),
        )
    }

    /// Inverse transform.
    /// Returns `None` if any scale component is zero.
    pub fn try_inverse(&self) -> Option<Self> {
        self.to_homogeneous()
            .try_inverse()
            .map(|m| BoneTransform::from_homogeneous(&m))
    }

    /// Approximate equality used to compare transforms that went through
    /// matrix round-trips.
    pub fn abs_diff_eq(&self, other: &BoneTransform, epsilon: f32) -> bool {
        (self.translation - other.translation).amax() <= epsilon
            && (self.scale - other.scale).amax() <= epsilon
            && self.rotation.angle_to(&other.rotation) <= epsilon
    }
}

pub fn decompose_transform3(
    m: &na::Matrix4<f32>,
) -> (na::Isometry3<f32>, na::Vector3<f32>) {
    let t: na::Vector3<f32> = m.fixed_view::<3, 1>(0, 3).into_owned();

    let mut r: na::Matrix3<f32> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let mut s = na::Vector3::new(
        r.column(0).norm(),
        r.column(1).norm(),
        r.column(2).norm(),
    );
    let sign = r.determinant().signum();
    s *= sign;
    r *= sign;

    let inv = s.map(|c| if c != 0.0 { 1.0 / c } else { 0.0 });
    r *= na::Matrix3::from_diagonal(&inv);

    let r = na::Rotation3::from_matrix(&r);
    let r = na::UnitQuaternion::from_rotation_matrix(&r);

    let iso = na::Isometry3::from_parts(na::Translation3::from(t), r);
    (iso, s)
}

#[cfg(test)]
mod tests {
    use {super::*, std::f32::consts::FRAC_PI_2};

    #[test]
    fn homogeneous_round_trip_keeps_parts() {
        let transform = BoneTransform::from_parts(
            na::Vector3::new(1.0, -2.0, 0.5),
            na::UnitQuaternion::from_euler_angles(0.3, -0.7, 1.1),
            na::Vector3::new(1.5, 0.5, 2.0),
        );

        let back = BoneTransform::from_homogeneous(&transform.to_homogeneous());
        assert!(back.abs_diff_eq(&transform, 1e-4), "{:?}", back);
    }

    #[test]
    fn compose_applies_right_hand_side_first() {
        let rotate = BoneTransform::from_parts(
            na::Vector3::zeros(),
            na::UnitQuaternion::from_axis_angle(&na::Vector3::z_axis(), FRAC_PI_2),
            na::Vector3::new(1.0, 1.0, 1.0),
        );
        let shift = BoneTransform::from_translation(na::Vector3::new(1.0, 0.0, 0.0));

        let composed = rotate.compose(&shift);
        assert!((composed.translation - na::Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn inverse_undoes_transform() {
        let transform = BoneTransform::from_parts(
            na::Vector3::new(3.0, 0.0, -1.0),
            na::UnitQuaternion::from_euler_angles(0.2, 0.4, 0.6),
            na::Vector3::new(2.0, 2.0, 2.0),
        );
        let inverse = transform.try_inverse().unwrap();
        let identity = transform.compose(&inverse);
        assert!(identity.abs_diff_eq(&BoneTransform::identity(), 1e-4));
    }

    #[test]
    fn zero_scale_has_no_inverse() {
        let mut transform = BoneTransform::identity();
        transform.scale.x = 0.0;
        assert!(transform.try_inverse().is_none());
    }
}

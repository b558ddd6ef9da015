use {
    animate::{
        Bone, BoneTransform, Model, PartialSkeleton, Pose, Skeleton,
        SkeletonError,
    },
    nalgebra as na,
    ossa::Target,
};

/// Name, parent and offset from parent.
type Joint = (&'static str, i16, [f32; 3]);

const BODY: &[Joint] = &[
    ("n_root", -1, [0.0, 0.0, 0.0]),
    ("n_hara", 0, [0.0, 0.95, 0.0]),
    ("j_kosi", 1, [0.0, 0.05, 0.0]),
    ("j_sebo_a", 2, [0.0, 0.1, 0.0]),
    ("j_sebo_b", 3, [0.0, 0.15, 0.0]),
    ("j_sebo_c", 4, [0.0, 0.15, 0.0]),
    ("j_kubi", 5, [0.0, 0.1, 0.0]),
    ("j_kao", 6, [0.0, 0.1, 0.0]),
    ("j_sako_l", 5, [0.08, 0.05, 0.0]),
    ("j_ude_a_l", 8, [0.12, 0.0, 0.0]),
    ("j_ude_b_l", 9, [0.25, 0.0, 0.0]),
    ("j_te_l", 10, [0.25, 0.0, 0.0]),
    ("j_sako_r", 5, [-0.08, 0.05, 0.0]),
    ("j_ude_a_r", 12, [-0.12, 0.0, 0.0]),
    ("j_ude_b_r", 13, [-0.25, 0.0, 0.0]),
    ("j_te_r", 14, [-0.25, 0.0, 0.0]),
    ("j_asi_a_l", 2, [0.1, -0.05, 0.0]),
    ("j_asi_b_l", 16, [0.0, -0.45, 0.0]),
    ("j_asi_c_l", 17, [0.0, -0.2, 0.0]),
    ("j_asi_d_l", 18, [0.0, -0.2, 0.0]),
    ("j_asi_a_r", 2, [-0.1, -0.05, 0.0]),
    ("j_asi_b_r", 20, [0.0, -0.45, 0.0]),
    ("j_asi_c_r", 21, [0.0, -0.2, 0.0]),
    ("j_asi_d_r", 22, [0.0, -0.2, 0.0]),
    ("n_sippo_a", 2, [0.0, 0.0, -0.1]),
    ("n_sippo_b", 24, [0.0, -0.05, -0.1]),
];

const WEAPON: &[Joint] = &[
    ("n_root", -1, [-0.7, 1.45, 0.0]),
    ("j_buki_a", 0, [0.0, 0.0, 0.1]),
    ("j_buki_b", 1, [0.0, 0.0, 0.6]),
];

/// Character standing at the origin with a weapon in its right hand.
pub struct Puppet {
    model: Model,
    skeleton: Skeleton,
    poses: Vec<Option<Pose>>,
}

impl Puppet {
    pub fn new() -> Result<Self, SkeletonError> {
        let (body, body_pose) = build(BODY)?;
        let (weapon, weapon_pose) = build(WEAPON)?;

        Ok(Puppet {
            model: Model::default(),
            skeleton: Skeleton::new(vec![body, weapon]),
            poses: vec![Some(body_pose), Some(weapon_pose)],
        })
    }

    pub fn find(&self, name: &str) -> Option<ossa::BoneKey> {
        self.skeleton
            .partials()
            .iter()
            .enumerate()
            .find_map(|(partial, skeleton)| {
                skeleton
                    .find(name)
                    .map(|bone| ossa::BoneKey::new(partial, bone))
            })
    }
}

fn build(joints: &[Joint]) -> Result<(PartialSkeleton, Pose), SkeletonError> {
    let skeleton = PartialSkeleton::new(
        joints
            .iter()
            .map(|&(name, parent, _)| Bone::new(name, parent))
            .collect(),
    )?;

    let locals: Vec<_> = joints
        .iter()
        .map(|&(_, parent, [x, y, z])| {
            // Children of the root sentinel are placed in model space.
            let offset = if parent == 0 {
                na::Vector3::new(x, y, z) + na::Vector3::from(joints[0].2)
            } else {
                na::Vector3::new(x, y, z)
            };
            BoneTransform::from_translation(offset)
        })
        .collect();

    let pose = Pose::from_parent_relative(&skeleton, &locals);
    Ok((skeleton, pose))
}

impl Target for Puppet {
    fn model(&self) -> Option<Model> {
        Some(self.model)
    }

    fn skeleton(&self) -> Option<&Skeleton> {
        Some(&self.skeleton)
    }

    fn pose(&self, partial: usize, layer: usize) -> Option<&Pose> {
        if layer != 0 {
            return None;
        }
        self.poses.get(partial)?.as_ref()
    }

    fn pose_mut(&mut self, partial: usize, layer: usize) -> Option<&mut Pose> {
        if layer != 0 {
            return None;
        }
        self.poses.get_mut(partial)?.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puppet_is_well_formed() {
        let puppet = Puppet::new().unwrap();
        let skeleton = puppet.skeleton().unwrap();
        assert_eq!(skeleton.partials().len(), 2);
        assert_eq!(puppet.pose(0, 0).unwrap().len(), BODY.len());
        assert!(puppet.pose(0, 1).is_none());
    }

    #[test]
    fn right_hand_is_on_the_right() {
        let puppet = Puppet::new().unwrap();
        let key = puppet.find("j_te_r").unwrap();
        let hand = puppet.pose(key.partial, 0).unwrap().get(key.bone).unwrap();
        assert!((hand.translation - na::Vector3::new(-0.7, 1.45, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn weapon_starts_at_right_hand() {
        let puppet = Puppet::new().unwrap();
        let key = puppet.find("j_buki_b").unwrap();
        assert_eq!(key.partial, 1);
        let tip = puppet.pose(1, 0).unwrap().get(key.bone).unwrap();
        assert!((tip.translation - na::Vector3::new(-0.7, 1.45, 0.7)).norm() < 1e-5);
    }
}

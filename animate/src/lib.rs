//! Skeleton model shared by the overlay and its hosts.
//!
//! Bones are grouped into partial skeletons, each one a rigid sub-hierarchy
//! whose parents always precede children. Poses are plain buffers of
//! model-space transforms indexed the same way as bones.

pub mod skeletal3d;
pub mod transform;

pub use self::{
    skeletal3d::{
        Bone, Model, PartialSkeleton, Pose, PoseError, Skeleton, SkeletonError,
    },
    transform::BoneTransform,
};

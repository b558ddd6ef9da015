use {crate::transform::BoneTransform, nalgebra as na};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkeletonError {
    #[error("Bone {bone} refers to parent {parent} which does not precede it")]
    InvalidParent { bone: usize, parent: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoseError {
    #[error("Bone index {index} is out of pose bounds ({len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Single joint of a partial skeleton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bone {
    name: String,
    parent: i16,
}

impl Bone {
    /// Creates bone with raw parent index as host stores it.
    /// Negative values and `0` mean "no parent".
    pub fn new(name: impl Into<String>, parent: i16) -> Self {
        Bone {
            name: name.into(),
            parent,
        }
    }

    pub fn root(name: impl Into<String>) -> Self {
        Bone::new(name, -1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_parent(&self) -> i16 {
        self.parent
    }

    pub fn parent(&self) -> Option<usize> {
        if self.parent > 0 {
            Some(self.parent as usize)
        } else {
            None
        }
    }
}

/// Tree-like structure of bones.
/// Every parent precedes its children.
#[derive(Clone, Debug)]
pub struct PartialSkeleton {
    bones: Box<[Bone]>,
}

impl PartialSkeleton {
    pub fn new(bones: Vec<Bone>) -> Result<Self, SkeletonError> {
        for (index, bone) in bones.iter().enumerate() {
            if let Some(parent) = bone.parent() {
                if parent >= index {
                    return Err(SkeletonError::InvalidParent {
                        bone: index,
                        parent,
                    });
                }
            }
        }

        Ok(PartialSkeleton {
            bones: bones.into_boxed_slice(),
        })
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|bone| bone.name == name)
    }

    /// Marks `index` and every bone below it.
    pub fn subtree(&self, index: usize) -> Vec<bool> {
        let mut marked = vec![false; self.bones.len()];
        if index >= marked.len() {
            return marked;
        }
        marked[index] = true;

        for child in index + 1..self.bones.len() {
            if let Some(parent) = self.bones[child].parent() {
                marked[child] = marked[parent];
            }
        }
        marked
    }
}

/// Composite skeleton of a character.
/// E.g. body plus weapon attachment.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    partials: Vec<PartialSkeleton>,
}

impl Skeleton {
    pub fn new(partials: Vec<PartialSkeleton>) -> Self {
        Skeleton { partials }
    }

    pub fn partials(&self) -> &[PartialSkeleton] {
        &self.partials
    }

    pub fn partial(&self, index: usize) -> Option<&PartialSkeleton> {
        self.partials.get(index)
    }
}

/// Placement of the character in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Model {
    pub position: na::Vector3<f32>,
    pub rotation: na::UnitQuaternion<f32>,
    pub scale: na::Vector3<f32>,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            position: na::Vector3::zeros(),
            rotation: na::UnitQuaternion::identity(),
            scale: na::Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Model {
    pub fn world_position(
        &self,
        transform: &BoneTransform,
    ) -> na::Point3<f32> {
        let scaled = transform.translation.component_mul(&self.scale);
        na::Point3::from(self.position + self.rotation * scaled)
    }
}

/// Model-space transforms of one partial skeleton's bones.
/// The buffer belongs to the host, which animates it each frame.
#[derive(Clone, Debug)]
pub struct Pose {
    transforms: Box<[BoneTransform]>,
}

impl Pose {
    pub fn identity(size: usize) -> Pose {
        Pose {
            transforms: (0..size).map(|_| BoneTransform::identity()).collect(),
        }
    }

    pub fn from_transforms(transforms: Vec<BoneTransform>) -> Pose {
        Pose {
            transforms: transforms.into_boxed_slice(),
        }
    }

    pub fn transforms(&self) -> &[BoneTransform] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BoneTransform> {
        self.transforms.get(index)
    }

    pub fn set(
        &mut self,
        index: usize,
        transform: BoneTransform,
    ) -> Result<(), PoseError> {
        let len = self.transforms.len();
        match self.transforms.get_mut(index) {
            Some(slot) => {
                *slot = transform;
                Ok(())
            }
            None => Err(PoseError::OutOfBounds { index, len }),
        }
    }

    /// Writes `transform` at `index` and moves every bone marked in
    /// `subtree` along, so that they keep their placement relative to the
    /// edited bone. See `PartialSkeleton::subtree`.
    pub fn propagate(
        &mut self,
        subtree: &[bool],
        index: usize,
        transform: BoneTransform,
    ) -> Result<(), PoseError> {
        let len = self.transforms.len();
        let old = *self
            .transforms
            .get(index)
            .ok_or(PoseError::OutOfBounds { index, len })?;

        let delta = match old.to_homogeneous().try_inverse() {
            Some(inverse) => transform.to_homogeneous() * inverse,
            None => {
                tracing::warn!(
                    "Bone {} has degenerate transform, descendants are left in place",
                    index
                );
                return self.set(index, transform);
            }
        };

        for (child, slot) in self.transforms.iter_mut().enumerate() {
            if child != index && subtree.get(child).copied().unwrap_or(false) {
                *slot = BoneTransform::from_homogeneous(
                    &(delta * slot.to_homogeneous()),
                );
            }
        }

        self.set(index, transform)
    }

    /// Expresses every bone relative to its parent.
    /// Roots, and bones whose parent is missing from the pose, stay in model space.
    pub fn parent_relative(
        &self,
        skeleton: &PartialSkeleton,
    ) -> Vec<BoneTransform> {
        self.transforms
            .iter()
            .enumerate()
            .map(|(index, transform)| {
                let parent = skeleton
                    .bones()
                    .get(index)
                    .and_then(Bone::parent)
                    .and_then(|parent| self.transforms.get(parent));

                match parent.and_then(BoneTransform::try_inverse) {
                    Some(inverse) => inverse.compose(transform),
                    None => *transform,
                }
            })
            .collect()
    }

    /// Rebuilds model-space pose out of parent-relative transforms.
    pub fn from_parent_relative(
        skeleton: &PartialSkeleton,
        locals: &[BoneTransform],
    ) -> Pose {
        let mut transforms: Vec<BoneTransform> =
            Vec::with_capacity(locals.len());

        for (index, local) in locals.iter().enumerate() {
            let parent = skeleton
                .bones()
                .get(index)
                .and_then(Bone::parent)
                .and_then(|parent| transforms.get(parent));

            let global = match parent {
                Some(parent) => parent.compose(local),
                None => *local,
            };
            transforms.push(global);
        }

        Pose::from_transforms(transforms)
    }
}

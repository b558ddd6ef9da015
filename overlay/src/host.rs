//!
//! Interfaces the overlay expects from the embedding process.
//!
//! The host owns the character, its pose buffers, the screen projection and
//! the UI. The overlay borrows them for the duration of one frame.

use {
    animate::{Model, Pose, Skeleton},
    nalgebra as na,
    palette::Srgba,
};

/// Identifies bone within a composite skeleton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneKey {
    pub partial: usize,
    pub bone: usize,
}

impl BoneKey {
    pub fn new(partial: usize, bone: usize) -> Self {
        BoneKey { partial, bone }
    }
}

/// Character currently selected for editing.
pub trait Target {
    fn model(&self) -> Option<Model>;

    fn skeleton(&self) -> Option<&Skeleton>;

    /// Pose buffer of partial skeleton at given animation layer.
    /// `None` if the partial is not posed this frame.
    fn pose(&self, partial: usize, layer: usize) -> Option<&Pose>;

    fn pose_mut(&mut self, partial: usize, layer: usize) -> Option<&mut Pose>;
}

pub trait Projector {
    /// `None` if the point can't be mapped onto the screen.
    fn world_to_screen(&self, point: &na::Point3<f32>) -> Option<na::Point2<f32>>;

    fn camera_distance(&self) -> f32;
}

/// Draw list. Later calls draw on top of earlier ones.
pub trait Canvas {
    fn line(
        &mut self,
        from: na::Point2<f32>,
        to: na::Point2<f32>,
        color: Srgba,
        thickness: f32,
    );
}

/// Clickable markers.
pub trait Selection {
    /// Adds marker at `point`, returns `true` if it was clicked this frame.
    fn add_item(
        &mut self,
        label: &str,
        key: BoneKey,
        point: na::Point2<f32>,
        color: Srgba,
    ) -> bool;
}

/// Interactive widget manipulating a world-space matrix.
pub trait Gizmo {
    fn matrix(&self) -> na::Matrix4<f32>;

    fn set_matrix(&mut self, matrix: na::Matrix4<f32>);

    /// Draws the widget and applies this frame's user input to the matrix.
    fn draw(&mut self);
}

pub trait GizmoProvider {
    /// Binds the gizmo to the bone, replacing previous binding.
    fn bind(&mut self, key: BoneKey);

    /// Gizmo bound to `key`, if any.
    fn gizmo(&mut self, key: BoneKey) -> Option<&mut dyn Gizmo>;
}

/// Single gizmo with at most one owner.
#[derive(Debug)]
pub struct GizmoSlot<G> {
    owner: Option<BoneKey>,
    gizmo: G,
}

impl<G> GizmoSlot<G> {
    pub fn new(gizmo: G) -> Self {
        GizmoSlot { owner: None, gizmo }
    }

    pub fn owner(&self) -> Option<BoneKey> {
        self.owner
    }

    pub fn release(&mut self) {
        self.owner = None;
    }

    pub fn inner(&self) -> &G {
        &self.gizmo
    }

    pub fn inner_mut(&mut self) -> &mut G {
        &mut self.gizmo
    }
}

impl<G> GizmoProvider for GizmoSlot<G>
where
    G: Gizmo,
{
    fn bind(&mut self, key: BoneKey) {
        if self.owner != Some(key) {
            tracing::debug!("Gizmo bound to {:?}", key);
            self.owner = Some(key);
        }
    }

    fn gizmo(&mut self, key: BoneKey) -> Option<&mut dyn Gizmo> {
        if self.owner == Some(key) {
            Some(&mut self.gizmo)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(na::Matrix4<f32>);

    impl Gizmo for Fixed {
        fn matrix(&self) -> na::Matrix4<f32> {
            self.0
        }

        fn set_matrix(&mut self, matrix: na::Matrix4<f32>) {
            self.0 = matrix;
        }

        fn draw(&mut self) {}
    }

    #[test]
    fn slot_has_single_owner() {
        let mut slot = GizmoSlot::new(Fixed(na::Matrix4::identity()));
        let a = BoneKey::new(0, 3);
        let b = BoneKey::new(1, 3);

        assert!(slot.gizmo(a).is_none());

        slot.bind(a);
        assert!(slot.gizmo(a).is_some());
        assert!(slot.gizmo(b).is_none());

        slot.bind(b);
        assert!(slot.gizmo(a).is_none());
        assert!(slot.gizmo(b).is_some());
        assert_eq!(slot.owner(), Some(b));

        slot.release();
        assert!(slot.gizmo(b).is_none());
    }
}

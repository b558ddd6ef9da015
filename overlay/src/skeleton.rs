//!
//! Per-frame skeleton overlay.
//!
//! Walks every posed partial skeleton of the target, draws bone connectors,
//! registers clickable bone markers and commits the bound gizmo's edit back
//! into the pose buffer.

use {
    crate::{
        category::Registry,
        config::Config,
        host::{BoneKey, Canvas, GizmoProvider, Projector, Selection, Target},
        locale::Locale,
    },
    animate::{BoneTransform, Model, PartialSkeleton, Pose},
};

/// Animation layer the overlay reads and edits.
pub const POSE_LAYER: usize = 0;

/// Connector thickness for given camera distance.
///
/// Thins out with distance, never below `min`.
/// Non-positive distance yields `min`.
pub fn line_thickness(base: f32, min: f32, distance: f32) -> f32 {
    if distance > 0.0 {
        (base / distance * 2.0).max(min)
    } else {
        min
    }
}

/// Host services available during one frame.
pub struct OverlayContext<'a> {
    pub projector: &'a dyn Projector,
    pub canvas: &'a mut dyn Canvas,
    pub selection: &'a mut dyn Selection,
    pub gizmos: &'a mut dyn GizmoProvider,
}

/// What happened during one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Partial skeletons that had a pose.
    pub partials: usize,

    /// Partial skeletons skipped for lack of pose.
    pub skipped_partials: usize,

    /// Bones drawn on screen.
    pub bones: usize,

    pub connectors: usize,

    /// Bone whose edit was written into the pose buffer.
    pub committed: Option<BoneKey>,
}

struct Edit {
    bone: usize,
    transform: BoneTransform,
    subtree: Option<Vec<bool>>,
}

pub struct SkeletonOverlay<'a> {
    registry: &'a Registry,
    locale: &'a Locale,
}

impl<'a> SkeletonOverlay<'a> {
    pub fn new(registry: &'a Registry, locale: &'a Locale) -> Self {
        SkeletonOverlay { registry, locale }
    }

    /// Draws the overlay for one frame.
    ///
    /// Missing target, model or skeleton skip the frame.
    /// Partial skeletons without pose are skipped.
    pub fn draw(
        &self,
        config: &Config,
        target: Option<&mut dyn Target>,
        mut ctx: OverlayContext<'_>,
    ) -> WalkStats {
        let mut stats = WalkStats::default();

        if !config.show_skeleton {
            return stats;
        }

        let target = match target {
            Some(target) => target,
            None => return stats,
        };

        let model = match target.model() {
            Some(model) => model,
            None => return stats,
        };

        let partials = match target.skeleton() {
            Some(skeleton) => skeleton.partials().len(),
            None => return stats,
        };

        let thickness = line_thickness(
            config.line_thickness,
            config.min_line_thickness,
            ctx.projector.camera_distance(),
        );

        for partial in 0..partials {
            let edit = {
                let target: &dyn Target = &*target;
                let skeleton = match target
                    .skeleton()
                    .and_then(|skeleton| skeleton.partial(partial))
                {
                    Some(skeleton) => skeleton,
                    None => continue,
                };

                let pose = match target.pose(partial, POSE_LAYER) {
                    Some(pose) => pose,
                    None => {
                        tracing::trace!("Partial skeleton {} is not posed", partial);
                        stats.skipped_partials += 1;
                        continue;
                    }
                };

                stats.partials += 1;
                self.draw_partial(
                    partial, skeleton, pose, &model, config, thickness,
                    &mut ctx, &mut stats,
                )
            };

            if let Some(edit) = edit {
                let key = BoneKey::new(partial, edit.bone);
                let pose = match target.pose_mut(partial, POSE_LAYER) {
                    Some(pose) => pose,
                    None => continue,
                };

                let result = match &edit.subtree {
                    Some(subtree) => {
                        pose.propagate(subtree, edit.bone, edit.transform)
                    }
                    None => pose.set(edit.bone, edit.transform),
                };

                match result {
                    Ok(()) => {
                        tracing::trace!("Committed edit of {:?}", key);
                        stats.committed = Some(key);
                    }
                    Err(err) => {
                        tracing::warn!("Failed to commit edit of {:?}: {}", key, err);
                    }
                }
            }
        }

        stats
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_partial(
        &self,
        partial: usize,
        skeleton: &PartialSkeleton,
        pose: &Pose,
        model: &Model,
        config: &Config,
        thickness: f32,
        ctx: &mut OverlayContext<'_>,
        stats: &mut WalkStats,
    ) -> Option<Edit> {
        let mut edit = None;

        for (index, bone) in skeleton.bones().iter().enumerate() {
            let transform = match pose.get(index) {
                Some(transform) => transform,
                None => break,
            };

            let category = self.registry.resolve(Some(bone.name()));
            if !config.is_category_visible(category.name()) {
                continue;
            }

            let key = BoneKey::new(partial, index);
            let color = config.category_color(category);

            if let Some(point) =
                ctx.projector.world_to_screen(&model.world_position(transform))
            {
                stats.bones += 1;

                if config.draw_lines {
                    let parent = bone
                        .parent()
                        .and_then(|parent| pose.get(parent))
                        .and_then(|parent| {
                            ctx.projector
                                .world_to_screen(&model.world_position(parent))
                        });

                    if let Some(parent) = parent {
                        ctx.canvas.line(point, parent, color, thickness);
                        stats.connectors += 1;
                    }
                }

                let label = self.locale.bone_name(bone.name());
                if ctx.selection.add_item(label, key, point, color) {
                    ctx.gizmos.bind(key);
                }
            }

            if let Some(gizmo) = ctx.gizmos.gizmo(key) {
                let rotation = model.rotation.to_homogeneous();
                gizmo.set_matrix(rotation * transform.to_homogeneous());
                gizmo.draw();

                let local =
                    model.rotation.inverse().to_homogeneous() * gizmo.matrix();

                edit = Some(Edit {
                    bone: index,
                    transform: BoneTransform::from_homogeneous(&local),
                    subtree: if config.propagate_to_children {
                        Some(skeleton.subtree(index))
                    } else {
                        None
                    },
                });
            }
        }

        edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thickness_never_below_floor() {
        for &distance in &[0.001, 0.5, 1.0, 2.0, 10.0, 1000.0, 1e9] {
            assert!(line_thickness(2.0, 0.01, distance) >= 0.01);
        }
        assert_eq!(line_thickness(2.0, 0.01, 1e9), 0.01);
    }

    #[test]
    fn thickness_does_not_grow_with_distance() {
        let mut previous = f32::INFINITY;
        let mut distance = 0.01;
        while distance < 10_000.0 {
            let thickness = line_thickness(3.0, 0.05, distance);
            assert!(thickness <= previous);
            previous = thickness;
            distance *= 1.3;
        }
    }

    #[test]
    fn thickness_at_reference_distance() {
        assert_eq!(line_thickness(2.0, 0.01, 2.0), 2.0);
        assert_eq!(line_thickness(2.0, 0.01, 4.0), 1.0);
    }

    #[test]
    fn degenerate_distance_yields_floor() {
        assert_eq!(line_thickness(2.0, 0.01, 0.0), 0.01);
        assert_eq!(line_thickness(2.0, 0.01, -1.0), 0.01);
        assert_eq!(line_thickness(2.0, 0.01, f32::NAN), 0.01);
    }
}

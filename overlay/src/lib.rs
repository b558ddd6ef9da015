//! Interactive skeleton overlay.
//!
//! Bones are sorted into named, colored categories by a [`Registry`] built
//! once at startup. Every frame [`SkeletonOverlay`] walks the target's
//! skeleton, draws connectors between bones, registers clickable markers and
//! writes gizmo edits back into the host's pose buffer.

pub mod category;
pub mod config;
pub mod host;
pub mod locale;
pub mod skeleton;
mod taxonomy;

pub use {
    self::{
        category::{Category, CategoryId, Collision, Registry, RegistryError},
        config::{CategoryConfig, Config},
        host::{
            BoneKey, Canvas, Gizmo, GizmoProvider, GizmoSlot, Projector,
            Selection, Target,
        },
        locale::Locale,
        skeleton::{line_thickness, OverlayContext, SkeletonOverlay, WalkStats},
    },
    animate,
};

//!
//! UI stand-ins that log instead of drawing.

use {
    nalgebra as na,
    ossa::{BoneKey, Canvas, Gizmo, Selection},
    palette::Srgba,
};

#[derive(Debug, Default)]
pub struct LogCanvas {
    pub lines: usize,
}

impl Canvas for LogCanvas {
    fn line(
        &mut self,
        from: na::Point2<f32>,
        to: na::Point2<f32>,
        color: Srgba,
        thickness: f32,
    ) {
        tracing::trace!(
            "Line ({:.1}, {:.1}) - ({:.1}, {:.1}), color {:?}, thickness {:.3}",
            from.x,
            from.y,
            to.x,
            to.y,
            color,
            thickness
        );
        self.lines += 1;
    }
}

/// Clicks one marker on the first frame it shows up.
#[derive(Debug)]
pub struct ScriptedClick {
    target: Option<BoneKey>,
    done: bool,
}

impl ScriptedClick {
    pub fn new(target: Option<BoneKey>) -> Self {
        ScriptedClick {
            target,
            done: false,
        }
    }
}

impl Selection for ScriptedClick {
    fn add_item(
        &mut self,
        label: &str,
        key: BoneKey,
        point: na::Point2<f32>,
        _color: Srgba,
    ) -> bool {
        if !self.done && self.target == Some(key) {
            tracing::info!(
                "Clicked '{}' at ({:.1}, {:.1})",
                label,
                point.x,
                point.y
            );
            self.done = true;
            true
        } else {
            false
        }
    }
}

/// Gizmo dragged by a constant world-space offset every frame.
#[derive(Debug)]
pub struct DragGizmo {
    matrix: na::Matrix4<f32>,
    offset: na::Vector3<f32>,
}

impl DragGizmo {
    pub fn new(offset: na::Vector3<f32>) -> Self {
        DragGizmo {
            matrix: na::Matrix4::identity(),
            offset,
        }
    }
}

impl Gizmo for DragGizmo {
    fn matrix(&self) -> na::Matrix4<f32> {
        self.matrix
    }

    fn set_matrix(&mut self, matrix: na::Matrix4<f32>) {
        self.matrix = matrix;
    }

    fn draw(&mut self) {
        self.matrix = na::Translation3::from(self.offset).to_homogeneous()
            * self.matrix;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_fires_once() {
        let key = BoneKey::new(0, 4);
        let mut click = ScriptedClick::new(Some(key));
        let white = Srgba::new(1.0, 1.0, 1.0, 1.0);
        let at = na::Point2::origin();

        assert!(!click.add_item("Waist", BoneKey::new(0, 3), at, white));
        assert!(click.add_item("Lumbar", key, at, white));
        assert!(!click.add_item("Lumbar", key, at, white));
    }

    #[test]
    fn drag_offsets_translation() {
        let mut gizmo = DragGizmo::new(na::Vector3::new(0.0, 0.5, 0.0));
        gizmo.set_matrix(na::Translation3::new(1.0, 0.0, 0.0).to_homogeneous());
        gizmo.draw();
        assert_eq!(
            gizmo.matrix().column(3).xyz(),
            na::Vector3::new(1.0, 0.5, 0.0)
        );
    }
}

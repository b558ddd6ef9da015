use {nalgebra as na, ossa::Projector};

/// Perspective camera mapping world points to viewport pixels.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    projection: na::Perspective3<f32>,
    view: na::Isometry3<f32>,
    viewport: na::Vector2<f32>,
    distance: f32,
}

impl Camera {
    pub fn new(
        projection: na::Perspective3<f32>,
        eye: na::Point3<f32>,
        focus: na::Point3<f32>,
        viewport: na::Vector2<f32>,
    ) -> Self {
        Camera {
            projection,
            view: na::Isometry3::look_at_rh(&eye, &focus, &na::Vector3::y()),
            viewport,
            distance: na::distance(&eye, &focus),
        }
    }
}

impl Projector for Camera {
    fn world_to_screen(
        &self,
        point: &na::Point3<f32>,
    ) -> Option<na::Point2<f32>> {
        let eye = self.view.transform_point(point);
        if eye.z >= 0.0 {
            // Behind the camera.
            return None;
        }

        let ndc = self.projection.project_point(&eye);
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
            return None;
        }

        Some(na::Point2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }

    fn camera_distance(&self) -> f32 {
        self.distance
    }
}

use {
    crate::camera::Camera,
    eyre::{Report, WrapErr},
    nalgebra as na,
    std::path::{Path, PathBuf},
};

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SandboxConfig {
    #[serde(default)]
    pub camera: CameraConfig,

    /// Number of frames to run.
    #[serde(default = "default_frames")]
    pub frames: usize,

    /// Bone clicked on the first frame.
    #[serde(default = "default_select")]
    pub select: Option<String>,

    /// World-space offset the gizmo is dragged by every frame.
    #[serde(default = "default_drag")]
    pub drag: [f32; 3],
}

impl Default for SandboxConfig {
    fn default() -> Self {
        SandboxConfig {
            camera: CameraConfig::default(),
            frames: default_frames(),
            select: default_select(),
            drag: default_drag(),
        }
    }
}

impl SandboxConfig {
    pub fn load_default() -> Result<Self, Report> {
        let path = std::env::var("OSSA_SANDBOX_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./sandbox.ron"));

        if !path.exists() {
            return Ok(SandboxConfig::default());
        }

        Self::load(&path)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Report> {
        let file = std::fs::File::open(path).wrap_err_with(|| {
            format!("Failed to open sandbox config '{}'", path.display())
        })?;
        Ok(ron::de::from_reader(file)?)
    }
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum CameraConfig {
    Perspective {
        #[serde(default = "default_fovy")]
        fovy: f32,
        #[serde(default = "default_znear")]
        znear: f32,
        #[serde(default = "default_zfar")]
        zfar: f32,
        #[serde(default = "default_distance")]
        distance: f32,
    },
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig::Perspective {
            fovy: default_fovy(),
            znear: default_znear(),
            zfar: default_zfar(),
            distance: default_distance(),
        }
    }
}

impl CameraConfig {
    /// Camera looking at `focus` from the front.
    pub fn into_camera(
        self,
        viewport: na::Vector2<f32>,
        focus: na::Point3<f32>,
    ) -> Camera {
        match self {
            CameraConfig::Perspective {
                fovy,
                znear,
                zfar,
                distance,
            } => Camera::new(
                na::Perspective3::new(
                    viewport.x / viewport.y,
                    fovy,
                    znear,
                    zfar,
                ),
                focus + na::Vector3::new(0.0, 0.0, distance),
                focus,
                viewport,
            ),
        }
    }
}

fn default_frames() -> usize {
    3
}

fn default_select() -> Option<String> {
    Some("j_te_r".to_owned())
}

fn default_drag() -> [f32; 3] {
    [0.0, 0.05, 0.0]
}

fn default_fovy() -> f32 {
    std::f32::consts::PI / 3.0
}

fn default_znear() -> f32 {
    0.1
}

fn default_zfar() -> f32 {
    1000.
}

fn default_distance() -> f32 {
    3.0
}

use {
    crate::category::Category,
    eyre::{Report, WrapErr},
    palette::Srgba,
    std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryConfig {
    #[serde(default = "default_true")]
    pub visible: bool,

    /// RGBA override of the category default color.
    #[serde(default)]
    pub color: Option<[f32; 4]>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        CategoryConfig {
            visible: true,
            color: None,
        }
    }
}

/// User settings of the skeleton overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub show_skeleton: bool,

    #[serde(default = "default_true")]
    pub draw_lines: bool,

    /// Connector thickness at camera distance of `2`.
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f32,

    /// Connectors never get thinner than this.
    #[serde(default = "default_min_line_thickness")]
    pub min_line_thickness: f32,

    /// Move descendants along with the edited bone.
    #[serde(default)]
    pub propagate_to_children: bool,

    /// Per-category settings keyed by category name.
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_skeleton: true,
            draw_lines: true,
            line_thickness: default_line_thickness(),
            min_line_thickness: default_min_line_thickness(),
            propagate_to_children: false,
            categories: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads from `OSSA_CONFIG_PATH` or `./overlay.ron`.
    /// Missing file yields default config.
    pub fn load_default() -> Result<Self, Report> {
        let path = std::env::var("OSSA_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./overlay.ron"));

        if !path.exists() {
            tracing::debug!(
                "Config '{}' not found, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }

        Self::load(&path)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Report> {
        let file = std::fs::File::open(path).wrap_err_with(|| {
            format!("Failed to open config '{}'", path.display())
        })?;

        let config = ron::de::from_reader(file).wrap_err_with(|| {
            format!("Failed to parse config '{}'", path.display())
        })?;
        Ok(config)
    }

    #[tracing::instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<(), Report> {
        let text =
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .wrap_err("Failed to serialize config")?;

        std::fs::write(path, text).wrap_err_with(|| {
            format!("Failed to write config '{}'", path.display())
        })?;
        Ok(())
    }

    pub fn is_category_visible(&self, name: &str) -> bool {
        self.categories.get(name).map_or(true, |c| c.visible)
    }

    pub fn set_category_visible(&mut self, name: &str, visible: bool) {
        self.categories.entry(name.to_owned()).or_default().visible = visible;
    }

    pub fn category_color(&self, category: &Category) -> Srgba {
        match self
            .categories
            .get(category.name())
            .and_then(|c| c.color)
        {
            Some([r, g, b, a]) => Srgba::new(r, g, b, a),
            None => category.default_color(),
        }
    }

    pub fn set_category_color(&mut self, name: &str, color: Srgba) {
        let (r, g, b, a) = color.into_components();
        self.categories.entry(name.to_owned()).or_default().color =
            Some([r, g, b, a]);
    }
}

fn default_true() -> bool {
    true
}

fn default_line_thickness() -> f32 {
    2.0
}

fn default_min_line_thickness() -> f32 {
    0.01
}

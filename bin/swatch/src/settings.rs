use config::{Config, ConfigError, File, Source};
use serde_derive::Deserialize;
use trichrome::ColorModel;

/// The slider group a drag is applied to.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Rgb,
    Xyz,
    Cmyk,
}

impl From<Group> for ColorModel {
    fn from(value: Group) -> Self {
        match value {
            Group::Rgb => ColorModel::Rgb,
            Group::Xyz => ColorModel::Xyz,
            Group::Cmyk => ColorModel::Cmyk,
        }
    }
}

/// Move one slider of a group to a value, as if the user dragged it.
#[derive(Debug, Deserialize, Clone)]
pub struct Drag {
    pub group: Group,
    pub channel: usize,
    pub value: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(rename = "initial-color", default = "default_initial_color")]
    pub initial_color: String,
    #[serde(default = "default_drags")]
    pub drags: Vec<Drag>,
    #[serde(rename = "swatch-size", default = "default_swatch_size")]
    pub swatch_size: u32,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(rename = "log-level", default = "default_log_level")]
    pub log_level: String,
}

fn default_initial_color() -> String {
    "#6464c8".to_string()
}

fn default_drags() -> Vec<Drag> {
    // Full black ink.
    vec![Drag {
        group: Group::Cmyk,
        channel: 3,
        value: 255,
    }]
}

fn default_swatch_size() -> u32 {
    64
}

fn default_output() -> String {
    "swatches.png".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Read `./swatch.json` if there is one. Every setting has a default.
pub fn get_config() -> Result<Settings, ConfigError> {
    load(File::with_name("./swatch").required(false))
}

fn load(source: impl Source + Send + Sync + 'static) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(source)
        .build()?
        .try_deserialize::<Settings>()?;

    if settings.swatch_size == 0 {
        return Err(ConfigError::Message(
            "swatch-size must be at least 1".to_string(),
        ));
    }

    Ok(settings)
}

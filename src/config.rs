use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::model::Direction;

pub fn config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tessella.toml"))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Smallest share of a horizontal split either column can be resized to.
    #[serde(default = "tenth")]
    pub min_column_width_fraction: f64,
    /// Smallest share of a vertical split either row can be resized to.
    #[serde(default = "tenth")]
    pub min_row_height_fraction: f64,
    /// How far into a leaf, as a share of its size, a drop targets an edge.
    #[serde(default = "fifth")]
    pub drop_edge_fraction: f64,
    #[serde(default = "four")]
    pub editable_handle_extent: f64,
    #[serde(default = "one")]
    pub readonly_handle_extent: f64,
}

fn tenth() -> f64 {
    0.1
}
fn fifth() -> f64 {
    0.2
}
fn four() -> f64 {
    4.0
}
fn one() -> f64 {
    1.0
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_column_width_fraction: tenth(),
            min_row_height_fraction: tenth(),
            drop_edge_fraction: fifth(),
            editable_handle_extent: four(),
            readonly_handle_extent: one(),
        }
    }
}

impl Settings {
    pub fn min_fraction(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.min_column_width_fraction,
            Direction::Vertical => self.min_row_height_fraction,
        }
    }

    pub fn handle_extent(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Editable => self.editable_handle_extent,
            Mode::ReadOnly => self.readonly_handle_extent,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("min_column_width_fraction", self.min_column_width_fraction),
            ("min_row_height_fraction", self.min_row_height_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0 && value.recip().is_finite()) {
                bail!("{name} must be in (0, 1], got {value}");
            }
        }
        if !(0.0..=0.5).contains(&self.drop_edge_fraction) {
            bail!("drop_edge_fraction must be in [0, 0.5], got {}", self.drop_edge_fraction);
        }
        for (name, value) in [
            ("editable_handle_extent", self.editable_handle_extent),
            ("readonly_handle_extent", self.readonly_handle_extent),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                bail!("{name} must be a non-negative number, got {value}");
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&buf).with_context(|| format!("in config file {}", path.display()))
    }

    /// Reads the user's config file if there is one, or the defaults.
    pub fn load() -> anyhow::Result<Config> {
        match config_file() {
            Some(path) if path.exists() => Self::read(&path),
            _ => Self::default(),
        }
    }

    pub fn default() -> anyhow::Result<Config> {
        Self::parse(include_str!("../tessella.default.toml"))
    }

    pub fn parse(buf: &str) -> anyhow::Result<Config> {
        let config: Config = toml::from_str(buf)?;
        config.settings.validate()?;
        Ok(config)
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use valecard_core::{Color, StyleConfig};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assets: AssetConfig,
    pub export: ExportConfig,
    pub style: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root directory for artwork and fonts.
    pub dir: PathBuf,
    pub ability_font: PathBuf,
    pub name_font: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Card height in preview pixels before scaling.
    pub base_height: u32,
    pub scale: u32,
    /// Leave pixels outside the card transparent instead of `background`.
    pub transparent: bool,
    pub background: Color,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            ability_font: PathBuf::from("roboto/Roboto-Bold.ttf"),
            name_font: PathBuf::from("roboto/Roboto-Black.ttf"),
        }
    }
}

impl AssetConfig {
    /// Resolve `path` against the asset directory unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_height: 880,
            scale: 4,
            transparent: true,
            background: Color::gray(25, 255),
        }
    }
}

impl ExportConfig {
    /// Output raster size for a card of the given width / height ratio.
    /// Both sides are at least one pixel.
    pub fn pixel_size(&self, aspect: f32) -> (u32, u32) {
        let h = self.base_height.saturating_mul(self.scale).max(1);
        let w = (h as f32 * aspect).round().max(1.0) as u32;
        (w, h)
    }
}

/// Return the platform-specific configuration directory for `valecard`.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("valecard");
        }
        PathBuf::from(".").join("valecard")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("valecard");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("valecard");
        }
        PathBuf::from(".").join("valecard")
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Load config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(cfg) => {
                log::info!("config: loaded from {}", path.display());
                cfg
            }
            Err(Error::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("config: {} not found, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("config: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from the default path, surfacing read and parse errors.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| Error::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let data = toml::to_string_pretty(self)?;
        std::fs::write(path, data).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }
}

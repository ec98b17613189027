//! Configuration for chart generation.
//!
//! Settings come from, in order of precedence: command-line flags, an
//! explicit `--config` file, `$XDG_CONFIG_HOME/tracking-gantt/config.json`,
//! and the built-in defaults below.
//!
//! ```json
//! {
//!   "input": "./data/ProjSnap7_4.txt",
//!   "output": "gantt_4.svg",
//!   "chart": { "width": 1000, "height": 800, "font_size": 14.0, "max_time": 0 }
//! }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigResultExt, GanttError, Result};
use crate::render::{ChartOptions, GanttRendererBuilder};

/// Snapshot read when no input is given.
pub const DEFAULT_INPUT: &str = "./data/ProjSnap7_4.txt";
/// Chart written when no output is given.
pub const DEFAULT_OUTPUT: &str = "gantt_4.svg";

const XDG_PREFIX: &str = "tracking-gantt";
const CONFIG_FILE: &str = "config.json";

/// Effective settings of one chart run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GanttConfig {
    /// Snapshot file to read
    pub input: PathBuf,
    /// Image file to write, if any
    pub output: Option<PathBuf>,
    /// Chart appearance
    pub chart: ChartOptions,
}

impl Default for GanttConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            chart: ChartOptions::default(),
        }
    }
}

impl GanttConfig {
    /// Load configuration from an explicit file, or from the XDG config
    /// location when that file exists, or fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Configuration` if the chosen file cannot be read
    /// or parsed. A missing explicit file is an error; a missing XDG file is
    /// not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_user_config(),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Configuration` if the file cannot be read or is
    /// not a valid configuration record.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .config_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .config_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The user configuration file, if one exists.
    pub fn find_user_config() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(CONFIG_FILE)
    }

    /// Write this configuration to the XDG config location, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::XdgDirectory` if the location cannot be
    /// prepared and `GanttError::FileSystem` if the write fails.
    pub fn write_user_config(&self) -> Result<PathBuf> {
        let path = xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_config_file(CONFIG_FILE)
            .map_err(|e| GanttError::XdgDirectory(e.to_string()))?;
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write this configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::FileSystem` if the write fails.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| GanttError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renderer builder preloaded with these settings.
    pub fn renderer_builder(&self) -> GanttRendererBuilder {
        GanttRendererBuilder::new()
            .with_options(self.chart.clone())
            .with_output_path(self.output.as_ref())
    }
}

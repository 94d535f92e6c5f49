//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::Deserialize;
use serde::de::Error;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{OsdError, Result};
use crate::flight_mode::mask::ModeFlag;
use crate::flight_mode::names::FLIGHT_MODE_NAME_MAX_LEN;
use crate::osd::element::ElementId;
use crate::osd::position::{decode, Position, OSD_COLUMNS};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub osd: OsdConfig,

    #[serde(default)]
    pub flight_mode: FlightModeConfig,
}

/// OSD layout configuration
#[derive(Debug, Deserialize, Clone)]
pub struct OsdConfig {
    /// Start from the built-in layout instead of an all-hidden one
    #[serde(default = "default_use_builtin")]
    pub use_builtin: bool,

    /// Element key -> raw configurator position
    #[serde(default)]
    pub positions: BTreeMap<String, u16>,
}

/// Flight mode text configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FlightModeConfig {
    #[serde(default)]
    pub format: DisplayFormat,

    #[serde(default)]
    pub flag_names: FlagNames,
}

/// How flag names are joined into the flight mode field
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Character budget of the OSD field
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Text shown when no flag is set
    #[serde(default)]
    pub empty_text: String,
}

/// Display name for each DJI mode flag
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FlagNames {
    #[serde(default = "default_arm_acro_name")]
    pub arm_acro: String,

    #[serde(default = "default_stab_name")]
    pub stab: String,

    #[serde(default = "default_hor_name")]
    pub hor: String,

    #[serde(default = "default_head_name")]
    pub head: String,

    #[serde(default = "default_fs_name")]
    pub fs: String,

    #[serde(default = "default_resc_name")]
    pub resc: String,
}

// Default value functions
fn default_use_builtin() -> bool { true }

fn default_separator() -> String { " ".to_string() }
fn default_max_chars() -> usize { 15 }

fn default_arm_acro_name() -> String { "ACRO".to_string() }
fn default_stab_name() -> String { "STAB".to_string() }
fn default_hor_name() -> String { "HOR".to_string() }
fn default_head_name() -> String { "HEAD".to_string() }
fn default_fs_name() -> String { "!FS!".to_string() }
fn default_resc_name() -> String { "RESC".to_string() }

/// Longest allowed separator
const MAX_SEPARATOR_CHARS: usize = 3;

impl Default for OsdConfig {
    fn default() -> Self {
        Self {
            use_builtin: default_use_builtin(),
            positions: BTreeMap::new(),
        }
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            max_chars: default_max_chars(),
            empty_text: String::new(),
        }
    }
}

impl Default for FlagNames {
    fn default() -> Self {
        Self {
            arm_acro: default_arm_acro_name(),
            stab: default_stab_name(),
            hor: default_hor_name(),
            head: default_head_name(),
            fs: default_fs_name(),
            resc: default_resc_name(),
        }
    }
}

impl FlagNames {
    /// Display name of a flag
    pub fn name(&self, flag: ModeFlag) -> &str {
        match flag {
            ModeFlag::ArmAcro => &self.arm_acro,
            ModeFlag::Stab => &self.stab,
            ModeFlag::Hor => &self.hor,
            ModeFlag::Head => &self.head,
            ModeFlag::Fs => &self.fs,
            ModeFlag::Resc => &self.resc,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use osd_layout::config::Config;
    ///
    /// let config = Config::load("config/osd.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        // Validate position overrides, one key per element
        let mut seen: BTreeMap<ElementId, &str> = BTreeMap::new();
        for (key, &raw) in &self.osd.positions {
            let element = match key.parse::<ElementId>() {
                Ok(element) => element,
                Err(_) => {
                    return Err(OsdError::Config(
                        toml::de::Error::custom(format!("unknown OSD element '{}'", key))
                    ));
                }
            };

            if let Some(previous) = seen.insert(element, key.as_str()) {
                return Err(OsdError::Config(
                    toml::de::Error::custom(format!(
                        "'{}' and '{}' both set element '{}'",
                        previous, key, element
                    ))
                ));
            }

            if decode(Position::from_raw(raw)).is_err() {
                return Err(OsdError::Config(
                    toml::de::Error::custom(format!(
                        "position {} for '{}' is not 234 or a cell on the 26x15 grid",
                        raw, key
                    ))
                ));
            }
        }

        let format = &self.flight_mode.format;

        // Validate character budget (one grid row at most)
        if format.max_chars == 0 || format.max_chars > OSD_COLUMNS as usize {
            return Err(OsdError::Config(
                toml::de::Error::custom("max_chars must be between 1 and 26")
            ));
        }

        if format.separator.chars().count() > MAX_SEPARATOR_CHARS {
            return Err(OsdError::Config(
                toml::de::Error::custom("separator must be at most 3 characters")
            ));
        }

        if format.empty_text.chars().count() > format.max_chars {
            return Err(OsdError::Config(
                toml::de::Error::custom("empty_text must fit within max_chars")
            ));
        }

        // Validate flag names
        for flag in ModeFlag::ALL {
            let name = self.flight_mode.flag_names.name(flag);
            if name.is_empty() || name.chars().count() > FLIGHT_MODE_NAME_MAX_LEN {
                return Err(OsdError::Config(
                    toml::de::Error::custom(format!(
                        "flag name for {:?} must be 1 to 15 characters",
                        flag
                    ))
                ));
            }
        }

        Ok(())
    }
}

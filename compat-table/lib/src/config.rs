//! Options for the compatibility extension.
//!
//! Options have sensible defaults and can be loaded from YAML; every key is
//! optional.
//!
//! ```yaml
//! heading: Platform support
//! heading_level: 2
//! icons: glyphs
//! icon_path: /static/octicons
//! priority: 175
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compat::{DEFAULT_PRIORITY, Glyphs, IconSet, Octicons};

/// Errors raised while loading [`CompatOptions`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration YAML.
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Heading level outside `1..=6`.
    #[error("Invalid heading level {0}; expected 1 to 6")]
    InvalidHeadingLevel(u8),
}

/// Which [`IconSet`] renders the table icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// `<img>` tags pointing at octicon SVG assets.
    #[default]
    Octicons,
    /// Inline Unicode glyphs.
    Glyphs,
}

/// Options for [`CompatibilityExtension`](crate::CompatibilityExtension).
///
/// ## Examples
///
/// ```
/// use compat_table::config::{CompatOptions, IconStyle};
///
/// let options = CompatOptions::from_yaml_str("icons: glyphs\nheading_level: 2").unwrap();
/// assert_eq!(options.icons, IconStyle::Glyphs);
/// assert_eq!(options.heading_level, 2);
/// assert_eq!(options.heading, "Operating system compatibility");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CompatOptions {
    /// Heading text emitted above every block.
    pub heading: String,
    /// Heading element level (`h1`..`h6`).
    pub heading_level: u8,
    pub icons: IconStyle,
    /// Directory holding `<name>-16.svg` octicons.
    pub icon_path: String,
    /// Block processor priority.
    pub priority: u32,
}

impl Default for CompatOptions {
    fn default() -> Self {
        Self {
            heading: "Operating system compatibility".to_string(),
            heading_level: 3,
            icons: IconStyle::Octicons,
            icon_path: Octicons::DEFAULT_PATH.to_string(),
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl CompatOptions {
    /// Parses options from YAML. An empty document yields the defaults.
    ///
    /// ## Errors
    ///
    /// Returns an error if the YAML is invalid or the heading level is out of range.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a YAML file.
    ///
    /// ## Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        tracing::debug!(path = ?path, "Loaded compatibility options");
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=6).contains(&self.heading_level) {
            return Err(ConfigError::InvalidHeadingLevel(self.heading_level));
        }
        Ok(())
    }

    /// Builds the icon set selected by [`CompatOptions::icons`].
    pub fn icon_set(&self) -> Box<dyn IconSet> {
        match self.icons {
            IconStyle::Octicons => Box::new(Octicons::new(self.icon_path.as_str())),
            IconStyle::Glyphs => Box::new(Glyphs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Icon;

    #[test]
    fn test_defaults() {
        let options = CompatOptions::default();
        assert_eq!(options.heading_level, 3);
        assert_eq!(options.icons, IconStyle::Octicons);
        assert_eq!(options.icon_path, "assets/images/octicons");
        assert_eq!(options.priority, 175);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(CompatOptions::from_yaml_str("").unwrap(), CompatOptions::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let options = CompatOptions::from_yaml_str("heading: Browser support").unwrap();
        assert_eq!(options.heading, "Browser support");
        assert_eq!(options.priority, 175);
    }

    #[test]
    fn test_invalid_heading_level() {
        let err = CompatOptions::from_yaml_str("heading_level: 7").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeadingLevel(7)));
    }

    #[test]
    fn test_unknown_icon_style() {
        let err = CompatOptions::from_yaml_str("icons: emoji").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_icon_set_follows_style() {
        let mut options = CompatOptions::default();
        options.icon_path = "/icons".to_string();
        let img = options.icon_set().icon(Icon::Full);
        assert_eq!(img.attr("src"), Some("/icons/check-circle-16.svg"));

        options.icons = IconStyle::Glyphs;
        assert_eq!(options.icon_set().icon(Icon::Full).tag(), "span");
    }

    #[test]
    fn test_from_missing_path() {
        let err = CompatOptions::from_path(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! Axis style configuration.
//!
//! Tick lengths and label displacements are expressed in character heights
//! so that axes scale with the text. With the `config` feature the style can
//! be loaded from YAML; missing keys take their defaults.

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::Path;

/// Geometry and colour settings used by the axis renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct AxisStyle {
    /// Major tick length, in character heights.
    pub major_tick: f64,
    /// Minor tick length as a fraction of the major tick length.
    pub minor_tick_ratio: f64,
    /// Baseline displacement of labels below the bottom edge.
    pub bottom_label_disp: f64,
    /// Baseline displacement of labels above the top edge.
    pub top_label_disp: f64,
    /// Displacement of labels left of the left edge, and of horizontal
    /// (`V`) labels on either side.
    pub left_label_disp: f64,
    /// Displacement of rotated labels right of the right edge.
    pub right_label_disp: f64,
    /// Colour index for numeric labels; `None` keeps the current colour.
    pub label_colour: Option<usize>,
    /// Colour index for grid lines; `None` keeps the current colour.
    pub grid_colour: Option<usize>,
    /// Typical label used to estimate label width for automatic ticks.
    pub sample_label: String,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            major_tick: 0.6,
            minor_tick_ratio: 0.5,
            bottom_label_disp: 1.2,
            top_label_disp: 0.7,
            left_label_disp: 0.7,
            right_label_disp: 1.7,
            label_colour: None,
            grid_colour: None,
            sample_label: "-0.00".to_string(),
        }
    }
}

impl AxisStyle {
    /// Minor tick length, in character heights.
    #[must_use]
    pub fn minor_tick(&self) -> f64 {
        self.major_tick * self.minor_tick_ratio
    }
}

#[cfg(feature = "config")]
impl AxisStyle {
    /// Parse a style from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed or has wrong types.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a style from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Serialise the style to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialisation fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}

//! Configuration types for maquette diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered. All types implement [`serde::Deserialize`] for loading
//! from TOML configuration files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and style settings.
//! - [`RenderConfig`] - Output directory, image format, layout engine, backend command.
//! - [`StyleConfig`] - Visual styling options such as background color and font.
//!
//! # Example
//!
//! ```
//! # use maquette::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use std::{fmt, path::PathBuf, str::FromStr};

use serde::Deserialize;

use maquette_core::color::Color;

/// Default directory diagrams are written to, matching the documentation
/// tree the images are embedded from.
pub const DEFAULT_OUTPUT_DIR: &str = "infrastructure/diagram";

/// Default Graphviz executable.
pub const DEFAULT_BACKEND_COMMAND: &str = "dot";

/// Top-level application configuration combining render and style settings.
///
/// Groups [`RenderConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style configurations.
    ///
    /// # Arguments
    ///
    /// * `render` - Output and backend settings.
    /// * `style` - Visual styling options.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Output image formats the backend can produce.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Raster PNG output (default)
    #[default]
    Png,
    /// Vector SVG output
    Svg,
}

impl OutputFormat {
    /// The file extension (and backend `-T` value) for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err("Unsupported output format (expected png or svg)"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Graphviz layout engines selectable through the backend's `-K` flag.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    /// Hierarchical layout (default; the natural fit for layered topologies)
    #[default]
    Dot,
    /// Spring-model layout
    Neato,
    /// Force-directed layout for larger graphs
    Fdp,
    /// Circular layout
    Circo,
    /// Radial layout
    Twopi,
}

impl LayoutEngine {
    /// The backend `-K` value for this engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Circo => "circo",
            Self::Twopi => "twopi",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output and backend configuration for diagram rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory output images are written to.
    output_dir: PathBuf,

    /// Output image format.
    format: OutputFormat,

    /// Graphviz layout engine.
    engine: LayoutEngine,

    /// Override for the Graphviz executable. `None` resolves to `dot`.
    command: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            engine: LayoutEngine::default(),
            command: None,
        }
    }
}

impl RenderConfig {
    /// Returns the output directory.
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Returns the output image format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the layout engine.
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the backend command to invoke.
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_BACKEND_COMMAND)
    }

    /// Returns a copy with the output directory replaced.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Returns a copy with the output format replaced.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns a copy with the layout engine replaced.
    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Returns a copy with the backend command replaced.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the backend's defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background color for diagrams, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family for all diagram text.
    #[serde(default)]
    font_name: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified options.
    ///
    /// # Arguments
    ///
    /// * `background_color` - Optional CSS color string for the diagram background.
    /// * `font_name` - Optional font family for all diagram text.
    pub fn new(background_color: Option<String>, font_name: Option<String>) -> Self {
        Self {
            background_color,
            font_name,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the configured font family, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.output_dir(), &PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.format(), OutputFormat::Png);
        assert_eq!(config.engine(), LayoutEngine::Dot);
        assert_eq!(config.command(), "dot");
    }

    #[test]
    fn test_with_overrides() {
        let config = RenderConfig::default()
            .with_output_dir("out")
            .with_format(OutputFormat::Svg)
            .with_command("/opt/graphviz/bin/dot");

        assert_eq!(config.output_dir(), &PathBuf::from("out"));
        assert_eq!(config.format(), OutputFormat::Svg);
        assert_eq!(config.command(), "/opt/graphviz/bin/dot");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("png".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert_eq!("svg".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert!("jpeg".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_style_background_color_validation() {
        let style = StyleConfig {
            background_color: Some("#fafafa".to_string()),
            font_name: None,
        };
        assert!(style.background_color().unwrap().is_some());

        let bad = StyleConfig {
            background_color: Some("definitely-not-a-color".to_string()),
            font_name: None,
        };
        assert!(bad.background_color().is_err());
    }
}

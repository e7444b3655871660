//! CLI logic for the maquette diagram tool.
//!
//! Renders the fixed diagram catalog one diagram at a time, strictly in
//! sequence. A failure aborts the run at that point; diagrams rendered
//! before the failure stay on disk.

pub mod catalog;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::str::FromStr;

use log::info;

use maquette::{
    MaquetteError, Renderer,
    config::{AppConfig, OutputFormat},
};

/// Run the maquette CLI application
///
/// Builds the catalog diagrams and renders each through the configured
/// Graphviz backend.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MaquetteError` for:
/// - Configuration loading errors
/// - Unknown `--only` selections
/// - Missing backend or icon assets
/// - Backend and file I/O errors
pub fn run(args: &Args) -> Result<(), MaquetteError> {
    let app_config = config::load_config(args.config.as_ref())?;

    // Apply command-line overrides on top of the loaded configuration.
    let mut render_config = app_config.render().clone();
    if let Some(out_dir) = &args.out_dir {
        render_config = render_config.with_output_dir(out_dir.clone());
    }
    if let Some(format) = &args.format {
        let format = OutputFormat::from_str(format)
            .map_err(|err| MaquetteError::Config(format!("--format {format}: {err}")))?;
        render_config = render_config.with_format(format);
    }
    let renderer = Renderer::new(AppConfig::new(render_config, app_config.style().clone()));

    let diagrams = catalog::all()?;
    let selected: Vec<_> = match &args.only {
        Some(only) => {
            let selected: Vec<_> = diagrams
                .into_iter()
                .filter(|diagram| diagram.id() == only.as_str())
                .collect();
            if selected.is_empty() {
                return Err(MaquetteError::Config(format!(
                    "unknown diagram `{only}` (expected one of: {})",
                    catalog::DIAGRAM_IDS.join(", ")
                )));
            }
            selected
        }
        None => diagrams,
    };

    info!(count = selected.len(); "Generating infrastructure diagrams");

    for diagram in &selected {
        let output = renderer.render(diagram)?;
        info!(
            diagram = diagram.id().to_string(),
            output = output.display().to_string();
            "Diagram generated"
        );
    }

    info!("All diagrams generated successfully");
    Ok(())
}

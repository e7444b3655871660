//! Rendering through the external Graphviz layout backend.
//!
//! [`Renderer`] owns the configured backend invocation: it checks custom
//! icon assets, emits DOT for a diagram, feeds it to the Graphviz process
//! on stdin, and leaves one image file on disk per diagram. Layout and
//! rasterization happen entirely inside the backend.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use log::{debug, info};

use maquette_core::semantic::{Diagram, Icon};

use crate::{config::AppConfig, error::MaquetteError, export};

/// Renders semantic diagrams to image files via the Graphviz backend.
///
/// # Examples
///
/// ```rust,no_run
/// use maquette::{Renderer, config::AppConfig};
/// use maquette::semantic::{BuiltinIcon, Diagram, Direction, Node};
///
/// let mut diagram = Diagram::new("demo", "Demo", Direction::TopToBottom);
/// diagram.add_node(Node::new("users", "Users", BuiltinIcon::User))
///     .expect("fresh diagram has no duplicates");
///
/// let renderer = Renderer::new(AppConfig::default());
/// let path = renderer.render(&diagram).expect("Failed to render");
/// println!("wrote {}", path.display());
/// ```
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render one diagram to its image file and return the output path.
    ///
    /// The output path is `<output_dir>/<diagram id>.<format>`. The output
    /// directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// - [`MaquetteError::MissingAsset`] if a custom icon image is absent
    /// - [`MaquetteError::MissingBackend`] if the Graphviz executable
    ///   cannot be found
    /// - [`MaquetteError::Backend`] if Graphviz exits unsuccessfully
    /// - [`MaquetteError::Io`] / [`MaquetteError::Config`] for everything else
    pub fn render(&self, diagram: &Diagram) -> Result<PathBuf, MaquetteError> {
        info!(diagram = diagram.id().to_string(); "Rendering diagram");

        self.check_assets(diagram)?;

        let dot = export::dot::to_dot_string(diagram, self.config.style())?;

        let render = self.config.render();
        fs::create_dir_all(render.output_dir())?;
        let output_path = render
            .output_dir()
            .join(format!("{}.{}", diagram.id(), render.format().extension()));

        self.invoke_backend(&dot, &output_path)?;

        info!(
            diagram = diagram.id().to_string(),
            output = output_path.display().to_string();
            "Diagram rendered"
        );
        Ok(output_path)
    }

    /// Every custom icon must exist before the backend is asked to load it;
    /// Graphviz would otherwise render a blank node and still exit zero.
    fn check_assets(&self, diagram: &Diagram) -> Result<(), MaquetteError> {
        for node in diagram.nodes() {
            if let Icon::Custom(path) = node.icon() {
                if !path.exists() {
                    return Err(MaquetteError::MissingAsset(path.clone()));
                }
            }
        }
        Ok(())
    }

    fn invoke_backend(&self, dot: &str, output_path: &std::path::Path) -> Result<(), MaquetteError> {
        let render = self.config.render();
        let command = render.command();

        debug!(
            command = command,
            engine = render.engine().as_str(),
            format = render.format().extension();
            "Invoking layout backend"
        );

        let mut child = Command::new(command)
            .arg(format!("-T{}", render.format().extension()))
            .arg(format!("-K{}", render.engine().as_str()))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    MaquetteError::MissingBackend {
                        command: command.to_string(),
                    }
                } else {
                    MaquetteError::Io(err)
                }
            })?;

        {
            let mut stdin = child.stdin.take().expect("stdin was requested as piped");
            // A backend that dies before reading stdin surfaces as a broken
            // pipe here; the exit status below is the authoritative failure.
            if let Err(err) = stdin.write_all(dot.as_bytes()) {
                if err.kind() != io::ErrorKind::BrokenPipe {
                    return Err(MaquetteError::Io(err));
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(MaquetteError::Backend {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

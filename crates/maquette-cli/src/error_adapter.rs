//! Error adapter for converting MaquetteError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. The
//! adapter's `help()` text carries the remediation the top-level handler
//! promises: install instructions for the missing-dependency class, a
//! Graphviz sanity check for everything else.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use maquette::MaquetteError;

/// Install instructions shown when the layout backend is absent.
const INSTALL_HELP: &str = "Install Graphviz and make sure the executable is on your PATH:\n  \
    sudo apt-get install graphviz    # Debian/Ubuntu\n  \
    brew install graphviz            # macOS";

/// Shown when a custom icon image is missing.
const ASSET_HELP: &str =
    "Restore the icon image under assets/ (or point the diagram at an existing file), then re-run.";

/// Generic hint for failures inside the backend.
const BACKEND_HELP: &str =
    "Make sure Graphviz is installed and working; `dot -V` should print a version.";

/// Adapter wrapping a [`MaquetteError`] to implement [`MietteDiagnostic`].
pub struct ErrorReport<'a> {
    /// The wrapped error
    err: &'a MaquetteError,
}

/// Create the diagnostic report for a CLI failure.
pub fn to_report(err: &MaquetteError) -> ErrorReport<'_> {
    ErrorReport { err }
}

impl fmt::Debug for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReport").field("err", &self.err).finish()
    }
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorReport<'_> {}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            MaquetteError::Io(_) => "maquette::io",
            MaquetteError::Semantic(_) => "maquette::semantic",
            MaquetteError::Config(_) => "maquette::config",
            MaquetteError::MissingBackend { .. } => "maquette::missing_backend",
            MaquetteError::MissingAsset(_) => "maquette::missing_asset",
            MaquetteError::Backend { .. } => "maquette::backend",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            MaquetteError::MissingBackend { .. } => INSTALL_HELP,
            MaquetteError::MissingAsset(_) => ASSET_HELP,
            MaquetteError::Backend { .. } | MaquetteError::Io(_) => BACKEND_HELP,
            MaquetteError::Semantic(_) | MaquetteError::Config(_) => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_backend_gets_install_help() {
        let err = MaquetteError::MissingBackend {
            command: "dot".to_string(),
        };
        let report = to_report(&err);
        let help = report.help().expect("install remediation").to_string();
        assert!(help.contains("apt-get install graphviz"));
        assert!(help.contains("brew install graphviz"));
    }

    #[test]
    fn test_backend_failure_gets_generic_hint() {
        let err = MaquetteError::Config("x".into());
        assert!(to_report(&err).help().is_none());

        let err = MaquetteError::MissingAsset("assets/claude.png".into());
        let help = to_report(&err).help().unwrap().to_string();
        assert!(help.contains("assets/"));
    }
}

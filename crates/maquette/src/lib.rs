//! Maquette - architecture diagrams as code.
//!
//! Diagrams are declared through the semantic model in [`maquette_core`]
//! (re-exported here), serialized to the DOT graph-description language,
//! and handed to the external Graphviz backend for layout and
//! rasterization. This crate owns configuration, DOT export, and the
//! backend invocation.
//!
//! ```text
//! Catalog procedure (hand-authored Rust)
//!     ↓ semantic model
//! Diagram
//!     ↓ export
//! DOT text
//!     ↓ render (Graphviz)
//! Image file
//! ```

pub mod config;
pub mod export;

mod error;
mod render;

pub use maquette_core::{color, identifier, semantic};

pub use error::MaquetteError;
pub use render::Renderer;

//! Export functionality for maquette diagrams.
//!
//! This module converts the semantic model into the DOT graph-description
//! language, the hand-off point to the external layout backend. It is the
//! last in-process stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Catalog procedure
//!     ↓ semantic model
//! Diagram
//!     ↓ export (this module)
//! DOT text
//!     ↓ render (Graphviz)
//! Image file
//! ```
//!
//! # Available Backends
//!
//! - [`dot`] - DOT emission via the `dot-structures` AST and the
//!   `graphviz-rust` printer

/// DOT export backend.
pub mod dot;

//! Maquette Core Types and Definitions
//!
//! This crate provides the foundational types for maquette architecture
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: The semantic diagram model ([`semantic`] module): nodes,
//!   clusters, edges, and whole diagrams, validated as they are constructed

pub mod color;
pub mod identifier;
pub mod semantic;

// crates/toolforge-manifest/src/lib.rs
// ============================================================================
// Module: ToolForge Manifest Library
// Description: Typed data model for ToolForge tool manifests.
// Purpose: Provide canonical shapes for parameters, environment, and slots.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This crate defines the immutable value objects that describe a tool's
//! configuration surface: typed parameters with domains and bounds,
//! environment variables and secrets, and named input/output slots.
//! A deserialized [`Manifest`] is the sole input consumed by the
//! `toolforge-codegen` generator.
//!
//! Invariants:
//! - Declaration order is preserved everywhere; sequences are never reordered
//!   or deduplicated by this crate.
//! - Parameter and slot name uniqueness is a caller responsibility; nothing
//!   here enforces it.
//! - Values are never mutated after construction.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod expr;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use expr::DateExpr;
pub use expr::DateUnit;
pub use types::BooleanParameter;
pub use types::DateParameter;
pub use types::Environment;
pub use types::EnvironmentSecret;
pub use types::EnvironmentVariable;
pub use types::FloatParameter;
pub use types::IntParameter;
pub use types::Manifest;
pub use types::ParameterDefinition;
pub use types::StringDomain;
pub use types::StringParameter;
pub use types::ToolInput;
pub use types::ToolOutput;

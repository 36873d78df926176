// crates/toolforge-manifest/src/types.rs
// ============================================================================
// Module: Manifest Types
// Description: Shared data models for ToolForge tool manifests.
// Purpose: Provide canonical shapes for parameters, environment, and slots.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the typed manifest shapes consumed by the code
//! generator. Manifest deserialization itself happens upstream; these types
//! only carry the already-parsed values and preserve declaration order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::expr::DateExpr;

// ============================================================================
// SECTION: Manifest Root
// ============================================================================

/// Root manifest describing a tool's configuration surface.
///
/// # Invariants
/// - All sequences keep their declared order.
/// - Parameter and slot names are expected to be unique; violations are not
///   detected here and surface as duplicate generated field names downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Typed parameter definitions in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    /// Named input slots in declaration order.
    #[serde(default)]
    pub inputs: Vec<ToolInput>,
    /// Named output slots in declaration order.
    #[serde(default)]
    pub outputs: Vec<ToolOutput>,
    /// Optional environment block.
    #[serde(default)]
    pub environment: Option<Environment>,
}

/// Environment block holding variables and secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment variables in declaration order.
    #[serde(default)]
    pub variables: Vec<EnvironmentVariable>,
    /// Environment secrets in declaration order.
    #[serde(default)]
    pub secrets: Vec<EnvironmentSecret>,
}

/// Environment variable with an optional literal default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name as bound in the container environment.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the variable must be supplied.
    pub required: bool,
    /// Optional literal default value.
    #[serde(default)]
    pub default: Option<String>,
}

/// Environment secret. Secrets are write-only inputs and never carry a
/// literal default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSecret {
    /// Secret name as bound in the container environment.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the secret must be supplied.
    pub required: bool,
}

// ============================================================================
// SECTION: Parameter Definitions
// ============================================================================

/// Typed parameter definition.
///
/// # Invariants
/// - The variant set is closed; the generator matches it exhaustively.
/// - Int, Float, and Date variants always carry both bounds regardless of the
///   required flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterDefinition {
    /// Boolean parameter.
    Boolean(BooleanParameter),
    /// Date parameter with symbolic bounds.
    Date(DateParameter),
    /// 64-bit float parameter with inclusive bounds.
    Float(FloatParameter),
    /// 64-bit integer parameter with inclusive bounds.
    Int(IntParameter),
    /// String parameter constrained by a domain.
    String(StringParameter),
}

impl ParameterDefinition {
    /// Returns the declared parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean(parameter) => &parameter.name,
            Self::Date(parameter) => &parameter.name,
            Self::Float(parameter) => &parameter.name,
            Self::Int(parameter) => &parameter.name,
            Self::String(parameter) => &parameter.name,
        }
    }

    /// Returns the declared parameter description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Boolean(parameter) => &parameter.description,
            Self::Date(parameter) => &parameter.description,
            Self::Float(parameter) => &parameter.description,
            Self::Int(parameter) => &parameter.description,
            Self::String(parameter) => &parameter.description,
        }
    }

    /// Returns true when the parameter must be populated.
    #[must_use]
    pub const fn required(&self) -> bool {
        match self {
            Self::Boolean(parameter) => parameter.required,
            Self::Date(parameter) => parameter.required,
            Self::Float(parameter) => parameter.required,
            Self::Int(parameter) => parameter.required,
            Self::String(parameter) => parameter.required,
        }
    }
}

/// Boolean parameter definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanParameter {
    /// Declared parameter name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the parameter must be populated.
    pub required: bool,
    /// Optional literal default.
    #[serde(default)]
    pub default: Option<bool>,
}

/// Integer parameter definition with mandatory inclusive bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntParameter {
    /// Declared parameter name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the parameter must be populated.
    pub required: bool,
    /// Optional literal default.
    #[serde(default)]
    pub default: Option<i64>,
    /// Inclusive lower bound.
    pub minimum: i64,
    /// Inclusive upper bound.
    pub maximum: i64,
}

/// Float parameter definition with mandatory inclusive bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatParameter {
    /// Declared parameter name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the parameter must be populated.
    pub required: bool,
    /// Optional literal default.
    #[serde(default)]
    pub default: Option<f64>,
    /// Inclusive lower bound.
    pub minimum: f64,
    /// Inclusive upper bound.
    pub maximum: f64,
}

/// Date parameter definition with mandatory symbolic bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParameter {
    /// Declared parameter name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the parameter must be populated.
    pub required: bool,
    /// Optional symbolic default.
    #[serde(default)]
    pub default: Option<DateExpr>,
    /// Inclusive symbolic lower bound.
    pub minimum: DateExpr,
    /// Inclusive symbolic upper bound.
    pub maximum: DateExpr,
}

/// String parameter definition constrained by a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringParameter {
    /// Declared parameter name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// True when the parameter must be populated.
    pub required: bool,
    /// Optional literal default.
    #[serde(default)]
    pub default: Option<String>,
    /// Domain of permissible values.
    pub domain: StringDomain,
}

/// Constraint on permissible string values.
///
/// # Invariants
/// - The variant set is closed; the generator matches it exhaustively.
/// - Enumeration values are an ordered collection with unique semantics; the
///   generator does not deduplicate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StringDomain {
    /// Closed set of allowed literal values in declared order.
    Enumeration {
        /// Allowed literal values.
        values: Vec<String>,
    },
    /// Regular-expression constraint with full-string match semantics.
    Pattern {
        /// Regular-expression source text.
        pattern: String,
    },
}

// ============================================================================
// SECTION: Slots
// ============================================================================

/// Named input slot the tool consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInput {
    /// Slot name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Accepted file extensions in declared order.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Named output slot the tool produces.
///
/// # Invariants
/// - `extensions` is expected to be non-empty; each extension produces one
///   generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Slot name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Produced file extensions in declared order.
    pub extensions: Vec<String>,
}

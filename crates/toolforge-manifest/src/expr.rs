// crates/toolforge-manifest/src/expr.rs
// ============================================================================
// Module: Date Expressions
// Description: Symbolic date expressions resolved at generated-code runtime.
// Purpose: Describe absolute, relative-to-today, and today date points.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`DateExpr`] is a symbolic, not-yet-evaluated description of a date. It
//! is resolved against a single shared `TODAY` reference captured once when
//! the generated configuration type is instantiated, never at generation
//! time. This keeps every use of "today" within one generated instance
//! mutually consistent even when generation and instantiation happen at
//! different wall-clock moments.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Date Expressions
// ============================================================================

/// Symbolic point in time used for date defaults and bounds.
///
/// # Invariants
/// - The variant set is closed; the generator matches it exhaustively.
/// - Equal expressions always render identical generated source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DateExpr {
    /// Fixed calendar date built from its numeric components.
    Absolute {
        /// Calendar year.
        year: i32,
        /// Calendar month, 1 through 12.
        month: u32,
        /// Day of month, 1 through 31.
        day: u32,
    },
    /// Offset from the shared today reference.
    Relative {
        /// Signed offset amount; negative amounts express subtraction.
        amount: i64,
        /// Unit the offset is expressed in.
        unit: DateUnit,
    },
    /// Bare reference to the shared today value.
    Today,
}

/// Unit for a relative date offset.
///
/// # Invariants
/// - The variant set is closed; the generator matches it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    /// Calendar days.
    Day,
    /// Calendar weeks.
    Week,
    /// Calendar months.
    Month,
    /// Calendar years.
    Year,
}

// crates/toolforge-codegen/src/casing/tests.rs
// ============================================================================
// Module: Case Format Unit Tests
// Description: Unit coverage for case-style conversion.
// Purpose: Pin word-boundary and word-rendering rules per style pair.
// Dependencies: toolforge-codegen
// ============================================================================

//! ## Overview
//! Unit tests for [`CaseFormat`] covering the directions the generator
//! exercises plus representative conversions between the remaining styles.

use super::CaseFormat;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn lower_camel_to_upper_underscore_splits_on_uppercase() {
    let converted = CaseFormat::LowerCamel.to(CaseFormat::UpperUnderscore, "exampleEnumString");
    assert_eq!(converted, "EXAMPLE_ENUM_STRING");
}

#[test]
fn lower_camel_to_upper_camel_capitalizes_extensions() {
    assert_eq!(CaseFormat::LowerCamel.to(CaseFormat::UpperCamel, "csv"), "Csv");
    assert_eq!(CaseFormat::LowerCamel.to(CaseFormat::UpperCamel, "xlsx"), "Xlsx");
}

#[test]
fn consecutive_uppercase_letters_are_single_letter_words() {
    let converted = CaseFormat::LowerCamel.to(CaseFormat::UpperUnderscore, "fOOBar");
    assert_eq!(converted, "F_O_O_BAR");
}

#[test]
fn identity_conversion_returns_input_unchanged() {
    let converted = CaseFormat::LowerCamel.to(CaseFormat::LowerCamel, "alreadyCamel");
    assert_eq!(converted, "alreadyCamel");
}

#[test]
fn delimited_styles_split_on_their_separator() {
    assert_eq!(
        CaseFormat::LowerHyphen.to(CaseFormat::UpperCamel, "tool-forge-codegen"),
        "ToolForgeCodegen"
    );
    assert_eq!(
        CaseFormat::UpperUnderscore.to(CaseFormat::LowerCamel, "EXAMPLE_VARIABLE"),
        "exampleVariable"
    );
}

#[test]
fn round_trip_between_camel_and_underscore_styles() {
    let snake = CaseFormat::LowerCamel.to(CaseFormat::LowerUnderscore, "exampleEnumString");
    assert_eq!(snake, "example_enum_string");
    let camel = CaseFormat::LowerUnderscore.to(CaseFormat::LowerCamel, &snake);
    assert_eq!(camel, "exampleEnumString");
}

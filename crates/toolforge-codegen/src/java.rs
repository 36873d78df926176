// crates/toolforge-codegen/src/java.rs
// ============================================================================
// Module: Generated Java Representation
// Description: Structured representation of one generated Java class.
// Purpose: Hold fields, constants, and the validate method; render source.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! This module defines the structured output of the generator: a
//! [`JavaClass`] with static preparation constants, annotated instance
//! fields, and one validation method, plus a deterministic renderer that
//! turns the structure into literal Java source text.
//!
//! ### Design Notes
//! - Rendering is deterministic: imports are collected in a [`BTreeSet`] so
//!   regeneration from an identical manifest is byte-identical.
//! - Expression text inside the structure is already rendered Java; the
//!   renderer only handles layout (indentation, blank lines, member order).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::CodegenError;

// ============================================================================
// SECTION: Class Names
// ============================================================================

/// Fully-qualified name of the generated class.
///
/// # Invariants
/// - `package` is a dot-separated sequence of valid Java identifiers.
/// - `simple_name` is a valid Java identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassName {
    /// Java package, for example `com.example`.
    package: String,
    /// Simple class name, for example `Configuration`.
    simple_name: String,
}

impl ClassName {
    /// Creates a class name after validating both components.
    ///
    /// The check is syntactic only; reserved-word collisions surface when the
    /// generated source is compiled.
    ///
    /// # Errors
    /// Returns [`CodegenError`] when the package or simple name is not a
    /// well-formed Java identifier sequence.
    pub fn new(package: &str, simple_name: &str) -> Result<Self, CodegenError> {
        if package.is_empty() || !package.split('.').all(is_java_identifier) {
            return Err(CodegenError::Package(package.to_string()));
        }
        if !is_java_identifier(simple_name) {
            return Err(CodegenError::ClassName(simple_name.to_string()));
        }
        Ok(Self {
            package: package.to_string(),
            simple_name: simple_name.to_string(),
        })
    }

    /// Returns the Java package.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the simple class name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

/// Returns true when the value is a syntactically valid Java identifier.
fn is_java_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}

// ============================================================================
// SECTION: Structured Members
// ============================================================================

/// Binding-metadata annotation attached to a generated field.
///
/// # Invariants
/// - `members` keep their declared order; member ordering is part of the
///   generated-output contract.
/// - Member values are already rendered Java expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaAnnotation {
    /// Simple annotation type name, already imported by the class.
    pub name: String,
    /// Ordered member name/value pairs.
    pub members: Vec<(String, String)>,
}

/// One generated field declaration.
///
/// # Invariants
/// - `initializer`, when present, is an already rendered Java expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaField {
    /// Rendered Java storage type, for example `Long` or `Set<String>`.
    pub java_type: String,
    /// Field name.
    pub name: String,
    /// Optional default-value expression.
    pub initializer: Option<String>,
    /// Optional binding-metadata annotation.
    pub annotation: Option<JavaAnnotation>,
}

/// One statement inside the generated validation method.
///
/// # Invariants
/// - Condition and message fields hold already rendered Java expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Comment-only placeholder line.
    Comment(String),
    /// Constraint check that throws on violation.
    Check {
        /// Violation condition.
        condition: String,
        /// Expression producing the failure message.
        message: String,
    },
    /// Null-guard wrapping the checks of an optional field.
    Guarded {
        /// Guarded field name.
        field: String,
        /// Checks executed only when the field is set.
        body: Vec<Statement>,
    },
    /// Trailing return of the instance itself.
    Return(String),
}

/// The generated validation method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    /// Method name.
    pub name: String,
    /// Rendered return type.
    pub returns: String,
    /// Method body in declaration order.
    pub body: Vec<Statement>,
}

// ============================================================================
// SECTION: Generated Class
// ============================================================================

/// Structured representation of one generated configuration class.
///
/// # Invariants
/// - Member order is the generation order: static fields, instance fields,
///   then the validation method.
/// - `imports` are sorted; rendering the same structure twice yields
///   byte-identical source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
    /// Fully-qualified class name.
    name: ClassName,
    /// Fully-qualified imports, sorted.
    imports: BTreeSet<String>,
    /// Static preparation constants in generation order.
    static_fields: Vec<JavaField>,
    /// Instance fields in generation order.
    fields: Vec<JavaField>,
    /// The validation method, when set.
    validate: Option<JavaMethod>,
}

impl JavaClass {
    /// Creates an empty class shell for the given name.
    #[must_use]
    pub fn new(name: ClassName) -> Self {
        Self {
            name,
            imports: BTreeSet::new(),
            static_fields: Vec::new(),
            fields: Vec::new(),
            validate: None,
        }
    }

    /// Returns the fully-qualified class name.
    #[must_use]
    pub const fn name(&self) -> &ClassName {
        &self.name
    }

    /// Returns the static fields in generation order.
    #[must_use]
    pub fn static_fields(&self) -> &[JavaField] {
        &self.static_fields
    }

    /// Returns the instance fields in generation order.
    #[must_use]
    pub fn fields(&self) -> &[JavaField] {
        &self.fields
    }

    /// Returns the validation method, when set.
    #[must_use]
    pub const fn validate_method(&self) -> Option<&JavaMethod> {
        self.validate.as_ref()
    }

    /// Registers a fully-qualified import.
    pub fn import(&mut self, path: &str) {
        self.imports.insert(path.to_string());
    }

    /// Appends a static field.
    pub fn push_static_field(&mut self, field: JavaField) {
        self.static_fields.push(field);
    }

    /// Appends an instance field.
    pub fn push_field(&mut self, field: JavaField) {
        self.fields.push(field);
    }

    /// Sets the validation method.
    pub fn set_validate(&mut self, method: JavaMethod) {
        self.validate = Some(method);
    }

    /// Renders the class to literal Java source text.
    ///
    /// Output is byte-stable for a fixed structure: sorted imports, members
    /// separated by single blank lines, 4-space indentation.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("// This file is @generated by toolforge-codegen. DO NOT EDIT.\n");
        let _ = writeln!(out, "package {};", self.name.package());
        out.push('\n');
        for import in &self.imports {
            let _ = writeln!(out, "import {import};");
        }
        out.push('\n');
        out.push_str("@Configurable\n");
        let _ = writeln!(out, "public final class {} {{", self.name.simple_name());
        let mut first = true;
        for field in &self.static_fields {
            if !first {
                out.push('\n');
            }
            first = false;
            render_static_field(&mut out, field);
        }
        for field in &self.fields {
            if !first {
                out.push('\n');
            }
            first = false;
            render_field(&mut out, field);
        }
        if let Some(method) = &self.validate {
            if !first {
                out.push('\n');
            }
            render_method(&mut out, method);
        }
        out.push_str("}\n");
        out
    }
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders a static constant declaration.
fn render_static_field(out: &mut String, field: &JavaField) {
    let _ = write!(out, "    private static final {} {}", field.java_type, field.name);
    if let Some(initializer) = &field.initializer {
        let _ = write!(out, " = {initializer}");
    }
    out.push_str(";\n");
}

/// Renders an annotated instance field declaration.
fn render_field(out: &mut String, field: &JavaField) {
    if let Some(annotation) = &field.annotation {
        render_annotation(out, annotation);
    }
    let _ = write!(out, "    public {} {}", field.java_type, field.name);
    if let Some(initializer) = &field.initializer {
        let _ = write!(out, " = {initializer}");
    }
    out.push_str(";\n");
}

/// Renders a field annotation with its members in declared order.
fn render_annotation(out: &mut String, annotation: &JavaAnnotation) {
    let _ = write!(out, "    @{}(", annotation.name);
    for (index, (member, value)) in annotation.members.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{member} = {value}");
    }
    out.push_str(")\n");
}

/// Renders the validation method.
fn render_method(out: &mut String, method: &JavaMethod) {
    let _ = writeln!(out, "    public {} {}() {{", method.returns, method.name);
    for statement in &method.body {
        render_statement(out, statement, 2);
    }
    out.push_str("    }\n");
}

/// Renders one validation statement at the given indentation depth.
fn render_statement(out: &mut String, statement: &Statement, depth: usize) {
    let pad = "    ".repeat(depth);
    match statement {
        Statement::Comment(text) => {
            let _ = writeln!(out, "{pad}// {text}");
        }
        Statement::Check {
            condition,
            message,
        } => {
            let _ = writeln!(out, "{pad}if ({condition}) {{");
            let _ = writeln!(out, "{pad}    throw new IllegalArgumentException({message});");
            let _ = writeln!(out, "{pad}}}");
        }
        Statement::Guarded {
            field,
            body,
        } => {
            let _ = writeln!(out, "{pad}if ({field} != null) {{");
            for inner in body {
                render_statement(out, inner, depth + 1);
            }
            let _ = writeln!(out, "{pad}}}");
        }
        Statement::Return(expression) => {
            let _ = writeln!(out, "{pad}return {expression};");
        }
    }
}

// ============================================================================
// SECTION: Literal Helpers
// ============================================================================

/// Renders a string as a Java string literal.
///
/// Uses JSON encoding for correct escaping; falls back to a best-effort
/// quoted string on error.
pub(crate) fn java_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value.replace('"', "\\\"")))
}

/// Renders an `f64` as a Java double literal.
///
/// Whole values gain a trailing `.0` so the literal stays a double in the
/// generated source.
pub(crate) fn java_double_literal(value: f64) -> String {
    let text = format!("{value}");
    if text.contains('.') || text.contains('e') || text.contains("inf") || text.contains("NaN") {
        text
    } else {
        format!("{text}.0")
    }
}

// crates/toolforge-codegen/src/lib.rs
// ============================================================================
// Module: Configuration Generator Library
// Description: Deterministic generator for tool configuration classes.
// Purpose: Map a deserialized manifest to a structured generated Java class.
// Dependencies: toolforge-manifest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate maps a deserialized [`Manifest`] to the structured
//! representation of a strongly-typed Java configuration class: one annotated
//! field per environment variable, secret, parameter, and input/output slot,
//! precomputed preparation constants for string domains, and one `validate()`
//! method enforcing the declared constraints.
//!
//! ### Design Notes
//! - Generation is a pure, synchronous transformation. Output is
//!   deterministic: identical manifests produce byte-identical rendered
//!   source, and member order follows manifest declaration order.
//! - The intentional dependency on the current date is deferred to
//!   generated-code runtime through a shared `TODAY` constant captured once
//!   per configuration instance; nothing is evaluated at generation time.
//! - Manifest loading, file writes, and build-tool integration are caller
//!   concerns. The generator consumes a value and returns a value.
//! - Parameter and slot name uniqueness is not enforced; colliding names
//!   produce duplicate field declarations in the generated class.
//!
//! ## Index
//! - Public API: [`ConfigGenerator`], [`CodegenError`], [`ClassName`], [`JavaClass`]
//! - Case conversion: [`casing::CaseFormat`]
//! - Generation helpers: fields, preparation constants, validation (private)

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod casing;
pub mod java;

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use toolforge_manifest::DateExpr;
use toolforge_manifest::DateUnit;
use toolforge_manifest::EnvironmentSecret;
use toolforge_manifest::EnvironmentVariable;
use toolforge_manifest::Manifest;
use toolforge_manifest::ParameterDefinition;
use toolforge_manifest::StringDomain;
use toolforge_manifest::ToolInput;
use toolforge_manifest::ToolOutput;

use crate::casing::CaseFormat;
use crate::java::JavaAnnotation;
use crate::java::JavaField;
use crate::java::JavaMethod;
use crate::java::Statement;
use crate::java::java_double_literal;
use crate::java::java_string_literal;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::java::ClassName;
pub use crate::java::JavaClass;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Errors raised while constructing generator inputs.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
/// - Generation itself never fails: the manifest variant sets are closed
///   enums matched exhaustively, so an unhandled variant cannot exist at
///   runtime.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The target class name is not a valid Java identifier.
    #[error("class name error: {0}")]
    ClassName(String),
    /// The target package is not a valid dotted Java identifier sequence.
    #[error("package error: {0}")]
    Package(String),
}

/// Configuration-class generator for one target class name.
///
/// # Invariants
/// - Generation is deterministic for a fixed manifest.
/// - Generated member order follows manifest declaration order: preparation
///   constants, environment variables, secrets, parameters, inputs, then
///   outputs expanded by extension.
///
/// # Examples
/// ```
/// use toolforge_codegen::ClassName;
/// use toolforge_codegen::ConfigGenerator;
/// use toolforge_manifest::Manifest;
///
/// # fn main() -> Result<(), toolforge_codegen::CodegenError> {
/// let class_name = ClassName::new("com.example", "Configuration")?;
/// let generator = ConfigGenerator::new(class_name);
/// let manifest = Manifest {
///     parameters: Vec::new(),
///     inputs: Vec::new(),
///     outputs: Vec::new(),
///     environment: None,
/// };
/// let generated = generator.generate(&manifest);
/// assert!(generated.render().contains("public final class Configuration"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigGenerator {
    /// Fully-qualified name of the generated class.
    class_name: ClassName,
}

impl ConfigGenerator {
    /// Creates a generator targeting the given class name.
    #[must_use]
    pub const fn new(class_name: ClassName) -> Self {
        Self {
            class_name,
        }
    }

    /// Returns the target class name.
    #[must_use]
    pub const fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// Generates the structured configuration class for the manifest.
    ///
    /// The output is a one-shot value; the generator holds no state between
    /// invocations and never mutates the manifest.
    #[must_use]
    pub fn generate(&self, manifest: &Manifest) -> JavaClass {
        let mut class = JavaClass::new(self.class_name.clone());
        class.import("com.sigpwned.discourse.core.annotation.Configurable");
        class.import("java.time.LocalDate");
        class.import("java.time.ZoneOffset");
        class.push_static_field(JavaField {
            java_type: "LocalDate".to_string(),
            name: "TODAY".to_string(),
            initializer: Some("LocalDate.now(ZoneOffset.UTC)".to_string()),
            annotation: None,
        });

        for parameter in &manifest.parameters {
            add_preparation(&mut class, parameter);
        }

        if let Some(environment) = &manifest.environment {
            for variable in &environment.variables {
                add_variable_field(&mut class, variable);
            }
            for secret in &environment.secrets {
                add_secret_field(&mut class, secret);
            }
        }

        for parameter in &manifest.parameters {
            add_parameter_field(&mut class, parameter);
        }

        for input in &manifest.inputs {
            add_input_field(&mut class, input);
        }

        for output in &manifest.outputs {
            for extension in &output.extensions {
                add_output_extension_field(&mut class, output, extension);
            }
        }

        class.set_validate(validate_method(&self.class_name, manifest));
        class
    }
}

// ============================================================================
// SECTION: Preparation Constants
// ============================================================================

/// Emits the static preparation constant for a parameter, when one exists.
///
/// Only string parameters have preparations: an ordered immutable set for
/// enumeration domains and a compiled pattern for pattern domains.
fn add_preparation(class: &mut JavaClass, parameter: &ParameterDefinition) {
    match parameter {
        ParameterDefinition::Boolean(_)
        | ParameterDefinition::Date(_)
        | ParameterDefinition::Float(_)
        | ParameterDefinition::Int(_) => {}
        ParameterDefinition::String(string_parameter) => match &string_parameter.domain {
            StringDomain::Enumeration {
                values,
            } => {
                class.import("java.util.Arrays");
                class.import("java.util.Collections");
                class.import("java.util.LinkedHashSet");
                class.import("java.util.Set");
                let items =
                    values.iter().map(|value| java_string_literal(value)).collect::<Vec<_>>();
                class.push_static_field(JavaField {
                    java_type: "Set<String>".to_string(),
                    name: format!("{}_ENUMERATION", upper_underscore(&string_parameter.name)),
                    initializer: Some(format!(
                        "Collections.unmodifiableSet(new LinkedHashSet<>(Arrays.asList({})))",
                        items.join(", ")
                    )),
                    annotation: None,
                });
            }
            StringDomain::Pattern {
                pattern,
            } => {
                class.import("java.util.regex.Pattern");
                class.push_static_field(JavaField {
                    java_type: "Pattern".to_string(),
                    name: format!("{}_PATTERN", upper_underscore(&string_parameter.name)),
                    initializer: Some(format!(
                        "Pattern.compile({})",
                        java_string_literal(pattern)
                    )),
                    annotation: None,
                });
            }
        },
    }
}

// ============================================================================
// SECTION: Field Generation
// ============================================================================

/// Emits the field for an environment variable.
fn add_variable_field(class: &mut JavaClass, variable: &EnvironmentVariable) {
    class.import("com.sigpwned.discourse.core.annotation.EnvironmentParameter");
    class.push_field(JavaField {
        java_type: "String".to_string(),
        name: lower_camel(&variable.name),
        initializer: variable.default.as_deref().map(java_string_literal),
        annotation: Some(environment_annotation(
            &variable.name,
            variable.required,
            &variable.description,
        )),
    });
}

/// Emits the field for an environment secret. Secrets never carry a default.
fn add_secret_field(class: &mut JavaClass, secret: &EnvironmentSecret) {
    class.import("com.sigpwned.discourse.core.annotation.EnvironmentParameter");
    class.push_field(JavaField {
        java_type: "String".to_string(),
        name: lower_camel(&secret.name),
        initializer: None,
        annotation: Some(environment_annotation(
            &secret.name,
            secret.required,
            &secret.description,
        )),
    });
}

/// Emits the typed field for a parameter definition.
fn add_parameter_field(class: &mut JavaClass, parameter: &ParameterDefinition) {
    let (java_type, initializer) = match parameter {
        ParameterDefinition::Boolean(boolean_parameter) => (
            "Boolean",
            boolean_parameter.default.map(|value| format!("Boolean.valueOf({value})")),
        ),
        ParameterDefinition::Date(date_parameter) => {
            ("LocalDate", date_parameter.default.as_ref().map(date_expr))
        }
        ParameterDefinition::Float(float_parameter) => (
            "Double",
            float_parameter
                .default
                .map(|value| format!("Double.valueOf({})", java_double_literal(value))),
        ),
        ParameterDefinition::Int(int_parameter) => {
            ("Long", int_parameter.default.map(|value| format!("Long.valueOf({value})")))
        }
        ParameterDefinition::String(string_parameter) => {
            ("String", string_parameter.default.as_deref().map(java_string_literal))
        }
    };
    class.import("com.sigpwned.discourse.core.annotation.OptionParameter");
    class.push_field(JavaField {
        java_type: java_type.to_string(),
        name: lower_camel(parameter.name()),
        initializer,
        annotation: Some(JavaAnnotation {
            name: "OptionParameter".to_string(),
            members: vec![
                ("longName".to_string(), java_string_literal(parameter.name())),
                ("description".to_string(), java_string_literal(parameter.description())),
                ("required".to_string(), parameter.required().to_string()),
            ],
        }),
    });
}

/// Emits the opaque input-source field for an input slot.
///
/// Slots carry no required flag in the manifest; they are always required.
fn add_input_field(class: &mut JavaClass, input: &ToolInput) {
    class.import("com.sigpwned.discourse.core.annotation.OptionParameter");
    class.import("io.toolforge.toolforge4j.io.InputSource");
    class.push_field(JavaField {
        java_type: "InputSource".to_string(),
        name: input.name.clone(),
        initializer: None,
        annotation: Some(slot_annotation(&input.name, &input.description)),
    });
}

/// Emits one opaque output-sink field for an output slot extension.
///
/// The field is named by joining the slot name with the capitalized
/// extension; the wire name keeps the `<slot>.<extension>` form.
fn add_output_extension_field(class: &mut JavaClass, output: &ToolOutput, extension: &str) {
    class.import("com.sigpwned.discourse.core.annotation.OptionParameter");
    class.import("io.toolforge.toolforge4j.io.OutputSink");
    let capitalized = CaseFormat::LowerCamel.to(CaseFormat::UpperCamel, extension);
    class.push_field(JavaField {
        java_type: "OutputSink".to_string(),
        name: format!("{}{capitalized}", output.name),
        initializer: None,
        annotation: Some(slot_annotation(
            &format!("{}.{extension}", output.name),
            &output.description,
        )),
    });
}

/// Builds the environment binding annotation for variables and secrets.
fn environment_annotation(name: &str, required: bool, description: &str) -> JavaAnnotation {
    JavaAnnotation {
        name: "EnvironmentParameter".to_string(),
        members: vec![
            ("variableName".to_string(), java_string_literal(name)),
            ("required".to_string(), required.to_string()),
            ("description".to_string(), java_string_literal(description)),
        ],
    }
}

/// Builds the option binding annotation for slots, which are always required.
fn slot_annotation(wire_name: &str, description: &str) -> JavaAnnotation {
    JavaAnnotation {
        name: "OptionParameter".to_string(),
        members: vec![
            ("longName".to_string(), java_string_literal(wire_name)),
            ("required".to_string(), "true".to_string()),
            ("description".to_string(), java_string_literal(description)),
        ],
    }
}

// ============================================================================
// SECTION: Validation Generation
// ============================================================================

/// Builds the validation method over all parameters in declaration order.
fn validate_method(class_name: &ClassName, manifest: &Manifest) -> JavaMethod {
    let mut body = Vec::new();
    for parameter in &manifest.parameters {
        body.extend(validation_block(parameter));
    }
    body.push(Statement::Return("this".to_string()));
    JavaMethod {
        name: "validate".to_string(),
        returns: class_name.simple_name().to_string(),
        body,
    }
}

/// Wraps a parameter's checks in a null-guard when the parameter is optional.
///
/// An optional parameter left unset skips validation entirely; absent
/// defaults are never validated.
fn validation_block(parameter: &ParameterDefinition) -> Vec<Statement> {
    let logic = validation_logic(parameter);
    if parameter.required() {
        return logic;
    }
    vec![Statement::Guarded {
        field: lower_camel(parameter.name()),
        body: logic,
    }]
}

/// Builds the constraint checks for one parameter.
fn validation_logic(parameter: &ParameterDefinition) -> Vec<Statement> {
    match parameter {
        ParameterDefinition::Boolean(boolean_parameter) => {
            vec![Statement::Comment(format!(
                "No validation to do for {}",
                boolean_parameter.name
            ))]
        }
        ParameterDefinition::Date(date_parameter) => {
            let field = lower_camel(&date_parameter.name);
            let minimum = date_expr(&date_parameter.minimum);
            let maximum = date_expr(&date_parameter.maximum);
            vec![
                Statement::Check {
                    condition: format!("{field}.isBefore({minimum})"),
                    message: format!(
                        "{} + {minimum}",
                        java_string_literal(&format!(
                            "{} must be greater than or equal to ",
                            date_parameter.name
                        ))
                    ),
                },
                Statement::Check {
                    condition: format!("{field}.isAfter({maximum})"),
                    message: format!(
                        "{} + {maximum}",
                        java_string_literal(&format!(
                            "{} must be less than or equal to ",
                            date_parameter.name
                        ))
                    ),
                },
            ]
        }
        ParameterDefinition::Float(float_parameter) => {
            let field = lower_camel(&float_parameter.name);
            vec![
                Statement::Check {
                    condition: format!(
                        "{field} < {}",
                        java_double_literal(float_parameter.minimum)
                    ),
                    message: java_string_literal(&format!(
                        "{} must be greater than or equal to {:.6}",
                        float_parameter.name, float_parameter.minimum
                    )),
                },
                Statement::Check {
                    condition: format!(
                        "{field} > {}",
                        java_double_literal(float_parameter.maximum)
                    ),
                    message: java_string_literal(&format!(
                        "{} must be less than or equal to {:.6}",
                        float_parameter.name, float_parameter.maximum
                    )),
                },
            ]
        }
        ParameterDefinition::Int(int_parameter) => {
            let field = lower_camel(&int_parameter.name);
            vec![
                Statement::Check {
                    condition: format!("{field} < {}", int_parameter.minimum),
                    message: java_string_literal(&format!(
                        "{} must be greater than or equal to {}",
                        int_parameter.name, int_parameter.minimum
                    )),
                },
                Statement::Check {
                    condition: format!("{field} > {}", int_parameter.maximum),
                    message: java_string_literal(&format!(
                        "{} must be less than or equal to {}",
                        int_parameter.name, int_parameter.maximum
                    )),
                },
            ]
        }
        ParameterDefinition::String(string_parameter) => {
            let field = lower_camel(&string_parameter.name);
            match &string_parameter.domain {
                StringDomain::Enumeration {
                    values,
                } => {
                    let constant = format!("{}_ENUMERATION", upper_underscore(&string_parameter.name));
                    vec![Statement::Check {
                        condition: format!("!{constant}.contains({field})"),
                        message: java_string_literal(&format!(
                            "{} must be one of: {}",
                            string_parameter.name,
                            values.join(", ")
                        )),
                    }]
                }
                StringDomain::Pattern {
                    pattern,
                } => {
                    let constant = format!("{}_PATTERN", upper_underscore(&string_parameter.name));
                    vec![Statement::Check {
                        condition: format!("!{constant}.matcher({field}).matches()"),
                        message: java_string_literal(&format!(
                            "{} must match the pattern `{pattern}'",
                            string_parameter.name
                        )),
                    }]
                }
            }
        }
    }
}

// ============================================================================
// SECTION: Date Expressions
// ============================================================================

/// Renders a symbolic date expression as generated Java source.
///
/// The same expression value always produces identical text; evaluation is
/// deferred to generated-code runtime against the shared `TODAY` constant.
fn date_expr(expression: &DateExpr) -> String {
    match expression {
        DateExpr::Absolute {
            year,
            month,
            day,
        } => format!("LocalDate.of({year}, {month}, {day})"),
        DateExpr::Relative {
            amount,
            unit,
        } => {
            let method = match unit {
                DateUnit::Day => "plusDays",
                DateUnit::Week => "plusWeeks",
                DateUnit::Month => "plusMonths",
                DateUnit::Year => "plusYears",
            };
            format!("TODAY.{method}({amount})")
        }
        DateExpr::Today => "TODAY".to_string(),
    }
}

// ============================================================================
// SECTION: Naming Helpers
// ============================================================================

/// Defensively normalizes a declared name to lower camel case.
///
/// Only a leading uppercase character is lowercased; the remainder is left
/// untouched. This is not a full case-style conversion.
fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            first.to_lowercase().collect::<String>() + chars.as_str()
        }
        _ => name.to_string(),
    }
}

/// Converts a declared name to the upper-underscore constant style.
fn upper_underscore(name: &str) -> String {
    CaseFormat::LowerCamel.to(CaseFormat::UpperUnderscore, &lower_camel(name))
}

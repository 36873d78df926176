// crates/toolforge-codegen/tests/codegen.rs
// ============================================================================
// Module: Configuration Generator Tests
// Description: Integration tests for generated configuration classes.
// Purpose: Validate determinism, ordering, naming, and validation output.
// Dependencies: toolforge-codegen, toolforge-manifest
// ============================================================================

//! ## Overview
//! Integration tests covering the generator's observable contract: the full
//! fixture scenario compared byte-for-byte against a committed expected
//! output, plus focused checks for member ordering, defensive name
//! normalization, optional-guard suppression, and date-expression stability.

use toolforge_codegen::ClassName;
use toolforge_codegen::CodegenError;
use toolforge_codegen::ConfigGenerator;
use toolforge_manifest::BooleanParameter;
use toolforge_manifest::DateExpr;
use toolforge_manifest::DateParameter;
use toolforge_manifest::DateUnit;
use toolforge_manifest::Environment;
use toolforge_manifest::EnvironmentSecret;
use toolforge_manifest::EnvironmentVariable;
use toolforge_manifest::FloatParameter;
use toolforge_manifest::IntParameter;
use toolforge_manifest::Manifest;
use toolforge_manifest::ParameterDefinition;
use toolforge_manifest::StringDomain;
use toolforge_manifest::StringParameter;
use toolforge_manifest::ToolInput;
use toolforge_manifest::ToolOutput;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Expected rendered output for the full fixture manifest.
const EXPECTED_CONFIGURATION: &str = include_str!("fixtures/Configuration.java");

/// Builds the generator targeting `com.example.Configuration`.
fn configuration_generator() -> Result<ConfigGenerator, CodegenError> {
    Ok(ConfigGenerator::new(ClassName::new("com.example", "Configuration")?))
}

/// Builds an empty manifest shell.
fn empty_manifest() -> Manifest {
    Manifest {
        parameters: Vec::new(),
        inputs: Vec::new(),
        outputs: Vec::new(),
        environment: None,
    }
}

/// Builds an int parameter with fixed bounds and no default.
fn int_parameter(name: &str, required: bool) -> ParameterDefinition {
    ParameterDefinition::Int(IntParameter {
        name: name.to_string(),
        description: format!("The {name} parameter."),
        required,
        default: None,
        minimum: 0,
        maximum: 100,
    })
}

/// Builds the full fixture manifest: one parameter of every variant, an
/// input slot, a two-extension output slot, and an environment block.
fn fixture_manifest() -> Manifest {
    Manifest {
        parameters: vec![
            ParameterDefinition::Boolean(BooleanParameter {
                name: "exampleBoolean".to_string(),
                description: "This is an example boolean field.".to_string(),
                required: true,
                default: Some(true),
            }),
            ParameterDefinition::Int(IntParameter {
                name: "exampleInt".to_string(),
                description: "This is an example int field.".to_string(),
                required: true,
                default: Some(10),
                minimum: 0,
                maximum: 100,
            }),
            ParameterDefinition::Float(FloatParameter {
                name: "exampleFloat".to_string(),
                description: "This is an example float field.".to_string(),
                required: true,
                default: Some(10.0),
                minimum: 0.0,
                maximum: 100.0,
            }),
            ParameterDefinition::String(StringParameter {
                name: "exampleEnumString".to_string(),
                description: "This is an example enum string field.".to_string(),
                required: true,
                default: Some("alpha".to_string()),
                domain: StringDomain::Enumeration {
                    values: vec!["alpha".to_string(), "bravo".to_string()],
                },
            }),
            ParameterDefinition::String(StringParameter {
                name: "examplePatternString".to_string(),
                description: "This is an example pattern string field.".to_string(),
                required: true,
                default: Some("hello".to_string()),
                domain: StringDomain::Pattern {
                    pattern: "^hel*o$".to_string(),
                },
            }),
            ParameterDefinition::Date(DateParameter {
                name: "exampleDate".to_string(),
                description: "This is an example date field.".to_string(),
                required: true,
                default: Some(DateExpr::Today),
                minimum: DateExpr::Relative {
                    amount: -1,
                    unit: DateUnit::Week,
                },
                maximum: DateExpr::Relative {
                    amount: 1,
                    unit: DateUnit::Week,
                },
            }),
        ],
        inputs: vec![ToolInput {
            name: "input".to_string(),
            description: "This is the first input.".to_string(),
            extensions: vec!["csv".to_string()],
        }],
        outputs: vec![ToolOutput {
            name: "output".to_string(),
            description: "This is the first output.".to_string(),
            extensions: vec!["csv".to_string(), "xlsx".to_string()],
        }],
        environment: Some(Environment {
            variables: vec![EnvironmentVariable {
                name: "EXAMPLE_VARIABLE_1".to_string(),
                description: "This is variable 1.".to_string(),
                required: true,
                default: Some("hello".to_string()),
            }],
            secrets: vec![EnvironmentSecret {
                name: "EXAMPLE_SECRET_1".to_string(),
                description: "This is secret 1.".to_string(),
                required: false,
            }],
        }),
    }
}

/// Returns the byte offset of a needle within the rendered output.
fn offset_of(rendered: &str, needle: &str) -> Result<usize, String> {
    rendered.find(needle).ok_or_else(|| format!("expected rendered output to contain {needle:?}"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn fixture_manifest_renders_expected_configuration() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let rendered = generator.generate(&fixture_manifest()).render();
    assert_eq!(rendered, EXPECTED_CONFIGURATION);
    Ok(())
}

#[test]
fn generation_is_deterministic_for_identical_manifests() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let manifest = fixture_manifest();
    let first = generator.generate(&manifest).render();
    let second = generator.generate(&manifest).render();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn members_follow_manifest_declaration_order() -> Result<(), Box<dyn std::error::Error>> {
    let generator = configuration_generator()?;
    let rendered = generator.generate(&fixture_manifest()).render();
    let needles = [
        "public String eXAMPLE_VARIABLE_1",
        "public String eXAMPLE_SECRET_1",
        "public Boolean exampleBoolean",
        "public Long exampleInt",
        "public Double exampleFloat",
        "public String exampleEnumString",
        "public String examplePatternString",
        "public LocalDate exampleDate",
        "public InputSource input",
        "public OutputSink outputCsv",
        "public OutputSink outputXlsx",
    ];
    let mut previous = 0;
    for needle in needles {
        let position = offset_of(&rendered, needle)?;
        assert!(position > previous, "{needle} appears out of declaration order");
        previous = position;
    }
    Ok(())
}

#[test]
fn leading_uppercase_names_are_defensively_normalized() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let mut manifest = empty_manifest();
    manifest.parameters.push(int_parameter("Foo", true));
    manifest.parameters.push(int_parameter("FOOBar", true));
    let rendered = generator.generate(&manifest).render();
    assert!(rendered.contains("public Long foo"));
    assert!(rendered.contains("public Long fOOBar"));
    // Wire names keep the declared spelling.
    assert!(rendered.contains("longName = \"Foo\""));
    assert!(rendered.contains("longName = \"FOOBar\""));
    Ok(())
}

#[test]
fn enumeration_constants_use_upper_underscore_names() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let rendered = generator.generate(&fixture_manifest()).render();
    assert!(rendered.contains("EXAMPLE_ENUM_STRING_ENUMERATION"));
    assert!(rendered.contains("EXAMPLE_PATTERN_STRING_PATTERN"));
    Ok(())
}

#[test]
fn optional_parameters_wrap_checks_in_null_guard() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let mut manifest = empty_manifest();
    manifest.parameters.push(int_parameter("count", false));
    let rendered = generator.generate(&manifest).render();
    assert!(rendered.contains("if (count != null) {"));
    assert!(rendered.contains("if (count < 0) {"));
    assert!(rendered.contains("if (count > 100) {"));
    Ok(())
}

#[test]
fn required_parameters_emit_checks_unconditionally() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let mut manifest = empty_manifest();
    manifest.parameters.push(int_parameter("count", true));
    let rendered = generator.generate(&manifest).render();
    assert!(!rendered.contains("if (count != null) {"));
    assert!(rendered.contains("if (count < 0) {"));
    assert!(rendered.contains("if (count > 100) {"));
    Ok(())
}

#[test]
fn date_expressions_render_identically_at_every_call_site() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let mut manifest = empty_manifest();
    manifest.parameters.push(ParameterDefinition::Date(DateParameter {
        name: "asOf".to_string(),
        description: "Reporting date.".to_string(),
        required: true,
        default: Some(DateExpr::Relative {
            amount: -1,
            unit: DateUnit::Week,
        }),
        minimum: DateExpr::Relative {
            amount: -1,
            unit: DateUnit::Week,
        },
        maximum: DateExpr::Today,
    }));
    let rendered = generator.generate(&manifest).render();
    // Default initializer and minimum bound render the same expression text.
    assert_eq!(rendered.matches("TODAY.plusWeeks(-1)").count(), 3);
    Ok(())
}

#[test]
fn absolute_date_expressions_render_date_literals() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let mut manifest = empty_manifest();
    manifest.parameters.push(ParameterDefinition::Date(DateParameter {
        name: "cutoff".to_string(),
        description: "Cutoff date.".to_string(),
        required: true,
        default: None,
        minimum: DateExpr::Absolute {
            year: 2022,
            month: 1,
            day: 9,
        },
        maximum: DateExpr::Today,
    }));
    let rendered = generator.generate(&manifest).render();
    assert!(rendered.contains("cutoff.isBefore(LocalDate.of(2022, 1, 9))"));
    Ok(())
}

#[test]
fn output_extensions_produce_capitalized_suffix_fields() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let mut manifest = empty_manifest();
    manifest.outputs.push(ToolOutput {
        name: "output".to_string(),
        description: "This is the first output.".to_string(),
        extensions: vec!["xlsx".to_string()],
    });
    let rendered = generator.generate(&manifest).render();
    assert!(rendered.contains("public OutputSink outputXlsx"));
    assert!(rendered.contains("longName = \"output.xlsx\""));
    Ok(())
}

#[test]
fn secrets_never_carry_an_initializer() -> Result<(), CodegenError> {
    let generator = configuration_generator()?;
    let rendered = generator.generate(&fixture_manifest()).render();
    assert!(rendered.contains("public String eXAMPLE_SECRET_1;\n"));
    Ok(())
}

#[test]
fn class_names_are_validated_fail_closed() {
    assert!(matches!(
        ClassName::new("com.example", "123Configuration"),
        Err(CodegenError::ClassName(_))
    ));
    assert!(matches!(
        ClassName::new("com..example", "Configuration"),
        Err(CodegenError::Package(_))
    ));
    assert!(matches!(ClassName::new("", "Configuration"), Err(CodegenError::Package(_))));
}

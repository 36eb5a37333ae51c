//! Identifier validation shared by every prompt stage.
//!
//! Prompt-level validators return `Result<(), String>` so the message can be
//! shown inline and the question re-asked; only entity-name validation is
//! fatal and therefore returns a [`DomainError`].

use crate::domain::error::DomainError;
use crate::domain::naming;

/// Keywords that may not be used as entity, field, or relationship names.
///
/// The generated accessor code is consumed by JVM tooling downstream, so the
/// Java keyword list applies.  Comparison is case-insensitive.
pub const RESERVED_WORDS: &[&str] = &[
    "ABSTRACT",
    "CONTINUE",
    "FOR",
    "NEW",
    "SWITCH",
    "ASSERT",
    "DEFAULT",
    "GOTO",
    "PACKAGE",
    "SYNCHRONIZED",
    "BOOLEAN",
    "DO",
    "IF",
    "PRIVATE",
    "THIS",
    "BREAK",
    "DOUBLE",
    "IMPLEMENTS",
    "PROTECTED",
    "THROW",
    "BYTE",
    "ELSE",
    "IMPORT",
    "PUBLIC",
    "THROWS",
    "CASE",
    "ENUM",
    "INSTANCEOF",
    "RETURN",
    "TRANSIENT",
    "CATCH",
    "EXTENDS",
    "INT",
    "SHORT",
    "TRY",
    "CHAR",
    "FINAL",
    "INTERFACE",
    "STATIC",
    "VOID",
    "CLASS",
    "FINALLY",
    "LONG",
    "STRICTFP",
    "VOLATILE",
    "CONST",
    "FLOAT",
    "NATIVE",
    "SUPER",
    "WHILE",
];

/// `true` if the word is reserved (case-insensitive).
pub fn is_reserved(word: &str) -> bool {
    let upper = word.to_uppercase();
    RESERVED_WORDS.contains(&upper.as_str())
}

/// `true` if every character is in `[a-zA-Z0-9_]`.
pub fn is_identifier(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate an entity name given on the command line.
///
/// Rejects special characters, empty names, the reserved `Detail` suffix,
/// and reserved words.
pub fn validate_entity_name(name: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| {
        Err(DomainError::InvalidEntityName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if !is_identifier(name) {
        return reject("the entity name cannot contain special characters");
    }
    if name.is_empty() {
        return reject("the entity name cannot be empty");
    }
    if name.ends_with("Detail") {
        return reject("the entity name cannot end with 'Detail'");
    }
    if is_reserved(name) {
        return reject("the entity name cannot be a reserved keyword");
    }
    Ok(())
}

/// Validate a new field name against the names already taken in the entity.
///
/// `taken_underscored` holds the snake_cased names of existing fields and
/// relationships, so the uniqueness check is case- and
/// underscore-normalization-insensitive.
pub fn validate_field_name(input: &str, taken_underscored: &[String]) -> Result<(), String> {
    if !is_identifier(input) {
        return Err("Your field name cannot contain special characters".into());
    }
    if input.is_empty() {
        return Err("Your field name cannot be empty".into());
    }
    if input.chars().next().is_some_and(|c| c.is_uppercase()) {
        return Err("Your field name cannot start with an upper case letter".into());
    }
    if input == "id" || taken_underscored.contains(&naming::snake_case(input)) {
        return Err("Your field name cannot use an already existing field name".into());
    }
    if is_reserved(input) {
        return Err("Your field name cannot contain a reserved keyword".into());
    }
    Ok(())
}

/// Validate a relationship name.  Same rules as field names; the caller
/// passes the combined field + relationship name set.
pub fn validate_relationship_name(input: &str, taken_underscored: &[String]) -> Result<(), String> {
    if !is_identifier(input) {
        return Err("Your relationship cannot contain special characters".into());
    }
    if input.is_empty() {
        return Err("Your relationship cannot be empty".into());
    }
    if input == "id" || taken_underscored.contains(&naming::snake_case(input)) {
        return Err("Your relationship cannot use an already existing field name".into());
    }
    if is_reserved(input) {
        return Err("Your relationship cannot contain a reserved keyword".into());
    }
    Ok(())
}

/// Validate the target entity name of a relationship.
pub fn validate_other_entity_name(input: &str) -> Result<(), String> {
    if !is_identifier(input) {
        return Err("Your other entity name cannot contain special characters".into());
    }
    if input.is_empty() {
        return Err("Your other entity name cannot be empty".into());
    }
    if is_reserved(input) {
        return Err("Your other entity name cannot contain a reserved keyword".into());
    }
    Ok(())
}

/// Validate the application name asked by the app generator.
pub fn validate_app_name(input: &str) -> Result<(), String> {
    if input == "application" {
        return Err(
            "Your application name cannot be named 'application' as this is a reserved name"
                .into(),
        );
    }
    if !is_identifier(input) || input.is_empty() {
        return Err(
            "Your application name cannot contain special characters or a blank space".into(),
        );
    }
    Ok(())
}

/// Validate an enumeration class name.
pub fn validate_enum_name(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("Your class name cannot be empty".into());
    }
    Ok(())
}

/// Validate a comma-separated enum value list.
///
/// Values may contain `[A-Za-z0-9_]` (plus separating whitespace), must be
/// unique, non-empty, and must not start with a digit.
pub fn validate_enum_values(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("You must specify values for your enumeration".into());
    }
    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ',' || c.is_whitespace())
    {
        return Err(
            "Enum values cannot contain special characters (allowed characters: A-Z, a-z, 0-9 and _)"
                .into(),
        );
    }

    let values = split_enum_values(input);
    let mut seen = std::collections::HashSet::new();
    for value in &values {
        if !seen.insert(value.clone()) {
            return Err(format!(
                "Enum values cannot contain duplicates (typed values: {input})"
            ));
        }
    }
    for value in &values {
        if value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(format!("Enum value \"{value}\" cannot start with a number"));
        }
        if value.is_empty() {
            return Err(
                "Enum value cannot be empty (did you accidentally type \",\" twice in a row?)"
                    .into(),
            );
        }
    }
    Ok(())
}

/// Split an enum value list on commas, stripping all whitespace first.
pub fn split_enum_values(input: &str) -> Vec<String> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Validate a numeric bound entered for a validation rule.
pub fn validate_numeric_bound(input: &str, label: &str) -> Result<(), String> {
    if input.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{label} must be a number"))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! The entity definition aggregate.
//!
//! An [`EntityDefinition`] is the persisted unit behind the entity
//! sub-generator: an ordered list of typed fields, an ordered list of
//! relationships to other entities, and a handful of opaque metadata values
//! carried across regenerations.  Every generated artifact (data-access
//! module, schema-type module, splice snippets) is rendered from this one
//! model.
//!
//! ## Invariants
//!
//! - Field and relationship names are unique within the entity under
//!   snake_case normalization and never equal the literal key name `id`.
//! - The key field is recomputed after every add/remove via [`key_field`]:
//!   the first field flagged `fieldIsKey`, else the first field literally
//!   named `id` or `key`, else the first field in definition order, else
//!   absent.
//!
//! [`key_field`]: EntityDefinition::key_field

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, naming};

// ── Field types ───────────────────────────────────────────────────────────────

/// The type of an entity field.
///
/// Built-in scalars are serialized as their literal type-name string
/// (including `"byte[]"` and `"UUID"`); any other string deserializes as a
/// user-declared enumeration type.  The legacy name `"DateTime"` is migrated
/// to `ZonedDateTime` on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Long,
    Float,
    Double,
    BigDecimal,
    LocalDate,
    ZonedDateTime,
    Boolean,
    Uuid,
    Date,
    Blob,
    /// User-declared enumeration, carrying its class name.
    Enum(String),
}

impl FieldType {
    /// All built-in scalar types, in prompt order.
    pub const BUILTINS: &'static [FieldType] = &[
        FieldType::String,
        FieldType::Integer,
        FieldType::Long,
        FieldType::Float,
        FieldType::Double,
        FieldType::BigDecimal,
        FieldType::LocalDate,
        FieldType::ZonedDateTime,
        FieldType::Date,
        FieldType::Uuid,
        FieldType::Boolean,
        FieldType::Blob,
    ];

    /// The serialized type-name string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::BigDecimal => "BigDecimal",
            Self::LocalDate => "LocalDate",
            Self::ZonedDateTime => "ZonedDateTime",
            Self::Boolean => "Boolean",
            Self::Uuid => "UUID",
            Self::Date => "Date",
            Self::Blob => "byte[]",
            Self::Enum(name) => name,
        }
    }

    /// Parse a serialized type name.  Unknown names are enum types.
    pub fn parse(s: &str) -> Self {
        match s {
            "String" => Self::String,
            "Integer" => Self::Integer,
            "Long" => Self::Long,
            "Float" => Self::Float,
            "Double" => Self::Double,
            "BigDecimal" => Self::BigDecimal,
            "LocalDate" => Self::LocalDate,
            "ZonedDateTime" => Self::ZonedDateTime,
            // Legacy persisted definitions used the JodaTime name.
            "DateTime" => Self::ZonedDateTime,
            "Boolean" => Self::Boolean,
            "UUID" => Self::Uuid,
            "Date" => Self::Date,
            "byte[]" => Self::Blob,
            other => Self::Enum(other.to_string()),
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Long | Self::Float | Self::Double | Self::BigDecimal
        )
    }

    /// The GraphQL type name used in the generated schema module.
    pub fn graphql_type(&self) -> &'static str {
        match self {
            Self::String | Self::Uuid => "GraphQLString",
            Self::Integer | Self::Long => "GraphQLInt",
            Self::Float | Self::Double | Self::BigDecimal => "GraphQLFloat",
            Self::LocalDate | Self::ZonedDateTime | Self::Date => "GraphQLDateTime",
            Self::Boolean => "GraphQLBoolean",
            Self::Blob => "GraphQLNonNull",
            Self::Enum(_) => "GraphQLEnumType",
        }
    }

    /// The single-character storage attribute code used in the table
    /// definition splice (`S` string, `N` numeric, `B` binary).  Applied to
    /// the key field only.
    pub fn storage_attribute_type(&self) -> &'static str {
        match self {
            Self::String | Self::Uuid | Self::LocalDate | Self::ZonedDateTime | Self::Date => "S",
            Self::Integer | Self::Long | Self::Float | Self::Double | Self::BigDecimal => "N",
            Self::Boolean => "N",
            Self::Blob => "B",
            Self::Enum(_) => "S",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Declared content of a blob field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobContent {
    Image,
    Any,
    Text,
}

impl BlobContent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Any => "any",
            Self::Text => "text",
        }
    }
}

/// A validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateRule {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Min,
    Max,
    MinBytes,
    MaxBytes,
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// One scalar or enum-typed attribute of an entity.
///
/// Only user-entered values are persisted; derived naming forms are
/// recomputed on demand so they stay consistent with the source values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub field_name: String,
    pub field_type: FieldType,

    /// Comma-separated enum literals; present only for enum fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_values: Option<String>,

    /// Present only when the type is `byte[]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type_blob_content: Option<BlobContent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_validate_rules: Vec<ValidateRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_minlength: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_maxlength: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_minbytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_validate_rules_maxbytes: Option<u64>,

    /// Explicit key flag, honoured with highest priority by the key-field
    /// selection rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_is_key: Option<bool>,
}

impl Field {
    /// A plain field with no enum values, blob content, or validation rules.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_name: name.into(),
            field_type,
            field_values: None,
            field_type_blob_content: None,
            field_validate_rules: Vec::new(),
            field_validate_rules_minlength: None,
            field_validate_rules_maxlength: None,
            field_validate_rules_pattern: None,
            field_validate_rules_min: None,
            field_validate_rules_max: None,
            field_validate_rules_minbytes: None,
            field_validate_rules_maxbytes: None,
            field_is_key: None,
        }
    }

    // Derived naming forms — computed, never persisted.

    pub fn capitalized(&self) -> String {
        naming::upper_first(&self.field_name)
    }

    pub fn underscored(&self) -> String {
        naming::snake_case(&self.field_name)
    }

    pub fn humanized(&self) -> String {
        naming::start_case(&self.field_name)
    }

    /// Accessor-method name, including the two-letter-capital edge case.
    pub fn accessor(&self) -> String {
        naming::accessor_name(&self.field_name)
    }

    /// Instance name of the enum type, for enum fields.
    pub fn enum_instance(&self) -> Option<String> {
        match &self.field_type {
            FieldType::Enum(name) => Some(naming::lower_first(name)),
            _ => None,
        }
    }

    pub fn is_validated(&self) -> bool {
        !self.field_validate_rules.is_empty()
    }

    /// One-line validation summary for the running session printout,
    /// e.g. `required maxlength='20'`.
    pub fn validation_details(&self) -> String {
        let mut parts = Vec::new();
        for rule in &self.field_validate_rules {
            match rule {
                ValidateRule::Required => parts.push("required".to_string()),
                ValidateRule::MinLength => {
                    if let Some(v) = self.field_validate_rules_minlength {
                        parts.push(format!("minlength='{v}'"));
                    }
                }
                ValidateRule::MaxLength => {
                    if let Some(v) = self.field_validate_rules_maxlength {
                        parts.push(format!("maxlength='{v}'"));
                    }
                }
                ValidateRule::Pattern => {
                    if let Some(p) = &self.field_validate_rules_pattern {
                        parts.push(format!("pattern='{p}'"));
                    }
                }
                ValidateRule::Min => {
                    if let Some(v) = self.field_validate_rules_min {
                        parts.push(format!("min='{v}'"));
                    }
                }
                ValidateRule::Max => {
                    if let Some(v) = self.field_validate_rules_max {
                        parts.push(format!("max='{v}'"));
                    }
                }
                ValidateRule::MinBytes => {
                    if let Some(v) = self.field_validate_rules_minbytes {
                        parts.push(format!("minbytes='{v}'"));
                    }
                }
                ValidateRule::MaxBytes => {
                    if let Some(v) = self.field_validate_rules_maxbytes {
                        parts.push(format!("maxbytes='{v}'"));
                    }
                }
            }
        }
        parts.join(" ")
    }
}

// ── Relationship ──────────────────────────────────────────────────────────────

/// Directionality/cardinality classification of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    OneToMany,
    ManyToOne,
    ManyToMany,
    OneToOne,
}

impl RelationshipType {
    pub const ALL: &'static [RelationshipType] = &[
        RelationshipType::OneToMany,
        RelationshipType::ManyToOne,
        RelationshipType::ManyToMany,
        RelationshipType::OneToOne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToMany => "one-to-many",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
            Self::OneToOne => "one-to-one",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named association between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub relationship_name: String,
    /// Target entity, stored lower-first.
    pub other_entity_name: String,
    pub relationship_type: RelationshipType,

    /// Which side stores the foreign reference; asked only for many-to-many
    /// and one-to-one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_side: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_relationship_name: Option<String>,

    /// Which field of the other entity to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_field: Option<String>,
}

impl Relationship {
    // Derived naming forms.

    pub fn capitalized(&self) -> String {
        naming::upper_first(&self.relationship_name)
    }

    pub fn capitalized_plural(&self) -> String {
        naming::pluralize(&self.capitalized())
    }

    pub fn humanized(&self) -> String {
        naming::start_case(&self.relationship_name)
    }

    pub fn plural(&self) -> String {
        naming::pluralize(&self.relationship_name)
    }

    pub fn field_name(&self) -> String {
        naming::lower_first(&self.relationship_name)
    }

    pub fn field_name_plural(&self) -> String {
        naming::pluralize(&self.field_name())
    }

    pub fn other_entity_capitalized(&self) -> String {
        naming::upper_first(&self.other_entity_name)
    }

    pub fn other_entity_plural(&self) -> String {
        naming::pluralize(&self.other_entity_name)
    }

    pub fn other_entity_capitalized_plural(&self) -> String {
        naming::pluralize(&self.other_entity_capitalized())
    }

    pub fn other_entity_field_capitalized(&self) -> Option<String> {
        self.other_entity_field
            .as_deref()
            .map(naming::upper_first)
    }

    pub fn other_entity_relationship_name_plural(&self) -> Option<String> {
        self.other_entity_relationship_name
            .as_deref()
            .map(naming::pluralize)
    }

    /// `true` if this is the side storing the foreign reference.
    pub fn is_owner(&self) -> bool {
        self.owner_side == Some(true)
    }

    /// Composite label used in the removal multi-select, `name:type`.
    pub fn label(&self) -> String {
        format!("{}:{}", self.relationship_name, self.relationship_type)
    }
}

// ── EntityDefinition ──────────────────────────────────────────────────────────

/// The persisted unit per named entity.
///
/// `changelogDate`, `dto`, `service`, `pagination`, `entityTableName`, and
/// `javadoc` are opaque passthrough metadata preserved across regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinition {
    /// The entity name is carried by the definition file's name, not its
    /// contents.
    #[serde(skip)]
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dto: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<serde_json::Value>,
}

impl EntityDefinition {
    /// A fresh, empty definition for a new entity.
    pub fn new(name: impl Into<String>) -> Self {
        let mut def = Self {
            name: name.into(),
            ..Self::default()
        };
        def.entity_table_name = Some(naming::snake_case(&def.name));
        def
    }

    /// Fill in values the serialized form may omit: the name (carried by the
    /// file name) and the default table name.
    pub fn normalize(&mut self, name: &str) {
        self.name = name.to_string();
        if self.entity_table_name.is_none() {
            self.entity_table_name = Some(naming::snake_case(name));
        }
    }

    // ── Entity-level derived names ─────────────────────────────────────────

    /// Capitalized type name, e.g. `Order`.
    pub fn entity_class(&self) -> String {
        naming::upper_first(&self.name)
    }

    pub fn entity_class_plural(&self) -> String {
        naming::pluralize(&self.entity_class())
    }

    pub fn entity_class_humanized(&self) -> String {
        naming::start_case(&self.entity_class())
    }

    pub fn entity_class_plural_humanized(&self) -> String {
        naming::start_case(&self.entity_class_plural())
    }

    /// Instance name, e.g. `order`.
    pub fn entity_instance(&self) -> String {
        naming::lower_first(&self.name)
    }

    pub fn entity_instance_plural(&self) -> String {
        naming::pluralize(&self.entity_instance())
    }

    /// Folder/service-file name, kebab-cased.
    pub fn entity_folder_name(&self) -> String {
        naming::kebab_case(&naming::lower_first(&self.name))
    }

    /// API path segment: pluralized and kebab-cased.
    pub fn entity_api_url(&self) -> String {
        naming::kebab_case(&naming::lower_first(&naming::pluralize(&self.name)))
    }

    /// Storage table name: the persisted value, or the snake_cased entity
    /// name when absent.
    pub fn table_name(&self) -> String {
        self.entity_table_name
            .clone()
            .unwrap_or_else(|| naming::snake_case(&self.name))
    }

    // ── Key field ──────────────────────────────────────────────────────────

    /// The field used as the unique lookup key.
    ///
    /// Deterministic priority: the first field flagged `fieldIsKey`, else
    /// the first field literally named `id` or `key`, else the first field
    /// in definition order, else `None`.  Callers must re-consult this after
    /// every add/remove; nothing is cached.
    pub fn key_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.field_is_key == Some(true))
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|f| f.field_name == "id" || f.field_name == "key")
            })
            .or_else(|| self.fields.first())
    }

    // ── Mutation ───────────────────────────────────────────────────────────

    /// snake_cased names of all fields and relationships, for uniqueness
    /// checks.
    pub fn taken_names_underscored(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.underscored())
            .chain(
                self.relationships
                    .iter()
                    .map(|r| naming::snake_case(&r.relationship_name)),
            )
            .collect()
    }

    /// Append a field, enforcing the uniqueness and key-name invariants.
    pub fn add_field(&mut self, field: Field) -> Result<(), DomainError> {
        if field.field_name == "id" {
            return Err(DomainError::InvalidField {
                field: field.field_name,
                reason: "the name 'id' is reserved for the key".into(),
            });
        }
        if self
            .taken_names_underscored()
            .contains(&field.underscored())
        {
            return Err(DomainError::InvalidField {
                field: field.field_name,
                reason: "a field or relationship with this name already exists".into(),
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Remove all fields whose names match exactly, in reverse order.
    /// Returns how many were removed.
    pub fn remove_fields(&mut self, names: &[String]) -> usize {
        let before = self.fields.len();
        for i in (0..self.fields.len()).rev() {
            if names.contains(&self.fields[i].field_name) {
                self.fields.remove(i);
            }
        }
        before - self.fields.len()
    }

    /// Append a relationship, enforcing the name-collision invariant against
    /// both fields and relationships.
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<(), DomainError> {
        if relationship.relationship_name == "id" {
            return Err(DomainError::InvalidRelationship {
                relationship: relationship.relationship_name,
                reason: "the name 'id' is reserved for the key".into(),
            });
        }
        if self
            .taken_names_underscored()
            .contains(&naming::snake_case(&relationship.relationship_name))
        {
            return Err(DomainError::InvalidRelationship {
                relationship: relationship.relationship_name,
                reason: "a field or relationship with this name already exists".into(),
            });
        }
        self.relationships.push(relationship);
        Ok(())
    }

    /// Remove all relationships whose `name:type` labels match exactly, in
    /// reverse order.  Returns how many were removed.
    pub fn remove_relationships(&mut self, labels: &[String]) -> usize {
        let before = self.relationships.len();
        for i in (0..self.relationships.len()).rev() {
            if labels.contains(&self.relationships[i].label()) {
                self.relationships.remove(i);
            }
        }
        before - self.relationships.len()
    }

    // ── Classification for templates ───────────────────────────────────────

    /// Field-type and relationship usage flags consumed by downstream
    /// templates.
    pub fn type_usage(&self) -> TypeUsage {
        let mut usage = TypeUsage {
            referenced_types: vec![self.entity_class()],
            ..TypeUsage::default()
        };

        for field in &self.fields {
            match field.field_type {
                FieldType::ZonedDateTime => usage.zoned_date_time = true,
                FieldType::LocalDate => usage.local_date = true,
                FieldType::Date => usage.date = true,
                FieldType::BigDecimal => usage.big_decimal = true,
                FieldType::Blob => usage.blob = true,
                _ => {}
            }
            if field.is_validated() {
                usage.validation = true;
            }
        }

        for rel in &self.relationships {
            match (rel.relationship_type, rel.is_owner()) {
                (RelationshipType::ManyToMany, true) => usage.owner_many_to_many = true,
                (RelationshipType::OneToOne, true) => usage.owner_one_to_one = true,
                (RelationshipType::OneToOne, false) => usage.no_owner_one_to_one = true,
                (RelationshipType::OneToMany, _) => usage.one_to_many = true,
                (RelationshipType::ManyToOne, _) => usage.many_to_one = true,
                _ => {}
            }
            let other = rel.other_entity_capitalized();
            if !usage.referenced_types.contains(&other) {
                usage.referenced_types.push(other);
            }
        }

        usage
    }
}

/// Field-type usage flags for downstream templates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeUsage {
    pub zoned_date_time: bool,
    pub local_date: bool,
    pub date: bool,
    pub big_decimal: bool,
    pub blob: bool,
    pub validation: bool,
    pub owner_many_to_many: bool,
    pub owner_one_to_one: bool,
    pub no_owner_one_to_one: bool,
    pub one_to_many: bool,
    pub many_to_one: bool,
    /// Entity type names referenced by this entity (itself first).
    pub referenced_types: Vec<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: FieldType) -> Field {
        Field::new(name, ty)
    }

    // ── key field rule ────────────────────────────────────────────────────

    #[test]
    fn key_field_absent_without_fields() {
        let def = EntityDefinition::new("foo");
        assert!(def.key_field().is_none());
    }

    #[test]
    fn key_field_defaults_to_first_field() {
        let mut def = EntityDefinition::new("order");
        def.add_field(field("amount", FieldType::BigDecimal)).unwrap();
        def.add_field(field("note", FieldType::String)).unwrap();
        assert_eq!(def.key_field().unwrap().field_name, "amount");
    }

    #[test]
    fn key_field_prefers_id_or_key_name_over_position() {
        let mut def = EntityDefinition::new("order");
        def.add_field(field("amount", FieldType::BigDecimal)).unwrap();
        def.add_field(field("key", FieldType::String)).unwrap();
        assert_eq!(def.key_field().unwrap().field_name, "key");
    }

    #[test]
    fn key_field_prefers_explicit_flag_over_name() {
        let mut def = EntityDefinition::new("order");
        def.fields.push(field("key", FieldType::String));
        let mut flagged = field("serial", FieldType::String);
        flagged.field_is_key = Some(true);
        def.fields.push(flagged);
        assert_eq!(def.key_field().unwrap().field_name, "serial");
    }

    #[test]
    fn key_field_recomputed_after_removal() {
        let mut def = EntityDefinition::new("order");
        def.add_field(field("a", FieldType::String)).unwrap();
        def.add_field(field("b", FieldType::String)).unwrap();
        def.add_field(field("c", FieldType::String)).unwrap();
        assert_eq!(def.key_field().unwrap().field_name, "a");

        assert_eq!(def.remove_fields(&["a".to_string()]), 1);
        assert_eq!(def.key_field().unwrap().field_name, "b");
    }

    // ── uniqueness ────────────────────────────────────────────────────────

    #[test]
    fn add_field_rejects_id() {
        let mut def = EntityDefinition::new("order");
        let err = def.add_field(field("id", FieldType::String)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { .. }));
        assert!(def.fields.is_empty());
    }

    #[test]
    fn add_field_rejects_normalized_duplicate() {
        let mut def = EntityDefinition::new("order");
        def.add_field(field("first_name", FieldType::String)).unwrap();
        // "firstName" normalizes to "first_name".
        assert!(def.add_field(field("firstName", FieldType::String)).is_err());
        assert_eq!(def.fields.len(), 1);
    }

    #[test]
    fn add_relationship_rejects_field_collision() {
        let mut def = EntityDefinition::new("order");
        def.add_field(field("customer", FieldType::String)).unwrap();
        let rel = Relationship {
            relationship_name: "customer".into(),
            other_entity_name: "customer".into(),
            relationship_type: RelationshipType::ManyToOne,
            owner_side: None,
            other_entity_relationship_name: None,
            other_entity_field: Some("id".into()),
        };
        assert!(def.add_relationship(rel).is_err());
    }

    // ── removal ───────────────────────────────────────────────────────────

    #[test]
    fn remove_fields_by_exact_name() {
        let mut def = EntityDefinition::new("order");
        for name in ["a", "b", "c"] {
            def.add_field(field(name, FieldType::String)).unwrap();
        }
        assert_eq!(def.remove_fields(&["b".to_string()]), 1);
        let names: Vec<_> = def.fields.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(def.key_field().unwrap().field_name, "a");
    }

    #[test]
    fn remove_relationships_by_label() {
        let mut def = EntityDefinition::new("order");
        let rel = Relationship {
            relationship_name: "customer".into(),
            other_entity_name: "customer".into(),
            relationship_type: RelationshipType::ManyToOne,
            owner_side: None,
            other_entity_relationship_name: None,
            other_entity_field: Some("id".into()),
        };
        def.add_relationship(rel).unwrap();
        assert_eq!(def.remove_relationships(&["customer:many-to-one".to_string()]), 1);
        assert!(def.relationships.is_empty());
    }

    // ── serde ─────────────────────────────────────────────────────────────

    #[test]
    fn field_type_serializes_as_literal_name() {
        assert_eq!(
            serde_json::to_string(&FieldType::Blob).unwrap(),
            "\"byte[]\""
        );
        assert_eq!(serde_json::to_string(&FieldType::Uuid).unwrap(), "\"UUID\"");
        assert_eq!(
            serde_json::to_string(&FieldType::Enum("Color".into())).unwrap(),
            "\"Color\""
        );
    }

    #[test]
    fn unknown_field_type_deserializes_as_enum() {
        let ty: FieldType = serde_json::from_str("\"OrderStatus\"").unwrap();
        assert_eq!(ty, FieldType::Enum("OrderStatus".into()));
        assert!(ty.is_enum());
    }

    #[test]
    fn legacy_date_time_migrates_to_zoned() {
        let ty: FieldType = serde_json::from_str("\"DateTime\"").unwrap();
        assert_eq!(ty, FieldType::ZonedDateTime);
    }

    #[test]
    fn definition_round_trips_through_json() {
        let mut def = EntityDefinition::new("order");
        let mut amount = field("amount", FieldType::BigDecimal);
        amount.field_validate_rules = vec![ValidateRule::Required, ValidateRule::Min];
        amount.field_validate_rules_min = Some(0);
        def.add_field(amount).unwrap();
        def.add_relationship(Relationship {
            relationship_name: "customer".into(),
            other_entity_name: "customer".into(),
            relationship_type: RelationshipType::ManyToOne,
            owner_side: None,
            other_entity_relationship_name: None,
            other_entity_field: Some("id".into()),
        })
        .unwrap();
        def.changelog_date = Some("20260804120000".into());

        let json = serde_json::to_string_pretty(&def).unwrap();
        let mut loaded: EntityDefinition = serde_json::from_str(&json).unwrap();
        loaded.normalize("order");

        assert_eq!(loaded, def);
        // Derived names recompute identically from the same source values.
        assert_eq!(
            loaded.fields[0].capitalized(),
            def.fields[0].capitalized()
        );
        assert_eq!(
            loaded.relationships[0].capitalized_plural(),
            def.relationships[0].capitalized_plural()
        );
    }

    #[test]
    fn persisted_keys_use_camel_case() {
        let mut def = EntityDefinition::new("order");
        let mut f = field("photo", FieldType::Blob);
        f.field_type_blob_content = Some(BlobContent::Image);
        f.field_validate_rules = vec![ValidateRule::MaxBytes];
        f.field_validate_rules_maxbytes = Some(5_000_000);
        def.add_field(f).unwrap();

        let json = serde_json::to_value(&def).unwrap();
        let field_json = &json["fields"][0];
        assert_eq!(field_json["fieldName"], "photo");
        assert_eq!(field_json["fieldType"], "byte[]");
        assert_eq!(field_json["fieldTypeBlobContent"], "image");
        assert_eq!(field_json["fieldValidateRules"][0], "maxbytes");
        assert_eq!(field_json["fieldValidateRulesMaxbytes"], 5_000_000);
        assert_eq!(json["entityTableName"], "order");
    }

    // ── derived names ─────────────────────────────────────────────────────

    #[test]
    fn entity_level_derived_names() {
        let def = EntityDefinition::new("orderLine");
        assert_eq!(def.entity_class(), "OrderLine");
        assert_eq!(def.entity_class_plural(), "OrderLines");
        assert_eq!(def.entity_instance(), "orderLine");
        assert_eq!(def.entity_folder_name(), "order-line");
        assert_eq!(def.entity_api_url(), "order-lines");
        assert_eq!(def.table_name(), "order_line");
        assert_eq!(def.entity_class_humanized(), "Order Line");
    }

    #[test]
    fn bean_accessor_edge_case() {
        let f = field("xAxis", FieldType::Integer);
        assert_eq!(f.accessor(), "xAxis");
        let g = field("amount", FieldType::Integer);
        assert_eq!(g.accessor(), "Amount");
    }

    // ── usage flags ───────────────────────────────────────────────────────

    #[test]
    fn type_usage_classification() {
        let mut def = EntityDefinition::new("order");
        def.add_field(field("amount", FieldType::BigDecimal)).unwrap();
        let mut photo = field("photo", FieldType::Blob);
        photo.field_validate_rules = vec![ValidateRule::Required];
        def.add_field(photo).unwrap();
        def.add_relationship(Relationship {
            relationship_name: "tags".into(),
            other_entity_name: "tag".into(),
            relationship_type: RelationshipType::ManyToMany,
            owner_side: Some(true),
            other_entity_relationship_name: None,
            other_entity_field: Some("id".into()),
        })
        .unwrap();

        let usage = def.type_usage();
        assert!(usage.big_decimal);
        assert!(usage.blob);
        assert!(usage.validation);
        assert!(usage.owner_many_to_many);
        assert!(!usage.local_date);
        assert_eq!(usage.referenced_types, vec!["Order", "Tag"]);
    }
}

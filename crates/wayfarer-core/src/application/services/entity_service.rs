//! Entity service — the interactive schema-editing session.
//!
//! Drives the whole entity workflow: load any persisted definition, decide
//! the session mode, run the field/relationship prompt loops, persist the
//! definition, and render the dependent artifacts (two entity modules plus
//! five splices into the shared files).
//!
//! All user interaction goes through the [`Prompter`] port, so the session
//! is fully scriptable in tests.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{EntityStore, Filesystem, Prompter},
        services::session::PromptSession,
    },
    domain::{
        BlobContent, EntityDefinition, Field, FieldType, Relationship, RelationshipType,
        artifacts, naming, splice::splice, validation,
    },
    error::{WayfarerError, WayfarerResult},
};

/// Options carried in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct EntityOptions {
    /// `--force` / `--regenerate`: skip the update prompt and re-render from
    /// the persisted definition.
    pub force: bool,
    /// Changelog stamp applied to newly created entities
    /// (format `%Y%m%d%H%M%S`, computed by the caller).
    pub timestamp: Option<String>,
}

/// How the editing session ran, decided up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// No prior definition: run both addition loops.
    New,
    /// Prior definition, force flag or `regenerate` chosen: no prompts,
    /// re-render only, skip re-persisting.
    Regenerate,
    /// Prior definition, `add` chosen: run both addition loops.
    Add,
    /// Prior definition, `remove` chosen: run both removal multi-selects.
    Remove,
}

/// What one generation run produced, for the CLI to display.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub entity: String,
    pub mode: SessionMode,
    /// Entity-specific files written (relative to the project root).
    pub written: Vec<PathBuf>,
    /// Non-fatal splice failures, one message per skipped artifact.
    pub warnings: Vec<String>,
    /// `false` for `Regenerate`, which never re-writes the definition file.
    pub persisted: bool,
}

/// Orchestrates the entity editing session and artifact rendering.
pub struct EntityService {
    store: Box<dyn EntityStore>,
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
}

impl EntityService {
    pub fn new(
        store: Box<dyn EntityStore>,
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            store,
            filesystem,
            prompter,
        }
    }

    /// Run the full editing session for `name`.
    #[instrument(skip_all, fields(entity = %name))]
    pub fn generate(&self, name: &str, options: &EntityOptions) -> WayfarerResult<GenerationReport> {
        validation::validate_entity_name(name)?;

        let existing = self.load_existing(name)?;
        let mode = self.resolve_mode(name, existing.is_some(), options)?;
        debug!(?mode, "Session mode resolved");

        let mut definition = match existing {
            Some(def) => def,
            None => {
                let mut def = EntityDefinition::new(name);
                def.changelog_date = options.timestamp.clone();
                def
            }
        };

        let mut session = PromptSession::new();
        match mode {
            SessionMode::New => {
                self.ask_for_fields(&mut definition, &mut session)?;
                self.ask_for_relationships(&mut definition)?;
            }
            SessionMode::Add => {
                self.print_summary(&definition);
                self.ask_for_fields(&mut definition, &mut session)?;
                self.ask_for_relationships(&mut definition)?;
            }
            SessionMode::Remove => {
                self.ask_for_fields_to_remove(&mut definition)?;
                self.ask_for_relationships_to_remove(&mut definition)?;
            }
            SessionMode::Regenerate => {}
        }

        let persisted = mode != SessionMode::Regenerate;
        if persisted {
            self.store.save(&definition)?;
            info!(entity = %definition.entity_class(), "Definition persisted");
        }

        let (written, warnings) = if mode == SessionMode::Remove {
            (Vec::new(), Vec::new())
        } else {
            self.render(&definition)?
        };

        Ok(GenerationReport {
            entity: definition.entity_class(),
            mode,
            written,
            warnings,
            persisted,
        })
    }

    // ── Loading and mode resolution ────────────────────────────────────────

    /// Load the persisted definition, degrading to an empty one (with a
    /// report) when the file exists but is not parseable.
    fn load_existing(&self, name: &str) -> WayfarerResult<Option<EntityDefinition>> {
        match self.store.load(name) {
            Ok(found) => Ok(found),
            Err(WayfarerError::Application(ApplicationError::DefinitionUnreadable { path })) => {
                // Original behavior: report and continue with empty lists
                // rather than aborting.  See DESIGN.md.
                warn!(path = %path.display(), "Definition file unreadable, continuing with empty entity");
                self.prompter
                    .report("The configuration file could not be read!");
                Ok(Some(EntityDefinition::new(name)))
            }
            Err(e) => Err(e),
        }
    }

    fn resolve_mode(
        &self,
        name: &str,
        has_existing: bool,
        options: &EntityOptions,
    ) -> WayfarerResult<SessionMode> {
        if !has_existing {
            self.prompter
                .report(&format!("The entity {name} is being created."));
            return Ok(SessionMode::New);
        }

        self.prompter
            .report(&format!("The entity {name} is being updated."));
        if options.force {
            return Ok(SessionMode::Regenerate);
        }

        let choices = vec![
            "Yes, re generate the entity".to_string(),
            "Yes, add more fields and relationships".to_string(),
            "Yes, remove fields and relationships".to_string(),
            "No, exit".to_string(),
        ];
        let picked = self.prompter.select(
            "Do you want to update the entity? This will replace the existing files for this entity, all your custom code will be overwritten",
            &choices,
            0,
        )?;
        match picked {
            0 => Ok(SessionMode::Regenerate),
            1 => Ok(SessionMode::Add),
            2 => Ok(SessionMode::Remove),
            _ => Err(ApplicationError::Aborted {
                message: "Aborting entity update, no changes were made.".into(),
            }
            .into()),
        }
    }

    // ── Field addition ─────────────────────────────────────────────────────

    fn ask_for_fields(
        &self,
        def: &mut EntityDefinition,
        session: &mut PromptSession,
    ) -> WayfarerResult<()> {
        loop {
            self.prompter
                .report(&format!("Generating field #{}", def.fields.len() + 1));
            if !self
                .prompter
                .confirm("Do you want to add a field to your entity?", true)?
            {
                return Ok(());
            }

            let field = self.ask_one_field(def, session)?;
            def.add_field(field)?;
            self.print_summary(def);
        }
    }

    fn ask_one_field(
        &self,
        def: &EntityDefinition,
        session: &mut PromptSession,
    ) -> WayfarerResult<Field> {
        let taken = def.taken_names_underscored();
        let field_name = self.prompter.input(
            "What is the name of your field?",
            None,
            &|input| validation::validate_field_name(input, &taken),
        )?;

        let (field_type, existing_enum) = self.ask_field_type(session)?;
        let mut field = Field::new(field_name, field_type.clone());

        if field_type.is_enum() {
            field.field_values = self.ask_enum_values(existing_enum)?;
        }

        if field_type == FieldType::Blob {
            field.field_type_blob_content = Some(self.ask_blob_content()?);
        }

        if self
            .prompter
            .confirm("Do you want to add validation rules to your field?", false)?
        {
            self.ask_validation_rules(&mut field)?;
        }

        Ok(field)
    }

    /// The field-type list.  The original asked this twice with two
    /// overlapping lists; here the lists are reconciled into one (see
    /// DESIGN.md).
    ///
    /// For enum types the returned flag is `true` when the class name was
    /// already declared earlier in this session.
    fn ask_field_type(&self, session: &mut PromptSession) -> WayfarerResult<(FieldType, bool)> {
        const ENUM_CHOICE: &str = "Enumeration (enum type)";
        const BLOB_CHOICE: &str = "[BETA] Blob";

        let mut choices: Vec<String> = FieldType::BUILTINS
            .iter()
            .filter(|t| **t != FieldType::Blob)
            .map(|t| t.as_str().to_string())
            .collect();
        choices.push(ENUM_CHOICE.to_string());
        choices.push(BLOB_CHOICE.to_string());

        let picked = self
            .prompter
            .select("What is the type of your field?", &choices, 0)?;

        if choices[picked] == ENUM_CHOICE {
            let enum_name = self.prompter.input(
                "What is the class name of your enumeration?",
                None,
                &validation::validate_enum_name,
            )?;
            let enum_name = naming::upper_first(&enum_name);
            let existing = session.declare_enum(&enum_name);
            Ok((FieldType::Enum(enum_name), existing))
        } else if choices[picked] == BLOB_CHOICE {
            Ok((FieldType::Blob, false))
        } else {
            Ok((FieldType::parse(&choices[picked]), false))
        }
    }

    /// Enum value list.  For an enum class already declared in this session
    /// the prompt has update semantics: empty input keeps the old values.
    fn ask_enum_values(&self, existing: bool) -> WayfarerResult<Option<String>> {
        let message = if existing {
            "What are the new values of your enumeration (separated by comma)? The new values will replace the old ones. Nothing will be done if there are no new values."
        } else {
            "What are the values of your enumeration (separated by comma)?"
        };
        let values = self.prompter.input(message, None, &|input| {
            if existing && input.is_empty() {
                return Ok(());
            }
            validation::validate_enum_values(input)
        })?;
        Ok(if values.is_empty() { None } else { Some(values) })
    }

    fn ask_blob_content(&self) -> WayfarerResult<BlobContent> {
        let choices = vec![
            "An image".to_string(),
            "A binary file".to_string(),
            "A CLOB (Text field)".to_string(),
        ];
        let picked = self
            .prompter
            .select("What is the content of the Blob field?", &choices, 0)?;
        Ok(match picked {
            0 => BlobContent::Image,
            1 => BlobContent::Any,
            _ => BlobContent::Text,
        })
    }

    /// Type-appropriate validation-rule checkbox, then one bound prompt per
    /// selected rule.
    fn ask_validation_rules(&self, field: &mut Field) -> WayfarerResult<()> {
        use crate::domain::ValidateRule as Rule;

        let is_text_blob = field.field_type == FieldType::Blob
            && field.field_type_blob_content == Some(BlobContent::Text);

        let rules: Vec<(Rule, &str)> = if field.field_type == FieldType::String {
            vec![
                (Rule::Required, "Required"),
                (Rule::MinLength, "Minimum length"),
                (Rule::MaxLength, "Maximum length"),
                (Rule::Pattern, "Regular expression pattern"),
            ]
        } else if field.field_type.is_numeric() || is_text_blob {
            vec![
                (Rule::Required, "Required"),
                (Rule::Min, "Minimum"),
                (Rule::Max, "Maximum"),
            ]
        } else if field.field_type == FieldType::Blob {
            vec![
                (Rule::Required, "Required"),
                (Rule::MinBytes, "Minimum byte size"),
                (Rule::MaxBytes, "Maximum byte size"),
            ]
        } else {
            // date / boolean / UUID / enum
            vec![(Rule::Required, "Required")]
        };

        let labels: Vec<String> = rules.iter().map(|(_, label)| label.to_string()).collect();
        let picked = self
            .prompter
            .multi_select("Which validation rules do you want to add?", &labels)?;
        field.field_validate_rules = picked.iter().map(|&i| rules[i].0).collect();

        for rule in field.field_validate_rules.clone() {
            match rule {
                Rule::Required => {}
                Rule::MinLength => {
                    field.field_validate_rules_minlength =
                        Some(self.ask_bound("What is the minimum length of your field?", "Minimum length", "0")?);
                }
                Rule::MaxLength => {
                    field.field_validate_rules_maxlength =
                        Some(self.ask_bound("What is the maximum length of your field?", "Maximum length", "20")?);
                }
                Rule::Pattern => {
                    let pattern = self.prompter.input(
                        "What is the regular expression pattern you want to apply on your field?",
                        Some("^[a-zA-Z0-9]*$"),
                        &|_| Ok(()),
                    )?;
                    field.field_validate_rules_pattern = Some(pattern);
                }
                Rule::Min => {
                    field.field_validate_rules_min =
                        Some(self.ask_bound("What is the minimum of your field?", "Minimum", "0")?);
                }
                Rule::Max => {
                    field.field_validate_rules_max =
                        Some(self.ask_bound("What is the maximum of your field?", "Maximum", "100")?);
                }
                Rule::MinBytes => {
                    field.field_validate_rules_minbytes = Some(self.ask_bound(
                        "What is the minimum byte size of your field?",
                        "Minimum byte size",
                        "0",
                    )?);
                }
                Rule::MaxBytes => {
                    field.field_validate_rules_maxbytes = Some(self.ask_bound(
                        "What is the maximum byte size of your field?",
                        "Maximum byte size",
                        "5000000",
                    )?);
                }
            }
        }
        Ok(())
    }

    fn ask_bound(&self, message: &str, label: &str, default: &str) -> WayfarerResult<u64> {
        let raw = self.prompter.input(message, Some(default), &|input| {
            validation::validate_numeric_bound(input, label)
        })?;
        raw.parse().map_err(|_| {
            WayfarerError::Internal {
                message: format!("validated bound '{raw}' failed to parse"),
            }
        })
    }

    // ── Field removal ──────────────────────────────────────────────────────

    fn ask_for_fields_to_remove(&self, def: &mut EntityDefinition) -> WayfarerResult<()> {
        if def.fields.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = def.fields.iter().map(|f| f.field_name.clone()).collect();
        let picked = self
            .prompter
            .multi_select("Please choose the fields you want to remove", &names)?;
        if picked.is_empty() {
            return Ok(());
        }
        if !self
            .prompter
            .confirm("Are you sure to remove these fields?", true)?
        {
            return Ok(());
        }
        let selected: Vec<String> = picked.iter().map(|&i| names[i].clone()).collect();
        self.prompter
            .report(&format!("Removing fields: {}", selected.join(", ")));
        def.remove_fields(&selected);
        Ok(())
    }

    // ── Relationship addition ──────────────────────────────────────────────

    fn ask_for_relationships(&self, def: &mut EntityDefinition) -> WayfarerResult<()> {
        self.prompter
            .report("Generating relationships to other entities");
        loop {
            if !self
                .prompter
                .confirm("Do you want to add a relationship to another entity?", true)?
            {
                return Ok(());
            }

            let relationship = self.ask_one_relationship(def)?;
            def.add_relationship(relationship)?;
            self.print_summary(def);
        }
    }

    fn ask_one_relationship(&self, def: &EntityDefinition) -> WayfarerResult<Relationship> {
        let other_entity = self.prompter.input(
            "What is the name of the other entity?",
            None,
            &validation::validate_other_entity_name,
        )?;

        let taken = def.taken_names_underscored();
        let relationship_name = self.prompter.input(
            "What is the name of the relationship?",
            Some(&naming::lower_first(&other_entity)),
            &|input| validation::validate_relationship_name(input, &taken),
        )?;

        let labels: Vec<String> = RelationshipType::ALL
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        let picked =
            self.prompter
                .select("What is the type of the relationship?", &labels, 0)?;
        let relationship_type = RelationshipType::ALL[picked];

        let owner_side = match relationship_type {
            RelationshipType::ManyToMany | RelationshipType::OneToOne => Some(
                self.prompter
                    .confirm("Is this entity the owner of the relationship?", false)?,
            ),
            _ => None,
        };

        let needs_back_reference = match relationship_type {
            RelationshipType::OneToMany => true,
            RelationshipType::ManyToMany => owner_side == Some(false),
            RelationshipType::OneToOne => !other_entity.eq_ignore_ascii_case("user"),
            RelationshipType::ManyToOne => false,
        };
        let other_entity_relationship_name = if needs_back_reference {
            Some(self.prompter.input(
                "What is the name of this relationship in the other entity?",
                Some(&naming::lower_first(&def.name)),
                &|_| Ok(()),
            )?)
        } else {
            None
        };

        let needs_display_field = match relationship_type {
            RelationshipType::ManyToOne => true,
            RelationshipType::ManyToMany | RelationshipType::OneToOne => owner_side == Some(true),
            RelationshipType::OneToMany => false,
        };
        let other_entity_field = if needs_display_field {
            Some(self.prompter.input(
                &format!(
                    "When you display this relationship, which field from '{other_entity}' do you want to use?"
                ),
                Some("id"),
                &|_| Ok(()),
            )?)
        } else {
            None
        };

        Ok(Relationship {
            relationship_name,
            other_entity_name: naming::lower_first(&other_entity),
            relationship_type,
            owner_side,
            other_entity_relationship_name,
            other_entity_field,
        })
    }

    // ── Relationship removal ───────────────────────────────────────────────

    fn ask_for_relationships_to_remove(&self, def: &mut EntityDefinition) -> WayfarerResult<()> {
        if def.relationships.is_empty() {
            return Ok(());
        }
        let labels: Vec<String> = def.relationships.iter().map(|r| r.label()).collect();
        let picked = self.prompter.multi_select(
            "Please choose the relationships you want to remove",
            &labels,
        )?;
        if picked.is_empty() {
            return Ok(());
        }
        if !self
            .prompter
            .confirm("Are you sure to remove these relationships?", true)?
        {
            return Ok(());
        }
        let selected: Vec<String> = picked.iter().map(|&i| labels[i].clone()).collect();
        self.prompter
            .report(&format!("Removing relationships: {}", selected.join(", ")));
        def.remove_relationships(&selected);
        Ok(())
    }

    // ── Session output ─────────────────────────────────────────────────────

    /// Running field/relationship summary printed after every add.
    fn print_summary(&self, def: &EntityDefinition) {
        if def.fields.is_empty() && def.relationships.is_empty() {
            return;
        }
        self.prompter.report(&format!(
            "================= {} =================",
            def.entity_class()
        ));
        if !def.fields.is_empty() {
            self.prompter.report("Fields");
            for field in &def.fields {
                let blob = field
                    .field_type_blob_content
                    .map(|c| format!(" {}", c.as_str()))
                    .unwrap_or_default();
                self.prompter.report(&format!(
                    "{} ({}{}) {}",
                    field.field_name,
                    field.field_type,
                    blob,
                    field.validation_details()
                ));
            }
        }
        if !def.relationships.is_empty() {
            self.prompter.report("Relationships");
            for rel in &def.relationships {
                self.prompter.report(&format!(
                    "{} ({}) {}",
                    rel.relationship_name,
                    rel.other_entity_capitalized(),
                    rel.relationship_type
                ));
            }
        }
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    /// Write the two entity modules and apply the five splices.  Splice
    /// failures are isolated per artifact and reported as warnings.
    fn render(&self, def: &EntityDefinition) -> WayfarerResult<(Vec<PathBuf>, Vec<String>)> {
        let class = def.entity_class();
        let mut written = Vec::new();
        let mut warnings = Vec::new();

        let dynamo_path = PathBuf::from(format!("data/lib/{class}Dynamo.js"));
        self.filesystem
            .write_file(&dynamo_path, &artifacts::dynamo_module(def))?;
        written.push(dynamo_path);

        let schema_path = PathBuf::from(format!("data/lib/{class}Schema.js"));
        self.filesystem
            .write_file(&schema_path, &artifacts::schema_module(def))?;
        written.push(schema_path);

        let splices: [(&str, &str, Vec<String>, &str); 5] = [
            (
                artifacts::SCHEMA_FILE,
                artifacts::NEEDLE_IMPORT,
                artifacts::import_snippet(def),
                "schema",
            ),
            (
                artifacts::SCHEMA_FILE,
                artifacts::NEEDLE_QUERY,
                artifacts::query_snippet(def),
                "schema",
            ),
            (
                artifacts::SCHEMA_FILE,
                artifacts::NEEDLE_MUTATION,
                artifacts::mutation_snippet(def),
                "schema",
            ),
            (
                artifacts::MANIFEST_FILE,
                artifacts::NEEDLE_POLICY,
                artifacts::policy_snippet(def),
                "s-project.json",
            ),
            (
                artifacts::MANIFEST_FILE,
                artifacts::NEEDLE_TABLE,
                artifacts::table_snippet(def),
                "s-project.json",
            ),
        ];

        for (file, needle, lines, target) in splices {
            if let Some(warning) = self.apply_splice(file, needle, &lines, &class, target) {
                warnings.push(warning);
            }
        }

        Ok((written, warnings))
    }

    /// Apply one splice; on any failure return the warning message instead
    /// of an error so the remaining splices still run.
    fn apply_splice(
        &self,
        file: &str,
        needle: &str,
        lines: &[String],
        class: &str,
        target: &str,
    ) -> Option<String> {
        let path = Path::new(file);
        let result = self
            .filesystem
            .read_to_string(path)
            .and_then(|contents| splice(&contents, needle, lines).map_err(Into::into))
            .and_then(|updated| self.filesystem.write_file(path, &updated));

        match result {
            Ok(()) => None,
            Err(e) => {
                warn!(file, needle, error = %e, "Splice skipped");
                Some(format!(
                    "Unable to find {file} or missing required wayfarer needle. \
                     Reference to {class} not added to {target}."
                ))
            }
        }
    }
}

//! Application scaffolding tests through the in-memory adapters.

use std::path::Path;

use wayfarer_adapters::{
    MemoryEntityStore, MemoryFilesystem, ScriptedAnswer, ScriptedPrompter, builtin_templates,
};
use wayfarer_core::{
    application::{AppOptions, ScaffoldService, ports::EntityStore},
    domain::{EntityDefinition, ProjectSettings},
};

struct App {
    store: MemoryEntityStore,
    filesystem: MemoryFilesystem,
    prompter: ScriptedPrompter,
    service: ScaffoldService,
}

fn app(answers: Vec<ScriptedAnswer>) -> App {
    let store = MemoryEntityStore::new();
    let filesystem = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(answers);
    let service = ScaffoldService::new(
        Box::new(store.clone()),
        Box::new(filesystem.clone()),
        Box::new(prompter.clone()),
    );
    App {
        store,
        filesystem,
        prompter,
        service,
    }
}

fn options() -> AppOptions {
    AppOptions {
        skip_install: true,
        assume_defaults: false,
        default_name: "wayfarer".into(),
    }
}

#[test]
fn first_run_asks_name_email_and_region() {
    let a = app(vec![
        ScriptedAnswer::text("myShop"),
        ScriptedAnswer::text("ops@example.com"),
        ScriptedAnswer::text(""), // region defaults to eu-west-1
    ]);

    let report = a.service.scaffold(builtin_templates::app_templates(), &options()).unwrap();

    assert_eq!(report.settings.base_name, "myShop");
    assert_eq!(report.settings.aws_region.as_deref(), Some("eu-west-1"));
    assert_eq!(
        report.settings.aws_notification_email.as_deref(),
        Some("ops@example.com")
    );
    assert_eq!(report.written.len(), builtin_templates::app_templates().len());
    assert!(a.prompter.is_exhausted());

    let package = a.filesystem.read_file(Path::new("package.json")).unwrap();
    assert!(package.contains("\"name\": \"my-shop\""));
    let schema = a.filesystem.read_file(Path::new("data/lib/schema.js")).unwrap();
    assert!(schema.contains("name: 'MyShopSchema'"));

    let saved = a.store.load_settings().unwrap().unwrap();
    assert_eq!(saved, report.settings);
}

#[test]
fn existing_project_is_not_reprompted() {
    let a = app(vec![]);
    let mut settings = ProjectSettings::new("myShop");
    settings.aws_region = Some("us-east-1".into());
    a.store.save_settings(&settings).unwrap();

    let report = a.service.scaffold(builtin_templates::app_templates(), &options()).unwrap();

    assert_eq!(report.settings.base_name, "myShop");
    assert_eq!(report.settings.aws_region.as_deref(), Some("us-east-1"));
    assert!(a.prompter.is_exhausted());
}

#[test]
fn assume_defaults_skips_all_prompts() {
    let a = app(vec![]);

    let report = a
        .service
        .scaffold(
            builtin_templates::app_templates(),
            &AppOptions {
                skip_install: true,
                assume_defaults: true,
                default_name: "wayfarer".into(),
            },
        )
        .unwrap();

    assert_eq!(report.settings.base_name, "wayfarer");
    assert_eq!(report.settings.aws_region.as_deref(), Some("eu-west-1"));
}

#[test]
fn persisted_entities_are_listed_for_regeneration() {
    let a = app(vec![
        ScriptedAnswer::text("myShop"),
        ScriptedAnswer::text(""),
        ScriptedAnswer::text(""),
    ]);
    a.store.save(&EntityDefinition::new("order")).unwrap();
    a.store.save(&EntityDefinition::new("customer")).unwrap();

    let report = a.service.scaffold(builtin_templates::app_templates(), &options()).unwrap();

    assert_eq!(report.entities_to_regenerate, vec!["Customer", "Order"]);
}

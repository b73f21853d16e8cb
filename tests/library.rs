use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use veo_prompt::{FormField, FormState, GenerateOptions, assemble};

#[test]
fn assemble_is_available_from_the_crate_root() {
    let form = FormState::default()
        .with_field(FormField::SceneTitle, "Terminal")
        .with_field(FormField::CharacterDialog, "Halo");
    let prompts = assemble(&form);

    assert!(prompts.structured.starts_with("Scene Title: Terminal\n\n"));
    assert!(prompts.localized.ends_with("Karakter berkata: \"Halo\""));
}

#[test]
fn generate_reads_form_documents() {
    let dir = TempDir::new().unwrap();
    let form = dir.child("scene.toml");
    form.write_str("sceneTitle = \"Terminal\"\naspectRatio = \"9:16\"\n").unwrap();

    let outcome = veo_prompt::generate(&GenerateOptions {
        form: Some(form.path().to_path_buf()),
        assignments: vec!["negativePrompt=logo".to_string()],
        copy: false,
    })
    .unwrap();

    assert_eq!(outcome.session.structured_prompt(), "Scene Title: Terminal\n\n--ar 9:16 --no logo");
    assert!(outcome.copy.is_none());
}

#[test]
fn init_form_creates_parseable_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("scene.yaml");

    veo_prompt::init_form(path.path(), false).unwrap();

    path.assert(predicate::path::exists());
    path.assert(predicate::str::contains("sceneTitle"));
    let outcome = veo_prompt::generate(&GenerateOptions {
        form: Some(path.path().to_path_buf()),
        ..GenerateOptions::default()
    })
    .unwrap();
    assert_eq!(outcome.session.structured_prompt(), "--ar 16:9");
}

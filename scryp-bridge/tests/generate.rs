//! End-to-end generation against fake generator scripts.
//!
//! The generator is replaced by a small `sh` script so these tests exercise
//! real process spawning, argument passing and output extraction.

#![cfg(unix)]

use scrypgen_bridge::{
    DescriptionSource, Generator, InvokeError, Outcome, Session, Settings,
    testing::{ScriptedHost, fake_generator},
};
use scrypgen_core::{LanguageSelector, Syntax};
use tempfile::TempDir;

fn settings_for(dir: &TempDir, body: &str) -> Settings {
    Settings {
        generator: fake_generator(dir.path(), body).expect("Failed to write fake generator"),
        ..Settings::default()
    }
}

#[test]
fn test_preamble_is_stripped_and_python_detected() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(
        &temp,
        r#"printf 'Hello!\nHere is your script:\n#!/usr/bin/env python\nimport os\nprint(%s)\n' "'hi'""#,
    );
    let mut host = ScriptedHost::in_folder(temp.path())
        .with_description(Some("print hi"))
        .with_language(Some(LanguageSelector::Auto));

    let outcome = Session::new(&mut host, &settings)
        .generate(DescriptionSource::Prompt, None)
        .unwrap();

    let Outcome::Generated(document) = outcome else {
        panic!("expected a document, got {outcome:?}");
    };
    assert_eq!(
        document.script.as_str(),
        "#!/usr/bin/env python\nimport os\nprint('hi')"
    );
    assert_eq!(document.syntax, Some(Syntax::Python));
    assert_eq!(host.documents, [document]);
    assert_eq!(host.prompts, ["description", "language"]);
    assert_eq!(
        host.statuses,
        [
            "Generating script with ScrypGen...",
            "Script generated successfully!"
        ]
    );
}

#[test]
fn test_explicit_bash_selector() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(
        &temp,
        r#"[ "$2" = "--language" ] && [ "$3" = "bash" ] || exit 3
printf 'ok\n#!/bin/bash\necho hi\n'"#,
    );
    let mut host = ScriptedHost::in_folder(temp.path());

    let outcome = Session::new(&mut host, &settings)
        .generate(
            DescriptionSource::Text("say hi".to_string()),
            Some(LanguageSelector::Bash),
        )
        .unwrap();

    let Outcome::Generated(document) = outcome else {
        panic!("expected a document, got {outcome:?}");
    };
    assert_eq!(document.script.as_str(), "#!/bin/bash\necho hi");
    assert_eq!(document.syntax, Some(Syntax::ShellScript));
    assert_eq!(document.language, LanguageSelector::Bash);
    assert!(host.prompts.is_empty());
}

#[test]
fn test_auto_selector_passes_no_language_flag() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp, r#"[ "$#" -eq 1 ] || exit 4
printf 'Sure thing.\ndef run():\n    pass\n'"#);
    let mut host = ScriptedHost::in_folder(temp.path());

    let outcome = Session::new(&mut host, &settings)
        .generate(
            DescriptionSource::Text("a runner".to_string()),
            Some(LanguageSelector::Auto),
        )
        .unwrap();

    let Outcome::Generated(document) = outcome else {
        panic!("expected a document, got {outcome:?}");
    };
    assert_eq!(document.script.as_str(), "def run():\n    pass");
    assert_eq!(document.syntax, None);
}

#[test]
fn test_selection_is_used_as_description() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp, r#"printf '# %s\necho done\n' "$1""#);
    let mut host = ScriptedHost::in_folder(temp.path())
        .with_selection(scrypgen_bridge::Selection::Text("rotate logs".to_string()))
        .with_language(Some(LanguageSelector::Bash));

    let outcome = Session::new(&mut host, &settings)
        .generate(DescriptionSource::Selection, None)
        .unwrap();

    let Outcome::Generated(document) = outcome else {
        panic!("expected a document, got {outcome:?}");
    };
    assert_eq!(document.script.as_str(), "# rotate logs\necho done");
}

#[test]
fn test_no_script_in_output_opens_empty_document() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp, r#"printf 'No code here at all.\nJust talk.\n'"#);
    let mut host = ScriptedHost::in_folder(temp.path());

    let outcome = Session::new(&mut host, &settings)
        .generate(
            DescriptionSource::Text("anything".to_string()),
            Some(LanguageSelector::Python),
        )
        .unwrap();

    let Outcome::Empty(ref document) = outcome else {
        panic!("expected an empty outcome, got {outcome:?}");
    };
    assert!(document.script.is_empty());
    assert_eq!(document.syntax, Some(Syntax::Python));
    assert!(outcome.is_success());
    assert_eq!(host.documents.len(), 1);
    assert_eq!(host.documents[0], *document);
    assert!(host.errors.is_empty());
    assert_eq!(
        host.statuses.last().map(String::as_str),
        Some("ScrypGen produced no recognizable script")
    );
}

#[test]
fn test_no_script_in_auto_mode_opens_plain_document() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(&temp, r#"printf 'No code here at all.\nJust talk.\n'"#);
    let mut host = ScriptedHost::in_folder(temp.path());

    let outcome = Session::new(&mut host, &settings)
        .generate(
            DescriptionSource::Text("x".to_string()),
            Some(LanguageSelector::Auto),
        )
        .unwrap();

    assert!(matches!(outcome, Outcome::Empty(_)));
    assert_eq!(host.documents.len(), 1);
    assert_eq!(host.documents[0].script.as_str(), "");
    assert_eq!(host.documents[0].syntax, None);
}

#[test]
fn test_failure_shows_stderr() {
    let temp = TempDir::new().unwrap();
    let settings = settings_for(
        &temp,
        "printf 'import os\\n'\necho 'template not found' >&2\nexit 2",
    );
    let mut host = ScriptedHost::in_folder(temp.path());

    let outcome = Session::new(&mut host, &settings)
        .generate(
            DescriptionSource::Text("anything".to_string()),
            Some(LanguageSelector::Auto),
        )
        .unwrap();

    assert_eq!(outcome, Outcome::Failed("template not found".to_string()));
    assert_eq!(
        host.errors,
        ["ScrypGen generation failed: template not found"]
    );
    assert!(host.documents.is_empty());
}

#[test]
fn test_failure_without_stderr_reports_code() {
    let temp = TempDir::new().unwrap();
    let config = fake_generator(temp.path(), "exit 7").unwrap();

    let err = Generator::from_config(&config)
        .invoke("x", LanguageSelector::Auto, temp.path())
        .unwrap_err();

    match err {
        InvokeError::Failed { code, message } => {
            assert_eq!(code, Some(7));
            assert_eq!(message, "Command failed with code 7");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_shell_metacharacters_reach_generator_verbatim() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("pwned");
    let description = format!(
        r#"say "hi"; touch {} && echo `id` $(whoami) 'quoted'"#,
        marker.display()
    );
    let config = fake_generator(temp.path(), r#"printf 'import sys\n%s\n' "$1""#).unwrap();

    let raw = Generator::from_config(&config)
        .invoke(&description, LanguageSelector::Auto, temp.path())
        .unwrap();

    assert_eq!(raw.as_str(), format!("import sys\n{}\n", description));
    assert!(!marker.exists());
}

#[test]
fn test_runs_in_project_root() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir(&project).unwrap();
    let config = fake_generator(temp.path(), r#"printf '# cwd\n%s\n' "$(pwd -P)""#).unwrap();

    let raw = Generator::from_config(&config)
        .invoke("where am I", LanguageSelector::Auto, &project)
        .unwrap();

    let expected = project.canonicalize().unwrap();
    assert_eq!(
        raw.extract().as_str(),
        format!("# cwd\n{}", expected.display())
    );
}

#[test]
fn test_probe_missing_program() {
    let temp = TempDir::new().unwrap();
    let err = Generator::new(temp.path().join("no-such-generator").display().to_string())
        .probe(temp.path())
        .unwrap_err();

    assert!(matches!(err, InvokeError::Spawn { .. }));
}

//! Context and settings loading against real files.

use assert_fs::prelude::*;
use proposal_core::{load_context, settings, CoreError, Settings};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// 1. Context files
// ---------------------------------------------------------------------------

#[rstest]
#[case("acme.yaml", "company_name: Acme Corp\ncase_studies:\n  - one\n  - two\n")]
#[case("acme.yml", "company_name: Acme Corp\ncase_studies: [one, two]\n")]
#[case("acme.json", r#"{"company_name":"Acme Corp","case_studies":["one","two"]}"#)]
fn context_formats_load_identically(#[case] name: &str, #[case] body: &str) {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(name);
    file.write_str(body).expect("write");

    let ctx = load_context(file.path()).expect("load");
    assert_eq!(ctx.company_name.0, "Acme Corp");
    assert_eq!(ctx.case_studies, vec!["one".to_string(), "two".to_string()]);
    assert!(ctx.executive_summary.is_empty());
}

#[test]
fn missing_context_file_is_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = load_context(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn corrupt_json_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("broken.json");
    file.write_str("{\"company_name\": ").expect("write");

    let err = load_context(file.path()).unwrap_err();
    assert!(matches!(err, CoreError::ParseJson { .. }), "got: {err}");
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn multiline_prose_is_kept_verbatim() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("ctx.yaml");
    file.write_str("executive_summary: |\n  Line one.\n\n  - bullet\n")
        .expect("write");

    let ctx = load_context(file.path()).expect("load");
    assert_eq!(ctx.executive_summary, "Line one.\n\n- bullet\n");
}

// ---------------------------------------------------------------------------
// 2. Settings
// ---------------------------------------------------------------------------

#[test]
fn settings_default_when_absent() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let s = settings::load_at(home.path()).expect("load");
    assert_eq!(s, Settings::default());
}

#[test]
fn settings_read_from_home() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let dir = home.path().join(".proposal");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(
        dir.join("config.yaml"),
        "template_dir: /srv/templates\noutput_dir: out\n",
    )
    .expect("write");

    let s = settings::load_at(home.path()).expect("load");
    assert_eq!(s.template_dir, Some(PathBuf::from("/srv/templates")));
    assert_eq!(s.output_dir, PathBuf::from("out"));
    assert_eq!(s.date_format, settings::DEFAULT_DATE_FORMAT);
}

#[test]
fn empty_settings_file_is_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let file = home.child(".proposal/config.yaml");
    file.write_str("").expect("write");
    let s = settings::load_at(home.path()).expect("load");
    assert_eq!(s, Settings::default());
}

#[test]
fn corrupt_settings_is_parse_error_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let file = home.child(".proposal/config.yaml");
    file.write_str("output_dir: [unclosed").expect("write");

    let err = settings::load_at(home.path()).unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn explicit_settings_file_must_exist() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let err = settings::load_from(&home.path().join("custom.yaml")).unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }), "got: {err}");
}

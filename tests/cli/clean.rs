use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

fn json_key_exists(value: &Value, key_path: &str) -> bool {
    let mut current = value;
    for part in key_path.split('.') {
        match current.get(part) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn assert_keys(content: &str, expected: &[&str], forbidden: &[&str]) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("JSON should be parseable")?;
    for key in expected {
        assert!(json_key_exists(&parsed, key), "missing '{}' in:\n{}", key, content);
    }
    for key in forbidden {
        assert!(!json_key_exists(&parsed, key), "unexpected '{}' in:\n{}", key, content);
    }
    Ok(())
}

fn setup() -> Result<CliTest> {
    let test = CliTest::with_locales(
        r#"{"Common": {"submit": "提交", "old": "旧"}, "Stale": {"only": "x"}}"#,
        r#"{"Common": {"submit": "Submit", "old": "Old"}}"#,
    )?;
    test.write_file("app/form.tsx", "t('Common.submit')")?;
    Ok(test)
}

#[test]
fn test_clean_dry_run() -> Result<()> {
    let test = setup()?;
    let before = test.read_file("messages/zh.json")?;

    let out = run(&mut test.clean_command())?;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("- ./messages/zh.json:1  \"Common.old\""), "{}", out.stdout);
    assert!(out.stdout.contains("\"Stale.only\""));
    assert!(out.stdout.contains("Would delete 3 key(s) in 2 file(s)."));
    assert_eq!(test.read_file("messages/zh.json")?, before);
    Ok(())
}

#[test]
fn test_clean_apply_removes_unused_and_empty_parents() -> Result<()> {
    let test = setup()?;

    let out = run(test.clean_command().arg("--apply"))?;

    assert_eq!(out.code, 0, "{}{}", out.stdout, out.stderr);
    assert!(out.stdout.contains("Deleted 3 key(s) in 2 file(s)."));
    assert_keys(
        &test.read_file("messages/zh.json")?,
        &["Common.submit"],
        &["Common.old", "Stale"],
    )?;
    assert_keys(
        &test.read_file("messages/en.json")?,
        &["Common.submit"],
        &["Common.old"],
    )?;

    let again = run(&mut test.clean_command())?;
    assert!(again.stdout.contains("No unused keys - nothing to clean"));
    Ok(())
}

#[test]
fn test_clean_respects_ignore_unused() -> Result<()> {
    let test = setup()?;
    test.write_file(".keyauditrc.json", r#"{"ignoreUnused": ["Stale.*"]}"#)?;

    run(test.clean_command().arg("--apply"))?;

    assert_keys(
        &test.read_file("messages/zh.json")?,
        &["Common.submit", "Stale.only"],
        &["Common.old"],
    )?;
    Ok(())
}

#[test]
fn test_clean_keeps_keys_reached_by_template_calls() -> Result<()> {
    let test = CliTest::with_locales(
        r#"{"status": {"active": {"label": "启用"}}, "title": "标题", "old": "旧"}"#,
        r#"{"status": {"active": {"label": "Active"}}, "title": "Title"}"#,
    )?;
    test.write_file(
        "app/page.tsx",
        "const label = t(`status.${code}.label`);\nt(\"title\");\n",
    )?;

    let out = run(test.clean_command().arg("--apply"))?;

    assert_eq!(out.code, 0, "{}{}", out.stdout, out.stderr);
    assert!(out.stdout.contains("Deleted 1 key(s) in 1 file(s)."), "{}", out.stdout);
    assert_keys(
        &test.read_file("messages/zh.json")?,
        &["status.active.label", "title"],
        &["old"],
    )?;
    assert_keys(
        &test.read_file("messages/en.json")?,
        &["status.active.label", "title"],
        &[],
    )?;
    Ok(())
}

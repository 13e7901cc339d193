use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_check_no_issues() -> Result<()> {
    let test = CliTest::with_locales(r#"{"home": {"title": "首页"}}"#, r#"{"home": {"title": "Home"}}"#)?;
    test.write_file("app/page.tsx", "export default () => t('home.title');")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        "✓ Checked 1 source file, 2 locale files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_check_missing_key_fails() -> Result<()> {
    let test = CliTest::with_locales(r#"{"x": "1"}"#, r#"{"x": "2"}"#)?;
    test.write_file("app/page.tsx", "const label = t('y');\n")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("error: \"y\"  missing-key"), "{}", out.stdout);
    assert!(out.stdout.contains("--> app/page.tsx:1:15"));
    assert!(out.stdout.contains("1 | const label = t('y');"));
    assert!(out.stdout.contains("warning: \"x\"  unused-key"));
    assert!(out.stdout.contains("2 problems (1 error, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_asymmetric_key_is_only_a_warning() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": {"b": "hello"}}"#, "{}")?;
    test.write_file("app/page.tsx", "t('a.b')")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("warning: \"a.b\"  asymmetric-key"));
    assert!(out.stdout.contains("defined in zh, missing in: en"));
    assert!(!out.stdout.contains("missing-key"));
    Ok(())
}

#[test]
fn test_check_malformed_locale_continues() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "一"}"#, "{ not json")?;
    test.write_file("app/page.tsx", "t('a'); t('b');")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("load-error"));
    assert!(out.stdout.contains("--> ./messages/en.json"));
    assert!(out.stdout.contains("error: \"b\"  missing-key"));
    // en is treated as empty, not as a locale lacking every key
    assert!(!out.stdout.contains("asymmetric-key"));
    Ok(())
}

#[test]
fn test_check_fatal_when_no_locale_loads() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/page.tsx", "t('a')")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 1);
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("Error: No locale dictionary could be loaded"));
    Ok(())
}

#[test]
fn test_check_is_default_command() -> Result<()> {
    let test = CliTest::with_locales(r#"{"x": "1"}"#, r#"{"x": "2"}"#)?;
    test.write_file("app/page.tsx", "t('y')")?;

    let out = run(&mut test.command())?;

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("error: \"y\"  missing-key"));
    Ok(())
}

#[test]
fn test_check_positional_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/messages/zh.json", r#"{"k": "值"}"#)?;
    test.write_file("site/messages/en.json", r#"{"k": "v"}"#)?;
    test.write_file("site/components/a.tsx", "t(\"k\")")?;

    let out = run(test.command().arg("site"))?;

    assert_eq!(out.code, 0, "{}{}", out.stdout, out.stderr);
    assert!(out.stdout.contains("Checked 1 source file, 2 locale files"));
    Ok(())
}

#[test]
fn test_check_json_format() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": {"b": "hello"}, "old": "x"}"#, r#"{"old": "y"}"#)?;
    test.write_file("app/page.tsx", "t('a.b'); t('gone'); t(`nav.${id}`);")?;

    let out = run(test.check_command().args(["--format", "json"]))?;
    let report: Value = serde_json::from_str(&out.stdout)?;

    assert_eq!(out.code, 1);
    assert_eq!(report["missing"], serde_json::json!(["gone"]));
    assert_eq!(report["unused"], serde_json::json!(["old"]));
    assert_eq!(
        report["asymmetric"]["a.b"],
        serde_json::json!({"presentIn": ["zh"], "missingIn": ["en"]})
    );
    assert_eq!(report["dynamic"][0]["pattern"], "nav.*");
    assert_eq!(report["summary"]["errors"], 1);
    Ok(())
}

#[test]
fn test_check_respects_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keyauditrc.json",
        r#"{
            "messagesRoot": "./locales",
            "locales": ["en"],
            "includes": ["src"],
            "translationFunctions": ["translate"],
            "ignoreUnused": ["legal.*"]
        }"#,
    )?;
    test.write_file(
        "locales/en.json",
        r#"{"title": "Title", "legal": {"terms": "Terms"}}"#,
    )?;
    test.write_file("src/app.ts", "translate('title'); t('not.a.call');")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 0, "{}{}", out.stdout, out.stderr);
    assert!(out.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_locale_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_locales(r#"{"k": "值"}"#, "{}")?;
    test.write_file("app/page.tsx", "t('k')")?;

    let out = run(test.check_command().args(["--locale", "zh"]))?;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("1 locale file - no issues found"));
    Ok(())
}

#[test]
fn test_check_skips_excluded_dirs() -> Result<()> {
    let test = CliTest::with_locales(r#"{"k": "值"}"#, r#"{"k": "v"}"#)?;
    test.write_file("app/page.tsx", "t('k')")?;
    test.write_file("app/node_modules/lib/index.js", "t('vendor.key')")?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 0);
    assert!(!out.stdout.contains("vendor.key"));
    Ok(())
}

#[test]
fn test_check_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_locales("{}", "{}")?;
    test.write_file(".keyauditrc.json", r#"{"locales": []}"#)?;

    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 1);
    assert!(out.stderr.contains("'locales' must list at least one locale"));
    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_repair_dry_run_leaves_files_alone() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": {"b": "hello"}}"#, "{}")?;
    test.write_file("app/page.tsx", "t('a.b')")?;

    let out = run(&mut test.repair_command())?;

    assert_eq!(out.code, 0);
    assert!(
        out.stdout
            .contains("+ ./messages/en.json  \"a.b\" = \"[EN] hello\""),
        "{}",
        out.stdout
    );
    assert!(out.stdout.contains("Would add 1 placeholder(s) in 1 file(s)."));
    assert!(out.stdout.contains("Run with --apply"));
    assert_eq!(test.read_file("messages/en.json")?, "{}");
    Ok(())
}

#[test]
fn test_repair_apply_writes_marked_copy() -> Result<()> {
    let zh = r#"{"a": {"b": "hello"}}"#;
    let test = CliTest::with_locales(zh, "{}")?;
    test.write_file("app/page.tsx", "t('a.b')")?;

    let out = run(test.repair_command().arg("--apply"))?;

    assert_eq!(out.code, 0, "{}{}", out.stdout, out.stderr);
    assert!(out.stdout.contains("Added 1 placeholder(s) in 1 file(s)."));
    assert_eq!(
        test.read_file("messages/en.json")?,
        "{\n  \"a\": {\n    \"b\": \"[EN] hello\"\n  }\n}\n"
    );
    // the source locale had nothing added and is not rewritten
    assert_eq!(test.read_file("messages/zh.json")?, zh);
    Ok(())
}

#[test]
fn test_repair_is_idempotent() -> Result<()> {
    let test = CliTest::with_locales(
        r#"{"nav": {"home": "首页"}, "list": ["一", "二"], "count": 3}"#,
        r#"{"nav": {"about": "About"}}"#,
    )?;

    let first = run(test.repair_command().arg("--apply"))?;
    assert_eq!(first.code, 0);
    let zh_after = test.read_file("messages/zh.json")?;
    let en_after = test.read_file("messages/en.json")?;

    assert!(en_after.contains("\"home\": \"[EN] 首页\""));
    assert!(en_after.contains("\"[EN] 一\""));
    assert!(en_after.contains("\"count\": 3"));
    assert!(zh_after.contains("\"about\": \"[ZH] About\""));

    let second = run(test.repair_command().arg("--apply"))?;
    assert_eq!(second.code, 0);
    assert!(second.stdout.contains("No asymmetric keys - nothing to repair"));
    assert_eq!(test.read_file("messages/zh.json")?, zh_after);
    assert_eq!(test.read_file("messages/en.json")?, en_after);
    Ok(())
}

#[test]
fn test_repair_skips_path_conflicts() -> Result<()> {
    let zh = r#"{"a": {"b": "x"}}"#;
    let en = r#"{"a": "leaf"}"#;
    let test = CliTest::with_locales(zh, en)?;

    let out = run(test.repair_command().arg("--apply"))?;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("warning: 2 placeholder(s) skipped"), "{}", out.stdout);
    assert!(out.stdout.contains("! ./messages/en.json  \"a.b\""));
    assert!(out.stdout.contains("! ./messages/zh.json  \"a\""));
    assert_eq!(test.read_file("messages/zh.json")?, zh);
    assert_eq!(test.read_file("messages/en.json")?, en);
    Ok(())
}

#[test]
fn test_repair_never_overwrites_malformed_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/zh.json", r#"{"k": "值"}"#)?;
    test.write_file("messages/en.json", "{ broken")?;
    test.write_file("messages/ja.json", "{}")?;

    let out = run(test.repair_command().args([
        "--apply", "--locale", "zh", "--locale", "en", "--locale", "ja",
    ]))?;

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("load-error"));
    assert_eq!(test.read_file("messages/en.json")?, "{ broken");
    assert_eq!(
        test.read_file("messages/ja.json")?,
        "{\n  \"k\": \"[JA] 值\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_repaired_values_show_as_placeholders() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "你好"}"#, "{}")?;
    test.write_file("app/page.tsx", "t('a')")?;

    run(test.repair_command().arg("--apply"))?;
    let out = run(&mut test.check_command())?;

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("warning: \"a\"  placeholder"));
    assert!(out.stdout.contains("en needs a real translation: \"[EN] 你好\""));
    Ok(())
}

#[test]
fn test_repair_json_format() -> Result<()> {
    let test = CliTest::with_locales(r#"{"a": "x"}"#, "{}")?;

    let out = run(test.repair_command().args(["--format", "json"]))?;
    let report: serde_json::Value = serde_json::from_str(&out.stdout)?;

    assert_eq!(report["apply"], false);
    assert_eq!(report["changes"][0]["key"], "a");
    assert_eq!(report["changes"][0]["value"], "[EN] x");
    Ok(())
}

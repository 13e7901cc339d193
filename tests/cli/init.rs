use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.command().arg("init"))?;

    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "✓ Created .keyauditrc.json\n");

    let content = test.read_file(".keyauditrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["locales"], serde_json::json!(["zh", "en"]));
    assert_eq!(parsed["placeholderMarker"], "[{LOCALE}]");
    assert!(content.contains("\n  \"locales\""), "2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyauditrc.json", "{}")?;

    let out = run(test.command().arg("init"))?;

    assert_eq!(out.code, 1);
    assert!(out.stderr.contains(".keyauditrc.json already exists"));
    assert_eq!(test.read_file(".keyauditrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;

    test.write_file("messages/zh.json", r#"{"hi": "你好"}"#)?;
    test.write_file("messages/en.json", r#"{"hi": "Hi"}"#)?;
    test.write_file("components/Hi.jsx", "export const Hi = () => t('hi');")?;

    let out = run(&mut test.check_command())?;
    assert_eq!(
        out.code, 0,
        "check should work with the initialized config: {}",
        out.stderr
    );
    Ok(())
}

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .casedup.json

    ----- stderr -----
    ");

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".casedup.json")?)?;
    assert_eq!(config["database"], "socialhub");
    assert_eq!(config["keepPrefix"], "wo_");

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".casedup.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .casedup.json already exists
    ");

    assert_eq!(test.read_file(".casedup.json")?, "{}");

    Ok(())
}

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .bookcheck.json\n");

    let content = test.read_file(".bookcheck.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["bookConfig"], "config.yml");
    assert_eq!(parsed["lineWidth"], 72);
    assert_eq!(parsed["chunkLength"], 30);
    assert!(parsed["ignores"].is_array());
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bookcheck.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "error: .bookcheck.json already exists\n");
    assert_eq!(test.read_file(".bookcheck.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_book()?;

    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    let output = run(test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );
    Ok(())
}

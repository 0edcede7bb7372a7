use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_entries_text() -> Result<()> {
    let test = CliTest::with_book()?;

    let mut cmd = test.command();
    cmd.arg("entries");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "1\thome\tHome\tindex.md\n\
         2\tintro\tIntroduction\t./intro/index.md\n\
         3\ttrees\tTrees\t./trees/index.md\n\
         A\tbib\tBibliography\t./bib/index.md\n"
    );
    Ok(())
}

#[test]
fn test_entries_json() -> Result<()> {
    let test = CliTest::with_book()?;

    let mut cmd = test.command();
    cmd.args(["entries", "--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let entries: Value = serde_json::from_str(&output.stdout)?;
    let labels: Vec<&str> = entries
        .as_array()
        .map(|items| items.iter().filter_map(|e| e["label"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(labels, vec!["1", "2", "3", "A"]);
    assert_eq!(entries[3]["kind"], "Appendix");
    Ok(())
}

#[test]
fn test_entries_written_to_yaml_file() -> Result<()> {
    let test = CliTest::with_book()?;

    let mut cmd = test.command();
    cmd.args(["entries", "--format", "yaml", "--output", "entries.yml"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert_eq!(output.stderr, "✓ Wrote 4 entries to entries.yml\n");

    let entries: serde_yaml::Value = serde_yaml::from_str(&test.read_file("entries.yml")?)?;
    assert_eq!(entries[0]["file"].as_str(), Some("index.md"));
    assert_eq!(entries[3]["label"].as_str(), Some("A"));
    Ok(())
}

#[test]
fn test_entries_appendix_marker_value_is_ignored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "config.yml",
        r#"chapters:
  - title: One
    slug: one
  - title: Extra
    slug: extra
    appendix: false
  - title: More
    slug: more
    appendix:
"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["entries", "--format", "yaml"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let entries: serde_yaml::Value = serde_yaml::from_str(&output.stdout)?;
    assert_eq!(entries[1]["label"].as_str(), Some("A"));
    assert_eq!(entries[2]["label"].as_str(), Some("B"));
    assert_eq!(entries[2]["file"].as_str(), Some("./more/index.md"));
    Ok(())
}

#[test]
fn test_entries_missing_slug_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("config.yml", "chapters:\n  - title: Nameless\n")?;

    let mut cmd = test.command();
    cmd.arg("entries");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("slug"), "stderr: {}", output.stderr);
    Ok(())
}

use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_matches_prints_sorted_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.md", r#"<x k="beta, alpha"> <x k="gamma">"#)?;
    test.write_file("b.md", "```\n<x k=\"in-code\">\n```\n<x k=\"alpha\">")?;

    let mut cmd = test.command();
    cmd.args(["matches", "--pattern", r#"<x k="([^"]+)">"#, "a.md", "b.md"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "alpha\nbeta\ngamma\n");
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn test_matches_reports_duplicates_per_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.md", r#"<x k="one,two"> <x k="one">"#)?;
    test.write_file("b.md", r#"<x k="two">"#)?;

    let mut cmd = test.command();
    cmd.args(["matches", "-p", r#"<x k="([^"]+)">"#, "--duplicates", "a.md", "b.md"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "one\ntwo\n");
    assert_eq!(output.stderr, "warning: duplicate key(s) in a.md: one\n");
    Ok(())
}

#[test]
fn test_matches_no_scrub_keeps_inclusions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("index.md", r#"{% include file="run.sh" %}"#)?;
    let pattern = r#"file="([^"]+)""#;

    let mut cmd = test.command();
    cmd.args(["matches", "-p", pattern, "index.md"]);
    assert_eq!(run(cmd)?.stdout, "");

    let mut cmd = test.command();
    cmd.args(["matches", "-p", pattern, "--no-scrub", "index.md"]);
    assert_eq!(run(cmd)?.stdout, "run.sh\n");
    Ok(())
}

#[test]
fn test_matches_group_selection() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.md", "key=left:right")?;

    let mut cmd = test.command();
    cmd.args(["matches", "-p", r"key=(\w+):(\w+)", "-g", "2", "a.md"]);
    assert_eq!(run(cmd)?.stdout, "right\n");

    let mut cmd = test.command();
    cmd.args(["matches", "-p", r"key=(\w+)", "-g", "2", "a.md"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("no capture group 2"));
    Ok(())
}

#[test]
fn test_matches_missing_file_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.md", r#"<x k="a">"#)?;

    let mut cmd = test.command();
    cmd.args(["matches", "-p", r#"k="(\w+)""#, "a.md", "missing.md"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("missing.md"));
    Ok(())
}

#[test]
fn test_matches_invalid_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.md", "text")?;

    let mut cmd = test.command();
    cmd.args(["matches", "-p", "(unclosed", "a.md"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Invalid pattern"));
    Ok(())
}

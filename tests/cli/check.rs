use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_check_consistent_book() -> Result<()> {
    let test = CliTest::with_book()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(output.stdout, "");
    assert_eq!(output.stderr, "\u{2713} Checked 4 entries - no issues found\n");
    Ok(())
}

#[test]
fn test_check_glossary_mismatch() -> Result<()> {
    let test = CliTest::with_book()?;
    test.write_file(
        "trees/index.md",
        r#"A <span g="tree">tree</span> joins <span g="vertex">vertices</span> <cite>Knuth1984,Wirth1976</cite>.
"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("gloss");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "- Glossary\n  - text but not glossary\n    - vertex\n"
    );
    assert!(output.stderr.contains("1 problem (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_unused_glossary_entry() -> Result<()> {
    let test = CliTest::with_book()?;
    test.write_file(
        "glossary.yml",
        "- key: graph\n- key: tree\n- key: forest\n  def: Several [trees](#tree).\n",
    )?;

    let mut cmd = test.check_command();
    cmd.arg("gloss");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "- Glossary\n  - glossary but not text\n    - forest\n"
    );
    Ok(())
}

#[test]
fn test_check_unknown_section() -> Result<()> {
    let test = CliTest::with_book()?;
    test.write_file("bib/index.md", "See <a section=\"graphs\"/>.\n")?;

    let mut cmd = test.check_command();
    cmd.arg("xref");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "- Cross-references\n  - text but not chapters\n    - graphs\n"
    );
    Ok(())
}

#[test]
fn test_check_duplicate_citation_is_a_warning() -> Result<()> {
    let test = CliTest::with_book()?;
    test.write_file(
        "bib/index.md",
        "<cite>Knuth1984</cite> and again <cite>Knuth1984</cite>.\n",
    )?;

    let mut cmd = test.check_command();
    cmd.arg("cite");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert!(
        output
            .stderr
            .contains("warning: duplicate key(s) in bib/index.md: Knuth1984"),
        "stderr: {}",
        output.stderr
    );
    assert!(output.stderr.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_inclusions() -> Result<()> {
    let test = CliTest::with_book()?;
    test.write_file("intro/unused.py", "pass\n")?;
    test.write_file("intro/figure.svg", "<svg/>")?;
    test.write_file(
        "trees/index.md",
        "{% include file=\"walk.py\" %}\n<span g=\"tree\">tree</span> <cite>Wirth1976</cite>\n",
    )?;

    let mut cmd = test.check_command();
    cmd.arg("include");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "- intro\n  - files but not includes\n    - unused.py\n- trees\n  - includes but not files\n    - walk.py\n"
    );
    Ok(())
}

#[test]
fn test_check_chunks() -> Result<()> {
    let test = CliTest::with_book()?;
    let mut content = "x = 1\n".repeat(30);
    content.push_str(&format!("# {}\n", "=".repeat(75)));
    test.write_file("intro/hello.py", &content)?;

    let mut cmd = test.check_command();
    cmd.arg("chunks");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "- Lines wider than 72\n  - intro/hello.py:31 (77)\n- Chunks longer than 30\n  - intro/hello.py (31)\n"
    );
    assert!(output.stderr.contains("2 problems (2 errors, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_uses_config_limits() -> Result<()> {
    let test = CliTest::with_book()?;
    test.write_file(".bookcheck.json", r#"{ "chunkLength": 60, "lineWidth": 100 }"#)?;
    test.write_file("intro/hello.py", &format!("{}\n", "y".repeat(90)).repeat(40))?;

    let mut cmd = test.check_command();
    cmd.arg("chunks");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    Ok(())
}

#[test]
fn test_check_with_root_argument() -> Result<()> {
    let test = CliTest::with_book()?;
    let elsewhere = tempfile::TempDir::new()?;

    let mut cmd = test.check_command();
    cmd.current_dir(elsewhere.path());
    cmd.arg("--root").arg(test.root());
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    Ok(())
}

#[test]
fn test_check_missing_book_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Failed to read YAML file"));
    assert!(output.stderr.contains("config.yml"));
    Ok(())
}

#[test]
fn test_check_missing_glossary() -> Result<()> {
    let test = CliTest::with_book()?;
    std::fs::remove_file(test.root().join("glossary.yml"))?;

    // Other checks do not need the glossary.
    let mut cmd = test.check_command();
    cmd.arg("cite");
    assert_eq!(run(cmd)?.code, Some(0));

    let mut cmd = test.check_command();
    cmd.arg("gloss");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("glossary.yml"));
    Ok(())
}

#[test]
fn test_check_spell_without_dictionary() -> Result<()> {
    let test = CliTest::with_book()?;

    let mut cmd = test.check_command();
    cmd.arg("spell");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("dictionary"));
    Ok(())
}

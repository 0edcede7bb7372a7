use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_words_prints_word_set() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "a.md",
        "Hello <span g=\"w\">world</span>, again!\n```\nhidden code\n```\n",
    )?;

    let mut cmd = test.command();
    cmd.args(["words", "a.md"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "!\n,\nHello\nagain\nworld\n");
    Ok(())
}

#[test]
fn test_words_with_dictionary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.md", "Hello [world](https://example.com), again 42!\n")?;
    test.write_file("words.txt", "# known words\nhello\nWorld\n")?;

    let mut cmd = test.command();
    cmd.args(["words", "--dictionary", "words.txt", "a.md"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "- Spelling\n  - text but not dictionary\n    - again\n"
    );
    Ok(())
}

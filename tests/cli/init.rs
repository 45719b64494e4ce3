use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains(".marklintrc.json"));

    let content = test.read_file(".marklintrc.json")?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert!(config["includes"].is_array());
    assert!(config["commentMarkup"].is_array());
    assert_eq!(config["ignoreTestFiles"], true);
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".marklintrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));
    assert_eq!(test.read_file(".marklintrc.json")?, "{}");
    Ok(())
}

use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_fix_removes_duplicate_marker() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        "// +kubebuilder:validation:MaxLength=10\n// +kubebuilder:validation:MaxLength=10\nName string\n",
    )?;

    let (code, stdout, _) = run(&mut test.fix_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("Removed 1 duplicate marker"));
    assert_eq!(
        test.read_file("api/types.go")?,
        "// +kubebuilder:validation:MaxLength=10\nName string\n"
    );

    // A follow-up check is clean
    let (code, stdout, _) = run(&mut test.check_command())?;
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_fix_removes_multiple_duplicates_in_one_file() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        "// +optional\n// +optional\nReplicas int32\n\n// +required\n// +required\nImage string\n",
    )?;

    let (code, stdout, _) = run(&mut test.fix_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert_eq!(
        test.read_file("api/types.go")?,
        "// +optional\nReplicas int32\n\n// +required\nImage string\n"
    );
    Ok(())
}

#[test]
fn test_fix_dry_run_leaves_files_alone() -> Result<()> {
    let content = "// +optional\n// +optional\nReplicas int32\n";
    let test = CliTest::with_file("api/types.go", content)?;

    let (code, stdout, _) = run(test.fix_command().arg("--dry-run"))?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("dry run"));
    assert!(stdout.contains("would delete"));
    assert_eq!(test.read_file("api/types.go")?, content);
    Ok(())
}

#[test]
fn test_fix_with_nothing_to_fix() -> Result<()> {
    let test = CliTest::with_file("api/types.go", "// +optional\nReplicas int32\n")?;

    let (code, stdout, _) = run(&mut test.fix_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("Nothing to fix"));
    Ok(())
}

#[test]
fn test_fix_does_not_touch_distinct_markers() -> Result<()> {
    let content = "\
// +kubebuilder:validation:XValidation:rule='self.a > 0'
// +kubebuilder:validation:XValidation:rule='self.b > 0'
Name string
";
    let test = CliTest::with_file("api/types.go", content)?;

    let (code, _, _) = run(&mut test.fix_command())?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("api/types.go")?, content);
    Ok(())
}

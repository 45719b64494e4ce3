use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_clean_file_passes() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        r#"package v1

// FooSpec defines the desired state of Foo.
type FooSpec struct {
	// Replicas is the desired replica count.
	// +optional
	// +kubebuilder:validation:Minimum=1
	Replicas int32 `json:"replicas,omitempty"`
}
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_conflicting_modifiers_fail_the_run() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        r#"// +optional
// +required
Replicas int32
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("conflicting-modifiers"));
    assert!(stdout.contains("error"));
    assert!(stdout.contains("api/types.go:2"));
    Ok(())
}

#[test]
fn test_duplicate_markers_warn_but_pass() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        r#"// +kubebuilder:validation:MaxLength=10
// +kubebuilder:validation:MaxLength=10
Name string
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    // Warnings alone do not fail the run
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("duplicate-markers"));
    assert!(stdout.contains("warning"));
    Ok(())
}

#[test]
fn test_missing_value_reported() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        r#"// +kubebuilder:validation:MaxLength
Name string
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("missing-value"));
    assert!(stdout.contains("requires a value"));
    Ok(())
}

#[test]
fn test_unknown_marker_typo_reported() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        r#"// +kubebuilder:validation:MaxLenght=10
Name string
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("unknown-marker"));
    assert!(stdout.contains("MaxLenght"));
    Ok(())
}

#[test]
fn test_summary_counts_errors_and_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "api/types.go",
        r#"// +optional
// +required
// +kubebuilder:validation:MaxLength=10
// +kubebuilder:validation:MaxLength=10
Name string
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("2 problems (1 error, 1 warning)"));
    Ok(())
}

#[test]
fn test_config_includes() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".marklintrc.json",
        r#"{
        "includes": ["types"]
    }"#,
    )?;

    // Only types/ is scanned; the conflict in other/ is invisible
    test.write_file("types/a.go", "// +optional\nReplicas int32\n")?;
    test.write_file("other/b.go", "// +optional\n// +required\nImage string\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".marklintrc.json",
        r#"{
        "includes": [],
        "ignores": ["**/generated/**"]
    }"#,
    )?;

    test.write_file("api/types.go", "// +optional\nReplicas int32\n")?;
    test.write_file(
        "api/generated/zz.go",
        "// +optional\n// +required\nImage string\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0, "stdout: {stdout}");
    Ok(())
}

#[test]
fn test_test_files_skipped_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".marklintrc.json", r#"{ "includes": [] }"#)?;
    test.write_file("api/types.go", "// +optional\nReplicas int32\n")?;
    test.write_file(
        "api/types_test.go",
        "// +optional\n// +required\nImage string\n",
    )?;

    let (code, _, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn test_hash_comments_in_yaml_like_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".marklintrc.json",
        r#"{
        "includes": [],
        "fileExtensions": ["yaml"]
    }"#,
    )?;
    test.write_file(
        "api/config.yaml",
        "# +optional\n# +required\nreplicas: 1\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("conflicting-modifiers"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("--help"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("fix"));
    assert!(stdout.contains("init"));
    Ok(())
}

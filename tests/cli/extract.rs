use anyhow::Result;

use crate::CliTest;

#[test]
fn test_extract_single_file() -> Result<()> {
    let test = CliTest::with_file(
        "app.rs",
        "//@@ Overview\nfn main() {}\n//@@ - bullet one\n//@@ - bullet two\n",
    )?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    assert_eq!(stdout, "Overview\n\n- bullet one\n- bullet two\n");
    Ok(())
}

#[test]
fn test_extract_empty_project_reports_to_stderr() -> Result<()> {
    let test = CliTest::with_file("app.rs", "fn main() {}\n")?;

    let (stdout, stderr, success) = test.extract()?;

    // Exit is still success; the diagnostic goes to stderr only.
    assert!(success);
    assert_eq!(stdout.trim(), "");
    assert!(stderr.contains("No documentation found in any files."));
    Ok(())
}

#[test]
fn test_extract_orders_primary_files_first() -> Result<()> {
    let test = CliTest::with_file("aardvark.rs", "//@@ from aardvark\n")?;
    test.write_file("main.rs", "//@@ from main\n")?;
    test.write_file("sub/part.rs", "//@@ from sub\n")?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    assert_eq!(stdout, "from main\n\nfrom aardvark\n\nfrom sub\n");
    Ok(())
}

#[test]
fn test_extract_follows_imports_and_refs() -> Result<()> {
    let test = CliTest::with_file(
        "main.rs",
        "//@@ main top\n//@@ +import lib/shared.rs\n//@@ main bottom\n//@@ +ref appendix.rs\n",
    )?;
    test.write_file("lib/shared.rs", "//@@ shared detail\n")?;
    test.write_file("appendix.rs", "//@@ appendix note\n")?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    // Import lands inline, the ref after main.rs finishes; neither file is
    // re-emitted when the walk reaches it on its own.
    assert_eq!(
        stdout,
        "main top\nshared detail\n\nmain bottom\n\nappendix note\n"
    );
    Ok(())
}

#[test]
fn test_extract_skips_binary_files() -> Result<()> {
    let test = CliTest::with_file("app.rs", "//@@ docs\n")?;
    test.write_bytes("logo.png", &[0x89, b'P', b'N', b'G', 0x00])?;
    test.write_bytes("raw.dat", &[0x00, 0x01, 0x02])?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    assert_eq!(stdout.trim(), "docs");
    Ok(())
}

#[test]
fn test_extract_verbose_notes_binary_skip() -> Result<()> {
    let test = CliTest::with_file("logo.png", "not really an image")?;
    test.write_file("app.rs", "//@@ docs\n")?;

    let output = test.command().arg("--verbose").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("Skipping binary file"));
    assert!(stderr.contains("logo.png"));
    Ok(())
}

#[test]
fn test_extract_full_file_marker() -> Result<()> {
    let test = CliTest::with_file(
        "notes.sh",
        "##@@ FeatureDoc @@##\nplain line\n\n# a comment\n",
    )?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    assert_eq!(stdout, "##@@ FeatureDoc @@##\nplain line\n\n# a comment\n");
    Ok(())
}

#[test]
fn test_extract_respects_docignore() -> Result<()> {
    let test = CliTest::with_file(".docignore", "private\n")?;
    test.write_file("app.rs", "//@@ public docs\n")?;
    test.write_file("private/secret.rs", "//@@ private docs\n")?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    assert_eq!(stdout.trim(), "public docs");
    Ok(())
}

#[test]
fn test_extract_explicit_subcommand_and_path() -> Result<()> {
    let test = CliTest::with_file("docs/app.rs", "//@@ nested docs\n")?;

    let output = test.command().args(["extract", "docs"]).output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.trim(), "nested docs");
    Ok(())
}

#[test]
fn test_extract_missing_path_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("does-not-exist").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Error:"));
    Ok(())
}

#[test]
fn test_extract_reference_cycle_terminates() -> Result<()> {
    let test = CliTest::with_file("a.rs", "//@@ alpha\n//@@ +ref b.rs\n")?;
    test.write_file("b.rs", "//@@ beta\n//@@ +ref a.rs\n")?;

    let (stdout, _, success) = test.extract()?;

    assert!(success);
    assert_eq!(stdout, "alpha\n\nbeta\n");
    Ok(())
}

#[test]
fn test_extract_is_byte_identical_across_runs() -> Result<()> {
    let test = CliTest::with_file("one.rs", "//@@ one\n")?;
    test.write_file("two.rs", "//@@ two\n")?;
    test.write_file("nested/main.rs", "//@@ nested main\n")?;

    let (first, _, _) = test.extract()?;
    let (second, _, _) = test.extract()?;

    assert_eq!(first, second);
    Ok(())
}

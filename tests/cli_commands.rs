mod harness;

use harness::TestContext;
use predicates::prelude::*;

#[test]
fn mkdir_creates_single_level() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["mkdir", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory A"));
    assert!(ctx.path("A").is_dir());

    ctx.cli()
        .args(["mkdir", "x/y"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: x/y:"));
}

#[test]
fn mkdir_over_existing_file_fails_and_leaves_file() {
    let ctx = TestContext::new();
    ctx.write_file("A", "file");

    ctx.cli().args(["mkdir", "A"]).assert().failure().code(1);
    assert_eq!(ctx.read_file("A"), "file");
}

#[test]
fn cp_directory_copies_tree() {
    let ctx = TestContext::new();
    ctx.write_file("A/x.txt", "hi");

    ctx.cli().args(["cp", "A", "B"]).assert().success();

    assert_eq!(ctx.read_file("B/x.txt"), "hi");
    assert_eq!(ctx.read_file("A/x.txt"), "hi");
}

#[test]
fn cp_requires_force_to_replace() {
    let ctx = TestContext::new();
    ctx.write_file("src.txt", "new");
    ctx.write_file("dest.txt", "old");

    ctx.cli()
        .args(["cp", "src.txt", "dest.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination already exists"));
    assert_eq!(ctx.read_file("dest.txt"), "old");

    ctx.cli().args(["cp", "--force", "src.txt", "dest.txt"]).assert().success();
    assert_eq!(ctx.read_file("dest.txt"), "new");
}

#[test]
fn rename_without_force_keeps_both() {
    let ctx = TestContext::new();
    ctx.write_file("a.txt", "A");
    ctx.write_file("b.txt", "B");

    ctx.cli().args(["rename", "a.txt", "b.txt"]).assert().failure();
    assert_eq!(ctx.read_file("a.txt"), "A");
    assert_eq!(ctx.read_file("b.txt"), "B");

    ctx.cli()
        .args(["rename", "-f", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed a.txt to b.txt"));
    ctx.assert_not_exists("a.txt");
    assert_eq!(ctx.read_file("b.txt"), "A");
}

#[test]
fn mv_moves_directory() {
    let ctx = TestContext::new();
    ctx.write_file("tree/leaf.txt", "leaf");

    ctx.cli().args(["mv", "tree", "moved"]).assert().success();
    ctx.assert_not_exists("tree");
    assert_eq!(ctx.read_file("moved/leaf.txt"), "leaf");
}

#[test]
fn mv_missing_source_reports_not_found() {
    let ctx = TestContext::new();
    ctx.write_file("dest.txt", "keep");

    ctx.cli().args(["mv", "--force", "ghost", "dest.txt"]).assert().failure();
    assert_eq!(ctx.read_file("dest.txt"), "keep");
}

#[test]
fn rm_with_yes_is_idempotent() {
    let ctx = TestContext::new();
    ctx.write_file("tree/a/b.txt", "b");

    ctx.cli().args(["rm", "-y", "tree"]).assert().success();
    ctx.assert_not_exists("tree");
    ctx.cli().args(["rm", "-y", "tree"]).assert().success();
}

#[test]
fn rm_skips_prompt_when_config_disables_it() {
    let ctx = TestContext::new();
    ctx.write_user_config("[confirm]\ndelete = false\n");
    ctx.write_file("gone.txt", "");

    ctx.cli().args(["delete", "gone.txt"]).assert().success();
    ctx.assert_not_exists("gone.txt");
}

#[test]
fn ls_prints_columns() {
    let ctx = TestContext::new();
    ctx.write_file("notes.txt", "12345");
    ctx.create_dir("docs");

    ctx.cli()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date Modified"))
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("5 bytes"))
        .stdout(predicate::str::contains("docs"));
}

#[test]
fn ls_json_lists_rows() {
    let ctx = TestContext::new();
    ctx.write_file("a.bin", "xyz");

    let output = ctx.cli().args(["ls", "--json"]).output().expect("run filenav");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let rows = rows.as_array().expect("array of rows");

    let file = rows.iter().find(|row| row["name"] == "a.bin").expect("a.bin row");
    assert_eq!(file["kind"], "file");
    assert_eq!(file["size"], 3);
    assert!(rows.iter().any(|row| row["name"] == ".."));
}

#[test]
fn ls_on_file_is_invalid_directory() {
    let ctx = TestContext::new();
    ctx.write_file("plain.txt", "");

    ctx.cli()
        .args(["ls", "plain.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid directory"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "nope.toml", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_user_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_user_config("[browser]\nunknown = 1\n");

    ctx.cli().arg("ls").assert().failure().stderr(predicate::str::contains("TOML parse error"));
}

mod harness;

use harness::TestContext;
use predicates::prelude::*;

#[test]
fn browse_is_the_default_command() {
    let ctx = TestContext::new();
    ctx.write_file("hello.txt", "hi");

    ctx.cli()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.txt"))
        .stdout(predicate::str::contains("Date Modified"));
}

#[test]
fn copy_then_paste_into_subdirectory() {
    let ctx = TestContext::new();
    ctx.write_file("A/x.txt", "hi");
    ctx.create_dir("B");

    ctx.cli()
        .arg("browse")
        .write_stdin("copy A\ncd B\npaste\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paste complete. Clipboard is now empty."));

    assert_eq!(ctx.read_file("B/A/x.txt"), "hi");
    assert_eq!(ctx.read_file("A/x.txt"), "hi");
}

#[test]
fn cut_paste_with_yes_overwrites_existing() {
    let ctx = TestContext::new();
    ctx.write_file("f.txt", "new");
    ctx.write_file("dest/f.txt", "old");

    ctx.cli()
        .args(["-y", "browse"])
        .write_stdin("cut f.txt\ncd dest\npaste\n")
        .assert()
        .success();

    ctx.assert_not_exists("f.txt");
    assert_eq!(ctx.read_file("dest/f.txt"), "new");
}

#[test]
fn command_errors_keep_the_loop_running() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("paste\ncd nowhere\nmkdir made\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Clipboard is empty."))
        .stderr(predicate::str::contains("Invalid directory"))
        .stdout(predicate::str::contains("Created directory: "));

    assert!(ctx.path("made").is_dir());
}

#[test]
fn browse_starts_in_configured_directory() {
    let ctx = TestContext::new();
    ctx.write_file("start/marker.txt", "");
    let start = ctx.path("start");
    ctx.write_user_config(&format!("[browser]\nstart_dir = {:?}\n", start.display().to_string()));

    ctx.cli()
        .write_stdin("pwd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("marker.txt"));
}

#[test]
fn browse_rejects_missing_start_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["browse", "does-not-exist"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid directory"));
}

#[cfg(unix)]
#[test]
fn open_uses_configured_command() {
    let ctx = TestContext::new();
    ctx.write_file("doc.txt", "");
    ctx.write_user_config("[open]\ncommand = \"true\"\n");

    ctx.cli()
        .write_stdin("open doc.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened: "));
}

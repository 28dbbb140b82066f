use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn minicrm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("minicrm").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn add_persists_across_runs() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("contacts.json");

    minicrm(&dir)
        .arg("--quiet")
        .arg("--file")
        .arg(&data)
        .write_stdin("1\n1\nAda Lovelace\nada@x.org\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added (1): Ada Lovelace"));

    let on_disk = fs::read_to_string(&data).unwrap();
    assert!(on_disk.contains("\"Name\": \"Ada Lovelace\""));

    minicrm(&dir)
        .arg("--quiet")
        .arg("--file")
        .arg(&data)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- ID:1 | Name:Ada Lovelace | Email:ada@x.org",
        ));
}

#[test]
fn default_data_file_is_in_working_directory() {
    let dir = TempDir::new().unwrap();

    minicrm(&dir)
        .arg("-q")
        .write_stdin("1\n4\nBob\nbob@x.com\n5\n")
        .assert()
        .success();

    assert!(dir.path().join("contacts.json").exists());
}

#[test]
fn notifiers_announce_changes() {
    let dir = TempDir::new().unwrap();

    minicrm(&dir)
        .arg("--memory")
        .write_stdin("1\n1\nAda\nada@x.org\n3\n1\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "[EMAIL] From: crm@example.com | To: admin@example.com | Message: New contact added: Ada",
            )
            .and(predicate::str::contains(
                "[SMS] To: +33612345678 | Message: Contact removed: Ada",
            )),
        );
}

#[test]
fn memory_backend_writes_nothing() {
    let dir = TempDir::new().unwrap();

    minicrm(&dir)
        .arg("--memory")
        .arg("--quiet")
        .write_stdin("1\n1\nAda\nada@x.org\n5\n")
        .assert()
        .success();

    assert!(!dir.path().join("contacts.json").exists());
}

#[test]
fn config_file_selects_backend_and_notifiers() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("minicrm.json"),
        r#"{"backend": "memory", "notifiers": {"sms": {"phone": "+15550100"}}}"#,
    )
    .unwrap();

    minicrm(&dir)
        .write_stdin("1\n1\nAda\nada@x.org\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[SMS] To: +15550100"))
        .stdout(predicate::str::contains("[EMAIL]").not());

    assert!(!dir.path().join("contacts.json").exists());
}

#[test]
fn corrupt_data_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("contacts.json");
    fs::write(&data, "not json at all").unwrap();

    minicrm(&dir)
        .arg("--file")
        .arg(&data)
        .write_stdin("5\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Could not parse"));

    assert_eq!(fs::read_to_string(&data).unwrap(), "not json at all");
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = TempDir::new().unwrap();

    minicrm(&dir)
        .arg("--memory")
        .arg("-q")
        .write_stdin("3\n42\nx\n1\nnope\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact not found: 42"))
        .stdout(predicate::str::contains("Invalid choice. Try again."))
        .stdout(predicate::str::contains("'nope' is not a valid ID"))
        .stdout(predicate::str::contains("No contacts."))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

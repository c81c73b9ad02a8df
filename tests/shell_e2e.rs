use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "ID,Name,Position,Salary,Email\n";

fn roster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_creates_backing_file() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .write_stdin("1\n1\nAna\nEng\n50000\na@x.com\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee added successfully!"))
        .stdout(predicate::str::contains("Exiting the system. Goodbye!"));

    let on_disk = fs::read_to_string(dir.path().join("employees.csv")).unwrap();
    assert_eq!(on_disk, format!("{}1,Ana,Eng,50000,a@x.com\n", HEADER));
}

#[test]
fn test_records_survive_restart() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .write_stdin("1\n1\nDoe, Jane\nEng\n50000\nj@x.com\n6\n")
        .assert()
        .success();

    roster(&dir)
        .write_stdin("5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Name: Doe, Jane, Position: Eng, Salary: 50000, Email: j@x.com",
        ));
}

#[test]
fn test_ana_scenario() {
    let dir = TempDir::new().unwrap();
    let input = [
        "1", "1", "Ana", "Eng", "50000", "a@x.com", // add
        "5", // list
        "2", "1", "", "", "55000", "", // update salary only
        "4", "1", // search
        "3", "1", // delete
        "5", // list again
        "6",
    ]
    .join("\n")
        + "\n";

    roster(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Name: Ana, Position: Eng, Salary: 50000, Email: a@x.com",
        ))
        .stdout(predicate::str::contains("Employee updated successfully!"))
        .stdout(predicate::str::contains(
            "Employee found:\nID: 1, Name: Ana, Position: Eng, Salary: 55000, Email: a@x.com",
        ))
        .stdout(predicate::str::contains("Employee deleted successfully!"))
        .stdout(predicate::str::contains("No employees found!"));

    let on_disk = fs::read_to_string(dir.path().join("employees.csv")).unwrap();
    assert_eq!(on_disk, HEADER);

    roster(&dir)
        .write_stdin("5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found!"));
}

#[test]
fn test_not_found_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("employees.csv");
    let original = format!("{}1,Ana,Eng,50000,a@x.com\n", HEADER);
    fs::write(&path, &original).unwrap();

    roster(&dir)
        .write_stdin("2\n9\nZed\n\n\n\n3\n9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee not found!").count(2));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_file_flag_overrides_default() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .args(["--file", "data/team.csv"])
        .write_stdin("1\n7\nBo\nOps\n40000\nb@x.com\n6\n")
        .assert()
        .success();

    assert!(dir.path().join("data/team.csv").exists());
    assert!(!dir.path().join("employees.csv").exists());
}

#[test]
fn test_config_file_sets_data_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("roster.json"),
        r#"{ "data_file": "staff.csv" }"#,
    )
    .unwrap();

    roster(&dir)
        .write_stdin("1\n7\nBo\nOps\n40000\nb@x.com\n6\n")
        .assert()
        .success();

    let on_disk = fs::read_to_string(dir.path().join("staff.csv")).unwrap();
    assert!(on_disk.starts_with(HEADER));
}

#[test]
fn test_invalid_header_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("employees.csv"), "id,name\n1,Ana\n").unwrap();

    roster(&dir)
        .write_stdin("6\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid header"));
}

#[test]
fn test_invalid_choice_keeps_running() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice! Please try again."))
        .stdout(predicate::str::contains("Employee Data Management System").count(2));

    assert!(!dir.path().join("employees.csv").exists());
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

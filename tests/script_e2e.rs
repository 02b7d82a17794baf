use assert_cmd::Command;

#[test]
fn runs_a_command_script_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("library_manager.txt");
    std::fs::write(
        &script,
        "\
# admin sets up the catalog
log admin
add -t Java -a Gosling -d 1995 -i 100
add -t Rust -a Klabnik -d 2019 -i 200 -n 2
logout

log Alice
borrow 1
list
",
    )
    .unwrap();

    Command::cargo_bin("biblio")
        .unwrap()
        .arg(&script)
        .assert()
        .success()
        .stdout(predicates::str::contains("You are log as admin"))
        .stdout(predicates::str::contains("The book is registered as 1."))
        .stdout(predicates::str::contains("The books are registered as 2 3."))
        .stdout(predicates::str::contains("You are logged out."))
        .stdout(predicates::str::contains("Book 1 borrowed by Alice until "))
        .stdout(predicates::str::contains("1\tJava\tGosling\t1995"))
        .stdout(predicates::str::contains("3\tRust\tKlabnik\t2019"));
}

#[test]
fn reply_lines_come_out_in_command_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("remove.txt");
    std::fs::write(
        &script,
        "\
log admin
add -t Java -a Gosling -d 1995 -i 100
remove 1 99
",
    )
    .unwrap();

    Command::cargo_bin("biblio")
        .unwrap()
        .env("NO_COLOR", "1")
        .arg(&script)
        .assert()
        .success()
        .stdout(
            "You are log as admin\n\
             The book is registered as 1.\n\
             The following books were removed: 1.\n\
             The following IDs do not exist: 99.\n",
        );
}

#[test]
fn reads_commands_from_stdin_when_no_script_is_given() {
    Command::cargo_bin("biblio")
        .unwrap()
        .write_stdin("log admin\nlogout\nborrow 1\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("You are log as admin"))
        .stdout(predicates::str::contains("You are logged out."))
        .stdout(predicates::str::contains(
            "You must log in with: log [USERNAME]",
        ));
}

#[test]
fn blank_and_comment_lines_produce_no_output() {
    Command::cargo_bin("biblio")
        .unwrap()
        .env("NO_COLOR", "1")
        .write_stdin("# nothing to see\n\n   \nlog admin\n")
        .assert()
        .success()
        .stdout("You are log as admin\n");
}

#[test]
fn missing_script_file_is_a_hard_error() {
    Command::cargo_bin("biblio")
        .unwrap()
        .arg("no-such-script.txt")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

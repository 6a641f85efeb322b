use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dav_tools(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dav-tools").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_check_clean_file_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.dav"), "Si x > 5.\n    Affiche x.\nFinSi.\n").unwrap();

    dav_tools(&dir)
        .args(["check", "ok.dav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 erreur(s), 0 avertissement(s)"));
}

#[test]
fn test_check_reports_errors_and_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.dav"), "FinSi.\n").unwrap();

    dav_tools(&dir)
        .args(["check", "bad.dav"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "bad.dav:1:1: error[unmatched-closer]: FinSi/EndIf sans Si/If correspondant.",
        ));
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("open.dav"), "Si x > 5.\n    Affiche x.").unwrap();

    let output = dav_tools(&dir)
        .args(["check", "--format", "json", "open.dav"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diagnostics = &json[0]["diagnostics"];
    assert_eq!(diagnostics.as_array().unwrap().len(), 1);
    assert_eq!(diagnostics[0]["code"], "unclosed-construct");
    assert_eq!(diagnostics[0]["severity"], "error");
    assert_eq!(diagnostics[0]["range"]["start_line"], 1);
}

#[test]
fn test_indent_subcommand() {
    let dir = TempDir::new().unwrap();
    dav_tools(&dir)
        .args(["indent", "--previous", "    Si x > 5."])
        .assert()
        .success()
        .stdout("8\n");

    dav_tools(&dir)
        .args(["indent", "--previous", "Si x > 5.", "--current", "FinSi."])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_settings_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dav.toml"),
        "tab-size = 2\npreferred-language = \"english\"\n",
    )
    .unwrap();

    dav_tools(&dir)
        .args(["indent", "--previous", "If x."])
        .assert()
        .success()
        .stdout("2\n");

    dav_tools(&dir)
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("EndIf.").and(predicate::str::contains("FinSi.").not()));
}

#[test]
fn test_invalid_tab_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    dav_tools(&dir)
        .args(["--tab-size", "0", "indent", "--previous", "Si x."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tab-size must be at least 1"));
}

#[test]
fn test_outline_subcommand() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("f.dav"),
        "Crée une fonction nommée carre qui prend n.\n    J'ai un nombre appelé r.\nFinFonction.\n",
    )
    .unwrap();

    dav_tools(&dir)
        .args(["outline", "f.dav"])
        .assert()
        .success()
        .stdout("fonction carre [1-3] (n)\n  variable r [2-2] (un nombre)\n");
}

#[test]
fn test_run_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "Affiche 1.\n").unwrap();

    dav_tools(&dir)
        .args(["run", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension .dav"));
}

#[test]
fn test_run_reports_missing_interpreter() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prog.dav"), "Affiche 1.\n").unwrap();
    fs::write(
        dir.path().join("dav.toml"),
        "interpreter-path = \"./no-such-dav-interpreter\"\n",
    )
    .unwrap();

    dav_tools(&dir)
        .args(["run", "prog.dav"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start interpreter"));
}

#[cfg(unix)]
#[test]
fn test_run_forwards_exit_code_despite_errors() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let interpreter = dir.path().join("fake-dav");
    fs::write(&interpreter, "#!/bin/sh\necho \"$1\" > ran.txt\nexit 3\n").unwrap();
    fs::set_permissions(&interpreter, fs::Permissions::from_mode(0o755)).unwrap();
    fs::write(
        dir.path().join("dav.toml"),
        format!("interpreter-path = \"{}\"\n", interpreter.display()),
    )
    .unwrap();
    fs::write(dir.path().join("prog.dav"), "FinSi.\n").unwrap();

    dav_tools(&dir).args(["run", "prog.dav"]).assert().code(3);

    let ran = fs::read_to_string(dir.path().join("ran.txt")).unwrap();
    assert_eq!(ran.trim(), "prog.dav");
}

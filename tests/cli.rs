use std::{
    fs,
    process::{Command, Output},
};

fn rpncalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpncalc")).args(args)
                                               .output()
                                               .expect("failed to run rpncalc")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn empty_expression_is_not_an_error() {
    let output = rpncalc(&[""]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Empty input.\n");
}

#[test]
fn whitespace_expression_fails() {
    let output = rpncalc(&["   "]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(!stderr_of(&output).is_empty());
}

#[test]
fn result_only_prints_the_value() {
    let output = rpncalc(&["-r", "2 + 3 * 4"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "14\n");
}

#[test]
fn full_report_by_default() {
    let output = rpncalc(&["6 / 3 - 1"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output),
               "Infix: 6.00 / 3.00 - 1.00\n\
                Postfix: 6.00 3.00 / 1.00 -\n\
                Result: 1\n\
                PUSH 6\n\
                PUSH 3\n\
                DIV\n\
                PUSH 1\n\
                SUB\n\
                ; end of listing\n");
}

#[test]
fn file_mode_keeps_going_after_a_failing_line() {
    let path = std::env::temp_dir().join(format!("rpncalc-file-mode-{}.txt", std::process::id()));
    fs::write(&path, "1 + 1\n\n2 / 0\n3 * 3\n").unwrap();

    let output = rpncalc(&["-f", "-r", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "2\n9\n");
    assert!(stderr_of(&output).starts_with("Line 3: "));
}

#[test]
fn missing_file_fails() {
    let output = rpncalc(&["--file", "/nonexistent/rpncalc/input.txt"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to read the input file"));
}

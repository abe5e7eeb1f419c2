//! CLI argument-handling and diagnostic-path tests.
//!
//! These run the `nanoc` binary as a subprocess (via `assert_cmd`)
//! rather than calling into the library in-process, because every
//! diagnostic path terminates via `std::process::exit` — something
//! that must not happen inside the test binary itself.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn nanoc() -> Command {
    Command::cargo_bin("nanoc").unwrap()
}

fn write_source(src: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(src.as_bytes()).unwrap();
    file
}

#[test]
fn no_arguments_is_an_error() {
    nanoc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number of arguments"));
}

#[test]
fn too_many_arguments_is_an_error() {
    nanoc()
        .arg("a.c")
        .arg("b.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number of arguments"));
}

#[test]
fn a_missing_input_file_is_an_io_error() {
    nanoc()
        .arg("/nonexistent/path/does-not-exist.c")
        .assert()
        .failure();
}

#[test]
fn compiles_a_file_argument_to_assembly_on_stdout() {
    let file = write_source("int main() { return 0; }");
    nanoc()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".intel_syntax noprefix"))
        .stdout(predicate::str::contains("main:"));
}

#[test]
fn dash_reads_the_program_from_stdin() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { return 0; }")
        .assert()
        .success()
        .stdout(predicate::str::contains("main:"));
}

#[test]
fn undefined_variable_is_a_diagnostic_and_nonzero_exit() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { return x; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined variable"));
}

#[test]
fn unterminated_string_literal_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { return \"ab; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated string literal"));
}

#[test]
fn seven_parameters_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int f(int a,int b,int c,int d,int e,int f,int g) { return a; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many parameters"));
}

#[test]
fn seven_call_arguments_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int f(int a); int main() { return f(1,2,3,4,5,6,7); }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many arguments"));
}

#[test]
fn address_of_a_non_lvalue_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { return *&(1+2); }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an lvalue"));
}

#[test]
fn assigning_to_an_array_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { int a[2]; int b[2]; a = b; return 0; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot assign to an array"));
}

#[test]
fn pointer_plus_pointer_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { int *p; int *q; return (p + q) - p; }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pointer arithmetic"));
}

#[test]
fn a_missing_semicolon_is_a_diagnostic() {
    nanoc()
        .arg("-")
        .write_stdin("int main() { return 0 }")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected"));
}

use super::{run, stdout};

#[test]
fn costs() {
    let output = run("scenario_a.csv", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[2,0,1]");
}

#[test]
fn unassigned_is_minus_one() {
    let output = run("scenario_b.csv", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[-1,1,3]");

    let output = run("contention.txt", &["--delimiter", " "]);
    assert_eq!(stdout(&output), "[-1,0]");
}

#[test]
fn explicit_sentinel() {
    // Every cost of at least 30 becomes infeasible, leaving only (0, 2) and (1, 0)
    let output = run("scenario_a.csv", &["--infeasible", "30"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[2,0,-1]");
}

#[test]
fn similarities() {
    let output = run("similarity.csv", &["--similarity"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[1,0,-1]");

    let output = run("similarity.csv", &["--similarity", "--min-similarity", "0.4"]);
    assert_eq!(stdout(&output), "[1,0,3]");
}

#[test]
fn errors_exit_with_status_one() {
    let output = run("ragged.csv", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let output = run("does_not_exist.csv", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

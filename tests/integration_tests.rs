use assert_cmd::Command;
use predicates::prelude::*;

fn ptime() -> Command {
    Command::cargo_bin("ptime").unwrap()
}

/// Matches a complete four-line timing report.
fn report_block() -> predicates::str::RegexPredicate {
    predicate::str::is_match(
        "(?m)^wall   \\d+\\.\\d{3} s\n\
         real   \\d+\\.\\d{3} s\n\
         user   \\d+\\.\\d{3} s\n\
         sys    \\d+\\.\\d{3} s\n",
    )
    .unwrap()
}

/// Extracts the value of one labelled line from a report.
fn parse_report_value(stdout: &str, label: &str) -> f64 {
    stdout
        .lines()
        .find_map(|line| {
            let value = line.strip_prefix(label)?.trim_start();
            value.strip_suffix(" s")?.parse().ok()
        })
        .unwrap_or_else(|| panic!("no `{label}` line in output: {stdout:?}"))
}

#[test]
fn prints_a_help_banner_when_called_without_arguments() {
    ptime()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ptime [program and arguments]"))
        .stdout(report_block().not());
}

#[test]
fn fails_with_a_diagnostic_for_a_nonexistent_program() {
    ptime()
        .args(["this-program-does-not-exist-0b7d", "--flag"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Cannot run the command [ this-program-does-not-exist-0b7d --flag ]",
        ))
        .stdout(report_block().not());
}

#[test]
fn fails_for_an_overlong_command_line() {
    ptime()
        .arg("x".repeat(5000))
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the supported maximum"))
        .stdout(report_block().not());
}

#[cfg(unix)]
#[test]
fn reports_all_four_measurements_for_a_completed_run() {
    ptime().args(["true"]).assert().success().stdout(report_block());
}

#[cfg(unix)]
#[test]
fn succeeds_even_when_the_child_itself_fails() {
    ptime().args(["false"]).assert().success().stdout(report_block());
}

#[cfg(unix)]
#[test]
fn child_arguments_are_passed_through_verbatim() {
    ptime()
        .args(["echo", "hello world", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world -n"))
        .stdout(report_block());
}

#[cfg(unix)]
#[test]
fn a_cpu_bound_child_accrues_nonzero_cpu_time() {
    let assert = ptime()
        .args(["sh", "-c", "i=0; while [ $i -lt 200000 ]; do i=$((i+1)); done"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let user = parse_report_value(&stdout, "user");
    let sys = parse_report_value(&stdout, "sys");

    assert!(user + sys > 0.0, "user was {user}, sys was {sys}");
}

#[cfg(unix)]
#[test]
fn a_sleeping_child_accrues_wall_time_but_little_cpu_time() {
    let assert = ptime().args(["sleep", "2"]).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let wall = parse_report_value(&stdout, "wall");
    let real = parse_report_value(&stdout, "real");
    let user = parse_report_value(&stdout, "user");
    let sys = parse_report_value(&stdout, "sys");

    // Scheduler slop on the upper bound only; sleep never returns early.
    assert!(wall >= 2.0, "wall was {wall}");
    assert!(wall < 5.0, "wall was {wall}");
    assert!(real < 0.5, "real was {real}");
    assert!((real - (user + sys)).abs() < 0.002);
}

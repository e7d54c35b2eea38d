//! The fixed-format timing report.

use crate::timer::TimingResult;
use crate::util::units::Second;

fn format_line(label: &str, value: Second) -> String {
    format!("{label:<6} {value:.3} s\n")
}

/// Renders the four-line timing block: one leading blank line, then wall,
/// real, user and sys in that order. `real` is the total CPU time, not the
/// wall-clock time; the labeling is kept for compatibility with scripts
/// that parse this output.
pub fn format_report(result: &TimingResult) -> String {
    let mut report = String::from("\n");
    report.push_str(&format_line("wall", result.time_wall));
    report.push_str(&format_line("real", result.time_cpu_total()));
    report.push_str(&format_line("user", result.time_user));
    report.push_str(&format_line("sys", result.time_system));
    report
}

pub fn report(result: &TimingResult) {
    print!("{}", format_report(result));
}

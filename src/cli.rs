use clap::Parser;

/// Measure the wall-clock and CPU time of a single command.
///
/// Clap's own help and version flags are disabled so that no argument of
/// the child command can be intercepted; everything after the tool name
/// belongs to the command verbatim.
#[derive(Parser, Debug)]
#[command(
    name = "ptime",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Args {
    /// The program to run, followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

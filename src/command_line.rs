//! Assembly of a single command-line string from an argument list.

use crate::error::TimeError;

/// Hard upper bound on the assembled command line, in bytes.
pub const MAX_COMMAND_LINE_LEN: usize = 4096;

/// Assembles one command-line string from the given arguments.
///
/// Arguments containing at least one space are wrapped in double quotes.
/// All (possibly quoted) arguments are joined with single spaces and the
/// result keeps one trailing space, as some process-creation APIs are fed
/// this exact string. No other escaping is attempted; an argument with
/// embedded double quotes passes through unchanged (documented limitation).
pub fn assemble(args: &[String]) -> Result<String, TimeError> {
    let mut command_line = String::new();
    for arg in args {
        let quote = arg.contains(' ');
        if quote {
            command_line.push('"');
        }
        command_line.push_str(arg);
        if quote {
            command_line.push('"');
        }
        command_line.push(' ');
    }

    if command_line.len() > MAX_COMMAND_LINE_LEN {
        return Err(TimeError::CommandLineTooLong {
            length: command_line.len(),
        });
    }

    Ok(command_line)
}

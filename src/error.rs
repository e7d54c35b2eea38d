use thiserror::Error;

use crate::command_line::MAX_COMMAND_LINE_LEN;

#[derive(Debug, Error)]
pub enum TimeError {
    /// The assembled command line exceeds the supported maximum length.
    #[error(
        "Command line is {length} bytes, which exceeds the supported \
         maximum of {MAX_COMMAND_LINE_LEN} bytes"
    )]
    CommandLineTooLong { length: usize },

    /// The child process could not be created. The message text is a
    /// compatibility contract; scripts match on it.
    #[error("Cannot run the command [ {command_line} ]")]
    SpawnFailed { command_line: String },
}
